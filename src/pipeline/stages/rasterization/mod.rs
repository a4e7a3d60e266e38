//! Pixel traversal of a set up triangle

pub mod cursor;
pub mod triangle;

use ::geometry::{Coordinate, Dimensions, FaceWinding};
use ::numeric::EdgeValue;

pub use self::cursor::RasterCursor;
pub use self::triangle::IncrementalRasterizer;

/// Per-call rasterization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterArguments {
    /// Pixel grid the triangle is rasterized into. Bounds are clamped to it.
    pub viewport: Dimensions,
    /// Triangles with this winding produce no fragments
    pub cull_faces: Option<FaceWinding>,
}

impl RasterArguments {
    pub fn new(viewport: Dimensions) -> RasterArguments {
        RasterArguments { viewport, cull_faces: None }
    }

    #[inline]
    pub fn with_viewport(mut self, viewport: Dimensions) -> RasterArguments {
        self.viewport = viewport;
        self
    }

    #[inline]
    pub fn with_cull_faces(mut self, cull_faces: Option<FaceWinding>) -> RasterArguments {
        self.cull_faces = cull_faces;
        self
    }
}

/// A visited pixel and the live edge function values at its center, in `AB, BC, CA` order.
///
/// Candidates are not yet classified. That is left to the fragment gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub position: Coordinate,
    pub edges: [EdgeValue; 3],
}
