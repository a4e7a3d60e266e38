//! Triangle rasterization pipeline.
//!
//! [`rasterize`](fn.rasterize.html) validates a triangle, runs setup, and returns the fragment
//! stream of one rasterization pass. All validation happens before the stream is returned,
//! so a stream never ends early because of bad input.

use std::iter::FusedIterator;
use std::sync::Arc;

use ::error::RenderResult;
use ::geometry::{BoundingBox, Dimensions, Triangle};

pub mod types;
pub mod stages;

pub use self::types::{TriangleAttributes, TriangleData, VertexAttributes};

pub use self::stages::{Fragment, FragmentGate, IncrementalRasterizer, InsideTest, Interpolated, RasterArguments, TriangleSetup};
pub use self::stages::divide::perspective_divide;

/// Rasterize a single triangle.
///
/// Either winding is accepted unless culled by `args.cull_faces`; both cover the same pixels.
/// A triangle that is culled or entirely outside of the viewport yields an empty stream.
///
/// Fails with `RenderError::DegenerateTriangle` for zero area, and with `RenderError::DivisionByZero`
/// or `RenderError::QuotientOverflow` for unusable vertex `w` values.
pub fn rasterize<K>(triangle: Triangle, attributes: TriangleAttributes<K>, args: &RasterArguments) -> RenderResult<Fragments<K>> {
    let data = TriangleData::new(triangle, attributes)?;

    if args.cull_faces == Some(data.winding()) {
        debug!("culled {:?} triangle {:?} of area {}", data.winding(), triangle, triangle.signed_area());

        return Ok(Fragments::empty(args.viewport));
    }

    let rasterized = *data.rasterized();

    let bounds = BoundingBox::of_triangle(&rasterized).clamp_to(args.viewport);

    if bounds.is_empty() {
        debug!("triangle {:?} is outside of the {}x{} viewport", triangle, args.viewport.width, args.viewport.height);

        return Ok(Fragments::empty(args.viewport));
    }

    let setup = TriangleSetup::new().run(rasterized, bounds)?;

    debug_assert_eq!(setup.area, data.area());

    let gate = FragmentGate::new(InsideTest::Negative, Arc::new(data));

    Ok(Fragments {
        pass: Some(Pass { rasterizer: IncrementalRasterizer::new(setup), gate }),
        viewport: args.viewport,
        visited: 0,
        accepted: 0,
    })
}

#[derive(Debug, Clone)]
struct Pass<K> {
    rasterizer: IncrementalRasterizer,
    gate: FragmentGate<K>,
}

/// Fragment stream of one rasterization pass.
///
/// Fragments are produced in serpentine order over the triangle's bounding box, and each
/// pixel at most once.
#[derive(Debug, Clone)]
pub struct Fragments<K> {
    pass: Option<Pass<K>>,
    viewport: Dimensions,
    visited: usize,
    accepted: usize,
}

impl<K> Fragments<K> {
    fn empty(viewport: Dimensions) -> Fragments<K> {
        Fragments { pass: None, viewport, visited: 0, accepted: 0 }
    }

    /// Candidate pixels visited so far
    #[inline]
    pub fn visited(&self) -> usize { self.visited }

    /// Fragments produced so far
    #[inline]
    pub fn accepted(&self) -> usize { self.accepted }
}

impl<K> Iterator for Fragments<K> {
    type Item = Fragment<K>;

    fn next(&mut self) -> Option<Fragment<K>> {
        let fragment = match self.pass {
            Some(ref mut pass) => {
                let viewport = self.viewport;
                let mut fragment = None;

                while let Some(candidate) = pass.rasterizer.next() {
                    self.visited += 1;

                    fragment = pass.gate.process(candidate, viewport.in_bounds(candidate.position));

                    if fragment.is_some() {
                        break;
                    }
                }

                fragment
            }
            None => return None,
        };

        match fragment {
            Some(fragment) => {
                self.accepted += 1;

                Some(fragment)
            }
            None => {
                trace!("rasterization pass done, {} of {} pixels accepted", self.accepted, self.visited);

                self.pass = None;

                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.pass {
            Some(ref pass) => (0, Some(pass.rasterizer.len())),
            None => (0, Some(0)),
        }
    }
}

impl<K> FusedIterator for Fragments<K> {}
