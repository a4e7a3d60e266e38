//! Fixed-point triangle rasterizer
//!
//! Rasterizes screen-space triangles with Pineda edge functions, in the manner of a
//! hardware rasterizer. Everything after input conversion is integer arithmetic.
//!
//! ### Features:
//!
//! * Q12.4 vertex coordinates, with a top-left fill rule so that triangles sharing an edge never
//!   both cover a pixel on it.
//! * Triangle setup through a shared, pipelined edge function evaluator.
//! * Serpentine traversal of the bounding box, stepping edge functions by addition only.
//! * Back-face culling for either winding.
//! * Perspective-correct interpolation of vertex data, with reciprocals from a non-restoring divider.
//! * Vertex data is anything implementing [`Interpolate`](interpolate/trait.Interpolate.html), including
//!   integers, tuples and nalgebra vectors.
//!
//! ### Example:
//!
//! ```
//! use edgeraster::{rasterize, Dimensions, Point, RasterArguments, Triangle, TriangleAttributes};
//!
//! let triangle = Triangle::new(Point::from_f64(0.0, 0.0).unwrap(),
//!                              Point::from_f64(8.0, 0.0).unwrap(),
//!                              Point::from_f64(0.0, 8.0).unwrap());
//!
//! let args = RasterArguments::new(Dimensions::new(16, 16));
//!
//! let fragments = rasterize(triangle, TriangleAttributes::<()>::default(), &args).unwrap();
//!
//! assert_eq!(fragments.count(), 28);
//! ```

#![allow(dead_code)]

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate nalgebra;
extern crate num_traits;
extern crate smallvec;

pub mod error;
pub mod utils;
pub mod numeric;
pub mod geometry;
pub mod color;
pub mod interpolate;
pub mod pipeline;
pub mod tuples;

pub use error::{RenderError, RenderResult};
pub use numeric::{EdgeValue, Fixed, SubPixel};
pub use geometry::{BoundingBox, Coordinate, Dimensions, FaceWinding, Point, Triangle};
pub use interpolate::Interpolate;
pub use pipeline::{rasterize, perspective_divide, Fragment, Fragments, InsideTest, Interpolated,
                   RasterArguments, TriangleAttributes, VertexAttributes};
