//! Pipeline stages, in data flow order:
//!
//! ```text
//! setup (once per triangle) -> rasterization (per pixel) -> fragment (per pixel) -> perspective (per fragment)
//! ```
//!
//! Setup issues its evaluations through the shared edge evaluator, and perspective recovery
//! goes through the divider.

pub mod edge;
pub mod setup;
pub mod rasterization;
pub mod fragment;
pub mod divide;
pub mod perspective;

pub use self::edge::EdgeEvaluator;
pub use self::setup::{EdgeState, TriangleSetup};
pub use self::rasterization::{Candidate, IncrementalRasterizer, RasterArguments};
pub use self::fragment::{Fragment, FragmentGate, InsideTest};
pub use self::divide::{divide, perspective_divide, DivisionState};
pub use self::perspective::Interpolated;
