//! Screen-space geometry structures

pub mod dimension;
pub mod coordinate;
pub mod point;
pub mod bounds;
pub mod triangle;
pub mod winding;

pub use self::dimension::Dimensions;
pub use self::coordinate::Coordinate;
pub use self::point::Point;
pub use self::bounds::BoundingBox;
pub use self::triangle::Triangle;
pub use self::winding::FaceWinding;
