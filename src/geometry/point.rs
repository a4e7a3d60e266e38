use ::error::RenderResult;
use ::numeric::SubPixel;

/// Q12.4 screen-space point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: SubPixel,
    pub y: SubPixel,
}

impl Point {
    #[inline]
    pub fn new(x: SubPixel, y: SubPixel) -> Point {
        Point { x, y }
    }

    /// Point from raw Q12.4 components.
    #[inline]
    pub fn from_raw(x: i16, y: i16) -> Point {
        Point { x: SubPixel::from_raw(x), y: SubPixel::from_raw(y) }
    }

    /// Point from floating-point pixel positions, failing with
    /// `RenderError::CoordinateOverflow` outside of +/-2048.0.
    pub fn from_f64(x: f64, y: f64) -> RenderResult<Point> {
        Ok(Point { x: SubPixel::from_f64(x)?, y: SubPixel::from_f64(y)? })
    }
}
