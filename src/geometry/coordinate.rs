use ::error::RenderResult;
use ::numeric::SubPixel;

use super::Point;

/// Integer pixel coordinate.
///
/// The pixel is sampled at its center, `(x + 0.5, y + 0.5)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }

    /// Sample point of this pixel in Q12.4
    pub fn center(self) -> RenderResult<Point> {
        let x = SubPixel::from_raw_i32(SubPixel::from_pixels(self.x)?.raw() as i32 + SubPixel::HALF.raw() as i32)?;
        let y = SubPixel::from_raw_i32(SubPixel::from_pixels(self.y)?.raw() as i32 + SubPixel::HALF.raw() as i32)?;

        Ok(Point { x, y })
    }
}
