use ::error::RenderResult;
use ::utils::{min3, max3};

use super::{Coordinate, Dimensions, Point, Triangle};

/// Inclusive pixel bounds of a rasterization pass.
///
/// `start_x > stop_x` or `start_y > stop_y` describes an empty box, which rasterizes
/// to nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub start_x: i32,
    pub start_y: i32,
    pub stop_x: i32,
    pub stop_y: i32,
}

impl BoundingBox {
    #[inline]
    pub fn new(start_x: i32, start_y: i32, stop_x: i32, stop_y: i32) -> BoundingBox {
        BoundingBox { start_x, start_y, stop_x, stop_y }
    }

    /// Every pixel touched by the triangle's extent.
    pub fn of_triangle(triangle: &Triangle) -> BoundingBox {
        let Triangle { a, b, c } = *triangle;

        BoundingBox {
            start_x: min3(a.x, b.x, c.x).floor_pixel(),
            start_y: min3(a.y, b.y, c.y).floor_pixel(),
            stop_x: max3(a.x, b.x, c.x).floor_pixel(),
            stop_y: max3(a.y, b.y, c.y).floor_pixel(),
        }
    }

    /// Intersect with the viewport `[0, width) x [0, height)`.
    pub fn clamp_to(self, viewport: Dimensions) -> BoundingBox {
        self.intersect(&viewport.bounds())
    }

    /// Pixels inside both boxes
    pub fn intersect(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            start_x: self.start_x.max(other.start_x),
            start_y: self.start_y.max(other.start_y),
            stop_x: self.stop_x.min(other.stop_x),
            stop_y: self.stop_y.min(other.stop_y),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_x > self.stop_x || self.start_y > self.stop_y
    }

    /// Number of pixels inside the bounds
    pub fn pixel_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.stop_x - self.start_x + 1) as usize * (self.stop_y - self.start_y + 1) as usize
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= self.start_x && coord.x <= self.stop_x && coord.y >= self.start_y && coord.y <= self.stop_y
    }

    /// Center of the first pixel, where edge functions are seeded.
    #[inline]
    pub fn sample_point(&self) -> RenderResult<Point> {
        Coordinate::new(self.start_x, self.start_y).center()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_of_triangle() {
        let t = Triangle::new(Point::from_f64(1.25, 7.0).unwrap(),
                              Point::from_f64(-3.5, 2.0).unwrap(),
                              Point::from_f64(9.0, 2.9375).unwrap());

        assert_eq!(BoundingBox::of_triangle(&t), BoundingBox::new(-4, 2, 9, 7));
    }

    #[test]
    fn test_clamp() {
        let viewport = Dimensions::new(8, 4);

        assert_eq!(BoundingBox::new(-4, 2, 9, 7).clamp_to(viewport), BoundingBox::new(0, 2, 7, 3));
        assert!(BoundingBox::new(10, 0, 12, 2).clamp_to(viewport).is_empty());
        assert!(BoundingBox::new(-5, 0, -1, 2).clamp_to(viewport).is_empty());
        assert!(BoundingBox::new(0, 0, 3, 3).clamp_to(Dimensions::new(0, 0)).is_empty());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(BoundingBox::new(0, 0, 0, 0).pixel_count(), 1);
        assert_eq!(BoundingBox::new(2, 1, 4, 2).pixel_count(), 6);
        assert_eq!(BoundingBox::new(4, 1, 2, 2).pixel_count(), 0);
    }
}
