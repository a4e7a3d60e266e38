use super::{BoundingBox, Coordinate};

/// Size of the pixel grid a triangle is rasterized into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[inline(always)]
    pub fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Number of pixels in the grid
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the pixel lies on the grid. Negative coordinates never do.
    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < self.width && (coord.y as u32) < self.height
    }

    /// Inclusive bounds of the whole grid, empty if either side is zero.
    pub fn bounds(&self) -> BoundingBox {
        let stop_x = self.width.min(i32::MAX as u32) as i32 - 1;
        let stop_y = self.height.min(i32::MAX as u32) as i32 - 1;

        BoundingBox::new(0, 0, stop_x, stop_y)
    }
}
