use ::numeric::EdgeValue;
use ::pipeline::stages::edge::edge_product;

use super::{FaceWinding, Point};

/// Screen-space triangle in Q12.4 coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Triangle {
        Triangle { a, b, c }
    }

    /// Twice the signed area, as the edge function of `C` against `AB` without
    /// the fill-rule adjustment.
    #[inline]
    pub fn signed_area(&self) -> EdgeValue {
        EdgeValue::from_raw((edge_product(self.a, self.b, self.c) >> 4) as i32)
    }

    /// Winding as seen on a y-down screen, or `None` for a degenerate triangle.
    ///
    /// Read from the full-precision area, so reversing a triangle always flips it.
    pub fn winding(&self) -> Option<FaceWinding> {
        let area = edge_product(self.a, self.b, self.c);

        if area < 0 {
            Some(FaceWinding::Clockwise)
        } else if area > 0 {
            Some(FaceWinding::CounterClockwise)
        } else {
            None
        }
    }

    /// Same triangle with the opposite winding, `A, C, B`.
    #[inline]
    pub fn reversed(&self) -> Triangle {
        Triangle { a: self.a, b: self.c, c: self.b }
    }
}
