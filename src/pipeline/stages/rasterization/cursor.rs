use ::geometry::{BoundingBox, Coordinate};

/// Serpentine walk over an inclusive bounding box.
///
/// Even rows run toward +x, odd rows toward -x. The cursor never reports a position
/// outside of the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterCursor {
    x: i32,
    y: i32,
    forward: bool,
    bounds: BoundingBox,
    done: bool,
}

impl RasterCursor {
    /// Cursor at the start corner. An empty box gives a cursor that is already done.
    pub fn new(bounds: BoundingBox) -> RasterCursor {
        RasterCursor {
            x: bounds.start_x,
            y: bounds.start_y,
            forward: true,
            bounds,
            done: bounds.is_empty(),
        }
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }

    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Current scan direction, `true` toward +x
    #[inline]
    pub fn forward(&self) -> bool {
        self.forward
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the last x step crossed the end of the row.
    #[inline]
    pub fn past_row_end(&self) -> bool {
        if self.forward { self.x > self.bounds.stop_x } else { self.x < self.bounds.start_x }
    }

    #[inline]
    pub fn step_x(&mut self) {
        if self.forward { self.x += 1 } else { self.x -= 1 }
    }

    /// Undo the step past the row end, move down one row and reverse direction.
    pub fn next_row(&mut self) {
        if self.forward { self.x -= 1 } else { self.x += 1 }

        self.forward = !self.forward;
        self.y += 1;

        if self.y > self.bounds.stop_y {
            self.done = true;
        }
    }

    /// Positions not yet reported, including the current one.
    pub fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }

        let width = (self.bounds.stop_x - self.bounds.start_x + 1) as usize;

        let in_row = if self.forward {
            self.bounds.stop_x - self.x + 1
        } else {
            self.x - self.bounds.start_x + 1
        };

        in_row as usize + width * (self.bounds.stop_y - self.y) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_serpentine_walk() {
        let mut cursor = RasterCursor::new(BoundingBox::new(1, 1, 3, 2));
        let mut visited = Vec::new();

        while !cursor.is_done() {
            visited.push((cursor.position().x, cursor.position().y));

            cursor.step_x();

            if cursor.past_row_end() {
                cursor.next_row();
            }
        }

        assert_eq!(visited, vec![(1, 1), (2, 1), (3, 1), (3, 2), (2, 2), (1, 2)]);
    }

    #[test]
    fn test_remaining() {
        let mut cursor = RasterCursor::new(BoundingBox::new(0, 0, 2, 1));

        assert_eq!(cursor.remaining(), 6);

        cursor.step_x();
        cursor.step_x();
        cursor.step_x();
        cursor.next_row();

        assert_eq!(cursor.position(), Coordinate::new(2, 1));
        assert_eq!(cursor.remaining(), 3);
        assert!(!cursor.forward());
    }

    #[test]
    fn test_empty_bounds() {
        assert!(RasterCursor::new(BoundingBox::new(3, 0, 2, 5)).is_done());
        assert!(RasterCursor::new(BoundingBox::new(0, 3, 5, 2)).is_done());
        assert_eq!(RasterCursor::new(BoundingBox::new(0, 3, 5, 2)).remaining(), 0);
    }
}
