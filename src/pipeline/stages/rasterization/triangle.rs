use std::iter::FusedIterator;

use ::numeric::EdgeValue;
use ::pipeline::stages::setup::{EdgeState, SetupOutput};

use super::{Candidate, RasterCursor};

/// Walks the bounding box of a set up triangle in serpentine order, stepping the three
/// edge accumulators by addition only.
///
/// Every pixel of the box is visited exactly once. The stream is finite and cannot be
/// restarted; a new triangle needs a new setup.
#[derive(Debug, Clone)]
pub struct IncrementalRasterizer {
    edges: [EdgeState; 3],
    cursor: RasterCursor,
}

impl IncrementalRasterizer {
    pub fn new(setup: SetupOutput) -> IncrementalRasterizer {
        IncrementalRasterizer {
            edges: setup.edges,
            cursor: RasterCursor::new(setup.bounds),
        }
    }

    #[inline]
    pub fn cursor(&self) -> &RasterCursor {
        &self.cursor
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor.is_done()
    }

    /// Live edge values at the cursor
    #[inline]
    pub fn values(&self) -> [EdgeValue; 3] {
        [self.edges[0].value(), self.edges[1].value(), self.edges[2].value()]
    }

    fn advance(&mut self) {
        let forward = self.cursor.forward();

        for edge in self.edges.iter_mut() {
            edge.step_x(forward);
        }

        self.cursor.step_x();

        if self.cursor.past_row_end() {
            for edge in self.edges.iter_mut() {
                edge.step_x(!forward);
                edge.step_y();
            }

            self.cursor.next_row();
        }
    }
}

impl Iterator for IncrementalRasterizer {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.cursor.is_done() {
            return None;
        }

        let candidate = Candidate { position: self.cursor.position(), edges: self.values() };

        self.advance();

        Some(candidate)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();

        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IncrementalRasterizer {}

impl FusedIterator for IncrementalRasterizer {}

#[cfg(test)]
mod test {
    use super::*;

    use ::geometry::{BoundingBox, Coordinate, Point, Triangle};
    use ::pipeline::stages::edge::edge_function;
    use ::pipeline::stages::setup::TriangleSetup;

    fn rasterizer(t: Triangle, bounds: BoundingBox) -> IncrementalRasterizer {
        IncrementalRasterizer::new(TriangleSetup::new().run(t, bounds).unwrap())
    }

    fn triangle() -> Triangle {
        Triangle::new(Point::from_f64(0.25, 0.5).unwrap(),
                      Point::from_f64(9.75, 6.0).unwrap(),
                      Point::from_f64(1.0, 7.9375).unwrap())
    }

    #[test]
    fn test_serpentine_order() {
        let t = triangle();
        let positions: Vec<Coordinate> = rasterizer(t, BoundingBox::new(0, 0, 2, 2)).map(|c| c.position).collect();

        assert_eq!(positions, vec![
            Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0),
            Coordinate::new(2, 1), Coordinate::new(1, 1), Coordinate::new(0, 1),
            Coordinate::new(0, 2), Coordinate::new(1, 2), Coordinate::new(2, 2),
        ]);
    }

    #[test]
    fn test_accumulators_match_evaluation() {
        let t = triangle();
        let bounds = BoundingBox::of_triangle(&t);

        let mut count = 0;

        for candidate in rasterizer(t, bounds) {
            let p = candidate.position.center().unwrap();

            assert_eq!(candidate.edges, [edge_function(t.a, t.b, p),
                                         edge_function(t.b, t.c, p),
                                         edge_function(t.c, t.a, p)]);

            count += 1;
        }

        assert_eq!(count, bounds.pixel_count());
    }

    #[test]
    fn test_visits_each_pixel_once() {
        let bounds = BoundingBox::new(-3, 2, 4, 6);
        let mut positions: Vec<Coordinate> = rasterizer(triangle(), bounds).map(|c| c.position).collect();

        let len = positions.len();

        positions.sort();
        positions.dedup();

        assert_eq!(positions.len(), len);
        assert_eq!(len, bounds.pixel_count());
        assert!(positions.iter().all(|&p| bounds.contains(p)));
    }

    #[test]
    fn test_size_hint() {
        let mut r = rasterizer(triangle(), BoundingBox::new(0, 0, 3, 2));

        assert_eq!(r.len(), 12);

        for _ in 0..5 {
            r.next();
        }

        assert_eq!(r.len(), 7);
    }

    #[test]
    fn test_single_pixel() {
        let mut r = rasterizer(triangle(), BoundingBox::new(4, 5, 4, 5));

        assert_eq!(r.next().map(|c| c.position), Some(Coordinate::new(4, 5)));
        assert_eq!(r.next(), None);
        assert_eq!(r.next(), None);
        assert!(r.is_done());
    }

    #[test]
    fn test_inverted_bounds() {
        assert_eq!(rasterizer(triangle(), BoundingBox::new(5, 0, 4, 3)).count(), 0);
        assert_eq!(rasterizer(triangle(), BoundingBox::new(0, 5, 4, 3)).count(), 0);
    }
}
