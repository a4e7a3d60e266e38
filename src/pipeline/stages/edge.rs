//! Edge function evaluation stage.
//!
//! The edge function of a directed edge `A -> B` and a point `P` is
//!
//! ```text
//! edge(A, B, P) = ((P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x) - owns(A, B)) >> 4
//! ```
//!
//! Its sign tells which side of the line through `A` and `B` the point lies on, and
//! evaluated against the third vertex of a triangle it gives twice the signed area.
//!
//! Points exactly on an edge are resolved by subtracting one from the full-precision
//! product for edges that own their boundary, before the shift. The result is negative
//! exactly when the product is negative, or zero on an owning edge, so a pixel center on
//! an edge shared by two triangles is inside exactly one of them.

use ::geometry::Point;
use ::numeric::EdgeValue;
use ::numeric::fixed::SUBPIXEL_BITS;

/// Number of steps between issuing a query to the [`EdgeEvaluator`] and retiring its result.
pub const LATENCY: usize = 4;

/// Unshifted edge function, in 1/256 square pixels.
///
/// Coordinate differences are 17-bit and their products 34-bit, so this is computed in 64 bits.
#[inline]
pub fn edge_product(a: Point, b: Point, p: Point) -> i64 {
    let pa_x = p.x.raw() as i64 - a.x.raw() as i64;
    let pa_y = p.y.raw() as i64 - a.y.raw() as i64;
    let ba_x = b.x.raw() as i64 - a.x.raw() as i64;
    let ba_y = b.y.raw() as i64 - a.y.raw() as i64;

    pa_x * ba_y - pa_y * ba_x
}

/// Whether the directed edge `start -> end` owns pixel centers lying exactly on it.
///
/// Edges pointing toward +x own their boundary, as do vertical edges pointing toward -y.
/// Reversing an edge always flips the result.
#[inline]
pub fn owns_boundary(start: Point, end: Point) -> bool {
    start.x < end.x || (start.x == end.x && start.y > end.y)
}

/// Edge function of `start -> end` at `sample`, including the fill-rule adjustment.
///
/// Moving `sample` by whole pixels changes the product by multiples of 16, so the
/// shifted value still changes by exact increments.
#[inline]
pub fn edge_function(start: Point, end: Point, sample: Point) -> EdgeValue {
    let product = edge_product(start, end, sample) - owns_boundary(start, end) as i64;

    EdgeValue::from_raw((product >> SUBPIXEL_BITS) as i32)
}

/// One evaluation request: the directed edge `start -> end` and the point to test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeQuery {
    pub start: Point,
    pub end: Point,
    pub sample: Point,
}

impl EdgeQuery {
    #[inline]
    pub fn new(start: Point, end: Point, sample: Point) -> EdgeQuery {
        EdgeQuery { start, end, sample }
    }

    #[inline]
    pub fn evaluate(&self) -> EdgeValue {
        edge_function(self.start, self.end, self.sample)
    }
}

/// Shared, fully pipelined edge function unit.
///
/// Every call to [`clock`](#method.clock) advances the pipeline one step and may issue a new query.
/// A result retires exactly [`LATENCY`](constant.LATENCY.html) steps after its query was issued, and results
/// retire strictly in issue order. Queries carry no tag, so callers must track the order themselves.
#[derive(Debug, Clone, Default)]
pub struct EdgeEvaluator {
    stages: [Option<EdgeValue>; LATENCY],
}

impl EdgeEvaluator {
    pub fn new() -> EdgeEvaluator {
        EdgeEvaluator::default()
    }

    /// Advance one step, optionally issuing a query, and return the result retiring on this step.
    pub fn clock(&mut self, query: Option<EdgeQuery>) -> Option<EdgeValue> {
        let retired = self.stages[LATENCY - 1].take();

        for i in (1..LATENCY).rev() {
            self.stages[i] = self.stages[i - 1].take();
        }

        self.stages[0] = query.map(|query| query.evaluate());

        retired
    }

    /// Number of queries issued but not yet retired
    pub fn in_flight(&self) -> usize {
        self.stages.iter().filter(|stage| stage.is_some()).count()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.in_flight() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn point(x: f64, y: f64) -> Point {
        Point::from_f64(x, y).unwrap()
    }

    #[test]
    fn test_edge_sign() {
        let a = point(0.0, 0.0);
        let b = point(4.0, 4.0);

        // below the diagonal on a y-down screen
        assert!(edge_function(a, b, point(3.0, 1.0)).is_positive());
        assert!(edge_function(a, b, point(1.0, 3.0)).is_negative());
    }

    #[test]
    fn test_edge_value() {
        let a = point(1.0, 1.0);
        let b = point(1.0, 5.0);

        // vertical edge pointing toward +y does not own its boundary
        assert!(!owns_boundary(a, b));
        assert_eq!(edge_function(a, b, point(3.0, 2.0)), EdgeValue::from_raw(128));
        assert_eq!(edge_function(a, b, point(1.0, 3.0)), EdgeValue::from_raw(0));

        // reversed, it does
        assert!(owns_boundary(b, a));
        assert_eq!(edge_function(b, a, point(1.0, 3.0)), EdgeValue::from_raw(-1));
    }

    #[test]
    fn test_owned_edge_excludes_nearby_points() {
        let a = Point::from_raw(0, 0);
        let b = Point::from_raw(1, 0);

        assert!(owns_boundary(a, b));

        // products 1 through 15 lie just outside an owning edge
        for y in 1..16 {
            let p = Point::from_raw(0, -y);

            assert_eq!(edge_product(a, b, p), y as i64);
            assert!(!edge_function(a, b, p).is_negative());
            assert!(edge_function(b, a, p).is_negative());
        }

        assert!(edge_function(a, b, a).is_negative());
        assert!(!edge_function(b, a, a).is_negative());
    }

    #[test]
    fn test_boundary_ownership_is_exclusive() {
        let points = [point(0.0, 0.0), point(3.0, 0.0), point(3.0, -2.0), point(0.0, 4.0), point(-1.5, 4.0)];

        for &p in points.iter() {
            for &q in points.iter() {
                if p != q {
                    assert_ne!(owns_boundary(p, q), owns_boundary(q, p));
                }
            }
        }
    }

    #[test]
    fn test_extreme_coordinates() {
        let a = point(-2048.0, -2048.0);
        let b = point(2047.9375, 2047.9375);
        let c = point(-2048.0, 2047.9375);

        let area = edge_function(a, b, c);

        assert_eq!(area.raw() as i64, (edge_product(a, b, c) - 1) >> 4);
        assert!(area.is_negative());
    }

    #[test]
    fn test_pipeline_latency() {
        let mut evaluator = EdgeEvaluator::new();

        let q1 = EdgeQuery::new(point(0.0, 0.0), point(4.0, 0.0), point(1.0, 1.0));
        let q2 = EdgeQuery::new(point(4.0, 0.0), point(0.0, 4.0), point(1.0, 1.0));

        assert_eq!(evaluator.clock(Some(q1)), None);
        assert_eq!(evaluator.clock(Some(q2)), None);
        assert_eq!(evaluator.in_flight(), 2);

        for _ in 2..LATENCY {
            assert_eq!(evaluator.clock(None), None);
        }

        // in issue order, LATENCY steps after each issue
        assert_eq!(evaluator.clock(None), Some(q1.evaluate()));
        assert_eq!(evaluator.clock(None), Some(q2.evaluate()));
        assert!(evaluator.is_idle());
        assert_eq!(evaluator.clock(None), None);
    }
}
