//! Triangle setup stage.
//!
//! Seeds the three edge functions at the first pixel center of the bounding box and
//! derives their per-pixel increments. The four evaluations (three edges plus the area)
//! are issued back to back through one shared [`EdgeEvaluator`] and collected in issue order.

use smallvec::SmallVec;

use ::error::RenderResult;
use ::geometry::{BoundingBox, Point, Triangle};
use ::numeric::EdgeValue;

use super::edge::{EdgeEvaluator, EdgeQuery, LATENCY};

/// Number of evaluator queries issued per triangle
pub const QUERIES: usize = 4;

/// Steps from leaving `Idle` to a finished setup
pub const SETUP_STEPS: usize = QUERIES + LATENCY;

/// Edge function accumulator with its per-pixel increments.
///
/// The increments are fixed when the edge is set up. Moving the sample point one pixel
/// along x changes the edge function by exactly `dx`, and one pixel along y by exactly `dy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeState {
    value: EdgeValue,
    dx: EdgeValue,
    dy: EdgeValue,
}

impl EdgeState {
    pub fn new(value: EdgeValue, dx: EdgeValue, dy: EdgeValue) -> EdgeState {
        EdgeState { value, dx, dy }
    }

    /// Accumulator for the directed edge `start -> end`, seeded with `value`.
    pub fn of_edge(start: Point, end: Point, value: EdgeValue) -> EdgeState {
        EdgeState {
            value,
            dx: EdgeValue::from_raw(end.y.raw() as i32 - start.y.raw() as i32),
            dy: EdgeValue::from_raw(start.x.raw() as i32 - end.x.raw() as i32),
        }
    }

    #[inline]
    pub fn value(&self) -> EdgeValue { self.value }

    #[inline]
    pub fn dx(&self) -> EdgeValue { self.dx }

    #[inline]
    pub fn dy(&self) -> EdgeValue { self.dy }

    /// Move one pixel toward +x if `forward`, else toward -x.
    #[inline]
    pub fn step_x(&mut self, forward: bool) {
        if forward { self.value += self.dx } else { self.value -= self.dx }
    }

    /// Move one pixel toward +y.
    #[inline]
    pub fn step_y(&mut self) {
        self.value += self.dy;
    }
}

/// Setup results for one triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOutput {
    /// Accumulators for `AB`, `BC` and `CA`, seeded at the center of the bounding box start pixel
    pub edges: [EdgeState; 3],
    /// Edge function of `C` against `AB`
    pub area: EdgeValue,
    pub bounds: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    Idle,
    EvalAB,
    EvalBC,
    EvalCA,
    EvalArea,
    Collect,
}

/// Setup state machine, driven one step at a time.
///
/// ```text
/// Idle -> EvalAB -> EvalBC -> EvalCA -> EvalArea -> Collect -> Idle
/// ```
///
/// Each step clocks the evaluator once. The four queries go out on the four `Eval*` steps;
/// `Collect` waits until all four results have retired, which takes [`SETUP_STEPS`](constant.SETUP_STEPS.html)
/// steps in total.
#[derive(Debug, Clone)]
pub struct TriangleSetup {
    state: SetupState,
    triangle: Triangle,
    bounds: BoundingBox,
    sample: Point,
    evaluator: EdgeEvaluator,
    results: SmallVec<[EdgeValue; QUERIES]>,
    steps: usize,
}

impl TriangleSetup {
    pub fn new() -> TriangleSetup {
        TriangleSetup {
            state: SetupState::Idle,
            triangle: Triangle::default(),
            bounds: BoundingBox::new(0, 0, 0, 0),
            sample: Point::default(),
            evaluator: EdgeEvaluator::new(),
            results: SmallVec::new(),
            steps: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> SetupState { self.state }

    /// Steps taken since the last `start`
    #[inline]
    pub fn steps(&self) -> usize { self.steps }

    /// Begin setup of `triangle`, with edge functions seeded at the first pixel of `bounds`.
    ///
    /// Any setup already in progress is discarded.
    pub fn start(&mut self, triangle: Triangle, bounds: BoundingBox) -> RenderResult<()> {
        self.sample = bounds.sample_point()?;
        self.triangle = triangle;
        self.bounds = bounds;
        self.evaluator = EdgeEvaluator::new();
        self.results.clear();
        self.steps = 0;
        self.state = SetupState::EvalAB;

        Ok(())
    }

    /// Advance one step. Returns the setup output on the step that completes it.
    pub fn step(&mut self) -> Option<SetupOutput> {
        let Triangle { a, b, c } = self.triangle;
        let p = self.sample;

        let (query, next) = match self.state {
            SetupState::Idle => return None,
            SetupState::EvalAB => (Some(EdgeQuery::new(a, b, p)), SetupState::EvalBC),
            SetupState::EvalBC => (Some(EdgeQuery::new(b, c, p)), SetupState::EvalCA),
            SetupState::EvalCA => (Some(EdgeQuery::new(c, a, p)), SetupState::EvalArea),
            SetupState::EvalArea => (Some(EdgeQuery::new(a, b, c)), SetupState::Collect),
            SetupState::Collect => (None, SetupState::Collect),
        };

        if let Some(result) = self.evaluator.clock(query) {
            self.results.push(result);
        }

        self.steps += 1;
        self.state = next;

        if self.state == SetupState::Collect && self.results.len() == QUERIES {
            self.state = SetupState::Idle;

            let output = SetupOutput {
                edges: [
                    EdgeState::of_edge(a, b, self.results[0]),
                    EdgeState::of_edge(b, c, self.results[1]),
                    EdgeState::of_edge(c, a, self.results[2]),
                ],
                area: self.results[3],
                bounds: self.bounds,
            };

            trace!("triangle setup done in {} steps: ab = {}, bc = {}, ca = {}, area = {}",
                   self.steps, self.results[0], self.results[1], self.results[2], self.results[3]);

            return Some(output);
        }

        None
    }

    /// Run a complete setup for `triangle`.
    pub fn run(&mut self, triangle: Triangle, bounds: BoundingBox) -> RenderResult<SetupOutput> {
        self.start(triangle, bounds)?;

        loop {
            if let Some(output) = self.step() {
                return Ok(output);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::edge::edge_function;

    fn triangle() -> Triangle {
        Triangle::new(Point::from_raw(0x0949, 0x0449),
                      Point::from_raw(0x1EB6, 0x19B6),
                      Point::from_raw(0x0949, 0x19B6))
    }

    #[test]
    fn test_state_sequence() {
        let t = triangle();
        let bounds = BoundingBox::of_triangle(&t);

        let mut setup = TriangleSetup::new();

        assert_eq!(setup.step(), None);

        setup.start(t, bounds).unwrap();

        let expected = [SetupState::EvalBC, SetupState::EvalCA, SetupState::EvalArea, SetupState::Collect];

        for state in expected.iter() {
            assert_eq!(setup.step(), None);
            assert_eq!(setup.state(), *state);
        }

        let mut output = None;

        while output.is_none() {
            output = setup.step();
        }

        assert_eq!(setup.state(), SetupState::Idle);
        assert_eq!(setup.steps(), SETUP_STEPS);
    }

    #[test]
    fn test_setup_values() {
        let t = triangle();
        let bounds = BoundingBox::of_triangle(&t);
        let p = bounds.sample_point().unwrap();

        let output = TriangleSetup::new().run(t, bounds).unwrap();

        assert_eq!(output.edges[0].value(), edge_function(t.a, t.b, p));
        assert_eq!(output.edges[1].value(), edge_function(t.b, t.c, p));
        assert_eq!(output.edges[2].value(), edge_function(t.c, t.a, p));
        assert_eq!(output.area, edge_function(t.a, t.b, t.c));
        assert_eq!(output.bounds, bounds);

        // AB: (B.y - A.y, A.x - B.x)
        assert_eq!(output.edges[0].dx().raw(), 0x19B6 - 0x0449);
        assert_eq!(output.edges[0].dy().raw(), 0x0949 - 0x1EB6);
    }

    #[test]
    fn test_increments_match_evaluation() {
        let t = triangle();
        let bounds = BoundingBox::of_triangle(&t);
        let output = TriangleSetup::new().run(t, bounds).unwrap();

        let starts = [t.a, t.b, t.c];
        let ends = [t.b, t.c, t.a];

        for i in 0..3 {
            let mut edge = output.edges[i];

            edge.step_x(true);
            edge.step_x(true);
            edge.step_y();

            let p = ::geometry::Coordinate::new(bounds.start_x + 2, bounds.start_y + 1).center().unwrap();

            assert_eq!(edge.value(), edge_function(starts[i], ends[i], p));

            edge.step_x(false);

            let p = ::geometry::Coordinate::new(bounds.start_x + 1, bounds.start_y + 1).center().unwrap();

            assert_eq!(edge.value(), edge_function(starts[i], ends[i], p));
        }
    }

    #[test]
    fn test_degenerate_setup() {
        let p = Point::from_f64(3.0, 3.0).unwrap();
        let t = Triangle::new(p, p, p);

        let output = TriangleSetup::new().run(t, BoundingBox::of_triangle(&t)).unwrap();

        assert!(output.area.raw() <= 0);
        assert_eq!(output.edges[0].dx().raw(), 0);
    }

    #[test]
    fn test_restart_discards_progress() {
        let t = triangle();
        let bounds = BoundingBox::of_triangle(&t);

        let mut setup = TriangleSetup::new();

        setup.start(t.reversed(), bounds).unwrap();
        setup.step();
        setup.step();

        let output = setup.run(t, bounds).unwrap();

        assert_eq!(output, TriangleSetup::new().run(t, bounds).unwrap());
    }
}
