//! Fragment gate stage.
//!
//! Makes the final inside/outside decision for each candidate pixel and attaches the
//! triangle data to accepted fragments. The decision and the data it describes travel
//! together in one [`Fragment`], so they cannot fall out of step.

use std::sync::Arc;

use ::error::RenderResult;
use ::geometry::{Coordinate, Triangle};
use ::interpolate::Interpolate;
use ::numeric::{EdgeValue, Fixed};
use ::pipeline::types::{TriangleAttributes, TriangleData};

use super::perspective::{self, Interpolated};
use super::rasterization::Candidate;

/// Inside test applied to the three edge values of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsideTest {
    /// All edges `>= 0` or all edges `<= 0`. Accepts either winding.
    AnyWinding,
    /// All edges `< 0`. Only accepts the native clockwise winding, and is the only test
    /// under which pixels on shared edges belong to exactly one triangle.
    Negative,
}

impl InsideTest {
    #[inline]
    pub fn accepts(self, edges: &[EdgeValue; 3]) -> bool {
        match self {
            InsideTest::AnyWinding => {
                edges.iter().all(|e| !e.is_negative()) || edges.iter().all(|e| !e.is_positive())
            }
            InsideTest::Negative => edges.iter().all(|e| e.is_negative()),
        }
    }
}

impl Default for InsideTest {
    fn default() -> InsideTest { InsideTest::Negative }
}

/// Classifies candidates of one triangle.
#[derive(Debug)]
pub struct FragmentGate<K> {
    test: InsideTest,
    data: Arc<TriangleData<K>>,
}

impl<K> Clone for FragmentGate<K> {
    fn clone(&self) -> FragmentGate<K> {
        FragmentGate { test: self.test, data: self.data.clone() }
    }
}

impl<K> FragmentGate<K> {
    pub fn new(test: InsideTest, data: Arc<TriangleData<K>>) -> FragmentGate<K> {
        FragmentGate { test, data }
    }

    #[inline]
    pub fn test(&self) -> InsideTest { self.test }

    #[inline]
    pub fn data(&self) -> &Arc<TriangleData<K>> { &self.data }

    /// Accept or reject a candidate. `valid` is an external qualifier; an invalid candidate
    /// is always rejected.
    pub fn process(&self, candidate: Candidate, valid: bool) -> Option<Fragment<K>> {
        if valid && self.test.accepts(&candidate.edges) {
            Some(Fragment {
                position: candidate.position,
                edges: candidate.edges,
                data: self.data.clone(),
            })
        } else {
            None
        }
    }
}

/// An accepted pixel, with its edge values and the triangle it belongs to.
#[derive(Debug)]
pub struct Fragment<K> {
    position: Coordinate,
    edges: [EdgeValue; 3],
    data: Arc<TriangleData<K>>,
}

impl<K> Clone for Fragment<K> {
    fn clone(&self) -> Fragment<K> {
        Fragment { position: self.position, edges: self.edges, data: self.data.clone() }
    }
}

impl<K> Fragment<K> {
    #[inline]
    pub fn position(&self) -> Coordinate { self.position }

    /// Edge values at the pixel center, `AB, BC, CA` of the rasterized vertex order
    #[inline]
    pub fn edges(&self) -> &[EdgeValue; 3] { &self.edges }

    /// The triangle as submitted
    #[inline]
    pub fn triangle(&self) -> &Triangle { self.data.triangle() }

    #[inline]
    pub fn attributes(&self) -> &TriangleAttributes<K> { self.data.attributes() }

    #[inline]
    pub fn area(&self) -> EdgeValue { self.data.area() }

    #[inline]
    pub fn data(&self) -> &Arc<TriangleData<K>> { &self.data }

    /// Screen-space barycentric weights of the submitted `A`, `B` and `C`.
    pub fn barycentric(&self) -> RenderResult<[Fixed; 3]> {
        perspective::barycentric(&self.data, self.position)
    }

    /// Perspective-correct W and uniforms at this fragment.
    pub fn interpolate(&self) -> RenderResult<Interpolated<K>> where K: Interpolate {
        perspective::interpolate(&self.data, self.position)
    }
}
