//! Per-triangle data carried alongside the fragment stream

use ::error::{RenderError, RenderResult};
use ::geometry::{FaceWinding, Triangle};
use ::numeric::{EdgeValue, Fixed};
use ::pipeline::stages::divide::perspective_divide;
use ::pipeline::stages::edge::edge_function;

/// Vertex data forwarded with a triangle.
///
/// `w` is the clip-space W of the vertex, used for perspective-correct interpolation
/// of the `uniforms`. It must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttributes<K> {
    pub w: Fixed,
    pub uniforms: K,
}

impl<K> VertexAttributes<K> {
    #[inline]
    pub fn new(w: Fixed, uniforms: K) -> VertexAttributes<K> {
        VertexAttributes { w, uniforms }
    }
}

impl<K> Default for VertexAttributes<K> where K: Default {
    fn default() -> VertexAttributes<K> {
        VertexAttributes { w: Fixed::ONE, uniforms: K::default() }
    }
}

/// Attributes of the three vertices, in the same order as the triangle's vertices.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TriangleAttributes<K> {
    pub a: VertexAttributes<K>,
    pub b: VertexAttributes<K>,
    pub c: VertexAttributes<K>,
}

impl<K> TriangleAttributes<K> {
    #[inline]
    pub fn new(a: VertexAttributes<K>, b: VertexAttributes<K>, c: VertexAttributes<K>) -> TriangleAttributes<K> {
        TriangleAttributes { a, b, c }
    }
}

/// Validated triangle and attributes, shared by every fragment of one rasterization pass.
#[derive(Debug)]
pub struct TriangleData<K> {
    triangle: Triangle,
    rasterized: Triangle,
    winding: FaceWinding,
    attributes: TriangleAttributes<K>,
    inv_w: [Fixed; 3],
    area: EdgeValue,
}

impl<K> TriangleData<K> {
    /// Validate a triangle and its attributes.
    ///
    /// Fails with `RenderError::DegenerateTriangle` for zero area, and with the errors of
    /// [`perspective_divide`](../stages/divide/fn.perspective_divide.html) for any unusable `w`.
    pub fn new(triangle: Triangle, attributes: TriangleAttributes<K>) -> RenderResult<TriangleData<K>> {
        let winding = match triangle.winding() {
            Some(winding) => winding,
            None => return Err(RenderError::DegenerateTriangle),
        };

        let inv_w = [
            perspective_divide(attributes.a.w)?,
            perspective_divide(attributes.b.w)?,
            perspective_divide(attributes.c.w)?,
        ];

        let rasterized = match winding {
            FaceWinding::Clockwise => triangle,
            FaceWinding::CounterClockwise => triangle.reversed(),
        };

        let area = edge_function(rasterized.a, rasterized.b, rasterized.c);

        Ok(TriangleData { triangle, rasterized, winding, attributes, inv_w, area })
    }

    /// The triangle as submitted
    #[inline]
    pub fn triangle(&self) -> &Triangle { &self.triangle }

    /// The triangle in the vertex order it is rasterized in, always clockwise.
    #[inline]
    pub fn rasterized(&self) -> &Triangle { &self.rasterized }

    /// Whether `B` and `C` were swapped for rasterization
    #[inline]
    pub fn is_reversed(&self) -> bool { self.winding == FaceWinding::CounterClockwise }

    #[inline]
    pub fn winding(&self) -> FaceWinding { self.winding }

    #[inline]
    pub fn attributes(&self) -> &TriangleAttributes<K> { &self.attributes }

    /// `1/w` of `A`, `B` and `C`
    #[inline]
    pub fn inv_w(&self) -> &[Fixed; 3] { &self.inv_w }

    /// Edge function of the rasterized triangle's third vertex, with the fill-rule adjustment
    #[inline]
    pub fn area(&self) -> EdgeValue { self.area }
}
