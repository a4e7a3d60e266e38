//! Perspective-correct attribute recovery.
//!
//! Screen-space barycentric weights are the unadjusted edge functions at the fragment's
//! center divided by the triangle area, both at full precision. Attributes vary linearly in clip space, so with `λ` the screen-space weights:
//!
//! ```text
//! 1/w  = λa/wa + λb/wb + λc/wc
//! λ'i  = λi/wi * w
//! ```
//!
//! and the attributes are interpolated with `λ'`.

use ::error::RenderResult;
use ::geometry::{Coordinate, Triangle};
use ::interpolate::Interpolate;
use ::numeric::Fixed;
use ::numeric::fixed::FIXED_BITS;
use ::pipeline::types::TriangleData;
use ::utils::clamp;

use super::divide::{divide, perspective_divide};
use super::edge::edge_product;

/// Interpolated vertex data of a single fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated<K> {
    /// Clip-space W at the fragment
    pub w: Fixed,
    pub uniforms: K,
}

/// Screen-space barycentric weights of `A`, `B` and `C`, in the order the triangle was submitted.
///
/// The three products sum to the area exactly, so the weights sum to one up to division rounding.
pub fn barycentric<K>(data: &TriangleData<K>, position: Coordinate) -> RenderResult<[Fixed; 3]> {
    let Triangle { a, b, c } = *data.rasterized();
    let p = position.center()?;

    let ab = edge_product(a, b, p);
    let bc = edge_product(b, c, p);
    let ca = edge_product(c, a, p);

    let area = edge_product(a, b, c);

    let wa = divide(bc, area)?;
    let wb = divide(ca, area)?;
    let wc = divide(ab, area)?;

    Ok(if data.is_reversed() { [wa, wc, wb] } else { [wa, wb, wc] })
}

/// `weight * inv_w * w`, rounded once.
#[inline]
fn perspective_weight(weight: Fixed, inv_w: Fixed, w: Fixed) -> Fixed {
    let product = weight.raw() as i128 * inv_w.raw() as i128 * w.raw() as i128;
    let rounded = (product + (1 << (2 * FIXED_BITS - 1))) >> (2 * FIXED_BITS);

    Fixed::from_raw(clamp(rounded, i32::MIN as i128, i32::MAX as i128) as i32)
}

/// Perspective-correct W and uniforms at a fragment.
pub fn interpolate<K>(data: &TriangleData<K>, position: Coordinate) -> RenderResult<Interpolated<K>> where K: Interpolate {
    let [u, v, t] = barycentric(data, position)?;
    let inv_w = data.inv_w();

    let w = perspective_divide(Fixed::barycentric_interpolate(u, &inv_w[0], v, &inv_w[1], t, &inv_w[2]))?;

    let attributes = data.attributes();

    let uniforms = K::barycentric_interpolate(perspective_weight(u, inv_w[0], w), &attributes.a.uniforms,
                                              perspective_weight(v, inv_w[1], w), &attributes.b.uniforms,
                                              perspective_weight(t, inv_w[2], w), &attributes.c.uniforms);

    Ok(Interpolated { w, uniforms })
}
