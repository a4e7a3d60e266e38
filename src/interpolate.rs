//! Interpolation utilities

use nalgebra::{Scalar, Vector2, Vector3, Vector4};

use ::numeric::Fixed;
use ::numeric::fixed::FIXED_BITS;

/// Describes a type that can be interpolated with fixed-point barycentric weights.
///
/// Vertex data forwarded with a triangle must implement this for
/// [`Fragment::interpolate`](../pipeline/stages/fragment/struct.Fragment.html#method.interpolate)
/// to recover per-fragment values.
///
/// Weights are Q16.16 and usually sum to one. Integer implementations round to nearest
/// and saturate to the range of the type.
pub trait Interpolate {
    /// Interpolate the three values with their corresponding barycentric coordinate weight
    fn barycentric_interpolate(u: Fixed, x1: &Self, v: Fixed, x2: &Self, w: Fixed, x3: &Self) -> Self;

    /// Simple linear interpolation
    fn linear_interpolate(t: Fixed, x1: &Self, x2: &Self) -> Self;
}

/// Weighted sum of three raw values in Q16.16, rounded to nearest.
#[inline]
fn weighted_sum(u: Fixed, x1: i128, v: Fixed, x2: i128, w: Fixed, x3: i128) -> i128 {
    let sum = x1 * u.raw() as i128 + x2 * v.raw() as i128 + x3 * w.raw() as i128;

    (sum + (1 << (FIXED_BITS - 1))) >> FIXED_BITS
}

impl Interpolate for () {
    #[inline(always)]
    fn barycentric_interpolate(_: Fixed, _: &Self, _: Fixed, _: &Self, _: Fixed, _: &Self) -> Self { () }

    #[inline(always)]
    fn linear_interpolate(_: Fixed, _: &Self, _: &Self) -> Self { () }
}

macro_rules! impl_primitive_interpolate {
    ($($t:ty),+) => {
        $(
            impl Interpolate for $t {
                #[inline]
                fn barycentric_interpolate(u: Fixed, ux: &$t, v: Fixed, vx: &$t, w: Fixed, wx: &$t) -> $t {
                    let value = weighted_sum(u, *ux as i128, v, *vx as i128, w, *wx as i128);

                    ::utils::clamp(value, <$t>::MIN as i128, <$t>::MAX as i128) as $t
                }

                #[inline]
                fn linear_interpolate(t: Fixed, x1: &$t, x2: &$t) -> $t {
                    Interpolate::barycentric_interpolate(Fixed::ONE - t, x1, t, x2, Fixed::from_raw(0), x1)
                }
            }
        )+
    }
}

impl_primitive_interpolate!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl Interpolate for Fixed {
    #[inline]
    fn barycentric_interpolate(u: Fixed, ux: &Fixed, v: Fixed, vx: &Fixed, w: Fixed, wx: &Fixed) -> Fixed {
        let value = weighted_sum(u, ux.raw() as i128, v, vx.raw() as i128, w, wx.raw() as i128);

        Fixed::from_raw(::utils::clamp(value, i32::MIN as i128, i32::MAX as i128) as i32)
    }

    #[inline]
    fn linear_interpolate(t: Fixed, x1: &Fixed, x2: &Fixed) -> Fixed {
        Interpolate::barycentric_interpolate(Fixed::ONE - t, x1, t, x2, Fixed::from_raw(0), x1)
    }
}

macro_rules! impl_vector_interpolate {
    ($($V:ident { $($i:expr),+ }),+) => {
        $(
            impl<N> Interpolate for $V<N> where N: Scalar + Interpolate {
                #[inline]
                fn barycentric_interpolate(u: Fixed, ux: &Self, v: Fixed, vx: &Self, w: Fixed, wx: &Self) -> Self {
                    $V::new($(N::barycentric_interpolate(u, &ux[$i], v, &vx[$i], w, &wx[$i])),+)
                }

                #[inline]
                fn linear_interpolate(t: Fixed, x1: &Self, x2: &Self) -> Self {
                    $V::new($(N::linear_interpolate(t, &x1[$i], &x2[$i])),+)
                }
            }
        )+
    }
}

impl_vector_interpolate! {
    Vector2 { 0, 1 },
    Vector3 { 0, 1, 2 },
    Vector4 { 0, 1, 2, 3 }
}

#[cfg(test)]
mod test {
    use num_traits::FromPrimitive;

    use super::*;

    fn weight(value: f64) -> Fixed {
        Fixed::from_f64(value).unwrap()
    }

    #[test]
    fn test_integer_interpolate() {
        let third = Fixed::from_raw(Fixed::ONE.raw() / 3);

        assert_eq!(u8::barycentric_interpolate(weight(1.0), &200, weight(0.0), &10, weight(0.0), &0), 200);
        assert_eq!(u8::barycentric_interpolate(third, &90, third, &90, third, &90), 90);
        assert_eq!(i32::linear_interpolate(weight(0.25), &0, &-400), -100);
    }

    #[test]
    fn test_integer_interpolate_saturates() {
        assert_eq!(u8::barycentric_interpolate(weight(2.0), &200, weight(0.0), &0, weight(0.0), &0), 255);
        assert_eq!(u8::barycentric_interpolate(weight(-1.0), &200, weight(0.0), &0, weight(0.0), &0), 0);
    }

    #[test]
    fn test_vector_interpolate() {
        let a = Vector4::new(255u8, 0, 0, 255);
        let b = Vector4::new(0u8, 255, 0, 255);

        let mid = Vector4::linear_interpolate(weight(0.5), &a, &b);

        assert_eq!(mid, Vector4::new(128, 128, 0, 255));
    }

    #[test]
    fn test_tuple_interpolate() {
        let a = (Fixed::from_int(2), 10u16);
        let b = (Fixed::from_int(4), 20u16);

        let (f, i) = <(Fixed, u16)>::linear_interpolate(weight(0.5), &a, &b);

        assert_eq!(f, Fixed::from_int(3));
        assert_eq!(i, 15);
    }
}
