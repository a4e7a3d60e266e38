use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use num_traits::{Bounded, FromPrimitive, One, Zero};

use ::error::{RenderError, RenderResult};
use ::utils::clamp;

/// Number of fractional bits in a [`SubPixel`] or [`EdgeValue`].
pub const SUBPIXEL_BITS: u32 = 4;

/// Number of fractional bits in a [`Fixed`].
pub const FIXED_BITS: u32 = 16;

/// Q12.4 signed screen coordinate.
///
/// Covers `-2048.0..=2047.9375` in steps of `1/16` of a pixel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubPixel(i16);

impl SubPixel {
    /// One whole pixel
    pub const ONE: SubPixel = SubPixel(1 << SUBPIXEL_BITS);
    /// Half a pixel, the offset from a pixel corner to its center
    pub const HALF: SubPixel = SubPixel(1 << (SUBPIXEL_BITS - 1));

    #[inline]
    pub const fn from_raw(raw: i16) -> SubPixel {
        SubPixel(raw)
    }

    /// Checked conversion from a raw Q12.4 value held in a wider integer.
    pub fn from_raw_i32(raw: i32) -> RenderResult<SubPixel> {
        if raw < i16::MIN as i32 || raw > i16::MAX as i32 {
            return Err(RenderError::CoordinateOverflow(raw as f64 / 16.0));
        }

        Ok(SubPixel(raw as i16))
    }

    /// Checked conversion from a whole pixel count.
    pub fn from_pixels(pixels: i32) -> RenderResult<SubPixel> {
        match pixels.checked_mul(1 << SUBPIXEL_BITS) {
            Some(raw) => SubPixel::from_raw_i32(raw),
            None => Err(RenderError::CoordinateOverflow(pixels as f64)),
        }
    }

    /// Checked conversion from a floating-point pixel position, rounded to the nearest `1/16`.
    pub fn from_f64(value: f64) -> RenderResult<SubPixel> {
        let raw = (value * 16.0).round();

        if !raw.is_finite() || raw < i16::MIN as f64 || raw > i16::MAX as f64 {
            return Err(RenderError::CoordinateOverflow(value));
        }

        Ok(SubPixel(raw as i16))
    }

    #[inline]
    pub fn raw(self) -> i16 {
        self.0
    }

    /// Index of the pixel containing this coordinate (rounds toward negative infinity).
    #[inline]
    pub fn floor_pixel(self) -> i32 {
        (self.0 >> SUBPIXEL_BITS) as i32
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 16.0
    }
}

impl Bounded for SubPixel {
    #[inline]
    fn min_value() -> SubPixel { SubPixel(i16::MIN) }

    #[inline]
    fn max_value() -> SubPixel { SubPixel(i16::MAX) }
}

impl Display for SubPixel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Q24.4 signed edge function value.
///
/// Edge functions are evaluated once per triangle and then stepped by pure addition,
/// so this type only supports the additive operations the rasterizer needs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeValue(i32);

impl EdgeValue {
    #[inline]
    pub const fn from_raw(raw: i32) -> EdgeValue {
        EdgeValue(raw)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool { self.0 < 0 }

    #[inline]
    pub fn is_positive(self) -> bool { self.0 > 0 }

    #[inline]
    pub fn is_zero(self) -> bool { self.0 == 0 }

    /// Value in square pixels
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 16.0
    }
}

impl Add for EdgeValue {
    type Output = EdgeValue;

    #[inline]
    fn add(self, rhs: EdgeValue) -> EdgeValue { EdgeValue(self.0 + rhs.0) }
}

impl AddAssign for EdgeValue {
    #[inline]
    fn add_assign(&mut self, rhs: EdgeValue) { self.0 += rhs.0; }
}

impl Sub for EdgeValue {
    type Output = EdgeValue;

    #[inline]
    fn sub(self, rhs: EdgeValue) -> EdgeValue { EdgeValue(self.0 - rhs.0) }
}

impl SubAssign for EdgeValue {
    #[inline]
    fn sub_assign(&mut self, rhs: EdgeValue) { self.0 -= rhs.0; }
}

impl Neg for EdgeValue {
    type Output = EdgeValue;

    #[inline]
    fn neg(self) -> EdgeValue { EdgeValue(-self.0) }
}

impl Display for EdgeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

/// Q16.16 signed fixed-point value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fixed(i32);

impl Fixed {
    pub const ONE: Fixed = Fixed(1 << FIXED_BITS);

    #[inline]
    pub const fn from_raw(raw: i32) -> Fixed {
        Fixed(raw)
    }

    #[inline]
    pub fn from_int(value: i16) -> Fixed {
        Fixed((value as i32) << FIXED_BITS)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Fixed {
        Fixed(self.0.saturating_abs())
    }

    /// Product of two Q16.16 values, computed in 64 bits and saturated back to 32.
    #[inline]
    pub fn saturating_mul(self, rhs: Fixed) -> Fixed {
        let product = (self.0 as i64 * rhs.0 as i64) >> FIXED_BITS;

        Fixed(clamp(product, i32::MIN as i64, i32::MAX as i64) as i32)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << FIXED_BITS) as f64
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, rhs: Fixed) -> Fixed { Fixed(self.0.saturating_add(rhs.0)) }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, rhs: Fixed) -> Fixed { Fixed(self.0.saturating_sub(rhs.0)) }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed { Fixed(self.0.saturating_neg()) }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, rhs: Fixed) -> Fixed { self.saturating_mul(rhs) }
}

impl Zero for Fixed {
    #[inline]
    fn zero() -> Fixed { Fixed(0) }

    #[inline]
    fn is_zero(&self) -> bool { self.0 == 0 }
}

impl One for Fixed {
    #[inline]
    fn one() -> Fixed { Fixed::ONE }
}

impl Bounded for Fixed {
    #[inline]
    fn min_value() -> Fixed { Fixed(i32::MIN) }

    #[inline]
    fn max_value() -> Fixed { Fixed(i32::MAX) }
}

impl FromPrimitive for Fixed {
    fn from_i64(n: i64) -> Option<Fixed> {
        n.checked_mul(1 << FIXED_BITS)
         .and_then(|raw| if raw >= i32::MIN as i64 && raw <= i32::MAX as i64 { Some(Fixed(raw as i32)) } else { None })
    }

    fn from_u64(n: u64) -> Option<Fixed> {
        if n > i64::MAX as u64 { None } else { Fixed::from_i64(n as i64) }
    }

    fn from_f64(n: f64) -> Option<Fixed> {
        let raw = (n * (1u32 << FIXED_BITS) as f64).round();

        if raw.is_finite() && raw >= i32::MIN as f64 && raw <= i32::MAX as f64 {
            Some(Fixed(raw as i32))
        } else {
            None
        }
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_subpixel_range() {
        assert_eq!(SubPixel::from_f64(-2048.0).unwrap().raw(), i16::MIN);
        assert_eq!(SubPixel::from_f64(2047.9375).unwrap().raw(), i16::MAX);
        assert_eq!(SubPixel::from_pixels(3).unwrap(), SubPixel::from_raw(48));

        match SubPixel::from_f64(2048.0) {
            Err(RenderError::CoordinateOverflow(v)) => assert_eq!(v, 2048.0),
            other => panic!("expected overflow, got {:?}", other),
        }

        assert!(SubPixel::from_f64(::std::f64::NAN).is_err());
        assert!(SubPixel::from_pixels(-2049).is_err());
        assert!(SubPixel::from_raw_i32(40000).is_err());
    }

    #[test]
    fn test_floor_pixel() {
        assert_eq!(SubPixel::from_f64(3.9375).unwrap().floor_pixel(), 3);
        assert_eq!(SubPixel::from_f64(-0.0625).unwrap().floor_pixel(), -1);
        assert_eq!(SubPixel::from_f64(-2.0).unwrap().floor_pixel(), -2);
    }

    #[test]
    fn test_fixed_mul() {
        let a = Fixed::from_f64(1.5).unwrap();
        let b = Fixed::from_f64(-2.25).unwrap();

        assert_eq!((a * b).to_f64(), -3.375);
        assert_eq!(Fixed::one() * a, a);
        assert_eq!(Fixed::max_value() * Fixed::from_int(4), Fixed::max_value());
    }

    #[test]
    fn test_fixed_conversions() {
        assert_eq!(Fixed::from_i64(2), Some(Fixed::from_int(2)));
        assert_eq!(Fixed::from_i64(1 << 20), None);
        assert_eq!(Fixed::from_u64(::std::u64::MAX), None);
        assert_eq!(Fixed::from_f64(0.5).map(|v| v.to_f64()), Some(0.5));
        assert_eq!(Fixed::from_f64(-0.5).map(|v| v.raw()), Some(-(1 << 15)));
    }
}
