//! Non-restoring binary division.
//!
//! Quotient digits are `+1` or `-1`, picked from the sign of a remainder that is never
//! restored. The `+1/-1` digits are stored as bits `1/0`, so after the last iteration the
//! quotient `q` is converted back with `q - !q`. There is no final remainder correction,
//! so results are within one unit in the last place, and always odd.

use ::error::{RenderError, RenderResult};
use ::numeric::Fixed;
use ::numeric::fixed::FIXED_BITS;

/// Quotient bits produced, one per iteration
pub const ITERATIONS: u32 = 33;

const QUOTIENT_MASK: u64 = (1 << ITERATIONS) - 1;

/// One division in flight, advanced an iteration at a time.
///
/// Iterations run from bit 32 down to bit 0. There is no early exit; a result is only
/// available after all [`ITERATIONS`](constant.ITERATIONS.html) have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionState {
    remainder: i128,
    denominator: i128,
    quotient: u64,
    iteration: u32,
}

impl DivisionState {
    /// Start dividing `numerator` by `denominator`.
    ///
    /// The quotient is only meaningful when `numerator < denominator << 33`.
    pub fn new(numerator: u64, denominator: u64) -> DivisionState {
        DivisionState {
            remainder: numerator as i128,
            denominator: (denominator as i128) << ITERATIONS,
            quotient: 0,
            iteration: 0,
        }
    }

    /// Iterations run so far
    #[inline]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.iteration == ITERATIONS
    }

    /// Run one iteration. Returns `false` once all iterations are done.
    pub fn step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }

        if self.remainder >= 0 {
            self.quotient = (self.quotient << 1) | 1;
            self.remainder = (self.remainder << 1) - self.denominator;
        } else {
            self.quotient <<= 1;
            self.remainder = (self.remainder << 1) + self.denominator;
        }

        self.iteration += 1;

        true
    }

    /// Run any remaining iterations and convert the quotient digits.
    pub fn finish(mut self) -> i64 {
        while self.step() {}

        self.quotient as i64 - (!self.quotient & QUOTIENT_MASK) as i64
    }
}

/// `numerator / denominator` as Q16.16, where both operands share any common scale.
///
/// Runs on magnitudes and restores the sign afterwards.
pub fn divide(numerator: i64, denominator: i64) -> RenderResult<Fixed> {
    if denominator == 0 {
        return Err(RenderError::DivisionByZero);
    }

    let n = (numerator.unsigned_abs() as u128) << FIXED_BITS;
    let d = denominator.unsigned_abs() as u128;

    if n >= d << ITERATIONS || n > u64::MAX as u128 {
        return Err(RenderError::QuotientOverflow);
    }

    let magnitude = DivisionState::new(n as u64, d as u64).finish();

    if magnitude > i32::MAX as i64 {
        return Err(RenderError::QuotientOverflow);
    }

    let quotient = if (numerator < 0) != (denominator < 0) { -magnitude } else { magnitude };

    Ok(Fixed::from_raw(quotient as i32))
}

/// Reciprocal of `w` in Q16.16.
///
/// Fails with `RenderError::DivisionByZero` for zero, and with `RenderError::QuotientOverflow`
/// when `|w|` is too small for `1/w` to be representable.
#[inline]
pub fn perspective_divide(w: Fixed) -> RenderResult<Fixed> {
    divide(Fixed::ONE.raw() as i64, w.raw() as i64)
}
