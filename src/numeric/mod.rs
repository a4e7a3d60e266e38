//! Fixed-point numeric types
//!
//! All rasterization math is integer. The three formats mirror the bit widths the
//! pipeline is designed around:
//!
//! * [`SubPixel`]: Q12.4 screen coordinates, 16 bits signed.
//! * [`EdgeValue`]: Q24.4 edge function values and accumulators, 32 bits signed.
//!   Edge products are formed from 17-bit differences in 64-bit intermediates.
//! * [`Fixed`]: Q16.16 values for W, 1/W, barycentric weights and recovered depth.

pub mod fixed;

pub use self::fixed::{SubPixel, EdgeValue, Fixed};
