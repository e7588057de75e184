//! Bias-free bounded sampling.
//!
//! This module turns raw words into uniformly distributed values inside
//! caller-supplied bounds:
//!
//! - [`IntRange`]: inclusive integer ranges via masked rejection sampling
//! - [`FloatRange`]: half-open float ranges via a 53-bit affine scale
//!
//! Ranges are validated once on construction. A range whose upper bound is
//! below its lower bound is rejected with
//! [`GenError::InvalidRange`](crate::GenError::InvalidRange) before any seed
//! is stepped, so a failed sample never consumes a raw word.
//!
//! ## Integer Policy
//!
//! For a width `w = high - low + 1`:
//!
//! 1. `w` a power of two: one raw word masked to `log2(w)` bits is already
//!    uniform; no rejection. Width 4096 takes this path.
//! 2. Otherwise: mask to the bit length of `w - 1`, accept candidates below
//!    `w`, redraw the rest. Widths 4094 and 4095 take this path with
//!    different retry rates.
//!
//! The mask is always below `2w`, so the expected number of draws per
//! sample is below two. Modulo reduction is never used.
//!
//! ## Draw Accounting
//!
//! Every sample reports how many raw words it consumed in
//! [`Sampled::draws`], which lets tests pin the fast path to exactly one
//! draw.

mod float;
mod int;

pub use float::FloatRange;
pub use int::IntRange;

use crate::algorithm::{Pcg32, StepAlgorithm};
use crate::error::GenError;
use crate::seed::Seed;

/// A sampled value together with the successor seed and its cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sampled<T, A: StepAlgorithm = Pcg32> {
    /// The sampled value.
    pub value: T,
    /// The seed to thread into the next call.
    pub seed: Seed<A>,
    /// Number of raw words consumed.
    pub draws: u32,
}

impl<T, A: StepAlgorithm> Sampled<T, A> {
    /// Splits into the `(value, successor)` pair used by generators.
    #[inline]
    pub fn into_pair(self) -> (T, Seed<A>) {
        (self.value, self.seed)
    }
}

/// Samples a uniform integer in `[low, high]` directly from a seed.
///
/// # Errors
///
/// Returns [`GenError::InvalidRange`] if `high < low`; the seed is not
/// stepped in that case.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::seed_from_int;
/// use seedgen_core::sampling::int_in_range;
///
/// let sampled = int_in_range(seed_from_int(1), 0, 4095).unwrap();
/// assert!((0..=4095).contains(&sampled.value));
/// assert_eq!(sampled.draws, 1);
///
/// assert!(int_in_range(seed_from_int(1), 10, 5).is_err());
/// ```
#[inline]
pub fn int_in_range<A: StepAlgorithm>(
    seed: Seed<A>,
    low: i64,
    high: i64,
) -> Result<Sampled<i64, A>, GenError> {
    Ok(IntRange::new(low, high)?.sample(seed))
}

/// Samples a uniform float in `[low, high)` directly from a seed.
///
/// # Errors
///
/// Returns [`GenError::InvalidRange`] if `high < low` or either bound is NaN
/// or infinite; the seed is not stepped in that case.
#[inline]
pub fn float_in_range<A: StepAlgorithm>(
    seed: Seed<A>,
    low: f64,
    high: f64,
) -> Result<Sampled<f64, A>, GenError> {
    Ok(FloatRange::new(low, high)?.sample(seed))
}
