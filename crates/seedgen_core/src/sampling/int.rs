//! Inclusive integer ranges with masked rejection sampling.

use super::Sampled;
use crate::algorithm::StepAlgorithm;
use crate::error::{Bounds, GenError};
use crate::seed::Seed;

/// A validated inclusive integer range `[low, high]`.
///
/// Precomputes the candidate mask so that sampling is a draw, a mask and a
/// compare. Ranges up to 2^32 values build each candidate from one raw
/// word; wider ranges (up to the full `i64` domain) combine two.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::sampling::IntRange;
///
/// let range = IntRange::new(0, 4095).unwrap();
/// assert!(range.is_power_of_two());
/// assert_eq!(range.mask_bits(), 12);
///
/// let range = IntRange::new(0, 4094).unwrap();
/// assert!(!range.is_power_of_two());
/// assert_eq!(range.mask_bits(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntRange {
    low: i64,
    high: i64,
    /// `high - low`, one less than the width.
    span: u64,
    /// Smallest all-ones mask covering `span`.
    mask: u64,
    /// Candidates need two raw words.
    wide: bool,
}

impl IntRange {
    /// Validates and prepares `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidRange`] if `high < low`. Bounds are never
    /// swapped silently.
    pub fn new(low: i64, high: i64) -> Result<Self, GenError> {
        if high < low {
            return Err(GenError::InvalidRange(Bounds::Int { low, high }));
        }

        // Two's complement difference is exact in u64 once high >= low.
        Ok(Self::from_span(low, high.wrapping_sub(low) as u64))
    }

    /// Index range `[0, len - 1]` for choosing among `len >= 1` items.
    pub(crate) fn indices(len: usize) -> Self {
        Self::from_span(0, len.saturating_sub(1) as u64)
    }

    fn from_span(low: i64, span: u64) -> Self {
        let mask = if span == 0 {
            0
        } else {
            u64::MAX >> span.leading_zeros()
        };

        Self {
            low,
            high: low.wrapping_add(span as i64),
            span,
            mask,
            wide: mask > u64::from(u32::MAX),
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the upper bound.
    #[inline]
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns the number of values in the range, or `None` for the full
    /// 2^64 `i64` domain.
    #[inline]
    pub fn width(&self) -> Option<u64> {
        self.span.checked_add(1)
    }

    /// Returns `true` when the width is a power of two (no rejection).
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        self.span & self.span.wrapping_add(1) == 0
    }

    /// Returns the number of low bits kept from each candidate.
    #[inline]
    pub fn mask_bits(&self) -> u32 {
        u64::BITS - self.mask.leading_zeros()
    }

    /// Draws a uniform value from the range.
    ///
    /// Power-of-two widths accept the first masked candidate. Other widths
    /// redraw until a masked candidate falls inside the range; each attempt
    /// is counted in [`Sampled::draws`].
    pub fn sample<A: StepAlgorithm>(&self, seed: Seed<A>) -> Sampled<i64, A> {
        if self.is_power_of_two() {
            let (raw, seed, draws) = self.draw(seed);
            return Sampled {
                value: self.offset(raw & self.mask),
                seed,
                draws,
            };
        }

        let mut seed = seed;
        let mut draws = 0;
        loop {
            let (raw, next, used) = self.draw(seed);
            seed = next;
            draws += used;

            let candidate = raw & self.mask;
            if candidate <= self.span {
                return Sampled {
                    value: self.offset(candidate),
                    seed,
                    draws,
                };
            }
        }
    }

    #[inline]
    fn draw<A: StepAlgorithm>(&self, seed: Seed<A>) -> (u64, Seed<A>, u32) {
        let (first, seed) = seed.step();
        if !self.wide {
            return (u64::from(first), seed, 1);
        }
        let (second, seed) = seed.step();
        ((u64::from(first) << 32) | u64::from(second), seed, 2)
    }

    #[inline]
    fn offset(&self, candidate: u64) -> i64 {
        // candidate <= span, so the true sum lies in [low, high].
        self.low.wrapping_add(candidate as i64)
    }
}
