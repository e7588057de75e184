//! Goodness-of-fit helpers for bounded integer sampling.
//!
//! Provides Pearson's chi-squared statistic over a histogram, an
//! approximate critical value, and [`UniformityReport`], which samples an
//! [`IntRange`] and records how the result compares.
//!
//! ## Critical Values
//!
//! Uses the Wilson–Hilferty cube-root approximation
//!
//! ```text
//! χ²(k, z) ≈ k · (1 − 2/(9k) + z · √(2/(9k)))³
//! ```
//!
//! which is accurate to well under one percent for the degrees of freedom
//! seen here (thousands).

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::algorithm::StepAlgorithm;
use crate::error::GenError;
use crate::sampling::IntRange;
use crate::seed::Seed;

/// Standard-normal quantile used by [`UniformityReport::passes`].
///
/// Corresponds to a one-sided significance level of about 1e-4.
pub const DEFAULT_Z: f64 = 3.719;

/// Widest range [`UniformityReport::run`] will histogram.
pub const MAX_HISTOGRAM_WIDTH: u64 = 1 << 20;

/// Pearson's chi-squared statistic of `counts` against a uniform expectation.
///
/// Returns `0.0` for an empty histogram or one with no observations.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::stats::chi_squared;
///
/// assert_eq!(chi_squared(&[25, 25, 25, 25]), 0.0);
/// assert_eq!(chi_squared(&[50, 0]), 50.0);
/// ```
pub fn chi_squared(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }

    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Approximate upper critical value of χ² with `dof` degrees of freedom at
/// standard-normal quantile `z`.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::stats::chi_squared_critical;
///
/// // Tabulated χ²(100) at p = 0.05 is 124.34.
/// let critical = chi_squared_critical(100, 1.645);
/// assert!((critical - 124.34).abs() < 0.5);
/// ```
pub fn chi_squared_critical(dof: u64, z: f64) -> f64 {
    if dof == 0 {
        return 0.0;
    }
    let k = dof as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}

/// Outcome of a chi-squared uniformity check over one integer range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UniformityReport {
    /// Lower bound of the range.
    pub low: i64,
    /// Upper bound of the range.
    pub high: i64,
    /// Number of values sampled.
    pub samples: u64,
    /// Pearson chi-squared statistic.
    pub statistic: f64,
    /// Degrees of freedom (width − 1).
    pub dof: u64,
    /// Critical value at [`DEFAULT_Z`].
    pub critical: f64,
    /// Raw words consumed.
    pub draws: u64,
    /// Raw words consumed beyond one attempt per sample (rejections).
    pub extra_draws: u64,
}

impl UniformityReport {
    /// Samples `[low, high]` `samples` times from `seed` and tests the
    /// histogram for uniformity.
    ///
    /// # Errors
    ///
    /// - [`GenError::InvalidRange`] if `high < low`
    /// - [`GenError::InvalidParameter`] if `samples` is zero or the range is
    ///   wider than [`MAX_HISTOGRAM_WIDTH`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::seed_from_int;
    /// use seedgen_core::stats::UniformityReport;
    ///
    /// let report = UniformityReport::run(seed_from_int(1), 0, 4095, 20_000).unwrap();
    /// assert_eq!(report.dof, 4095);
    /// assert_eq!(report.extra_draws, 0);
    /// ```
    pub fn run<A: StepAlgorithm>(
        seed: Seed<A>,
        low: i64,
        high: i64,
        samples: u64,
    ) -> Result<Self, GenError> {
        let range = IntRange::new(low, high)?;
        let width = match range.width() {
            Some(width) if width <= MAX_HISTOGRAM_WIDTH => width,
            _ => {
                return Err(GenError::InvalidParameter {
                    name: "range",
                    value: format!(
                        "[{}, {}] is wider than {} values",
                        low, high, MAX_HISTOGRAM_WIDTH
                    ),
                })
            }
        };
        if samples == 0 {
            return Err(GenError::InvalidParameter {
                name: "samples",
                value: "must be at least 1".to_string(),
            });
        }

        let mut counts = vec![0_u64; width as usize];
        let mut seed = seed;
        let mut draws = 0_u64;
        for _ in 0..samples {
            let sampled = range.sample(seed);
            counts[sampled.value.wrapping_sub(low) as usize] += 1;
            draws += u64::from(sampled.draws);
            seed = sampled.seed;
        }

        let dof = width - 1;
        Ok(Self {
            low,
            high,
            samples,
            statistic: chi_squared(&counts),
            dof,
            critical: chi_squared_critical(dof, DEFAULT_Z),
            draws,
            extra_draws: draws - samples,
        })
    }

    /// Returns `true` when the statistic does not exceed the critical value.
    #[inline]
    pub fn passes(&self) -> bool {
        self.statistic <= self.critical
    }

    /// Returns `true` when the range width is a power of two.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        (self.dof & (self.dof + 1)) == 0
    }
}
