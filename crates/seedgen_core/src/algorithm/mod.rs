//! Step algorithms behind the seed.
//!
//! Every algorithm in this module shares the same 64-bit linear congruential
//! state update and differs only in the output function applied to the *old*
//! state. Algorithms are zero-sized marker types implementing
//! [`StepAlgorithm`]; [`Seed`](crate::Seed) and
//! [`Generator`](crate::Generator) are generic over them, so swapping the
//! output permutation never touches the combinator algebra or the samplers.
//!
//! ## Available Algorithms
//!
//! | Marker | Output function | Notes |
//! |--------|-----------------|-------|
//! | [`Pcg32`] | XSH-RR permutation | Default; low bits as strong as high bits |
//! | [`Lcg64`] | High 32 bits of the state | Baseline for benchmark comparison |
//!
//! ## Static Dispatch
//!
//! Algorithms are resolved at compile time; there is no `Box<dyn Trait>` in
//! the stepping path. [`AlgorithmKind`] provides runtime selection for the
//! CLI, which then dispatches to a monomorphised code path.

mod lcg;
mod pcg;

pub use lcg::Lcg64;
pub use pcg::Pcg32;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::GenError;

/// Multiplier of the shared 64-bit congruential state update.
///
/// This is the standard PCG / Knuth MMIX multiplier.
pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Stream selector used when a seed is built from a bare integer.
pub const DEFAULT_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;

/// A step algorithm: a congruential state update plus an output function.
///
/// Implementors are zero-sized markers. The state transition
/// `state * MULTIPLIER + increment (mod 2^64)` is a bijection whenever the
/// increment is odd, which [`Seed`](crate::Seed) guarantees.
pub trait StepAlgorithm:
    Copy + Clone + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Short, stable name used in logs and benchmark labels.
    const NAME: &'static str;

    /// Runtime tag of this algorithm.
    const KIND: AlgorithmKind;

    /// Maps the old state to a raw output word.
    fn output(state: u64) -> u32;

    /// Advances the state by one congruential step.
    #[inline]
    fn advance(state: u64, increment: u64) -> u64 {
        state.wrapping_mul(MULTIPLIER).wrapping_add(increment)
    }
}

/// Runtime selector for a [`StepAlgorithm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AlgorithmKind {
    /// Permuted congruential generator, XSH-RR output.
    #[default]
    Pcg32,
    /// Truncated linear congruential generator.
    Lcg64,
}

impl AlgorithmKind {
    /// Returns the algorithm name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Pcg32 => Pcg32::NAME,
            AlgorithmKind::Lcg64 => Lcg64::NAME,
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pcg32" | "pcg" => Ok(AlgorithmKind::Pcg32),
            "lcg64" | "lcg" => Ok(AlgorithmKind::Lcg64),
            other => Err(GenError::InvalidParameter {
                name: "algorithm",
                value: format!("unknown algorithm '{}', expected pcg32 or lcg64", other),
            }),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
