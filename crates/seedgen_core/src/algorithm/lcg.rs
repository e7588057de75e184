//! Truncated 64-bit LCG output, the baseline stepper.

use super::{AlgorithmKind, StepAlgorithm};

/// Bare linear congruential generator emitting the high 32 bits of the old
/// state.
///
/// High bits of an LCG are reasonable; the low bits of the state cycle with
/// short periods, so outputs that are later masked down to a few bits carry
/// visible structure. Kept as the comparison point for [`Pcg32`](super::Pcg32).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Lcg64;

impl StepAlgorithm for Lcg64 {
    const NAME: &'static str = "lcg64";
    const KIND: AlgorithmKind = AlgorithmKind::Lcg64;

    #[inline]
    fn output(state: u64) -> u32 {
        (state >> 32) as u32
    }
}
