//! PCG XSH-RR 64/32 output permutation.

use super::{AlgorithmKind, StepAlgorithm};

/// Permuted congruential generator with the XSH-RR output function.
///
/// The output xor-shifts the high bits of the old state down and then
/// rotates the 32-bit result by an amount taken from the top five state
/// bits. The rotation destroys the linear structure of the congruential
/// step, so the low output bits are as unpredictable as the high ones and
/// masking-based samplers stay unbiased.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::algorithm::{Pcg32, StepAlgorithm};
///
/// // Output depends only on the old state.
/// assert_eq!(Pcg32::output(0), 0);
/// assert_eq!(Pcg32::NAME, "pcg32");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pcg32;

impl StepAlgorithm for Pcg32 {
    const NAME: &'static str = "pcg32";
    const KIND: AlgorithmKind = AlgorithmKind::Pcg32;

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}
