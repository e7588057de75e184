//! Lazy streams over a seed and the `rand` bridge.
//!
//! - [`RawWords`]: infinite iterator of raw words, the feed for external
//!   statistical test batteries
//! - [`Samples`]: infinite iterator of generator values
//! - [`SeedRng`]: [`rand::RngCore`] adapter so `rand_distr` distributions
//!   can be sampled while threading a seed
//!
//! All three are restartable: building them again from the same seed replays
//! the same sequence. None of them can be rewound mid-stream.

use rand::{Error, RngCore};

use crate::algorithm::StepAlgorithm;
use crate::generator::Generator;
use crate::seed::Seed;

/// Infinite iterator of raw words stepped from a seed.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::seed_from_int;
///
/// let seed = seed_from_int(3);
/// let first: Vec<u32> = seed.raw_words().take(8).collect();
/// let again: Vec<u32> = seed.raw_words().take(8).collect();
/// assert_eq!(first, again);
/// ```
#[derive(Clone, Debug)]
pub struct RawWords<A: StepAlgorithm> {
    seed: Seed<A>,
}

impl<A: StepAlgorithm> RawWords<A> {
    /// Returns the seed the next word will be stepped from.
    #[inline]
    pub fn seed(&self) -> Seed<A> {
        self.seed
    }
}

impl<A: StepAlgorithm> Iterator for RawWords<A> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let (word, next) = self.seed.step();
        self.seed = next;
        Some(word)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<A: StepAlgorithm> Seed<A> {
    /// Returns an infinite iterator of raw words starting at this seed.
    #[inline]
    pub fn raw_words(self) -> RawWords<A> {
        RawWords { seed: self }
    }
}

/// Infinite iterator of values produced by repeatedly running a generator.
///
/// Each value is produced from the successor of the previous one, exactly
/// as `list(n)` would thread the seed.
pub struct Samples<T, A: StepAlgorithm> {
    generator: Generator<T, A>,
    seed: Seed<A>,
}

impl<T, A: StepAlgorithm> Samples<T, A> {
    pub(crate) fn new(generator: Generator<T, A>, seed: Seed<A>) -> Self {
        Self { generator, seed }
    }

    /// Returns the seed the next value will be produced from.
    #[inline]
    pub fn seed(&self) -> Seed<A> {
        self.seed
    }
}

impl<T: 'static, A: StepAlgorithm> Iterator for Samples<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let (value, next) = self.generator.run(self.seed);
        self.seed = next;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Mutable [`RngCore`] view over a seed.
///
/// Owns a copy of the seed and advances it on every draw; [`SeedRng::into_seed`]
/// hands back the successor so the caller can keep threading. Words are
/// consumed one step per `u32`; a `u64` takes two steps, low half first.
///
/// # Examples
///
/// ```rust
/// use rand::RngCore;
/// use seedgen_core::{seed_from_int, SeedRng};
///
/// let seed = seed_from_int(9);
/// let mut rng = SeedRng::new(seed);
/// let word = rng.next_u32();
///
/// let (expected, successor) = seed.step();
/// assert_eq!(word, expected);
/// assert_eq!(rng.into_seed(), successor);
/// ```
#[derive(Clone, Debug)]
pub struct SeedRng<A: StepAlgorithm> {
    seed: Seed<A>,
}

impl<A: StepAlgorithm> SeedRng<A> {
    /// Wraps a seed.
    #[inline]
    pub fn new(seed: Seed<A>) -> Self {
        Self { seed }
    }

    /// Returns the current seed without consuming the adapter.
    #[inline]
    pub fn seed(&self) -> Seed<A> {
        self.seed
    }

    /// Consumes the adapter, returning the successor seed.
    #[inline]
    pub fn into_seed(self) -> Seed<A> {
        self.seed
    }
}

impl<A: StepAlgorithm> RngCore for SeedRng<A> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let (word, next) = self.seed.step();
        self.seed = next;
        word
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::boolean;
    use crate::seed::seed_from_int;

    #[test]
    fn test_raw_words_match_manual_steps() {
        let seed = seed_from_int(17);
        let words: Vec<u32> = seed.raw_words().take(3).collect();

        let (a, s1) = seed.step();
        let (b, s2) = s1.step();
        let (c, s3) = s2.step();
        assert_eq!(words, vec![a, b, c]);

        let mut stream = seed.raw_words();
        let _ = stream.nth(2);
        assert_eq!(stream.seed(), s3);
    }

    #[test]
    fn test_samples_restartable() {
        let seed = seed_from_int(23);
        let coin = boolean();
        let first: Vec<bool> = coin.samples(seed).take(64).collect();
        let second: Vec<bool> = coin.samples(seed).take(64).collect();
        assert_eq!(first, second);

        let (listed, _) = coin.clone().list(64).run(seed);
        assert_eq!(first, listed);
    }

    #[test]
    fn test_seed_rng_u64_low_half_first() {
        let seed = seed_from_int(31);
        let mut rng = SeedRng::new(seed);
        let value = rng.next_u64();

        let (low, s1) = seed.step();
        let (high, s2) = s1.step();
        assert_eq!(value, (u64::from(high) << 32) | u64::from(low));
        assert_eq!(rng.into_seed(), s2);
    }

    #[test]
    fn test_fill_bytes_matches_raw_words() {
        let seed = seed_from_int(37);
        let mut rng = SeedRng::new(seed);
        let mut buffer = [0_u8; 10];
        rng.fill_bytes(&mut buffer);

        let words: Vec<u32> = seed.raw_words().take(3).collect();
        let mut expected = Vec::new();
        for word in words {
            expected.extend_from_slice(&word.to_le_bytes());
        }
        assert_eq!(&buffer[..], &expected[..10]);

        let mut consumed = seed.raw_words();
        let _ = consumed.nth(2);
        assert_eq!(rng.seed(), consumed.seed());
    }

    #[test]
    fn test_empty_fill_consumes_nothing() {
        let seed = seed_from_int(41);
        let mut rng = SeedRng::new(seed);
        let mut empty: [u8; 0] = [];
        rng.fill_bytes(&mut empty);
        assert_eq!(rng.into_seed(), seed);
    }
}
