//! Seed representation, construction, stepping and splitting.
//!
//! A [`Seed`] is two 64-bit words: the congruential `state` and an odd
//! `increment` selecting one of 2^63 independent streams. Seeds are plain
//! `Copy` values; stepping returns a successor instead of mutating in place,
//! so any number of threads may step copies of the same seed without
//! coordination.
//!
//! ## Construction
//!
//! - [`Seed::from_int`]: mixes an integer with [`DEFAULT_STREAM`]
//! - [`Seed::with_stream`]: PCG reference initialisation with an explicit stream
//! - [`Seed::from_parts`]: rebuilds a previously serialised seed
//! - [`Seed::split`]: derives an independent child seed
//!
//! ## Usage Example
//!
//! ```rust
//! use seedgen_core::seed_from_int;
//!
//! let seed = seed_from_int(42);
//! let (first, next) = seed.step();
//!
//! // Stepping is pure: the same seed always yields the same word.
//! assert_eq!(seed.step().0, first);
//! assert_ne!(seed, next);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::algorithm::{Pcg32, StepAlgorithm, DEFAULT_STREAM};


/// Multiplier folding the split discriminator into the child state.
const SPLIT_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Immutable generator state: a 64-bit state word and an odd increment.
///
/// The type parameter selects the step algorithm and defaults to
/// [`Pcg32`]. It is a zero-sized marker: a seed is exactly two words
/// regardless of algorithm, and with the `serde` feature it serialises as
/// `{ state, increment }`.
///
/// # Invariants
///
/// - `increment` is odd, so the state transition is a full-period
///   bijection on 2^64 states.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::Seed;
/// use seedgen_core::algorithm::Pcg32;
///
/// let seed = Seed::<Pcg32>::with_stream(42, 54);
/// let (word, _) = seed.step();
/// assert_eq!(word, 0xa15c_02b7);
/// assert_eq!(seed.increment() % 2, 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SeedParts", into = "SeedParts", bound = "A: StepAlgorithm")
)]
pub struct Seed<A = Pcg32> {
    /// Congruential state word.
    state: u64,
    /// Stream increment; always odd.
    increment: u64,
    algorithm: PhantomData<A>,
}

impl<A: StepAlgorithm> Seed<A> {
    /// Creates a seed from an integer.
    ///
    /// The integer is reduced modulo 2^64 and mixed into the state with the
    /// fixed [`DEFAULT_STREAM`] selector. Total over all inputs; the same
    /// integer always yields the same seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::Seed;
    /// use seedgen_core::algorithm::Pcg32;
    ///
    /// let a = Seed::<Pcg32>::from_int(141053960);
    /// let b = Seed::<Pcg32>::from_int(141053960);
    /// assert_eq!(a, b);
    /// ```
    #[inline]
    pub fn from_int(n: i64) -> Self {
        Self::with_stream(n as u64, DEFAULT_STREAM)
    }

    /// Creates a seed on an explicit stream.
    ///
    /// Follows the PCG reference initialisation: the increment is
    /// `(stream << 1) | 1`, the state starts at zero, is advanced once,
    /// receives `initstate`, and is advanced again.
    #[inline]
    pub fn with_stream(initstate: u64, stream: u64) -> Self {
        let increment = (stream << 1) | 1;
        let state = A::advance(0, increment).wrapping_add(initstate);
        Self::from_parts(A::advance(state, increment), increment)
    }

    /// Rebuilds a seed from its two words.
    ///
    /// The increment is forced odd, so an arbitrary pair still yields a
    /// full-period seed. Pairs obtained from [`Seed::state`] and
    /// [`Seed::increment`] round-trip exactly.
    #[inline]
    pub const fn from_parts(state: u64, increment: u64) -> Self {
        Self {
            state,
            increment: increment | 1,
            algorithm: PhantomData,
        }
    }

    /// Returns the state word.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns the (odd) increment word.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Emits one raw word and the successor seed.
    ///
    /// The word is the algorithm's output function applied to the current
    /// state; the successor carries the advanced state and the same
    /// increment.
    #[inline]
    pub fn step(self) -> (u32, Self) {
        let word = A::output(self.state);
        let next = Self {
            state: A::advance(self.state, self.increment),
            ..self
        };
        (word, next)
    }

    /// Derives an independent child seed.
    ///
    /// Four words are stepped from this seed and folded together with
    /// `discriminator` into a fresh `(initstate, stream)` pair, which is
    /// then initialised through [`Seed::with_stream`]. Different
    /// discriminators yield different children; `self` is left untouched.
    ///
    /// Intended for construction time, e.g. one seed per worker. Generator
    /// combinators never split.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::seed_from_int;
    ///
    /// let parent = seed_from_int(7);
    /// let left = parent.split(0);
    /// let right = parent.split(1);
    /// assert_ne!(left, right);
    /// assert_ne!(left.increment(), parent.increment());
    /// ```
    pub fn split(self, discriminator: u64) -> Self {
        let (w0, s1) = self.step();
        let (w1, s2) = s1.step();
        let (w2, s3) = s2.step();
        let (w3, _) = s3.step();

        let initstate =
            ((u64::from(w0) << 32) | u64::from(w1)) ^ discriminator.wrapping_mul(SPLIT_MIX);
        let stream = ((u64::from(w2) << 32) | u64::from(w3)) ^ discriminator;
        Self::with_stream(initstate, stream)
    }

    /// Reinterprets the same two words under another step algorithm.
    ///
    /// Both algorithms share the state update, so the successor chains
    /// visit identical states and differ only in the words they emit.
    #[inline]
    pub fn with_algorithm<B: StepAlgorithm>(self) -> Seed<B> {
        Seed::from_parts(self.state, self.increment)
    }
}

impl<A: StepAlgorithm> Default for Seed<A> {
    /// The seed built from the integer `0`.
    fn default() -> Self {
        Self::from_int(0)
    }
}

impl<A: StepAlgorithm> fmt::Debug for Seed<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("algorithm", &A::NAME)
            .field("state", &format_args!("{:#018x}", self.state))
            .field("increment", &format_args!("{:#018x}", self.increment))
            .finish()
    }
}

/// Serialised form of a [`Seed`]: exactly the two words.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SeedParts {
    state: u64,
    increment: u64,
}

#[cfg(feature = "serde")]
impl<A: StepAlgorithm> From<SeedParts> for Seed<A> {
    fn from(parts: SeedParts) -> Self {
        Seed::from_parts(parts.state, parts.increment)
    }
}

#[cfg(feature = "serde")]
impl<A: StepAlgorithm> From<Seed<A>> for SeedParts {
    fn from(seed: Seed<A>) -> Self {
        SeedParts {
            state: seed.state,
            increment: seed.increment,
        }
    }
}

/// Creates a [`Pcg32`] seed from an integer.
///
/// Shorthand for `Seed::<Pcg32>::from_int(n)`.
#[inline]
pub fn seed_from_int(n: i64) -> Seed {
    Seed::from_int(n)
}

/// Applies one step to a seed, returning the raw word and the successor.
///
/// Shorthand for [`Seed::step`].
#[inline]
pub fn step<A: StepAlgorithm>(seed: Seed<A>) -> (u32, Seed<A>) {
    seed.step()
}
