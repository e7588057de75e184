//! Generator combinator algebra.
//!
//! A [`Generator<T, A>`] describes how to obtain a `T` and a successor seed
//! from a seed. It is a pure mapping: no cursor, no interior state. Running
//! the same generator on the same seed always returns the same pair.
//!
//! ## Seed Threading
//!
//! Every combinator threads the seed strictly left to right. `map2(g1, g2, f)`
//! runs `g1` on the input seed, feeds its successor to `g2`, and returns
//! `g2`'s successor. `list(n)` steps its element generator `n` times in
//! sequence. No combinator splits seeds, so a whole composition stays a
//! single deterministic function of the initial seed and two implementations
//! sharing a step function produce identical sequences.
//!
//! ## Usage Example
//!
//! ```rust
//! use seedgen_core::{boolean, int, map2, seed_from_int};
//!
//! let die = int(1, 6).unwrap();
//! let roll_pair = map2(die.clone(), die, |a, b| a + b);
//! let tagged = map2(roll_pair, boolean(), |total, flag| (total, flag));
//!
//! let seed = seed_from_int(2024);
//! let (value, next) = tagged.run(seed);
//! assert_eq!(tagged.run(seed), (value, next));
//! assert!((2..=12).contains(&value.0));
//! ```

mod combinators;
mod primitives;

pub use combinators::{map2, map3, map4, map5, pair};
pub use primitives::{boolean, float, int, normal, uniform, weighted};

use std::fmt;
use std::sync::Arc;

use crate::algorithm::{Pcg32, StepAlgorithm};
use crate::seed::Seed;
use crate::stream::Samples;


type StepFn<T, A> = dyn Fn(Seed<A>) -> (T, Seed<A>) + Send + Sync;

/// Pure description of `Seed -> (T, Seed)`.
///
/// Cheap to clone (the closure sits behind an [`Arc`]) and `Send + Sync`,
/// so a generator can be shared freely across threads; each caller
/// supplies its own seed.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{seed_from_int, Generator};
///
/// // A generator emitting raw words.
/// let word = Generator::new(|seed: seedgen_core::Seed| seed.step());
/// let (value, next) = word.run(seed_from_int(1));
/// assert_eq!((value, next), seed_from_int(1).step());
/// ```
pub struct Generator<T, A = Pcg32> {
    step: Arc<StepFn<T, A>>,
}

impl<T, A> Clone for Generator<T, A> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
        }
    }
}

impl<T, A: StepAlgorithm> fmt::Debug for Generator<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("output", &std::any::type_name::<T>())
            .field("algorithm", &A::NAME)
            .finish_non_exhaustive()
    }
}

impl<T: 'static, A: StepAlgorithm> Generator<T, A> {
    /// Wraps a step closure as a generator.
    ///
    /// The closure must be pure: its result may depend only on the seed it
    /// is given.
    pub fn new<F>(step: F) -> Self
    where
        F: Fn(Seed<A>) -> (T, Seed<A>) + Send + Sync + 'static,
    {
        Self {
            step: Arc::new(step),
        }
    }

    /// Generator that yields `value` and consumes no entropy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::{seed_from_int, Generator};
    ///
    /// let seed = seed_from_int(3);
    /// let answer = Generator::constant(42);
    /// assert_eq!(answer.run(seed), (42, seed));
    /// ```
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move |seed| (value.clone(), seed))
    }

    /// Runs the generator on `seed`, returning the value and the successor.
    #[inline]
    pub fn run(&self, seed: Seed<A>) -> (T, Seed<A>) {
        (self.step)(seed)
    }

    /// Returns a lazy, infinite iterator of values starting at `seed`.
    ///
    /// Restartable: the same seed replays the same values.
    pub fn samples(&self, seed: Seed<A>) -> Samples<T, A> {
        Samples::new(self.clone(), seed)
    }

    /// Applies `f` to each produced value; the successor seed passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::{int, seed_from_int};
    ///
    /// let seed = seed_from_int(5);
    /// let die = int(1, 6).unwrap();
    /// let doubled = die.clone().map(|v| v * 2);
    ///
    /// let (v, s) = die.run(seed);
    /// assert_eq!(doubled.run(seed), (v * 2, s));
    /// ```
    pub fn map<B, F>(self, f: F) -> Generator<B, A>
    where
        B: 'static,
        F: Fn(T) -> B + Send + Sync + 'static,
    {
        Generator::new(move |seed| {
            let (value, seed) = self.run(seed);
            (f(value), seed)
        })
    }

    /// Runs this generator, then the generator `f` builds from its value,
    /// on the successor seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::{int, seed_from_int};
    ///
    /// // Pick a length, then a list of that many dice.
    /// let dice = int(0, 5)
    ///     .unwrap()
    ///     .and_then(|n| int(1, 6).unwrap().list(n as usize));
    ///
    /// let (rolls, _) = dice.run(seed_from_int(9));
    /// assert!(rolls.len() <= 5);
    /// ```
    pub fn and_then<B, F>(self, f: F) -> Generator<B, A>
    where
        B: 'static,
        F: Fn(T) -> Generator<B, A> + Send + Sync + 'static,
    {
        Generator::new(move |seed| {
            let (value, seed) = self.run(seed);
            f(value).run(seed)
        })
    }

    /// Runs this generator exactly `n` times, threading the seed through
    /// each run in order.
    ///
    /// `n == 0` yields an empty list and returns the seed unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedgen_core::{boolean, seed_from_int};
    ///
    /// let seed = seed_from_int(7);
    /// let (flips, _) = boolean().list(5).run(seed);
    /// assert_eq!(flips.len(), 5);
    ///
    /// assert_eq!(boolean().list(0).run(seed), (vec![], seed));
    /// ```
    pub fn list(self, n: usize) -> Generator<Vec<T>, A> {
        Generator::new(move |seed| {
            let mut values = Vec::with_capacity(n);
            let mut seed = seed;
            for _ in 0..n {
                let (value, next) = self.run(seed);
                values.push(value);
                seed = next;
            }
            (values, seed)
        })
    }
}
