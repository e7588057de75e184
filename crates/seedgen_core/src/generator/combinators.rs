//! Multi-argument combinators: `map2` through `map5` and `pair`.
//!
//! Arguments are run in the order they are written. Swapping two arguments
//! changes which generator sees which part of the seed's stream.

use super::Generator;
use crate::algorithm::StepAlgorithm;

/// Combines two generators, threading the seed from `first` into `second`.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{float, int, map2, seed_from_int};
///
/// let point = map2(int(0, 9).unwrap(), float(0.0, 1.0).unwrap(), |x, y| (x, y));
/// let ((x, y), _) = point.run(seed_from_int(11));
/// assert!((0..=9).contains(&x));
/// assert!((0.0..1.0).contains(&y));
/// ```
pub fn map2<T1, T2, R, A, F>(first: Generator<T1, A>, second: Generator<T2, A>, f: F) -> Generator<R, A>
where
    T1: 'static,
    T2: 'static,
    R: 'static,
    A: StepAlgorithm,
    F: Fn(T1, T2) -> R + Send + Sync + 'static,
{
    Generator::new(move |seed| {
        let (a, seed) = first.run(seed);
        let (b, seed) = second.run(seed);
        (f(a, b), seed)
    })
}

/// Combines three generators, left to right.
pub fn map3<T1, T2, T3, R, A, F>(
    first: Generator<T1, A>,
    second: Generator<T2, A>,
    third: Generator<T3, A>,
    f: F,
) -> Generator<R, A>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    R: 'static,
    A: StepAlgorithm,
    F: Fn(T1, T2, T3) -> R + Send + Sync + 'static,
{
    Generator::new(move |seed| {
        let (a, seed) = first.run(seed);
        let (b, seed) = second.run(seed);
        let (c, seed) = third.run(seed);
        (f(a, b, c), seed)
    })
}

/// Combines four generators, left to right.
pub fn map4<T1, T2, T3, T4, R, A, F>(
    first: Generator<T1, A>,
    second: Generator<T2, A>,
    third: Generator<T3, A>,
    fourth: Generator<T4, A>,
    f: F,
) -> Generator<R, A>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    R: 'static,
    A: StepAlgorithm,
    F: Fn(T1, T2, T3, T4) -> R + Send + Sync + 'static,
{
    Generator::new(move |seed| {
        let (a, seed) = first.run(seed);
        let (b, seed) = second.run(seed);
        let (c, seed) = third.run(seed);
        let (d, seed) = fourth.run(seed);
        (f(a, b, c, d), seed)
    })
}

/// Combines five generators, left to right.
pub fn map5<T1, T2, T3, T4, T5, R, A, F>(
    first: Generator<T1, A>,
    second: Generator<T2, A>,
    third: Generator<T3, A>,
    fourth: Generator<T4, A>,
    fifth: Generator<T5, A>,
    f: F,
) -> Generator<R, A>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    T5: 'static,
    R: 'static,
    A: StepAlgorithm,
    F: Fn(T1, T2, T3, T4, T5) -> R + Send + Sync + 'static,
{
    Generator::new(move |seed| {
        let (a, seed) = first.run(seed);
        let (b, seed) = second.run(seed);
        let (c, seed) = third.run(seed);
        let (d, seed) = fourth.run(seed);
        let (e, seed) = fifth.run(seed);
        (f(a, b, c, d, e), seed)
    })
}

/// Pairs the values of two generators.
#[inline]
pub fn pair<T1, T2, A>(first: Generator<T1, A>, second: Generator<T2, A>) -> Generator<(T1, T2), A>
where
    T1: 'static,
    T2: 'static,
    A: StepAlgorithm,
{
    map2(first, second, |a, b| (a, b))
}
