//! Primitive generators.
//!
//! Fallible constructors validate their parameters eagerly and return
//! `Result`; the generators they build are total.

use rand_distr::{Distribution, Normal};

use super::Generator;
use crate::algorithm::StepAlgorithm;
use crate::error::GenError;
use crate::sampling::{FloatRange, IntRange};
use crate::stream::SeedRng;

/// Fair coin: the lowest bit of one raw word.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{boolean, seed_from_int};
///
/// let seed = seed_from_int(141053960);
/// let (flip, next) = boolean().run(seed);
/// assert!(flip);
/// assert_eq!(next, seed.step().1);
/// ```
pub fn boolean<A: StepAlgorithm>() -> Generator<bool, A> {
    Generator::new(|seed| {
        let (word, seed) = seed.step();
        (word & 1 == 1, seed)
    })
}

/// Uniform integer in `[low, high]`, sampled without bias.
///
/// See [`IntRange`] for the masking and rejection policy.
///
/// # Errors
///
/// Returns [`GenError::InvalidRange`] if `high < low`.
pub fn int<A: StepAlgorithm>(low: i64, high: i64) -> Result<Generator<i64, A>, GenError> {
    let range = IntRange::new(low, high)?;
    Ok(Generator::new(move |seed| range.sample(seed).into_pair()))
}

/// Uniform float in `[low, high)` with 53 bits of precision.
///
/// # Errors
///
/// Returns [`GenError::InvalidRange`] if `high < low` or a bound is NaN or
/// infinite.
pub fn float<A: StepAlgorithm>(low: f64, high: f64) -> Result<Generator<f64, A>, GenError> {
    let range = FloatRange::new(low, high)?;
    Ok(Generator::new(move |seed| range.sample(seed).into_pair()))
}

/// Picks one of the given values with equal probability.
///
/// The first value is separate so the set can never be empty. Consumes the
/// same raw words as `int(0, len - 1)`.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{seed_from_int, uniform};
///
/// let suit = uniform("spades", vec!["hearts", "diamonds", "clubs"]);
/// let (picked, _) = suit.run(seed_from_int(4));
/// assert!(["spades", "hearts", "diamonds", "clubs"].contains(&picked));
/// ```
pub fn uniform<T, A>(first: T, rest: Vec<T>) -> Generator<T, A>
where
    T: Clone + Send + Sync + 'static,
    A: StepAlgorithm,
{
    let mut values = Vec::with_capacity(rest.len() + 1);
    values.push(first);
    values.extend(rest);

    let range = IntRange::indices(values.len());
    Generator::new(move |seed| {
        let sampled = range.sample(seed);
        (values[sampled.value as usize].clone(), sampled.seed)
    })
}

/// Picks a value with probability proportional to its weight.
///
/// Draws one float in `[0, total)` and selects the entry whose cumulative
/// weight interval contains it. Entries with zero weight are never picked.
///
/// # Errors
///
/// Returns [`GenError::InvalidWeights`] if any weight is negative or not
/// finite, or if the weights sum to zero or overflow.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{seed_from_int, weighted};
///
/// let loaded = weighted((0.0, "never"), vec![(3.0, "often"), (1.0, "rarely")]).unwrap();
/// let (picked, _) = loaded.run(seed_from_int(8));
/// assert_ne!(picked, "never");
/// ```
pub fn weighted<T, A>(first: (f64, T), rest: Vec<(f64, T)>) -> Result<Generator<T, A>, GenError>
where
    T: Clone + Send + Sync + 'static,
    A: StepAlgorithm,
{
    let mut cumulative = Vec::with_capacity(rest.len() + 1);
    let mut values = Vec::with_capacity(rest.len() + 1);
    let mut total = 0.0_f64;
    let mut last_positive = 0;

    for (index, (weight, value)) in std::iter::once(first).chain(rest).enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GenError::InvalidWeights(format!(
                "weight {} at index {} must be finite and non-negative",
                weight, index
            )));
        }
        if weight > 0.0 {
            last_positive = index;
        }
        total += weight;
        cumulative.push(total);
        values.push(value);
    }

    if !(total > 0.0 && total.is_finite()) {
        return Err(GenError::InvalidWeights(format!(
            "total weight {} must be positive and finite",
            total
        )));
    }

    let range = FloatRange::new(0.0, total)?;
    Ok(Generator::new(move |seed| {
        let sampled = range.sample(seed);
        let index = cumulative.partition_point(|&c| c <= sampled.value);
        // Rounding can push the draw onto the total; fall back to the last
        // entry that can be picked at all.
        let index = if index < values.len() {
            index
        } else {
            last_positive
        };
        (values[index].clone(), sampled.seed)
    }))
}

/// Normal variates with the given mean and standard deviation.
///
/// Sampled with `rand_distr::Normal` (Ziggurat) driven by a [`SeedRng`]
/// over the input seed, so the result is as deterministic as every other
/// generator. The number of raw words consumed varies per sample.
///
/// # Errors
///
/// Returns [`GenError::InvalidParameter`] if `mean` is not finite or
/// `std_dev` is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use seedgen_core::{normal, seed_from_int};
///
/// let noise = normal(0.0, 1.0).unwrap();
/// let seed = seed_from_int(12);
/// assert_eq!(noise.run(seed), noise.run(seed));
/// ```
pub fn normal<A: StepAlgorithm>(mean: f64, std_dev: f64) -> Result<Generator<f64, A>, GenError> {
    if !mean.is_finite() {
        return Err(GenError::InvalidParameter {
            name: "mean",
            value: format!("{} must be finite", mean),
        });
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(GenError::InvalidParameter {
            name: "std_dev",
            value: format!("{} must be finite and non-negative", std_dev),
        });
    }

    let distribution = Normal::new(mean, std_dev).map_err(|e| GenError::InvalidParameter {
        name: "std_dev",
        value: e.to_string(),
    })?;

    Ok(Generator::new(move |seed| {
        let mut rng = SeedRng::new(seed);
        let value = distribution.sample(&mut rng);
        (value, rng.into_seed())
    }))
}
