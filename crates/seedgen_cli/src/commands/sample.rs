//! Sample command implementation
//!
//! Prints bounded booleans, integers or floats, one per line, threading the
//! configured seed through every draw.

use std::io::{self, BufWriter, Write};

use clap::ValueEnum;
use seedgen_core::{boolean, float, int, Generator, Seed, StepAlgorithm};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Kind of value to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Fair coin flips
    Bool,
    /// Integers in `[low, high]`, default `[0, 100]`
    Int,
    /// Floats in `[low, high)`, default `[0, 1)`
    Float,
}

/// Run the sample command
pub fn run(
    config: &CliConfig,
    kind: SampleKind,
    low: Option<&str>,
    high: Option<&str>,
    count: u64,
) -> Result<()> {
    info!(
        seed = config.seed,
        algorithm = %config.algorithm,
        kind = ?kind,
        count,
        "Sampling values"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    with_root_seed!(config, seed => {
        write_samples(seed, kind, low, high, count, &mut out).map(|_| ())
    })?;
    out.flush()?;
    Ok(())
}

/// Writes `count` sampled values, one per line, and returns the successor
/// seed.
pub fn write_samples<A, W>(
    seed: Seed<A>,
    kind: SampleKind,
    low: Option<&str>,
    high: Option<&str>,
    count: u64,
    out: &mut W,
) -> Result<Seed<A>>
where
    A: StepAlgorithm,
    W: Write,
{
    match kind {
        SampleKind::Bool => {
            if low.is_some() || high.is_some() {
                return Err(CliError::InvalidArgument(
                    "--low/--high do not apply to bool samples".to_string(),
                ));
            }
            emit(&boolean(), seed, count, out)
        }
        SampleKind::Int => {
            let low = parse_bound(low, "low", 0_i64)?;
            let high = parse_bound(high, "high", 100_i64)?;
            emit(&int(low, high)?, seed, count, out)
        }
        SampleKind::Float => {
            let low = parse_bound(low, "low", 0.0_f64)?;
            let high = parse_bound(high, "high", 1.0_f64)?;
            emit(&float(low, high)?, seed, count, out)
        }
    }
}

fn emit<T, A, W>(generator: &Generator<T, A>, seed: Seed<A>, count: u64, out: &mut W) -> Result<Seed<A>>
where
    T: std::fmt::Display + 'static,
    A: StepAlgorithm,
    W: Write,
{
    let mut seed = seed;
    for _ in 0..count {
        let (value, next) = generator.run(seed);
        writeln!(out, "{}", value)?;
        seed = next;
    }
    Ok(seed)
}

fn parse_bound<T: std::str::FromStr>(raw: Option<&str>, name: &str, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidArgument(format!("invalid --{} value: {}", name, s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use seedgen_core::seed_from_int;

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_bool_scenario_first_line() {
        let mut buf = Vec::new();
        write_samples(seed_from_int(141_053_960), SampleKind::Bool, None, None, 1, &mut buf)
            .unwrap();
        assert_eq!(lines(buf), vec!["true"]);
    }

    #[test]
    fn test_int_bounds_and_successor() {
        let seed = seed_from_int(3);
        let mut buf = Vec::new();
        let next =
            write_samples(seed, SampleKind::Int, Some("-5"), Some("5"), 200, &mut buf).unwrap();

        let values: Vec<i64> = lines(buf).iter().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));

        let (expected, expected_next) = int(-5, 5).unwrap().list(200).run(seed);
        assert_eq!(values, expected);
        assert_eq!(next, expected_next);
    }

    #[test]
    fn test_float_defaults_to_unit_interval() {
        let mut buf = Vec::new();
        write_samples(seed_from_int(4), SampleKind::Float, None, None, 100, &mut buf).unwrap();

        let values: Vec<f64> = lines(buf).iter().map(|l| l.parse().unwrap()).collect();
        assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_float_lines_match_generator() {
        let seed = seed_from_int(6);
        let mut buf = Vec::new();
        write_samples(seed, SampleKind::Float, Some("-2.5"), Some("4"), 50, &mut buf).unwrap();

        let printed: Vec<f64> = lines(buf).iter().map(|l| l.parse().unwrap()).collect();
        let (expected, _) = float(-2.5, 4.0).unwrap().list(50).run(seed);
        assert_eq!(printed.len(), expected.len());
        for (p, e) in printed.iter().zip(&expected) {
            assert_relative_eq!(*p, *e, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_float_unit_mean() {
        let mut buf = Vec::new();
        write_samples(seed_from_int(7), SampleKind::Float, None, None, 10_000, &mut buf).unwrap();

        let values: Vec<f64> = lines(buf).iter().map(|l| l.parse().unwrap()).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        assert_relative_eq!(mean, 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_float_full_range_bounds() {
        let mut buf = Vec::new();
        write_samples(seed_from_int(8), SampleKind::Float, Some("-1e308"), Some("1e308"), 200, &mut buf)
            .unwrap();

        let values: Vec<f64> = lines(buf).iter().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| v.is_finite() && (-1e308..=1e308).contains(v)));
    }

    #[test]
    fn test_invalid_bounds_are_errors() {
        let mut buf = Vec::new();
        let seed = seed_from_int(5);

        assert!(matches!(
            write_samples(seed, SampleKind::Int, Some("10"), Some("5"), 1, &mut buf),
            Err(CliError::Generator(_))
        ));
        assert!(matches!(
            write_samples(seed, SampleKind::Int, Some("ten"), None, 1, &mut buf),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            write_samples(seed, SampleKind::Bool, Some("0"), None, 1, &mut buf),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(buf.is_empty());
    }
}
