//! Check command implementation
//!
//! Runs chi-squared uniformity checks for several integer range widths in
//! parallel. Each range samples from its own child of the root seed, so the
//! results do not depend on thread scheduling.

use std::io::{self, Write};

use rayon::prelude::*;
use seedgen_core::stats::UniformityReport;
use seedgen_core::{AlgorithmKind, Seed, StepAlgorithm};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Widths either side of the 4096 power-of-two boundary.
pub const DEFAULT_WIDTHS: [u64; 3] = [4094, 4095, 4096];

/// Results of one `seedgen check` run
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// Integer the root seed was built from
    pub seed: i64,
    /// Step algorithm
    pub algorithm: AlgorithmKind,
    /// Samples per range
    pub samples: u64,
    /// One report per requested width, in request order
    pub reports: Vec<UniformityReport>,
}

impl CheckSummary {
    /// Number of ranges whose statistic exceeded the critical value
    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| !r.passes()).count()
    }
}

/// Run the check command
pub fn run(config: &CliConfig, widths: &[u64], samples: Option<u64>, json: bool) -> Result<()> {
    let widths = if widths.is_empty() {
        &DEFAULT_WIDTHS[..]
    } else {
        widths
    };
    let samples = samples.unwrap_or(config.samples);
    info!(
        seed = config.seed,
        algorithm = %config.algorithm,
        ranges = widths.len(),
        samples,
        "Running uniformity checks"
    );

    let reports = with_root_seed!(config, seed => check_widths(seed, widths, samples))?;
    let summary = CheckSummary {
        seed: config.seed,
        algorithm: config.algorithm,
        samples,
        reports,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        write_table(&summary, &mut out)?;
    }

    let failed = summary.failures();
    if failed > 0 {
        warn!(failed, "Uniformity check failed");
        return Err(CliError::CheckFailed {
            failed,
            total: summary.reports.len(),
        });
    }

    info!("All ranges passed");
    Ok(())
}

/// Checks `[0, width - 1]` for every width, in parallel.
///
/// Range `i` samples from `root.split(i)`.
pub fn check_widths<A: StepAlgorithm>(
    root: Seed<A>,
    widths: &[u64],
    samples: u64,
) -> Result<Vec<UniformityReport>> {
    widths
        .par_iter()
        .enumerate()
        .map(|(i, &width)| {
            let high = i64::try_from(width)
                .map(|w| w - 1)
                .map_err(|_| CliError::InvalidArgument(format!("range width {} too large", width)))?;
            let report = UniformityReport::run(root.split(i as u64), 0, high, samples)?;
            Ok(report)
        })
        .collect()
}

/// Writes the summary as a fixed-width table.
pub fn write_table<W: Write>(summary: &CheckSummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "seed {}  algorithm {}  samples {}",
        summary.seed, summary.algorithm, summary.samples
    )?;
    writeln!(out, "┌────────┬──────────────┬──────────────┬──────────┬────────┐")?;
    writeln!(out, "│ Width  │ Chi-squared  │ Critical     │ Redraws  │ Result │")?;
    writeln!(out, "├────────┼──────────────┼──────────────┼──────────┼────────┤")?;
    for report in &summary.reports {
        writeln!(
            out,
            "│ {:<6} │ {:>12.2} │ {:>12.2} │ {:>8} │ {:<6} │",
            report.dof + 1,
            report.statistic,
            report.critical,
            report.extra_draws,
            if report.passes() { "pass" } else { "FAIL" }
        )?;
    }
    writeln!(out, "└────────┴──────────────┴──────────────┴──────────┴────────┘")?;
    Ok(())
}
