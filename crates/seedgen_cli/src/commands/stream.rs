//! Stream command implementation
//!
//! Writes the raw-word sequence of the configured seed to stdout, endless
//! unless a count is given. A closed pipe (`seedgen stream | head`) ends
//! the stream cleanly.

use std::io::{self, BufWriter, Write};

use seedgen_core::{Seed, StepAlgorithm};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the stream command
pub fn run(config: &CliConfig, count: Option<u64>, format: Option<OutputFormat>) -> Result<()> {
    let format = format.unwrap_or(config.format);
    info!(
        seed = config.seed,
        algorithm = %config.algorithm,
        format = %format,
        count = ?count,
        "Starting raw stream"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = with_root_seed!(config, seed => write_words(seed, count, format, &mut out));

    match written.and_then(|n| out.flush().map(|_| n)) {
        Ok(n) => {
            info!(words = n, "Stream complete");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed, stopping stream");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes raw words stepped from `seed` to `out`.
///
/// Returns the number of words written. With `count == None` this only
/// returns on a write error.
pub fn write_words<A, W>(
    seed: Seed<A>,
    count: Option<u64>,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<u64>
where
    A: StepAlgorithm,
    W: Write,
{
    let mut written = 0_u64;
    for word in seed.raw_words() {
        if count.is_some_and(|limit| written >= limit) {
            break;
        }
        write_word(word, format, out)?;
        written += 1;
    }
    Ok(written)
}

fn write_word<W: Write>(word: u32, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Binary => out.write_all(&word.to_le_bytes()),
        OutputFormat::Hex => writeln!(out, "{:08x}", word),
        OutputFormat::Decimal => writeln!(out, "{}", word),
    }
}
