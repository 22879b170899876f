//! The console consumption loop.

use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::sequence::FibonacciSequence;

/// Run the application against stdout.
pub async fn run(config: &AppConfig) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_with_writer(config, &mut out).await?;
    Ok(())
}

/// Pull terms and print them until the bound is exceeded or `count` terms were
/// printed. Returns the number of terms printed.
pub async fn run_with_writer<W: Write>(config: &AppConfig, out: &mut W) -> Result<u64> {
    if config.count == Some(0) {
        return Ok(0);
    }

    let bound = config.effective_bound();
    let pace = config.pace();
    info!(start = config.start, count = ?config.count, bound = ?bound, "printing fibonacci terms");

    let mut sequence = FibonacciSequence::starting_at(config.start);
    let mut printed = 0u64;

    loop {
        if config.count.is_some_and(|count| printed >= count) {
            break;
        }

        let index = sequence.index();
        let term = sequence.next_term();
        if bound.as_ref().is_some_and(|bound| term > *bound) {
            debug!(index, "term exceeds bound");
            break;
        }

        if config.index {
            writeln!(out, "{index} {term}")?;
        } else {
            writeln!(out, "{term}")?;
        }
        out.flush()?;
        printed += 1;

        if let Some(pace) = pace {
            tokio::time::sleep(pace).await;
        }
    }

    Ok(printed)
}
