//! Command-line flags and their environment fallbacks.

use clap::Parser;
use num_bigint::BigUint;
use std::time::Duration;

/// Bound applied when neither `--bound` nor `--count` is given.
pub const DEFAULT_BOUND: u32 = 100;

/// Largest accepted `--start`. F(10_000_000) has about 7 million bits, which the
/// matrix jump still reaches in seconds.
pub const MAX_START: u64 = 10_000_000;

/// Print Fibonacci numbers until a bound or a count is reached.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Stop once a term exceeds this value (the term is not printed).
    #[arg(short, long, env = "FIBSEQ_BOUND")]
    pub bound: Option<BigUint>,

    /// Stop after this many terms.
    #[arg(short, long, env = "FIBSEQ_COUNT")]
    pub count: Option<u64>,

    /// Index of the first term to print.
    #[arg(
        short,
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u64).range(..=MAX_START)
    )]
    pub start: u64,

    /// Pause between terms, in milliseconds.
    #[arg(long, default_value = "0", env = "FIBSEQ_PACE_MS")]
    pub pace_ms: u64,

    /// Print `index term` pairs.
    #[arg(short, long)]
    pub index: bool,
}

impl AppConfig {
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The bound to enforce, falling back to [`DEFAULT_BOUND`] when no count
    /// limits the output either.
    pub fn effective_bound(&self) -> Option<BigUint> {
        match (&self.bound, self.count) {
            (Some(bound), _) => Some(bound.clone()),
            (None, None) => Some(BigUint::from(DEFAULT_BOUND)),
            (None, Some(_)) => None,
        }
    }

    pub fn pace(&self) -> Option<Duration> {
        (self.pace_ms > 0).then(|| Duration::from_millis(self.pace_ms))
    }
}
