//! Command-line flags.
//!
//! Every flag is optional so that a settings file can fill the gaps; the
//! built-in defaults live in [`crate::settings`].

use std::path::PathBuf;

use bt_core::{MAX_DIM, MIN_DIM};
use clap::Parser;

/// Smallest accepted percentage flag.
pub const MIN_PERCENT: f64 = 1.0;
/// Largest accepted percentage flag.
pub const MAX_PERCENT: f64 = 99.0;

#[derive(Parser, Debug, Default)]
#[command(
    name = "brace-topia",
    version,
    about = "Watch endline and newline brace styles sort themselves into neighborhoods."
)]
pub struct Args {
    /// Microseconds to pause between cycles when running until Ctrl-C [default: 900000]
    #[arg(short = 't', long, value_name = "MICROS", value_parser = clap::value_parser!(u64).range(1..))]
    pub delay: Option<u64>,

    /// Print cycles 0 through N without pausing, then exit [default: run until Ctrl-C]
    #[arg(short = 'c', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Grid side length, 5 to 39 [default: 15]
    #[arg(short = 'd', long, value_name = "DIM", value_parser = parse_dim)]
    pub dim: Option<usize>,

    /// Percentage of like neighbors an agent needs to stay put [default: 50]
    #[arg(short = 's', long, value_name = "PCT", value_parser = parse_percent)]
    pub strength: Option<f64>,

    /// Percentage of the grid left vacant [default: 20]
    #[arg(short = 'v', long, value_name = "PCT", value_parser = parse_percent)]
    pub vacancy: Option<f64>,

    /// Percentage of the agents that are newline style [default: 60]
    #[arg(short = 'n', long, value_name = "PCT", value_parser = parse_percent)]
    pub newline: Option<f64>,

    /// Seed for placement and vacancy shuffling [default: 41]
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// TOML settings file; explicit flags take precedence over its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

pub fn parse_dim(s: &str) -> Result<usize, String> {
    let dim: usize = s.parse().map_err(|e| format!("`{s}` is not a dimension: {e}"))?;
    if (MIN_DIM..=MAX_DIM).contains(&dim) {
        Ok(dim)
    } else {
        Err(format!("dimension ({dim}) must be a value in [{MIN_DIM}...{MAX_DIM}]"))
    }
}

pub fn parse_percent(s: &str) -> Result<f64, String> {
    let pct: f64 = s.parse().map_err(|e| format!("`{s}` is not a percentage: {e}"))?;
    check_percent(pct)
}

/// Accept `pct` if it lies in `[MIN_PERCENT, MAX_PERCENT]`.  NaN is rejected.
pub fn check_percent(pct: f64) -> Result<f64, String> {
    if (MIN_PERCENT..=MAX_PERCENT).contains(&pct) {
        Ok(pct)
    } else {
        Err(format!("percentage ({pct}) must be a value in [{MIN_PERCENT}...{MAX_PERCENT}]"))
    }
}
