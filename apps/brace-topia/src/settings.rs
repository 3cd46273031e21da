//! Run settings: built-in defaults, an optional TOML file, and flag overrides.
//!
//! ```toml
//! # brace-topia.toml
//! dim      = 25
//! strength = 65
//! vacancy  = 15
//! newline  = 50
//! cycles   = 40
//! seed     = 7
//! ```
//!
//! Percentages use the same `1` to `99` scale as the flags and may carry a
//! fraction (`strength = 33.5`).

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use bt_core::{DEFAULT_SEED, SimConfig};
use serde::Deserialize;

use crate::cli::{Args, check_percent};

pub const DEFAULT_DELAY_MICROS: u64 = 900_000;
pub const DEFAULT_DIM:          usize = 15;
pub const DEFAULT_STRENGTH:     f64 = 50.0;
pub const DEFAULT_VACANCY:      f64 = 20.0;
pub const DEFAULT_NEWLINE:      f64 = 60.0;

/// Partially specified run settings.  Absent fields fall back to the
/// built-in defaults in [`RunPlan::resolve`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub delay:    Option<u64>,
    pub cycles:   Option<u64>,
    pub dim:      Option<usize>,
    pub strength: Option<f64>,
    pub vacancy:  Option<f64>,
    pub newline:  Option<f64>,
    pub seed:     Option<u64>,
}

impl Settings {
    /// Read a TOML settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))
    }

    /// Overlay the flags given on the command line.
    pub fn merge(self, args: &Args) -> Self {
        Self {
            delay:    args.delay.or(self.delay),
            cycles:   args.cycles.or(self.cycles),
            dim:      args.dim.or(self.dim),
            strength: args.strength.or(self.strength),
            vacancy:  args.vacancy.or(self.vacancy),
            newline:  args.newline.or(self.newline),
            seed:     args.seed.or(self.seed),
        }
    }
}

/// Fully resolved inputs for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunPlan {
    pub config: SimConfig,
    /// Pause between cycles; only used when running until interrupted.
    pub delay:  Duration,
}

impl RunPlan {
    pub fn resolve(settings: &Settings) -> Result<Self> {
        let delay = settings.delay.unwrap_or(DEFAULT_DELAY_MICROS);
        ensure!(delay >= 1, "delay ({delay}) must be at least 1 microsecond");
        ensure!(settings.cycles != Some(0), "cycle count (0) must be at least 1");

        let config = SimConfig::from_fractions(
            settings.dim.unwrap_or(DEFAULT_DIM),
            fraction("preference strength", settings.strength.unwrap_or(DEFAULT_STRENGTH))?,
            fraction("vacancy", settings.vacancy.unwrap_or(DEFAULT_VACANCY))?,
            fraction("newline", settings.newline.unwrap_or(DEFAULT_NEWLINE))?,
        )?
        .with_cycle_limit(settings.cycles)
        .with_seed(settings.seed.unwrap_or(DEFAULT_SEED));

        Ok(Self { config, delay: Duration::from_micros(delay) })
    }

    /// `true` when a cycle limit was given.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.config.cycle_limit.is_some()
    }
}

fn fraction(name: &str, pct: f64) -> Result<f64> {
    let pct = check_percent(pct).map_err(|e| anyhow!("{name} {e}"))?;
    Ok(pct / 100.0)
}
