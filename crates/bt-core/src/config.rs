//! Simulation configuration.
//!
//! # Population derivation
//!
//! Applications usually describe a run in fractions (vacancy share, newline
//! share of the occupied cells).  [`SimConfig::from_fractions`] turns these
//! into exact head counts:
//!
//! ```text
//! vacancies = floor(vacancy · dim²)
//! newline   = floor((dim² − vacancies) · newline_share)
//! endline   = floor((dim² − vacancies) · (1 − newline_share))
//! vacancies += dim² − vacancies − newline − endline      // rounding remainder
//! ```
//!
//! so that `endline + newline + vacancies == dim²` always holds.  Products
//! within [`SNAP_EPSILON`] of an integer count as that integer before the
//! floor, so `180 · 0.7` gives 126 even though `0.7` has no exact `f64`.

use crate::{CoreError, CoreResult, Style};

/// Smallest accepted grid side length.
pub const MIN_DIM: usize = 5;
/// Largest accepted grid side length.
pub const MAX_DIM: usize = 39;
/// Smallest accepted vacancy / population / preference fraction.
pub const MIN_FRACTION: f64 = 0.01;
/// Largest accepted vacancy / population / preference fraction.
pub const MAX_FRACTION: f64 = 0.99;
/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 41;
/// Distance from an integer below which a scaled head count snaps to it.
pub const SNAP_EPSILON: f64 = 1e-9;

/// `floor(x)` for a non-negative `x`, treating values within
/// [`SNAP_EPSILON`] of an integer as that integer.
fn snapped_floor(x: f64) -> usize {
    let nearest = x.round();
    if (x - nearest).abs() < SNAP_EPSILON {
        nearest as usize
    } else {
        x.floor() as usize
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Head counts for one run.  Fixed for the lifetime of the simulation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Population {
    pub endline:   usize,
    pub newline:   usize,
    pub vacancies: usize,
}

impl Population {
    /// Explicit head counts on a `dim × dim` grid; every remaining cell is a
    /// vacancy.
    pub fn new(dim: usize, endline: usize, newline: usize) -> CoreResult<Self> {
        let total = dim * dim;
        match total.checked_sub(endline + newline) {
            Some(vacancies) => Ok(Self { endline, newline, vacancies }),
            None => Err(CoreError::PopulationMismatch {
                dim,
                endline,
                newline,
                vacancies: 0,
            }),
        }
    }

    /// Derive head counts from fractions (see the module docs).
    ///
    /// Inputs are not range-checked here; [`SimConfig::from_fractions`] does
    /// that first.
    pub fn from_fractions(dim: usize, vacancy: f64, newline_share: f64) -> Self {
        let total = dim * dim;
        let vacancies = snapped_floor(vacancy * total as f64).min(total);
        let occupied = total - vacancies;
        let newline = snapped_floor(occupied as f64 * newline_share).min(occupied);
        let endline =
            snapped_floor(occupied as f64 * (1.0 - newline_share)).min(occupied - newline);
        Self {
            endline,
            newline,
            vacancies: total - endline - newline,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.endline + self.newline + self.vacancies
    }

    #[inline]
    pub fn occupied(&self) -> usize {
        self.endline + self.newline
    }

    /// Number of cells holding `style`.
    pub fn count(&self, style: Style) -> usize {
        match style {
            Style::Endline => self.endline,
            Style::Newline => self.newline,
            Style::Empty   => self.vacancies,
        }
    }
}

// ── Fractions ─────────────────────────────────────────────────────────────────

/// The fractions a population was derived from, as the caller gave them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fractions {
    pub vacancy:       f64,
    pub newline_share: f64,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Immutable configuration handed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid side length, in `[MIN_DIM, MAX_DIM]`.
    pub dim: usize,

    /// An agent is unhappy iff its happiness is strictly below this value.
    pub preference: f64,

    /// Head counts; must fill the grid exactly.
    pub population: Population,

    /// Last cycle to run (inclusive).  `None` runs until interrupted.
    pub cycle_limit: Option<u64>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Requested fractions, when the population came from
    /// [`from_fractions`][Self::from_fractions].
    pub fractions: Option<Fractions>,
}

impl SimConfig {
    /// Validate fractional inputs and derive the population.
    ///
    /// `preference`, `vacancy` and `newline_share` must each lie in
    /// `[MIN_FRACTION, MAX_FRACTION]`.  The result runs unbounded with
    /// [`DEFAULT_SEED`]; chain [`with_cycle_limit`][Self::with_cycle_limit]
    /// and [`with_seed`][Self::with_seed] to change that.
    pub fn from_fractions(
        dim:           usize,
        preference:    f64,
        vacancy:       f64,
        newline_share: f64,
    ) -> CoreResult<Self> {
        check_dim(dim)?;
        check_fraction("preference strength", preference)?;
        check_fraction("vacancy fraction", vacancy)?;
        check_fraction("newline fraction", newline_share)?;

        Ok(Self {
            dim,
            preference,
            population: Population::from_fractions(dim, vacancy, newline_share),
            cycle_limit: None,
            seed: DEFAULT_SEED,
            fractions: Some(Fractions { vacancy, newline_share }),
        })
    }

    pub fn with_cycle_limit(mut self, cycle_limit: Option<u64>) -> Self {
        self.cycle_limit = cycle_limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> CoreResult<()> {
        check_dim(self.dim)?;
        if !(0.0..=1.0).contains(&self.preference) {
            return Err(CoreError::PreferenceOutOfRange(self.preference));
        }
        if self.population.total() != self.cell_count() {
            return Err(CoreError::PopulationMismatch {
                dim:       self.dim,
                endline:   self.population.endline,
                newline:   self.population.newline,
                vacancies: self.population.vacancies,
            });
        }
        if self.cycle_limit == Some(0) {
            return Err(CoreError::InvalidCycleLimit(0));
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.dim * self.dim
    }

    /// Share of the grid left vacant: the requested fraction if there is
    /// one, otherwise the actual share.
    pub fn vacancy_fraction(&self) -> f64 {
        match self.fractions {
            Some(f) => f.vacancy,
            None => self.population.vacancies as f64 / self.cell_count() as f64,
        }
    }

    /// Share of the agents with newline style: the requested fraction if
    /// there is one, otherwise the actual share (0 with no agents).
    pub fn newline_fraction(&self) -> f64 {
        match (self.fractions, self.population.occupied()) {
            (Some(f), _) => f.newline_share,
            (None, 0) => 0.0,
            (None, n) => self.population.newline as f64 / n as f64,
        }
    }
}

fn check_dim(dim: usize) -> CoreResult<()> {
    if (MIN_DIM..=MAX_DIM).contains(&dim) {
        Ok(())
    } else {
        Err(CoreError::InvalidDimension(dim))
    }
}

fn check_fraction(name: &'static str, value: f64) -> CoreResult<()> {
    if (MIN_FRACTION..=MAX_FRACTION).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::FractionOutOfRange { name, value })
    }
}
