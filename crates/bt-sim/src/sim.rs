//! The `Sim` struct and its cycle loop.

use bt_core::{Cycle, SimConfig, SimRng};
use bt_grid::{Census, Grid, average_happiness, evaluate_all, unhappy_count};
use log::debug;

use crate::{RelocationEngine, SimError, SimObserver, SimResult};

// ── CycleReport ───────────────────────────────────────────────────────────────

/// Statistics for one completed cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CycleReport {
    pub cycle: Cycle,

    /// Agents relocated this cycle.  Always 0 for cycle 0.
    pub moves: usize,

    /// Mean happiness at the start of the cycle, before relocation.  `None`
    /// when the grid holds no agents.
    pub average_happiness: Option<f64>,

    /// Agents below the preference threshold at the start of the cycle.
    pub unhappy: usize,

    /// Cell counts after relocation.
    pub census: Census,
}

// ── SimState ──────────────────────────────────────────────────────────────────

/// Lifecycle of a [`Sim`].
///
/// Initialization happens inside [`SimBuilder::build`][crate::SimBuilder::build];
/// a built `Sim` starts in `Running` at cycle 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimState {
    Running,
    Terminated,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// Owns the grid and the RNG exclusively.  Each [`step`][Self::step] runs one
/// cycle to completion:
///
/// 1. **Evaluate** every agent's happiness.
/// 2. **Aggregate** the average happiness and unhappy count.
/// 3. **Relocate** unhappy agents (skipped on cycle 0).
/// 4. **Report** the snapshot and [`CycleReport`] to the observer.
///
/// With a cycle limit `N`, cycles `0..=N` run and the state then becomes
/// [`SimState::Terminated`].  Without one the driver runs until the caller
/// stops stepping or calls [`stop`][Self::stop].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Immutable run configuration.
    pub config: SimConfig,

    pub(crate) grid:       Grid,
    pub(crate) rng:        SimRng,
    pub(crate) relocation: RelocationEngine,
    pub(crate) cycle:      Cycle,
    pub(crate) state:      SimState,
}

impl Sim {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cycle the next [`step`][Self::step] will run.
    #[inline]
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    #[inline]
    pub fn state(&self) -> SimState {
        self.state
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state == SimState::Terminated
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the configured cycle limit.
    ///
    /// Without a cycle limit this never returns `Ok`; drive the simulation
    /// with [`step`][Self::step] instead if it must be interruptible.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step(observer)?.is_some() {}
        Ok(())
    }

    /// Run at most `n` cycles, stopping early if the simulation terminates.
    ///
    /// Returns the number of cycles actually run.
    pub fn run_cycles<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut ran = 0;
        while ran < n && self.step(observer)?.is_some() {
            ran += 1;
        }
        Ok(ran)
    }

    /// Run one cycle.  Returns `None` once the simulation has terminated.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<CycleReport>> {
        if self.is_terminated() {
            return Ok(None);
        }

        let cycle = self.cycle;
        observer.on_cycle_start(cycle);

        // ── Evaluate and aggregate against the start-of-cycle layout ──────
        evaluate_all(&mut self.grid);
        let average_happiness = average_happiness(&self.grid);
        let unhappy = unhappy_count(&self.grid, self.config.preference);

        // ── Relocate ──────────────────────────────────────────────────────
        //
        // Cycle 0 reports the raw initial placement.
        let moves = if cycle.is_initial() {
            0
        } else {
            self.relocation.run(&mut self.grid, &mut self.rng).len()
        };

        let census = self.grid.census();
        if !census.matches(&self.config.population) {
            return Err(SimError::PopulationDrift {
                cycle:    cycle.0,
                expected: self.config.population,
                found:    census,
            });
        }

        let report = CycleReport { cycle, moves, average_happiness, unhappy, census };
        debug!(
            "cycle {cycle}: {moves} moves, {unhappy} unhappy, average happiness {}",
            average_happiness.map_or_else(|| "n/a".to_owned(), |h| format!("{h:.3}"))
        );

        observer.on_snapshot(cycle, &self.grid);
        observer.on_cycle_end(&report);

        self.cycle = cycle.next();
        if self.config.cycle_limit.is_some_and(|limit| self.cycle.0 > limit) {
            self.terminate(cycle, observer);
        }
        Ok(Some(report))
    }

    /// Stop an unbounded (or unfinished) run between cycles.
    ///
    /// Idempotent; the observer's `on_sim_end` fires only on the first call.
    pub fn stop<O: SimObserver>(&mut self, observer: &mut O) {
        if self.is_terminated() {
            return;
        }
        let last = Cycle(self.cycle.0.saturating_sub(1));
        self.terminate(last, observer);
    }

    fn terminate<O: SimObserver>(&mut self, last: Cycle, observer: &mut O) {
        self.state = SimState::Terminated;
        debug!("simulation terminated after cycle {last}");
        observer.on_sim_end(last);
    }
}
