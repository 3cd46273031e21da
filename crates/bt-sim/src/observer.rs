//! Simulation observer trait, the boundary to the presentation layer.

use bt_core::Cycle;
use bt_grid::Grid;

use crate::CycleReport;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// cycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: move counter
///
/// ```rust
/// use bt_sim::{CycleReport, SimObserver};
///
/// struct MoveCounter { total: usize }
///
/// impl SimObserver for MoveCounter {
///     fn on_cycle_end(&mut self, report: &CycleReport) {
///         self.total += report.moves;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each cycle, before any processing.
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called once per cycle after relocation with read-only access to the
    /// grid, before [`on_cycle_end`][Self::on_cycle_end].
    fn on_snapshot(&mut self, _cycle: Cycle, _grid: &Grid) {}

    /// Called at the end of each cycle with that cycle's statistics.
    fn on_cycle_end(&mut self, _report: &CycleReport) {}

    /// Called once when the simulation enters the terminated state.
    ///
    /// `last_cycle` is the last cycle that was run.
    fn on_sim_end(&mut self, _last_cycle: Cycle) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
