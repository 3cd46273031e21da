//! `TextRenderer<W>` bridges `SimObserver` to a text stream.

use std::io::Write;

use bt_core::{Cycle, SimConfig};
use bt_grid::Grid;
use bt_sim::{CycleReport, SimObserver};
use log::warn;

use crate::{OutputError, OutputResult, ansi};

/// How successive cycles share the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Append each cycle below the previous one.
    Scroll,
    /// Redraw in place and show a quit hint.
    Frame,
}

/// Render an average happiness with two decimals, or `n/a` when undefined.
pub fn format_happiness(average: Option<f64>) -> String {
    match average {
        Some(h) => format!("{h:.2}"),
        None    => "n/a".to_owned(),
    }
}

/// A [`SimObserver`] that prints the grid and cycle statistics as text.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check for them with
/// [`take_error`][Self::take_error].
pub struct TextRenderer<W: Write> {
    out:        W,
    mode:       RenderMode,
    parameters: String,
    last_error: Option<OutputError>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, config: &SimConfig, mode: RenderMode) -> Self {
        let parameters = format!(
            "Dimensions: {}, Preference Str: {:.2}, Vacancy Percentage: {:.2}, Newline Percentage: {:.2}",
            config.dim,
            config.preference,
            config.vacancy_fraction(),
            config.newline_fraction(),
        );
        Self { out, mode, parameters, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_grid(&mut self, grid: &Grid) -> OutputResult<()> {
        for row in grid.rows() {
            let line: String = row.iter().map(|c| c.style.glyph()).collect();
            writeln!(self.out, "{line} ")?;
        }
        Ok(())
    }

    fn write_report(&mut self, report: &CycleReport) -> OutputResult<()> {
        writeln!(self.out, "Cycle: {}", report.cycle)?;
        writeln!(self.out, "Number of agent moves: {}", report.moves)?;
        writeln!(
            self.out,
            "Average happiness: {}",
            format_happiness(report.average_happiness)
        )?;
        writeln!(self.out, "{}", self.parameters)?;
        writeln!(self.out)?;
        if self.mode == RenderMode::Frame {
            writeln!(self.out, "Use Control-C to quit.")?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn begin_frame(&mut self) -> OutputResult<()> {
        if self.mode == RenderMode::Frame {
            ansi::clear(&mut self.out)?;
            ansi::set_cursor(&mut self.out, 0, 0)?;
        }
        Ok(())
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("renderer write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TextRenderer<W> {
    fn on_cycle_start(&mut self, _cycle: Cycle) {
        let result = self.begin_frame();
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _cycle: Cycle, grid: &Grid) {
        let result = self.write_grid(grid);
        self.store_err(result);
    }

    fn on_cycle_end(&mut self, report: &CycleReport) {
        let result = self.write_report(report);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _last_cycle: Cycle) {
        let result = self.out.flush().map_err(OutputError::from);
        self.store_err(result);
    }
}
