//! Fluent builder for constructing a [`Sim`].

use bt_core::{Cycle, SimConfig, SimRng};
use bt_grid::{Grid, GridBuilder};
use log::info;

use crate::{RelocationEngine, Sim, SimError, SimResult, SimState};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: dimension, preference, population, cycle limit, seed
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                         |
/// |--------------|-------------------------------------------------|
/// | `.grid(g)`   | Random placement drawn from `config.seed`        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .grid(Grid::from_rows(&rows)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    grid:   Option<Grid>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, grid: None }
    }

    /// Start from a prepared layout instead of a random one.
    ///
    /// The grid must be `config.dim` wide and hold exactly
    /// `config.population`.  Happiness values and moved flags in it are
    /// ignored; the first cycle recomputes them.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Validate inputs, lay out the grid, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.config.seed);

        let grid = match self.grid {
            Some(g) => {
                if g.dim() != self.config.dim {
                    return Err(SimError::DimensionMismatch {
                        expected: self.config.dim,
                        got:      g.dim(),
                    });
                }
                let census = g.census();
                if !census.matches(&self.config.population) {
                    return Err(SimError::GridMismatch {
                        expected: self.config.population,
                        found:    census,
                    });
                }
                g
            }
            None => GridBuilder::new(self.config.dim, self.config.population).build(&mut rng)?,
        };

        let pop = self.config.population;
        info!(
            "built {0}x{0} grid: {1} endline, {2} newline, {3} vacant; preference {4:.2}, seed {5}",
            self.config.dim, pop.endline, pop.newline, pop.vacancies,
            self.config.preference, self.config.seed,
        );

        Ok(Sim {
            relocation: RelocationEngine::new(self.config.preference),
            config:     self.config,
            grid,
            rng,
            cycle:      Cycle::ZERO,
            state:      SimState::Running,
        })
    }
}
