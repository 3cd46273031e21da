//! Fluent builder for the randomly populated starting grid.
//!
//! # Usage
//!
//! ```rust
//! use bt_core::{Population, SimRng};
//! use bt_grid::GridBuilder;
//!
//! let population = Population::new(15, 72, 108).unwrap();
//! let mut rng = SimRng::new(41);
//! let grid = GridBuilder::new(15, population).build(&mut rng).unwrap();
//!
//! assert_eq!(grid.census().occupied(), 180);
//! ```

use bt_core::{Population, SimRng, Style};
use log::debug;

use crate::{Grid, GridError, GridResult, Location};

/// Places `population` on an empty `dim × dim` grid by rejection sampling.
///
/// For each style in turn (endline first, then newline) a uniformly random
/// `(row, col)` is drawn from the whole grid; the agent is placed only if the
/// cell is still empty, otherwise the draw is retried.  Expected retries grow
/// as the grid fills up but stay bounded for any grid with vacancies left.
pub struct GridBuilder {
    dim:        usize,
    population: Population,
}

impl GridBuilder {
    pub fn new(dim: usize, population: Population) -> Self {
        Self { dim, population }
    }

    /// Draw the starting layout from `rng`.
    pub fn build(self, rng: &mut SimRng) -> GridResult<Grid> {
        let agents = self.population.occupied();
        if agents > self.dim * self.dim {
            return Err(GridError::Overfull { agents, dim: self.dim });
        }

        let mut grid = Grid::empty(self.dim);
        let mut draws = 0u64;
        for style in Style::AGENTS {
            let target = self.population.count(style);
            let mut placed = 0;
            while placed < target {
                let loc = Location::new(
                    rng.gen_range(0..self.dim),
                    rng.gen_range(0..self.dim),
                );
                draws += 1;
                let cell = &mut grid[loc];
                if !cell.is_occupied() {
                    cell.style = style;
                    placed += 1;
                }
            }
        }

        debug!(
            "placed {agents} agents on a {0}x{0} grid in {draws} draws",
            self.dim
        );
        Ok(grid)
    }
}
