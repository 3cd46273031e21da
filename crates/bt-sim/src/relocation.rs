//! Moving unhappy agents into vacancies.

use bt_core::{SimRng, Style};
use bt_grid::{Grid, Location};
use log::trace;

use crate::VacancyIndex;

/// One agent move performed during a relocation pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Relocation {
    pub from:  Location,
    pub to:    Location,
    pub style: Style,
}

/// Relocates agents whose happiness is below `preference`.
#[derive(Copy, Clone, Debug)]
pub struct RelocationEngine {
    preference: f64,
}

impl RelocationEngine {
    pub fn new(preference: f64) -> Self {
        Self { preference }
    }

    /// Run one full relocation pass.
    ///
    /// Clears the moved flags, builds a shuffled [`VacancyIndex`], and hands
    /// it to [`assign`][Self::assign].  The index lives only for this call.
    pub fn run(&self, grid: &mut Grid, rng: &mut SimRng) -> Vec<Relocation> {
        grid.clear_moved();
        let mut vacancies = VacancyIndex::build(grid, rng);
        self.assign(grid, &mut vacancies)
    }

    /// Scan the grid once in row-major order and move every unmoved, unhappy
    /// agent into the next vacancy until the vacancies run out.
    ///
    /// Happiness values are those from the last evaluation; nothing is
    /// re-evaluated mid-pass.  Agents left over when vacancies run out stay
    /// put until a later cycle.
    pub fn assign(&self, grid: &mut Grid, vacancies: &mut VacancyIndex) -> Vec<Relocation> {
        let mut moves = Vec::new();
        for index in 0..grid.len() {
            if vacancies.remaining() == 0 {
                break;
            }
            let from = grid.location_of(index);
            if !grid[from].wants_to_move(self.preference) {
                continue;
            }
            let Some(to) = vacancies.next_slot() else {
                break;
            };
            let style = grid.relocate(from, to);
            trace!("moving {style} agent {from} to {to}");
            moves.push(Relocation { from, to, style });
        }
        moves
    }
}
