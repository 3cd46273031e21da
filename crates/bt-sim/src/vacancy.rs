//! Per-cycle list of vacant cells in random assignment order.

use bt_core::SimRng;
use bt_grid::{Grid, Location};

/// The empty cells of a grid, shuffled, with a cursor marking how many have
/// been handed out.
///
/// Built fresh each cycle and dropped at the end of the relocation pass.
/// Only cells that were empty when the index was built are ever handed out,
/// so a cell vacated during the pass is never reused in the same cycle.
#[derive(Clone, Debug)]
pub struct VacancyIndex {
    slots:  Vec<Location>,
    cursor: usize,
}

impl VacancyIndex {
    /// Empty cells in row-major order, unshuffled.
    pub fn scan(grid: &Grid) -> Self {
        let slots = grid
            .locations()
            .filter(|&loc| !grid[loc].is_occupied())
            .collect();
        Self { slots, cursor: 0 }
    }

    /// Empty cells in a uniformly random order.
    pub fn build(grid: &Grid, rng: &mut SimRng) -> Self {
        let mut index = Self::scan(grid);
        rng.shuffle(&mut index.slots);
        index
    }

    /// Total vacancies, handed out or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Vacancies not yet handed out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.cursor
    }

    /// All vacancies in assignment order.
    pub fn slots(&self) -> &[Location] {
        &self.slots
    }

    /// Hand out the next vacancy, if any is left.
    pub fn next_slot(&mut self) -> Option<Location> {
        let slot = self.slots.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(slot)
    }
}
