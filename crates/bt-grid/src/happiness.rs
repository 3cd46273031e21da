//! Neighbour-based happiness.
//!
//! An agent's happiness is `friends / (friends + enemies)` over its clipped
//! Moore neighbourhood.  Empty neighbours count as neither.  With no enemies
//! at all (including an agent with no occupied neighbours) happiness is
//! exactly `1.0`, so the ratio is never evaluated with a zero denominator.

use log::warn;

use crate::{Grid, Location};

/// Friend / enemy tally around one agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub friends: u32,
    pub enemies: u32,
}

impl Neighborhood {
    /// Tally the neighbours of the agent at `loc`.
    ///
    /// An empty subject yields an all-zero tally.
    pub fn of(grid: &Grid, loc: Location) -> Self {
        let subject = grid.style(loc);
        let mut tally = Neighborhood::default();
        for n in grid.neighbors(loc) {
            let other = grid.style(n);
            if subject.is_friend_of(other) {
                tally.friends += 1;
            } else if subject.is_enemy_of(other) {
                tally.enemies += 1;
            }
        }
        tally
    }

    pub fn happiness(&self) -> f64 {
        if self.enemies == 0 {
            return 1.0;
        }
        self.friends as f64 / (self.friends + self.enemies) as f64
    }
}

/// Recompute happiness for every occupied cell from the current layout.
///
/// All scores are computed before any is written back, so the result never
/// depends on scan order.  Returns the number of occupied cells.
pub fn evaluate_all(grid: &mut Grid) -> usize {
    let snapshot: &Grid = grid;
    let scores: Vec<Option<f64>> = snapshot
        .locations()
        .map(|loc| {
            snapshot[loc]
                .is_occupied()
                .then(|| Neighborhood::of(snapshot, loc).happiness())
        })
        .collect();

    let mut occupied = 0;
    for (cell, score) in grid.cells_mut().iter_mut().zip(scores) {
        if let Some(h) = score {
            cell.happiness = h;
            occupied += 1;
        }
    }
    occupied
}

/// Mean happiness over the occupied cells.
///
/// `None` when no cell is occupied; the mean is undefined there.
pub fn average_happiness(grid: &Grid) -> Option<f64> {
    let (sum, count) = grid
        .cells()
        .iter()
        .filter(|c| c.is_occupied())
        .fold((0.0, 0usize), |(sum, count), c| (sum + c.happiness, count + 1));

    if count == 0 {
        warn!("no occupied cells; average happiness is undefined");
        return None;
    }
    Some(sum / count as f64)
}

/// Number of agents whose happiness is below `preference`.
pub fn unhappy_count(grid: &Grid, preference: f64) -> usize {
    grid.cells()
        .iter()
        .filter(|c| c.is_occupied() && c.happiness < preference)
        .count()
}
