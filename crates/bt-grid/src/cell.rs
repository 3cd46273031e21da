//! One grid position.

use bt_core::Style;

/// A single cell of the grid.
///
/// `happiness` is only meaningful while the cell is occupied.  Empty cells,
/// including ones just vacated by a relocation, hold `1.0` and are skipped
/// by every aggregate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub style: Style,

    /// Share of non-empty neighbours with the same style, in `[0, 1]`.
    pub happiness: f64,

    /// Set when the cell was a relocation source or destination in the
    /// current cycle.  Cleared at the start of every relocation pass.
    pub moved: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        style:     Style::Empty,
        happiness: 1.0,
        moved:     false,
    };

    /// A fresh, fully happy cell holding `style`.
    pub fn with_style(style: Style) -> Self {
        Cell { style, ..Cell::EMPTY }
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.style.is_occupied()
    }

    /// `true` for an agent that has not moved this cycle and whose happiness
    /// is below `preference`.
    #[inline]
    pub fn wants_to_move(&self, preference: f64) -> bool {
        self.is_occupied() && !self.moved && self.happiness < preference
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}
