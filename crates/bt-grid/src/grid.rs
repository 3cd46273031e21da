//! The square, row-major cell container.

use std::fmt;
use std::ops::{Index, IndexMut};

use bt_core::{Population, Style};

use crate::{Cell, GridError, GridResult};

/// Offsets of the eight Moore neighbours, as `(d_row, d_col)`.
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

// ── Location ──────────────────────────────────────────────────────────────────

/// A 0-indexed `(row, col)` coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Location { row, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.row, self.col)
    }
}

// ── Census ────────────────────────────────────────────────────────────────────

/// Cell counts per style at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub endline: usize,
    pub newline: usize,
    pub empty:   usize,
}

impl Census {
    #[inline]
    pub fn occupied(&self) -> usize {
        self.endline + self.newline
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.endline + self.newline + self.empty
    }

    /// `true` when the counts equal the configured head counts.
    pub fn matches(&self, population: &Population) -> bool {
        self.endline == population.endline
            && self.newline == population.newline
            && self.empty == population.vacancies
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A `dim × dim` grid of [`Cell`]s stored contiguously in row-major order.
///
/// `Location { row, col }` maps to index `row * dim + col`.  Indexing with an
/// out-of-range location panics; use [`get`][Self::get] for a checked read.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dim:   usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty `dim × dim` grid.
    pub fn empty(dim: usize) -> Self {
        Grid { dim, cells: vec![Cell::EMPTY; dim * dim] }
    }

    /// Parse a grid from rows of glyphs (`e`, `n`, `.`).
    ///
    /// Every row must be as long as there are rows.  Used mostly for
    /// hand-built scenarios in tests.
    pub fn from_rows(rows: &[&str]) -> GridResult<Self> {
        let dim = rows.len();
        let mut cells = Vec::with_capacity(dim * dim);
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != dim {
                return Err(GridError::NotSquare { row, width, dim });
            }
            for (col, glyph) in line.chars().enumerate() {
                let style = Style::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { row, col, glyph })?;
                cells.push(Cell::with_style(style));
            }
        }
        Ok(Grid { dim, cells })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of cells (`dim²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.row < self.dim && loc.col < self.dim
    }

    #[inline]
    pub fn index_of(&self, loc: Location) -> usize {
        loc.row * self.dim + loc.col
    }

    #[inline]
    pub fn location_of(&self, index: usize) -> Location {
        Location::new(index / self.dim, index % self.dim)
    }

    pub fn get(&self, loc: Location) -> Option<&Cell> {
        if self.contains(loc) {
            self.cells.get(self.index_of(loc))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, loc: Location) -> Option<&mut Cell> {
        if self.contains(loc) {
            let i = self.index_of(loc);
            self.cells.get_mut(i)
        } else {
            None
        }
    }

    /// Style at `loc`; out-of-range locations read as `Empty`.
    #[inline]
    pub fn style(&self, loc: Location) -> Style {
        self.get(loc).map_or(Style::Empty, |c| c.style)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.dim.max(1))
    }

    /// Every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.cells.len()).map(|i| self.location_of(i))
    }

    /// In-bounds Moore neighbours of `loc`.  Nothing wraps around: corners
    /// have 3 neighbours, other edge cells 5, interior cells 8.
    pub fn neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = loc.row.checked_add_signed(dr)?;
            let col = loc.col.checked_add_signed(dc)?;
            let n = Location::new(row, col);
            self.contains(n).then_some(n)
        })
    }

    /// Count cells per style.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell.style {
                Style::Endline => census.endline += 1,
                Style::Newline => census.newline += 1,
                Style::Empty   => census.empty += 1,
            }
        }
        census
    }

    /// Clear every cell's moved-this-cycle flag.
    pub fn clear_moved(&mut self) {
        for cell in &mut self.cells {
            cell.moved = false;
        }
    }

    /// Move the agent at `from` into the vacant cell at `to`.
    ///
    /// Both cells are flagged as moved and left fully happy until the next
    /// evaluation.  Returns the style that moved.
    ///
    /// # Panics
    /// Panics if either location is out of range.
    pub fn relocate(&mut self, from: Location, to: Location) -> Style {
        debug_assert!(self[to].style == Style::Empty, "destination {to} is occupied");
        let style = self[from].style;

        let dest = &mut self[to];
        dest.style = style;
        dest.happiness = 1.0;
        dest.moved = true;

        let src = &mut self[from];
        src.style = Style::Empty;
        src.happiness = 1.0;
        src.moved = true;

        style
    }
}

impl Index<Location> for Grid {
    type Output = Cell;
    #[inline]
    fn index(&self, loc: Location) -> &Cell {
        assert!(self.contains(loc), "location {loc} outside {0}x{0} grid", self.dim);
        let i = self.index_of(loc);
        &self.cells[i]
    }
}

impl IndexMut<Location> for Grid {
    #[inline]
    fn index_mut(&mut self, loc: Location) -> &mut Cell {
        assert!(self.contains(loc), "location {loc} outside {0}x{0} grid", self.dim);
        let i = self.index_of(loc);
        &mut self.cells[i]
    }
}

impl fmt::Display for Grid {
    /// One line of glyphs per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.style.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
