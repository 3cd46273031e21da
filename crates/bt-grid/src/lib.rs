//! `bt-grid` — the cell grid of the brace-topia model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`cell`]        | `Cell` (style, happiness, moved-this-cycle flag)          |
//! | [`grid`]        | `Grid` (row-major `Vec<Cell>`), `Location`, `Census`      |
//! | [`builder`]     | `GridBuilder` (rejection-sampled random placement)        |
//! | [`happiness`]   | Moore-neighbourhood happiness and its grid-wide average   |
//!
//! The grid is a plain owned value.  Nothing here keeps references into it
//! between calls, so the simulation driver can hold it exclusively.

pub mod builder;
pub mod cell;
pub mod error;
pub mod grid;
pub mod happiness;

#[cfg(test)]
mod tests;

pub use builder::GridBuilder;
pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::{Census, Grid, Location};
pub use happiness::{Neighborhood, average_happiness, evaluate_all, unhappy_count};
