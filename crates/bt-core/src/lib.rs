//! `bt-core` — foundational types for the brace-topia segregation model.
//!
//! This crate is a dependency of every other `bt-*` crate.  It has no `bt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`style`]       | `Style` (endline / newline / empty) and its glyphs    |
//! | [`cycle`]       | `Cycle` counter                                       |
//! | [`config`]      | `SimConfig`, `Population`, accepted ranges            |
//! | [`rng`]         | `SimRng` (seeded, single-threaded)                    |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod cycle;
pub mod error;
pub mod rng;
pub mod style;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DEFAULT_SEED, Fractions, MAX_DIM, MAX_FRACTION, MIN_DIM, MIN_FRACTION, Population, SNAP_EPSILON,
    SimConfig,
};
pub use cycle::Cycle;
pub use error::{CoreError, CoreResult};
pub use rng::SimRng;
pub use style::Style;
