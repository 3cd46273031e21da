//! Configuration error type.
//!
//! Every variant is raised while a [`SimConfig`][crate::SimConfig] is being
//! validated, before any simulation state exists.  Sub-crates define their own
//! error enums and wrap `CoreError` as one variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("dimension ({0}) must be a value in [{min}...{max}]", min = crate::MIN_DIM, max = crate::MAX_DIM)]
    InvalidDimension(usize),

    #[error("{name} ({value}) must be a fraction in [{min}...{max}]", min = crate::MIN_FRACTION, max = crate::MAX_FRACTION)]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("preference strength ({0}) must lie in [0, 1]")]
    PreferenceOutOfRange(f64),

    #[error("population {endline} + {newline} + {vacancies} does not fill a {dim}x{dim} grid")]
    PopulationMismatch {
        dim:       usize,
        endline:   usize,
        newline:   usize,
        vacancies: usize,
    },

    #[error("cycle limit must be at least 1 (got {0})")]
    InvalidCycleLimit(u64),
}

/// Shorthand result type for configuration handling.
pub type CoreResult<T> = Result<T, CoreError>;
