use bt_core::{CoreError, Population};
use bt_grid::{Census, GridError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("supplied grid is {got}x{got} but the configuration asks for {expected}x{expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("supplied grid holds {found:?} but the configuration asks for {expected:?}")]
    GridMismatch {
        expected: Population,
        found:    Census,
    },

    #[error("population drifted during cycle {cycle}: expected {expected:?}, found {found:?}")]
    PopulationDrift {
        cycle:    u64,
        expected: Population,
        found:    Census,
    },
}

pub type SimResult<T> = Result<T, SimError>;
