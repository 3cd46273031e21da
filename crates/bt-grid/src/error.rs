use bt_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("row {row} has {width} cells but the grid has {dim} rows")]
    NotSquare {
        row:   usize,
        width: usize,
        dim:   usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        row:   usize,
        col:   usize,
        glyph: char,
    },

    #[error("{agents} agents do not fit on a {dim}x{dim} grid")]
    Overfull { agents: usize, dim: usize },
}

pub type GridResult<T> = Result<T, GridError>;
