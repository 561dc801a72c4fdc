// error.rs - Error type shared by the simulation core

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error(
        "pattern does not fit: {pattern_width}x{pattern_height} pattern on a {grid_width}x{grid_height} grid"
    )]
    PatternDoesNotFit {
        pattern_width: usize,
        pattern_height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("pattern has no cells")]
    EmptyPattern,

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern { row: usize, expected: usize, found: usize },

    #[error("pattern row {row}, column {column}: expected '0' or '1', found {found:?}")]
    InvalidPatternCell { row: usize, column: usize, found: char },

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),

    #[error("cell buffer has {found} cells, grid needs {expected}")]
    BufferLength { expected: usize, found: usize },

    #[error("live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("failed to read config {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    ConfigParse(#[from] serde_json::Error),

    #[error("row task failed")]
    RowTask(#[from] tokio::task::JoinError),
}
