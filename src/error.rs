// src/error.rs

use thiserror::Error;

/// Everything that can stop a planning pass.
///
/// Validation variants carry the expected and actual sizes so the caller can
/// correct the input and re-run.
#[derive(Error, Debug)]
pub enum PlanningError {
    #[error("planning horizon must be at least 1 period, got {0}")]
    InvalidHorizon(usize),

    #[error("total demand must be at least 1, got {0}")]
    InvalidTotalDemand(u32),

    #[error("segment width must be between 1 and {max}, got {width}")]
    InvalidWidth { width: usize, max: usize },

    #[error("{what} has {actual} values but the horizon is {expected} periods")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("demand forecast is incomplete: {actual} of {expected} periods have a value")]
    IncompleteForecast { expected: usize, actual: usize },

    #[error("cell (segment {segment}, column {column}) is outside the demand table")]
    CellOutOfRange { segment: usize, column: usize },

    #[error("malformed demand grid: {0}")]
    MalformedGrid(String),

    #[error("invalid demand cell at row {row}, column {column}: {value:?}")]
    InvalidCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
