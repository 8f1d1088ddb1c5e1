//! Simulation error types
//!
//! Every error here is a construction-time configuration problem. Ticks and
//! reads never fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("board has zero area ({width}x{height})")]
    DegenerateBoard { width: u32, height: u32 },

    #[error("{name} index {index} does not fit a board of {cells} cells")]
    FixedCellOutOfRange {
        name: &'static str,
        index: usize,
        cells: usize,
    },

    #[error("fixed cells overlap at index {index}")]
    FixedCellConflict { index: usize },

    #[error("layout error at line {line}: {message}")]
    Layout { line: usize, message: String },

    #[error("settings: {0}")]
    Settings(String),

    #[error("snapshot: {0}")]
    Snapshot(String),
}
