use std::path::PathBuf;

use thiserror::Error;

use crate::core::board::{MAX_CELLS, MAX_DIMENSION};
use crate::core::coord::Coord;

/// Errors surfaced to callers of the tour engine and its adapters.
///
/// An incomplete tour is not an error; see [`crate::tour::TourOutcome`].
#[derive(Error, Debug)]
pub enum TourError {
    #[error(
        "invalid board: {width}x{height} (sides must be 1..={}, at most {} cells)",
        MAX_DIMENSION,
        MAX_CELLS
    )]
    InvalidBoard { width: u32, height: u32 },

    #[error("allocation failed for {structure} ({cells} cells)")]
    AllocationFailed {
        structure: &'static str,
        cells: usize,
    },

    #[error("invalid start {start}: outside the {width}x{height} board")]
    InvalidStart {
        start: Coord,
        width: u32,
        height: u32,
    },

    #[error("invalid square {input:?}: {reason}")]
    Notation { input: String, reason: String },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("io error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
