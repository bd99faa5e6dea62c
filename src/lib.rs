//! Knight's tours on rectangular boards using Warnsdorff's rule.
//!
//! [`search::warnsdorff::tour`] is the entry point: it takes a start cell and board size and
//! returns a [`tour::Tour`], which may stop short of covering the board.

pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod search;
pub mod tour;

pub use crate::core::coord::Coord;
pub use crate::error::TourError;
pub use crate::search::warnsdorff::{tour, TourEngine};
pub use crate::tour::{Tour, TourOutcome};
