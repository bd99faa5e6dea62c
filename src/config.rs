use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, MAX_CELLS, MAX_DIMENSION};
use crate::core::coord::Coord;
use crate::error::TourError;
use crate::search::warnsdorff::tour;
use crate::tour::Tour;

pub const DEFAULT_WIDTH: u32 = 8;
pub const DEFAULT_HEIGHT: u32 = 8;

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Board dimensions for a run.
///
/// Loadable from JSON, e.g. `{"width": 10, "height": 6}`; missing fields fall back to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl TourConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, TourError> {
        let cfg: TourConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, TourError> {
        let text = fs::read_to_string(path).map_err(|source| TourError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the dimensions. Intended to be called by CLIs before running the engine.
    pub fn validate(&self) -> Result<(), TourError> {
        if self.width == 0 || self.height == 0 {
            return Err(TourError::Config {
                reason: format!(
                    "board must be at least 1x1, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if Board::check_dimensions(self.width, self.height).is_err() {
            return Err(TourError::Config {
                reason: format!(
                    "board {}x{} is too large (sides up to {MAX_DIMENSION}, at most {MAX_CELLS} cells)",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn tour_from(&self, start: Coord) -> Result<Tour, TourError> {
        self.validate()?;
        tour(start, self.width, self.height)
    }
}
