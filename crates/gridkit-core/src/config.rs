//! Grid configuration
//!
//! The grid dimensions (in cells) and the pixel size of one cell are fixed
//! at initialization and shared by the board, the interaction controller,
//! and the viewport. They are not runtime-configurable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: i32 = 12;
/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: i32 = 12;
/// Default pixel size of one grid cell.
pub const DEFAULT_CELL_SIZE: f64 = 25.0;

/// Fixed grid configuration
///
/// `grid_width` and `grid_height` are the playable area in cells;
/// `cell_size` is the pixel edge length of one cell, used by the viewport
/// to convert between pixel and cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells.
    pub grid_width: i32,
    /// Grid height in cells.
    pub grid_height: i32,
    /// Pixel size of one cell.
    pub cell_size: f64,
}

impl GridConfig {
    /// Creates a configuration with the given dimensions and cell size.
    pub fn new(grid_width: i32, grid_height: i32, cell_size: f64) -> Self {
        Self {
            grid_width,
            grid_height,
            cell_size,
        }
    }

    /// Validates the configuration.
    ///
    /// The grid must be at least 1x1 cells and the cell size a positive,
    /// finite pixel length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 1 || self.grid_height < 1 {
            return Err(ConfigError::InvalidGridSize {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize {
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> i64 {
        self.grid_width as i64 * self.grid_height as i64
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} cells @ {}px",
            self.grid_width, self.grid_height, self.cell_size
        )
    }
}
