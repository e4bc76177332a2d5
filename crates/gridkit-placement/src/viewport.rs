//! Viewport and coordinate transformation for grid rendering.
//!
//! Handles conversion between pixel coordinates (screen space) and cell
//! coordinates (grid space). The mapping is a fixed uniform scale: one
//! cell is `cell_size` pixels on a side, with cell (0, 0) at the top-left
//! of the grid surface.

use serde::{Deserialize, Serialize};

use gridkit_core::GridConfig;

/// A pointer movement in pixels, as reported by the host's drag source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelDelta {
    /// Horizontal movement in pixels (positive = right).
    pub x: f64,
    /// Vertical movement in pixels (positive = down).
    pub y: f64,
}

impl PixelDelta {
    /// Creates a pixel delta.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Fixed cell-to-pixel transformation for one grid.
#[derive(Debug, Clone, Copy)]
pub struct GridViewport {
    cell_size: f64,
    grid_width: i32,
    grid_height: i32,
}

impl GridViewport {
    /// Creates a viewport from the grid configuration.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
        }
    }

    /// The pixel size of one cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// The total pixel size of the grid surface as `(width, height)`.
    pub fn surface_size(&self) -> (f64, f64) {
        (
            self.grid_width as f64 * self.cell_size,
            self.grid_height as f64 * self.cell_size,
        )
    }

    /// Converts a cell coordinate to the pixel position of its top-left
    /// corner.
    ///
    /// Formula:
    /// ```text
    /// pixel_x = col * cell_size
    /// pixel_y = row * cell_size
    /// ```
    pub fn cell_to_pixel(&self, row: i32, col: i32) -> (f64, f64) {
        (col as f64 * self.cell_size, row as f64 * self.cell_size)
    }

    /// Converts a cell-space rect to its pixel rectangle.
    pub fn rect_to_pixel(&self, rect: &crate::geometry::GridRect) -> PixelRect {
        let (x, y) = self.cell_to_pixel(rect.row, rect.col);
        PixelRect {
            x,
            y,
            width: rect.width as f64 * self.cell_size,
            height: rect.height as f64 * self.cell_size,
        }
    }

    /// Converts a pixel position to the cell containing it.
    ///
    /// Truncates toward negative infinity so positions above or left of
    /// the grid map to negative cells rather than folding back onto
    /// cell 0.
    pub fn pixel_to_cell(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (y / self.cell_size).floor() as i32,
            (x / self.cell_size).floor() as i32,
        )
    }

    /// Converts a pixel drag delta to a cell delta as `(d_row, d_col)`.
    ///
    /// Each axis is rounded to the nearest whole cell independently, so a
    /// drag snaps to the cell grid once the pointer has crossed half a
    /// cell in that direction.
    pub fn pixel_delta_to_cells(&self, delta: PixelDelta) -> (i32, i32) {
        (
            (delta.y / self.cell_size).round() as i32,
            (delta.x / self.cell_size).round() as i32,
        )
    }
}
