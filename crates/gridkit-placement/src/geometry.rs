//! Cell-grid geometry for placement validation.
//!
//! All placement decisions reduce to axis-aligned rectangle tests in cell
//! space: an inclusive bounding-box overlap check and a bounds-containment
//! check. Coordinates are signed because drag candidates are computed by
//! delta-translating a committed position and may land outside the grid
//! before validation rejects them.

use serde::{Deserialize, Serialize};

/// Inclusive cell-index bounding box.
///
/// `left`/`right` are the first and last occupied columns, `top`/`bottom`
/// the first and last occupied rows. A 1x1 footprint at the origin has
/// `left == right == top == bottom == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBounds {
    /// First occupied column.
    pub left: i32,
    /// Last occupied column.
    pub right: i32,
    /// First occupied row.
    pub top: i32,
    /// Last occupied row.
    pub bottom: i32,
}

impl CellBounds {
    /// Creates a bounding box from its edges.
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Height in cells.
    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Tests whether two boxes share at least one cell.
    ///
    /// The standard 1-D interval-overlap test conjoined on both axes.
    /// Because bounds are inclusive cell indices, touching edges (items in
    /// adjacent cells) do not count as an overlap.
    pub fn intersects(&self, other: &CellBounds) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    /// Tests whether a single cell lies within the box.
    pub fn contains_cell(&self, row: i32, col: i32) -> bool {
        col >= self.left && col <= self.right && row >= self.top && row <= self.bottom
    }
}

/// A rectangular footprint in cell space.
///
/// `width` and `height` are the effective (rotation-applied) dimensions of
/// the rect, so a `GridRect` fully describes a candidate placement without
/// reference to the item's stored orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    /// Top row of the footprint.
    pub row: i32,
    /// Left column of the footprint.
    pub col: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl GridRect {
    /// Creates a rect from its origin cell and dimensions.
    pub fn new(row: i32, col: i32, width: i32, height: i32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// The inclusive cell-index bounding box of this rect.
    pub fn bounds(&self) -> CellBounds {
        CellBounds {
            left: self.col,
            right: self.col + self.width - 1,
            top: self.row,
            bottom: self.row + self.height - 1,
        }
    }

    /// Tests whether this rect shares at least one cell with another.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Returns the rect translated by a cell delta.
    pub fn translated(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Tests whether the rect lies fully within a grid of the given size.
    ///
    /// Covers both validation clauses: no negative placement, and the far
    /// edge inside the grid.
    pub fn fits_within(&self, grid_width: i32, grid_height: i32) -> bool {
        self.col >= 0
            && self.row >= 0
            && self.col + self.width <= grid_width
            && self.row + self.height <= grid_height
    }
}
