//! Placed items and their footprints.

use serde::{Deserialize, Serialize};

use gridkit_core::Rotation;

use crate::geometry::{CellBounds, GridRect};

/// A rectangular item placed on the grid.
///
/// `width` and `height` are the *unrotated* footprint; the effective
/// footprint swaps them when the item is quarter-turned. `row`/`col` are
/// the committed position of the footprint's top-left cell. Committed
/// items always lie fully within the grid and never overlap each other;
/// the board enforces this at seeding time and every interaction
/// preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item id, supplied by the host.
    pub id: String,
    /// Unrotated width in cells.
    pub width: i32,
    /// Unrotated height in cells.
    pub height: i32,
    /// Committed row of the top-left cell.
    pub row: i32,
    /// Committed column of the top-left cell.
    pub col: i32,
    /// Current orientation.
    pub rotation: Rotation,
}

impl Item {
    /// Creates an upright item at the given position.
    pub fn new(id: impl Into<String>, width: i32, height: i32, row: i32, col: i32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            row,
            col,
            rotation: Rotation::Deg0,
        }
    }

    /// The effective (rotation-applied) dimensions as `(width, height)`.
    pub fn effective_size(&self) -> (i32, i32) {
        if self.rotation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// The effective size the item would have under `rotation`.
    pub fn effective_size_at(&self, rotation: Rotation) -> (i32, i32) {
        if rotation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// The committed footprint with effective dimensions applied.
    pub fn footprint(&self) -> GridRect {
        let (width, height) = self.effective_size();
        GridRect::new(self.row, self.col, width, height)
    }

    /// The inclusive cell-index bounding box of the committed footprint.
    pub fn bounds(&self) -> CellBounds {
        self.footprint().bounds()
    }
}
