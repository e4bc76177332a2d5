//! Placement validation and commit operations for Board.

use gridkit_core::Rotation;

use super::{Board, Preview};
use crate::geometry::GridRect;
use crate::model::Item;

impl Board {
    /// Validates a candidate placement.
    ///
    /// A candidate is valid iff it lies fully within the grid (no negative
    /// row/col, far edge inside the bounds) and its bounding box overlaps
    /// no committed item other than `ignore_id`. Excluding the moved
    /// item's own id lets a candidate occupy cells the item currently
    /// holds.
    ///
    /// Pure and deterministic; O(n) in the number of committed items.
    pub fn is_valid_position(&self, candidate: &GridRect, ignore_id: &str) -> bool {
        candidate.fits_within(self.config().grid_width, self.config().grid_height)
            && !self
                .store()
                .iter()
                .any(|other| other.id != ignore_id && candidate.overlaps(&other.footprint()))
    }

    /// Commits a new position for an item, leaving its rotation untouched.
    ///
    /// The stored item is replaced whole and the preview is cleared.
    /// Returns false when no item has the id.
    pub fn commit_move(&mut self, id: &str, row: i32, col: i32) -> bool {
        let Some(existing) = self.store().get(id) else {
            return false;
        };
        let updated = Item {
            row,
            col,
            ..existing.clone()
        };
        tracing::debug!(id = %id, row, col, "move committed");
        self.store_mut().replace(updated);
        self.clear_preview();
        true
    }

    /// Commits a rotation together with its clamped position.
    ///
    /// Row, column, and rotation are applied in one replacement so
    /// observers never see a partially rotated item. Returns false when
    /// no item has the id.
    pub fn commit_rotation(&mut self, id: &str, row: i32, col: i32, rotation: Rotation) -> bool {
        let Some(existing) = self.store().get(id) else {
            return false;
        };
        let updated = Item {
            row,
            col,
            rotation,
            ..existing.clone()
        };
        tracing::debug!(id = %id, row, col, rotation = %rotation, "rotation committed");
        self.store_mut().replace(updated);
        true
    }

    /// Replaces the transient preview.
    pub fn set_preview(&mut self, preview: Option<Preview>) {
        *self.preview_slot() = preview;
    }

    /// Discards the transient preview, if any.
    pub fn clear_preview(&mut self) {
        *self.preview_slot() = None;
    }
}
