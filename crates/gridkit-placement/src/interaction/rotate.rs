//! Quarter-turn rotation with bounds clamping.

use gridkit_core::PlacementEvent;

use super::InteractionController;
use crate::geometry::GridRect;

impl InteractionController {
    /// Handles a rotate request for an item.
    ///
    /// Toggles the orientation, swaps the effective dimensions, and clamps
    /// the position downward so the rotated footprint still fits:
    /// `col = min(col, grid_width - new_width)`, likewise for rows.
    /// Clamping only ever decreases row/col. The full candidate is built
    /// and validated before any stored field changes; on success row,
    /// column, and rotation are committed together, on failure the item is
    /// left completely unchanged.
    ///
    /// On a grid smaller than the rotated footprint the clamp would drive
    /// row/col negative; the candidate then fails validation and the
    /// rotation is rejected rather than applying a partial clamp.
    ///
    /// Unknown item ids are ignored. Rotation is evaluated against
    /// committed state, not the transient preview. A commit that leaves a
    /// live preview stale (the rotated item owns it, or now collides with
    /// it) discards that preview, so a later drop can never commit a
    /// candidate that was only valid against the old layout.
    pub fn on_rotate(&mut self, item_id: &str) {
        let Some(item) = self.board().item(item_id) else {
            tracing::trace!(id = %item_id, "rotate request for unknown item ignored");
            return;
        };

        let new_rotation = item.rotation.toggled();
        let (new_width, new_height) = item.effective_size_at(new_rotation);

        let config = self.board().config();
        let clamped_col = item.col.min(config.grid_width - new_width);
        let clamped_row = item.row.min(config.grid_height - new_height);

        let candidate = GridRect::new(clamped_row, clamped_col, new_width, new_height);
        if !self.board().is_valid_position(&candidate, item_id) {
            tracing::debug!(id = %item_id, "rotation rejected, item unchanged");
            return;
        }

        self.board_mut()
            .commit_rotation(item_id, clamped_row, clamped_col, new_rotation);
        self.events().publish(PlacementEvent::ItemRotated {
            item_id: item_id.to_string(),
            row: clamped_row,
            col: clamped_col,
            rotation: new_rotation,
        });

        self.discard_stale_preview(item_id);
    }

    /// Drops the preview when the committed rotation invalidated it.
    ///
    /// The preview of the rotated item carries pre-rotation dimensions;
    /// a preview of another item may now collide with the rotated
    /// footprint. Either way the cached validation no longer holds.
    fn discard_stale_preview(&mut self, rotated_id: &str) {
        let stale = match self.board().preview() {
            Some(preview) if preview.item_id == rotated_id => Some(preview.item_id.clone()),
            Some(preview) if !self.board().is_valid_position(&preview.rect, &preview.item_id) => {
                Some(preview.item_id.clone())
            }
            _ => None,
        };
        if let Some(item_id) = stale {
            self.board_mut().clear_preview();
            self.events().publish(PlacementEvent::PreviewHidden {
                item_id: Some(item_id),
            });
        }
    }
}
