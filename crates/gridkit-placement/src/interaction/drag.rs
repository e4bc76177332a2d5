//! Drag-move, drag-end, and drag-cancel handling.

use gridkit_core::PlacementEvent;

use super::{DragPhase, InteractionController};
use crate::board::Preview;
use crate::viewport::PixelDelta;

impl InteractionController {
    /// Handles a drag-move event from the host's drag source.
    ///
    /// The pixel delta is measured from the drag origin, not the previous
    /// move, so this runs fresh on every pointer movement: the delta is
    /// rounded to whole cells per axis, the candidate is validated against
    /// all other committed items, and the preview is set or cleared
    /// accordingly. Re-delivering the same event leaves the preview
    /// unchanged and publishes nothing.
    ///
    /// Unknown item ids are ignored.
    pub fn on_drag_move(&mut self, item_id: &str, delta: PixelDelta) {
        let Some(item) = self.board().item(item_id) else {
            tracing::trace!(id = %item_id, "drag-move for unknown item ignored");
            return;
        };

        let (d_row, d_col) = self.viewport().pixel_delta_to_cells(delta);
        let candidate = self
            .board()
            .candidate_for(item, item.row + d_row, item.col + d_col);

        let new_preview = self
            .board()
            .is_valid_position(&candidate, item_id)
            .then(|| Preview::new(item_id, candidate));

        self.set_phase(DragPhase::Dragging {
            item_id: item_id.to_string(),
        });

        if self.board().preview() == new_preview.as_ref() {
            return;
        }

        let event = match &new_preview {
            Some(preview) => PlacementEvent::PreviewShown {
                item_id: preview.item_id.clone(),
                row: preview.rect.row,
                col: preview.rect.col,
                width: preview.rect.width,
                height: preview.rect.height,
            },
            None => PlacementEvent::PreviewHidden {
                item_id: Some(item_id.to_string()),
            },
        };
        self.board_mut().set_preview(new_preview);
        self.events().publish(event);
    }

    /// Handles the end of a drag gesture.
    ///
    /// When a preview exists for the released item, its row/col are
    /// committed (rotation unchanged) and the preview is cleared. When no
    /// preview exists (the last move was invalid, or none occurred), the
    /// drag is silently rejected and the item stays at its last committed
    /// position.
    pub fn on_drag_end(&mut self, item_id: &str) {
        let preview = self.board().preview().cloned();
        match preview {
            Some(preview) if preview.item_id == item_id => {
                let rect = preview.rect;
                self.board_mut().commit_move(item_id, rect.row, rect.col);
                self.events().publish(PlacementEvent::PreviewHidden {
                    item_id: Some(item_id.to_string()),
                });
                self.events().publish(PlacementEvent::ItemMoved {
                    item_id: item_id.to_string(),
                    row: rect.row,
                    col: rect.col,
                });
            }
            Some(stale) => {
                // A preview for another item cannot outlive the gesture.
                self.board_mut().clear_preview();
                self.events().publish(PlacementEvent::PreviewHidden {
                    item_id: Some(stale.item_id),
                });
            }
            None => {
                tracing::trace!(id = %item_id, "drag ended without a valid candidate");
            }
        }
        self.set_phase(DragPhase::Idle);
    }

    /// Handles drag cancellation (Escape, window blur, drop outside).
    ///
    /// Unconditionally discards the preview; no item position changes.
    pub fn on_drag_cancel(&mut self) {
        let had = self.board().preview().cloned();
        self.board_mut().clear_preview();
        if let Some(preview) = had {
            self.events().publish(PlacementEvent::PreviewHidden {
                item_id: Some(preview.item_id),
            });
        }
        self.set_phase(DragPhase::Idle);
    }
}
