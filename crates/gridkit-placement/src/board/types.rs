//! Board type definitions: Preview, BoardSnapshot.

use serde::{Deserialize, Serialize};

use crate::geometry::GridRect;
use crate::model::Item;

/// The transient candidate placement during an active drag.
///
/// At most one preview exists at a time (a single interaction is in
/// flight). While present, the preview has passed validation against every
/// committed item other than the one being dragged, so committing it can
/// never violate the board invariants. It is discarded on commit, cancel,
/// or the first invalid drag-move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Id of the item being dragged.
    pub item_id: String,
    /// Candidate footprint with effective (rotation-applied) dimensions.
    pub rect: GridRect,
}

impl Preview {
    /// Creates a preview for an item at a candidate footprint.
    pub fn new(item_id: impl Into<String>, rect: GridRect) -> Self {
        Self {
            item_id: item_id.into(),
            rect,
        }
    }
}

/// Snapshot of board state.
///
/// Commits replace items whole, so a pair of snapshots taken around any
/// interaction call captures the complete state transition. Tests and
/// host applications compare snapshots instead of poking at live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Committed items in insertion order.
    pub items: Vec<Item>,
    /// The transient preview, if a drag candidate is active.
    pub preview: Option<Preview>,
}
