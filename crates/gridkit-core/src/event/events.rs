//! Event type definitions for the placement event bus.
//!
//! Events describe observable board-state changes and are what the
//! presentation layer consumes to know when to re-render. They are
//! cloneable and serializable for logging/replay.
//!
//! Rejected interactions emit no event: rejection is silent by design and
//! the only externally visible trace is the preview being hidden.

use serde::{Deserialize, Serialize};

use crate::rotation::Rotation;

/// Root event enum for all placement events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlacementEvent {
    /// A valid drag candidate is being previewed
    PreviewShown {
        /// Id of the dragged item.
        item_id: String,
        /// Candidate row.
        row: i32,
        /// Candidate column.
        col: i32,
        /// Effective (rotation-applied) width in cells.
        width: i32,
        /// Effective (rotation-applied) height in cells.
        height: i32,
    },
    /// The transient preview was discarded
    PreviewHidden {
        /// Id of the item whose preview was discarded, when known.
        item_id: Option<String>,
    },
    /// An item was committed to a new position
    ItemMoved {
        /// Id of the moved item.
        item_id: String,
        /// New committed row.
        row: i32,
        /// New committed column.
        col: i32,
    },
    /// An item's rotation (and possibly clamped position) was committed
    ItemRotated {
        /// Id of the rotated item.
        item_id: String,
        /// Committed row after clamping.
        row: i32,
        /// Committed column after clamping.
        col: i32,
        /// The new rotation.
        rotation: Rotation,
    },
    /// An item was added to the board during seeding
    ItemAdded {
        /// Id of the added item.
        item_id: String,
    },
}

impl PlacementEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            PlacementEvent::PreviewShown { .. } | PlacementEvent::PreviewHidden { .. } => {
                EventCategory::Preview
            }
            PlacementEvent::ItemMoved { .. } | PlacementEvent::ItemRotated { .. } => {
                EventCategory::Item
            }
            PlacementEvent::ItemAdded { .. } => EventCategory::Layout,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            PlacementEvent::PreviewShown {
                item_id,
                row,
                col,
                width,
                height,
            } => format!(
                "Preview {} at ({}, {}) size {}x{}",
                item_id, row, col, width, height
            ),
            PlacementEvent::PreviewHidden { item_id } => match item_id {
                Some(id) => format!("Preview hidden for {}", id),
                None => "Preview hidden".to_string(),
            },
            PlacementEvent::ItemMoved { item_id, row, col } => {
                format!("Item {} moved to ({}, {})", item_id, row, col)
            }
            PlacementEvent::ItemRotated {
                item_id,
                row,
                col,
                rotation,
            } => format!("Item {} rotated to {} at ({}, {})", item_id, rotation, row, col),
            PlacementEvent::ItemAdded { item_id } => format!("Item {} added", item_id),
        }
    }
}

impl std::fmt::Display for PlacementEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Transient preview changes during an active drag.
    Preview,
    /// Committed item mutations (moves, rotations).
    Item,
    /// Board seeding and layout changes.
    Layout,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Preview => write!(f, "Preview"),
            EventCategory::Item => write!(f, "Item"),
            EventCategory::Layout => write!(f, "Layout"),
        }
    }
}
