//! Interaction controller for UI integration.
//! Reacts to the host's drag and rotate events and commits or discards
//! candidate placements against the board.
//!
//! This module is split into submodules by interaction:
//! - `drag`: drag-move, drag-end, drag-cancel handling
//! - `rotate`: quarter-turn rotation with clamping
//!
//! Every handler is a synchronous call that runs to completion; events
//! are processed one at a time and no state outlives a call except the
//! board itself and its transient preview. Rejections are silent: an
//! invalid candidate is a normal outcome of user interaction, not an
//! error, so handlers never fail. They simply leave the last valid
//! configuration in place.

mod drag;
mod rotate;

use gridkit_core::{EventDispatcher, GridConfig};

use crate::board::Board;
use crate::viewport::GridViewport;

/// Phase of the drag state machine.
///
/// Committing and cancelling resolve back to `Idle` within the handling
/// call, so only the idle and dragging phases are ever observable between
/// events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No interaction in flight.
    #[default]
    Idle,
    /// A drag gesture is active for this item.
    Dragging {
        /// Id of the item being dragged.
        item_id: String,
    },
}

impl DragPhase {
    /// True when a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Interaction controller driving one board.
///
/// The host's presentation layer forwards raw interaction events here
/// (drag-move with a pixel delta, drag-end, drag-cancel, rotate requests)
/// and subscribes to the dispatcher to learn when to re-render. The
/// controller owns the board; hosts read state through [`board`] or
/// [`Board::snapshot`].
///
/// [`board`]: InteractionController::board
#[derive(Debug)]
pub struct InteractionController {
    board: Board,
    viewport: GridViewport,
    phase: DragPhase,
    events: EventDispatcher,
}

impl InteractionController {
    /// Creates a controller around a seeded board.
    pub fn new(board: Board) -> Self {
        let viewport = GridViewport::new(board.config());
        Self {
            board,
            viewport,
            phase: DragPhase::Idle,
            events: EventDispatcher::new(),
        }
    }

    /// Read access to the board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The grid configuration the controller was built with.
    pub fn config(&self) -> &GridConfig {
        self.board.config()
    }

    /// The cell-to-pixel transformation for this grid.
    pub fn viewport(&self) -> &GridViewport {
        &self.viewport
    }

    /// The current phase of the drag state machine.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// The dispatcher hosts subscribe to for re-render notifications.
    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_phase(&mut self, phase: DragPhase) {
        if phase != self.phase {
            tracing::trace!(from = ?self.phase, to = ?phase, "drag phase transition");
            self.phase = phase;
        }
    }
}
