//! # GridKit Placement
//!
//! This crate provides the placement core for GridKit: a fixed-size cell
//! grid onto which rotatable rectangular items are dragged with live
//! collision-checked previews.
//!
//! ## Core Components
//!
//! ### Placement
//! - **Geometry**: Inclusive cell bounding boxes and rectangle overlap tests
//! - **Board**: Committed items plus the single transient drag preview
//! - **Interaction**: Drag/rotate state machine driving the board
//!
//! ### Presentation Support
//! - **Viewport**: Cell-to-pixel mapping for a fixed cell size
//! - **SVG Renderer**: Reference rendering of grid, items, and preview
//!
//! ## Architecture
//!
//! The crate operates in layers:
//!
//! ```text
//! InteractionController (drag-move / drag-end / drag-cancel / rotate)
//!   ├── Board (committed items + preview)
//!   │     ├── ItemStore (insertion-ordered items)
//!   │     └── Geometry (bounds, overlap, validation)
//!   └── EventDispatcher (re-render notifications, from gridkit-core)
//!
//! GridViewport (cell space ↔ pixel space)
//!   └── SVG Renderer (reference presentation)
//! ```
//!
//! The presentation layer is the embedding host: it forwards raw drag and
//! rotate events into the controller and re-renders from board state when
//! notified. All handling is synchronous and single-threaded; rejected
//! candidates are silent no-ops.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridkit_core::GridConfig;
//! use gridkit_placement::{Board, InteractionController, Item, PixelDelta};
//!
//! let board = Board::with_items(
//!     GridConfig::default(),
//!     [Item::new("item-1", 2, 3, 0, 0)],
//! )?;
//! let mut controller = InteractionController::new(board);
//!
//! // One cell to the right at the default 25px cell size
//! controller.on_drag_move("item-1", PixelDelta::new(30.0, 0.0));
//! controller.on_drag_end("item-1");
//! assert_eq!(controller.board().item("item-1").unwrap().col, 1);
//! ```

pub mod board;
pub mod geometry;
pub mod interaction;
pub mod item_store;
pub mod model;
pub mod svg_renderer;
pub mod viewport;

// Re-export all public types from submodules
pub use board::{Board, BoardSnapshot, Preview};
pub use geometry::{CellBounds, GridRect};
pub use interaction::{DragPhase, InteractionController};
pub use item_store::ItemStore;
pub use model::Item;
pub use viewport::{GridViewport, PixelDelta, PixelRect};

// Re-export the shared core types hosts need alongside the board
pub use gridkit_core::{GridConfig, Rotation};
