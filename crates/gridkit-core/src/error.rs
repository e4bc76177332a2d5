//! Error handling for GridKit
//!
//! Errors exist only at the construction boundary:
//! - Configuration errors (degenerate grid dimensions or cell size)
//! - Layout errors (seeding a board with an invalid initial arrangement)
//!
//! Interactive operations (drag, rotate) never error: an invalid candidate
//! placement is a normal boolean outcome and resolves to "retain last valid
//! configuration". Unknown item ids in interaction events are silent no-ops.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Represents invalid grid configuration detected at initialization.
/// The grid dimensions and cell size are fixed at startup and are not
/// runtime-configurable, so these errors never occur mid-interaction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions must be at least 1x1 cells
    #[error("Invalid grid size {width}x{height}: both dimensions must be at least 1")]
    InvalidGridSize {
        /// The configured grid width in cells.
        width: i32,
        /// The configured grid height in cells.
        height: i32,
    },

    /// Cell size must be a positive, finite pixel length
    #[error("Invalid cell size {cell_size}: must be positive and finite")]
    InvalidCellSize {
        /// The configured cell size in pixels.
        cell_size: f64,
    },
}

/// Layout error type
///
/// Represents an invalid initial arrangement passed to board seeding.
/// Unlike interactive rejections, seeding a board that violates the
/// placement invariants is a caller bug and is surfaced as an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An item with this id is already on the board
    #[error("Duplicate item id: {id}")]
    DuplicateItem {
        /// The offending item id.
        id: String,
    },

    /// Item footprint has a non-positive dimension
    #[error("Item {id} has invalid footprint {width}x{height}: dimensions must be positive")]
    InvalidFootprint {
        /// The offending item id.
        id: String,
        /// The item's unrotated width in cells.
        width: i32,
        /// The item's unrotated height in cells.
        height: i32,
    },

    /// Item does not fit within the grid bounds
    #[error("Item {id} at ({row}, {col}) does not fit within the grid")]
    OutOfBounds {
        /// The offending item id.
        id: String,
        /// The item's row.
        row: i32,
        /// The item's column.
        col: i32,
    },

    /// Item overlaps an already-placed item
    #[error("Item {id} overlaps item {other}")]
    Overlap {
        /// The offending item id.
        id: String,
        /// The id of the item already occupying the cells.
        other: String,
    },
}

/// Top-level error type combining all GridKit error categories
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias using the GridKit error type
pub type Result<T> = std::result::Result<T, Error>;
