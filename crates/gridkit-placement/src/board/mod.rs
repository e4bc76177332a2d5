//! Board state: the committed item layout and the transient preview.

mod operations;
mod types;

pub use types::{BoardSnapshot, Preview};

use gridkit_core::{ConfigError, GridConfig, LayoutError};

use crate::geometry::GridRect;
use crate::item_store::ItemStore;
use crate::model::Item;

/// Authoritative placement state for one grid.
///
/// Owns the committed items and the single optional preview. All mutation
/// goes through the commit operations in `operations.rs`, which replace
/// items whole; the board never hands out mutable item references.
///
/// Invariants, established at seeding and preserved by every commit:
/// - every committed item lies fully within the grid,
/// - no two committed items' bounding boxes overlap,
/// - at most one preview exists, and while present it has passed
///   validation against all items other than its own.
#[derive(Debug, Clone)]
pub struct Board {
    config: GridConfig,
    store: ItemStore,
    preview: Option<Preview>,
}

impl Board {
    /// Creates an empty board with the given configuration.
    ///
    /// Fails when the configuration is degenerate (zero-sized grid,
    /// non-positive cell size).
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            store: ItemStore::new(),
            preview: None,
        })
    }

    /// Creates a board and seeds it with an initial layout.
    pub fn with_items(
        config: GridConfig,
        items: impl IntoIterator<Item = Item>,
    ) -> gridkit_core::Result<Self> {
        let mut board = Self::new(config)?;
        for item in items {
            board.add_item(item)?;
        }
        Ok(board)
    }

    /// Adds an item to the board, validating the placement invariants.
    ///
    /// Seeding an item that duplicates an id, has a non-positive
    /// footprint, falls outside the grid, or overlaps an existing item is
    /// a caller bug and is rejected with a `LayoutError`.
    pub fn add_item(&mut self, item: Item) -> Result<(), LayoutError> {
        if self.store.contains(&item.id) {
            return Err(LayoutError::DuplicateItem {
                id: item.id.clone(),
            });
        }
        if item.width < 1 || item.height < 1 {
            return Err(LayoutError::InvalidFootprint {
                id: item.id.clone(),
                width: item.width,
                height: item.height,
            });
        }
        let footprint = item.footprint();
        if !footprint.fits_within(self.config.grid_width, self.config.grid_height) {
            return Err(LayoutError::OutOfBounds {
                id: item.id.clone(),
                row: item.row,
                col: item.col,
            });
        }
        if let Some(other) = self
            .store
            .iter()
            .find(|existing| existing.footprint().overlaps(&footprint))
        {
            return Err(LayoutError::Overlap {
                id: item.id.clone(),
                other: other.id.clone(),
            });
        }

        tracing::debug!(id = %item.id, row = item.row, col = item.col, "item added");
        self.store.insert(item);
        Ok(())
    }

    /// The fixed grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the number of items on the board.
    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// Gets a reference to an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.store.get(id)
    }

    /// Iterates committed items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.store.iter()
    }

    /// The transient preview, if a drag candidate is active.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Clones out the full board state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            items: self.store.to_vec(),
            preview: self.preview.clone(),
        }
    }

    pub(crate) fn store(&self) -> &ItemStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub(crate) fn preview_slot(&mut self) -> &mut Option<Preview> {
        &mut self.preview
    }

    /// Convenience for building a candidate footprint for an item's
    /// effective dimensions at a position.
    pub fn candidate_for(&self, item: &Item, row: i32, col: i32) -> GridRect {
        let (width, height) = item.effective_size();
        GridRect::new(row, col, width, height)
    }
}
