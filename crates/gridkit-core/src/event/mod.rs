//! # Placement Event Module
//!
//! Publish/subscribe notifications for board-state changes. The
//! interaction controller publishes; the presentation layer subscribes and
//! re-renders from board state on each notification.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gridkit_core::event::{EventCategory, EventDispatcher, EventFilter, PlacementEvent};
//!
//! let dispatcher = EventDispatcher::new();
//!
//! // Subscribe to committed item changes only
//! let subscription = dispatcher.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Item]),
//!     |event| {
//!         println!("Item event: {}", event);
//!     },
//! );
//!
//! // Publish an event
//! dispatcher.publish(PlacementEvent::ItemMoved {
//!     item_id: "item-1".to_string(),
//!     row: 2,
//!     col: 3,
//! });
//!
//! // Unsubscribe when done
//! dispatcher.unsubscribe(subscription);
//! ```

mod dispatcher;
mod events;

pub use dispatcher::*;
pub use events::*;
