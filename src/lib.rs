//! # GridKit
//!
//! An interactive grid-placement toolkit: drag resizable, rotatable
//! rectangular items onto a fixed-size cell grid with live
//! collision-checked placement previews.
//!
//! ## Architecture
//!
//! GridKit is organized as a workspace with multiple crates:
//!
//! 1. **gridkit-core** - Grid configuration, rotation, errors, events
//! 2. **gridkit-placement** - Board state, geometry, interaction controller
//! 3. **gridkit** - This facade crate, re-exporting the public surface
//!
//! ## Features
//!
//! - **Collision-Checked Placement**: Candidates validated against bounds
//!   and every other committed item before they preview or commit
//! - **Live Drag Preview**: Pixel deltas snap to cells; the preview tracks
//!   the nearest valid landing position
//! - **Quarter-Turn Rotation**: All-or-nothing rotate with edge clamping
//! - **Event Notifications**: Hosts subscribe for re-render signals
//! - **Host-Agnostic Presentation**: Cell/pixel viewport mapping plus a
//!   reference SVG renderer; pointer plumbing stays in the host
//!
//! The presentation layer is an external collaborator: embed these crates
//! behind any drag-and-drop source that can report pixel deltas.

pub use gridkit_placement as placement;

pub use gridkit_core::{config, error, event, rotation};

pub use gridkit_core::{
    ConfigError, Error, EventCategory, EventDispatcher, EventFilter, GridConfig, LayoutError,
    PlacementEvent, Result, Rotation, SubscriptionId,
};

pub use gridkit_placement::{
    svg_renderer, Board, BoardSnapshot, CellBounds, DragPhase, GridRect, GridViewport,
    InteractionController, Item, ItemStore, PixelDelta, PixelRect, Preview,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
