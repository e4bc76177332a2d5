//! SVG-based renderer for board state
//! Renders the grid, committed items, and the drag preview as SVG
//! Features:
//! - Cell grid lines across the full surface
//! - Committed items as solid rectangles, dragged item dimmed
//! - Preview overlay as a translucent, dash-stroked rectangle
//!
//! Hosts that render through SVG can embed these fragments directly; the
//! fragments carry no event handlers, since pointer and drag events flow
//! the other way (host → controller).

use crate::board::Board;
use crate::viewport::GridViewport;

const ITEM_FILL: &str = "#4a90d9";
const ITEM_STROKE: &str = "#2a5a99";
const DRAGGED_ITEM_OPACITY: f64 = 0.4;
const PREVIEW_FILL: &str = "rgba(0, 128, 255, 0.3)";
const PREVIEW_STROKE: &str = "#0077cc";

/// Render the cell grid as SVG path commands
pub fn render_grid_lines(viewport: &GridViewport) -> String {
    let (surface_width, surface_height) = viewport.surface_size();
    let step = viewport.cell_size();
    let mut path = String::new();

    // Vertical lines, including both outer edges
    let mut x = 0.0;
    while x <= surface_width {
        path.push_str(&format!("M {} 0 L {} {} ", x, x, surface_height));
        x += step;
    }

    // Horizontal lines
    let mut y = 0.0;
    while y <= surface_height {
        path.push_str(&format!("M 0 {} L {} {} ", y, surface_width, y));
        y += step;
    }

    path
}

/// Render all committed items as SVG rect elements
///
/// The item currently being dragged (the one owning the preview) is drawn
/// dimmed at its committed position so the preview overlay reads as the
/// candidate destination.
pub fn render_items(board: &Board, viewport: &GridViewport) -> String {
    let dragging_id = board.preview().map(|preview| preview.item_id.as_str());
    let mut svg = String::new();

    for item in board.items() {
        let rect = viewport.rect_to_pixel(&item.footprint());
        let opacity = if Some(item.id.as_str()) == dragging_id {
            DRAGGED_ITEM_OPACITY
        } else {
            1.0
        };
        svg.push_str(&format!(
            r#"<rect id="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" opacity="{}"/>"#,
            item.id, rect.x, rect.y, rect.width, rect.height, ITEM_FILL, ITEM_STROKE, opacity
        ));
    }

    svg
}

/// Render the drag preview overlay, empty when no candidate is active
pub fn render_preview(board: &Board, viewport: &GridViewport) -> String {
    match board.preview() {
        Some(preview) => {
            let rect = viewport.rect_to_pixel(&preview.rect);
            format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2" stroke-dasharray="6 3"/>"#,
                rect.x, rect.y, rect.width, rect.height, PREVIEW_FILL, PREVIEW_STROKE
            )
        }
        None => String::new(),
    }
}

/// Render the complete board as a standalone SVG document
pub fn render_board(board: &Board) -> String {
    let viewport = GridViewport::new(board.config());
    let (surface_width, surface_height) = viewport.surface_size();

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        surface_width, surface_height, surface_width, surface_height
    );
    svg.push_str(&format!(
        r##"<path d="{}" stroke="#ddd" fill="none"/>"##,
        render_grid_lines(&viewport).trim_end()
    ));
    svg.push_str(&render_items(board, &viewport));
    svg.push_str(&render_preview(board, &viewport));
    svg.push_str("</svg>");
    svg
}
