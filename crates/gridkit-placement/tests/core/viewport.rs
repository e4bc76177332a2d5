use gridkit_core::GridConfig;
use gridkit_placement::{GridRect, GridViewport, PixelDelta};

fn viewport() -> GridViewport {
    GridViewport::new(&GridConfig::default())
}

#[test]
fn test_cell_to_pixel() {
    let viewport = viewport();
    assert_eq!(viewport.cell_to_pixel(0, 0), (0.0, 0.0));
    assert_eq!(viewport.cell_to_pixel(2, 3), (75.0, 50.0));
}

#[test]
fn test_surface_size() {
    let viewport = viewport();
    assert_eq!(viewport.surface_size(), (300.0, 300.0));
}

#[test]
fn test_rect_to_pixel() {
    let viewport = viewport();
    let rect = viewport.rect_to_pixel(&GridRect::new(1, 2, 2, 3));
    assert_eq!(rect.x, 50.0);
    assert_eq!(rect.y, 25.0);
    assert_eq!(rect.width, 50.0);
    assert_eq!(rect.height, 75.0);
}

#[test]
fn test_pixel_to_cell_floors_toward_negative() {
    let viewport = viewport();
    assert_eq!(viewport.pixel_to_cell(0.0, 0.0), (0, 0));
    assert_eq!(viewport.pixel_to_cell(24.9, 24.9), (0, 0));
    assert_eq!(viewport.pixel_to_cell(25.0, 0.0), (0, 1));
    assert_eq!(viewport.pixel_to_cell(-0.1, 0.0), (0, -1));
}

#[test]
fn test_delta_rounds_per_axis() {
    let viewport = viewport();

    // 30px right of a 25px cell rounds to one cell; no vertical movement
    assert_eq!(
        viewport.pixel_delta_to_cells(PixelDelta::new(30.0, 0.0)),
        (0, 1)
    );

    // Under half a cell rounds to zero
    assert_eq!(
        viewport.pixel_delta_to_cells(PixelDelta::new(12.0, -12.0)),
        (0, 0)
    );

    // Axes round independently
    assert_eq!(
        viewport.pixel_delta_to_cells(PixelDelta::new(-30.0, 60.0)),
        (2, -1)
    );
}
