use gridkit_placement::{CellBounds, GridRect};

#[test]
fn test_bounds_creation() {
    let bounds = CellBounds::new(0, 9, 0, 9);
    assert_eq!(bounds.left, 0);
    assert_eq!(bounds.right, 9);
    assert_eq!(bounds.width(), 10);
    assert_eq!(bounds.height(), 10);
}

#[test]
fn test_rect_bounds_are_inclusive() {
    // A 2x3 footprint at the origin occupies columns 0..=1, rows 0..=2
    let rect = GridRect::new(0, 0, 2, 3);
    let bounds = rect.bounds();
    assert_eq!(bounds.left, 0);
    assert_eq!(bounds.right, 1);
    assert_eq!(bounds.top, 0);
    assert_eq!(bounds.bottom, 2);
}

#[test]
fn test_bounds_contains_cell() {
    let bounds = GridRect::new(2, 3, 2, 2).bounds();
    assert!(bounds.contains_cell(2, 3));
    assert!(bounds.contains_cell(3, 4));
    assert!(!bounds.contains_cell(1, 3));
    assert!(!bounds.contains_cell(2, 5));
}

#[test]
fn test_bounds_intersection() {
    let b1 = GridRect::new(0, 0, 10, 10).bounds();
    let b2 = GridRect::new(5, 5, 10, 10).bounds();
    let b3 = GridRect::new(20, 20, 5, 5).bounds();

    assert!(b1.intersects(&b2));
    assert!(b2.intersects(&b1));
    assert!(!b1.intersects(&b3));
}

#[test]
fn test_touching_edges_do_not_overlap() {
    // Adjacent cells: first occupies columns 0..=1, second starts at column 2
    let a = GridRect::new(0, 0, 2, 2);
    let b = GridRect::new(0, 2, 2, 2);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));

    // One cell of actual overlap
    let c = GridRect::new(0, 1, 2, 2);
    assert!(a.overlaps(&c));
}

#[test]
fn test_overlap_on_single_axis_is_not_overlap() {
    // Same columns, disjoint rows
    let a = GridRect::new(0, 0, 3, 2);
    let b = GridRect::new(5, 0, 3, 2);
    assert!(!a.overlaps(&b));
}

#[test]
fn test_translated() {
    let rect = GridRect::new(1, 2, 2, 3);
    let moved = rect.translated(-1, 4);
    assert_eq!(moved, GridRect::new(0, 6, 2, 3));
    assert_eq!(moved.width, rect.width);
}

#[test]
fn test_fits_within() {
    assert!(GridRect::new(0, 0, 12, 12).fits_within(12, 12));
    assert!(GridRect::new(9, 10, 2, 3).fits_within(12, 12));

    // Far edge one past the boundary
    assert!(!GridRect::new(10, 10, 2, 3).fits_within(12, 12));
    // Negative placement
    assert!(!GridRect::new(-1, 0, 2, 2).fits_within(12, 12));
    assert!(!GridRect::new(0, -1, 2, 2).fits_within(12, 12));
}
