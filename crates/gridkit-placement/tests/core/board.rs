use gridkit_core::{GridConfig, LayoutError, Rotation};
use gridkit_placement::{Board, BoardSnapshot, GridRect, Item, Preview};

fn seeded_board() -> Board {
    Board::with_items(
        GridConfig::default(),
        [
            Item::new("item-1", 2, 3, 0, 0),
            Item::new("item-2", 1, 2, 5, 5),
        ],
    )
    .unwrap()
}

#[test]
fn test_board_rejects_degenerate_config() {
    assert!(Board::new(GridConfig::new(0, 12, 25.0)).is_err());
    assert!(Board::new(GridConfig::new(12, 12, 0.0)).is_err());
}

#[test]
fn test_seeding_rejects_duplicate_id() {
    let mut board = seeded_board();
    let result = board.add_item(Item::new("item-1", 1, 1, 10, 10));
    assert_eq!(
        result,
        Err(LayoutError::DuplicateItem {
            id: "item-1".to_string()
        })
    );
    assert_eq!(board.item_count(), 2);
}

#[test]
fn test_seeding_rejects_invalid_footprint() {
    let mut board = seeded_board();
    assert!(matches!(
        board.add_item(Item::new("bad", 0, 2, 0, 6)),
        Err(LayoutError::InvalidFootprint { .. })
    ));
}

#[test]
fn test_seeding_rejects_out_of_bounds() {
    let mut board = seeded_board();
    assert!(matches!(
        board.add_item(Item::new("bad", 3, 3, 10, 10)),
        Err(LayoutError::OutOfBounds { .. })
    ));
}

#[test]
fn test_seeding_rejects_overlap() {
    let mut board = seeded_board();
    let result = board.add_item(Item::new("bad", 2, 2, 1, 1));
    assert_eq!(
        result,
        Err(LayoutError::Overlap {
            id: "bad".to_string(),
            other: "item-1".to_string()
        })
    );
}

#[test]
fn test_seeding_respects_rotation() {
    let mut board = Board::new(GridConfig::default()).unwrap();
    // 1x3 rotated to an effective 3x1 footprint: fits at col 9, not col 10
    let mut item = Item::new("rotated", 1, 3, 0, 9);
    item.rotation = Rotation::Deg90;
    board.add_item(item).unwrap();

    let mut too_far = Item::new("rotated-2", 1, 3, 5, 10);
    too_far.rotation = Rotation::Deg90;
    assert!(matches!(
        board.add_item(too_far),
        Err(LayoutError::OutOfBounds { .. })
    ));
}

#[test]
fn test_is_valid_position_bounds_clauses() {
    let board = seeded_board();

    assert!(board.is_valid_position(&GridRect::new(0, 2, 2, 3), "item-1"));
    assert!(!board.is_valid_position(&GridRect::new(-1, 0, 2, 3), "item-1"));
    assert!(!board.is_valid_position(&GridRect::new(0, 11, 2, 3), "item-1"));
    assert!(!board.is_valid_position(&GridRect::new(10, 0, 2, 3), "item-1"));
}

#[test]
fn test_is_valid_position_collision_clause() {
    let board = seeded_board();

    // Lands on item-2
    assert!(!board.is_valid_position(&GridRect::new(5, 5, 2, 3), "item-1"));
    // Same cells are fine when item-2 itself is ignored
    assert!(board.is_valid_position(&GridRect::new(5, 5, 1, 2), "item-2"));
}

#[test]
fn test_own_placement_is_always_valid_for_self() {
    let board = seeded_board();
    for item in board.items() {
        assert!(board.is_valid_position(&item.footprint(), &item.id));
    }
}

#[test]
fn test_commit_move_replaces_position_and_clears_preview() {
    let mut board = seeded_board();
    board.set_preview(Some(Preview::new("item-1", GridRect::new(0, 1, 2, 3))));

    assert!(board.commit_move("item-1", 0, 1));

    let item = board.item("item-1").unwrap();
    assert_eq!((item.row, item.col), (0, 1));
    assert_eq!(item.rotation, Rotation::Deg0);
    assert!(board.preview().is_none());
}

#[test]
fn test_commit_move_unknown_id_is_noop() {
    let mut board = seeded_board();
    let before = board.snapshot();
    assert!(!board.commit_move("ghost", 1, 1));
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_commit_rotation_is_atomic() {
    let mut board = seeded_board();
    assert!(board.commit_rotation("item-1", 2, 3, Rotation::Deg90));

    let item = board.item("item-1").unwrap();
    assert_eq!((item.row, item.col), (2, 3));
    assert_eq!(item.rotation, Rotation::Deg90);
    // Stored footprint is untouched; only the effective size swaps
    assert_eq!((item.width, item.height), (2, 3));
    assert_eq!(item.effective_size(), (3, 2));
}

#[test]
fn test_snapshot_captures_state_transition() {
    let mut board = seeded_board();
    let before = board.snapshot();

    board.commit_move("item-2", 6, 6);
    let after = board.snapshot();

    assert_ne!(before, after);
    assert_eq!(before.items.len(), after.items.len());
    let moved = after.items.iter().find(|item| item.id == "item-2").unwrap();
    assert_eq!((moved.row, moved.col), (6, 6));
}

#[test]
fn test_snapshot_serializes_rotation_numerically() {
    let mut board = seeded_board();
    board.commit_rotation("item-1", 0, 0, Rotation::Deg90);

    let snapshot = board.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"rotation\":90"));

    let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
