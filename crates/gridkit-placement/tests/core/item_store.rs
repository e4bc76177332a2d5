use gridkit_placement::{Item, ItemStore, Rotation};

#[test]
fn test_empty_store() {
    let store = ItemStore::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(!store.contains("item-1"));
    assert!(store.get("item-1").is_none());
}

#[test]
fn test_insert_and_get() {
    let mut store = ItemStore::new();
    store.insert(Item::new("item-1", 2, 3, 0, 0));
    store.insert(Item::new("item-2", 1, 2, 5, 5));

    assert_eq!(store.len(), 2);
    assert!(store.contains("item-2"));

    let item = store.get("item-1").unwrap();
    assert_eq!(item.width, 2);
    assert_eq!(item.height, 3);
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut store = ItemStore::new();
    for id in ["c", "a", "b"] {
        store.insert(Item::new(id, 1, 1, 0, 0));
    }
    let ids: Vec<&str> = store.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn test_replace_swaps_whole_item() {
    let mut store = ItemStore::new();
    store.insert(Item::new("item-1", 2, 3, 0, 0));

    let mut updated = Item::new("item-1", 2, 3, 4, 6);
    updated.rotation = Rotation::Deg90;
    assert!(store.replace(updated.clone()));

    assert_eq!(store.get("item-1"), Some(&updated));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_replace_unknown_id_is_refused() {
    let mut store = ItemStore::new();
    store.insert(Item::new("item-1", 2, 3, 0, 0));
    assert!(!store.replace(Item::new("ghost", 1, 1, 0, 0)));
    assert_eq!(store.len(), 1);
    assert!(!store.contains("ghost"));
}
