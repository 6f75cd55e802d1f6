use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Draft {
    title: String,
    pinned: bool,
}

#[test]
fn save_then_load_json_returns_value() {
    let storage = MemoryStorage::default();
    let draft = Draft { title: "Hello".to_owned(), pinned: true };
    save_json(&storage, "draft", &draft);
    assert_eq!(load_json::<Draft>(&storage, "draft"), Some(draft));
}

#[test]
fn load_json_missing_key_is_none() {
    let storage = MemoryStorage::default();
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);
}

#[test]
fn load_json_corrupt_value_is_none() {
    let storage = MemoryStorage::default();
    storage.set_item("draft", "{not json");
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);
}

#[test]
fn remove_item_deletes_key() {
    let storage = MemoryStorage::default();
    storage.set_item("token", "abc");
    assert!(storage.contains("token"));
    storage.remove_item("token");
    assert!(!storage.contains("token"));
    assert_eq!(storage.get_item("token"), None);
}

#[test]
fn local_storage_is_inert_without_browser() {
    let storage = LocalStorage;
    storage.set_item("token", "abc");
    assert_eq!(storage.get_item("token"), None);
}
