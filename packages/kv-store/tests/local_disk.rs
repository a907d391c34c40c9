use serde::{Deserialize, Serialize};

use clientkit_kv_store::{Error, KeyValueStore, LocalDiskMedium};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct Preferences {
    theme: String,
    page_size: u32,
    pinned: Vec<String>,
}

fn preferences() -> Preferences {
    Preferences {
        theme: "dark".to_string(),
        page_size: 50,
        pinned: vec!["inbox".to_string(), "drafts".to_string()],
    }
}

#[test]
fn test_values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("local_storage.json");

    {
        let store = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap());
        store.set_item("prefs", &preferences()).unwrap();
        store.set_item("visits", &3).unwrap();
    }

    let store = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap());
    assert_eq!(
        store.get_item::<Preferences>("prefs").unwrap(),
        Some(preferences())
    );
    assert_eq!(store.get_item::<u32>("visits").unwrap(), Some(3));
    assert_eq!(store.get_all_keys().unwrap(), vec!["prefs", "visits"]);
}

#[test]
fn test_remove_and_clear_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("local_storage.json");

    let store = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap());
    store.set_item("a", &"one").unwrap();
    store.set_item("b", &"two").unwrap();
    store.set_item("c", &"three").unwrap();
    store.remove_item("b").unwrap();

    let reopened = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap());
    assert!(reopened.has_item("a").unwrap());
    assert!(!reopened.has_item("b").unwrap());

    reopened.clear().unwrap();
    let reopened_again = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap());
    assert!(reopened_again.get_all_keys().unwrap().is_empty());
    assert!(!reopened_again.has_item("c").unwrap());
}

#[test]
fn test_quota_exceeded_keeps_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("local_storage.json");

    let store = KeyValueStore::new(LocalDiskMedium::open(&file).unwrap().with_quota(64));
    store.set_item("note", &"short").unwrap();

    let err = store.set_item("note", &"x".repeat(128)).unwrap_err();
    assert!(matches!(err, Error::StorageWrite { ref key, .. } if key == "note"));
    assert_eq!(
        store.get_item::<String>("note").unwrap().as_deref(),
        Some("short")
    );
}
