//! Kept in its own test binary: it mutates the process environment.

#![cfg(target_os = "linux")]

use clientkit_kv_store::{KeyValueStore, LocalDiskMedium};

#[test]
fn test_shared_store_is_opened_once() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_DATA_HOME", dir.path());

    let location = KeyValueStore::<LocalDiskMedium>::default_location().unwrap();
    assert!(location.starts_with(dir.path()));

    let first = KeyValueStore::<LocalDiskMedium>::shared().unwrap();
    first.set_item("greeting", &"hello").unwrap();

    let second = KeyValueStore::<LocalDiskMedium>::shared().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(
        second.get_item::<String>("greeting").unwrap().as_deref(),
        Some("hello")
    );
    assert_eq!(second.medium().path(), location.as_path());
    assert!(location.exists());
}
