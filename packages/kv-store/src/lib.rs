//! # clientkit-kv-store
//!
//! A typed, JSON-serializing key-value store layered over a local-storage
//! style medium: a synchronous, string-keyed, string-valued mapping.
//!
//! ## Media
//!
//! ### InMemoryMedium
//!
//! Process-local map, mostly useful in tests:
//!
//! ```rust
//! use clientkit_kv_store::{InMemoryMedium, KeyValueStore};
//!
//! let store = KeyValueStore::new(InMemoryMedium::new());
//! store.set_item("theme", "dark").unwrap();
//!
//! let theme: Option<String> = store.get_item("theme").unwrap();
//! assert_eq!(theme.as_deref(), Some("dark"));
//! ```
//!
//! ### LocalDiskMedium
//!
//! Persists the whole mapping to one JSON file so values survive restarts:
//!
//! ```ignore
//! use clientkit_kv_store::{KeyValueStore, LocalDiskMedium};
//!
//! let store = KeyValueStore::new(LocalDiskMedium::open("/tmp/app/local_storage.json")?);
//! store.set_item("session", &session)?;
//! ```
//!
//! ### WebLocalStorage
//!
//! `window.localStorage` when compiled for `wasm32` with the `web` feature:
//!
//! ```ignore
//! use clientkit_kv_store::{KeyValueStore, WebLocalStorage};
//!
//! let store = KeyValueStore::new(WebLocalStorage::new()?);
//! ```
//!
//! Note that [`KeyValueStore::clear`] clears the entire medium, including
//! entries written by any other code sharing it.

pub mod error;
pub mod in_memory;
#[cfg(not(target_arch = "wasm32"))]
pub mod local_disk;
pub mod medium;
pub mod store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use error::Error;
pub use in_memory::InMemoryMedium;
#[cfg(not(target_arch = "wasm32"))]
pub use local_disk::LocalDiskMedium;
pub use medium::StorageMedium;
pub use store::KeyValueStore;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebLocalStorage;
