//! Typed JSON access on top of a [`StorageMedium`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::medium::StorageMedium;

/// A typed key-value store that serializes every value as JSON text.
///
/// Values carry no type or version tag: whatever reads a key is trusted to
/// ask for the same shape that was written.
#[derive(Debug, Default)]
pub struct KeyValueStore<M> {
    medium: M,
}

impl<M: StorageMedium> KeyValueStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// The underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Serialize `value` to JSON and store it under `key`.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), Error> {
        let text = serde_json::to_string(value)?;
        tracing::trace!(key, bytes = text.len(), "set_item");
        self.medium.set(key, &text)
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Absent keys, and keys holding empty text, yield `Ok(None)`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.medium.get(key)? {
            Some(text) if !text.is_empty() => Ok(Some(serde_json::from_str(&text)?)),
            _ => Ok(None),
        }
    }

    pub fn get_all_keys(&self) -> Result<Vec<String>, Error> {
        self.medium.keys()
    }

    pub fn remove_item(&self, key: &str) -> Result<(), Error> {
        tracing::trace!(key, "remove_item");
        self.medium.remove(key)
    }

    /// True if any raw entry exists under `key`, even one that is not JSON.
    pub fn has_item(&self, key: &str) -> Result<bool, Error> {
        Ok(self.medium.get(key)?.is_some())
    }

    /// Delete every entry in the medium.
    ///
    /// This is not limited to keys written through this store: anything else
    /// sharing the medium is wiped too.
    pub fn clear(&self) -> Result<(), Error> {
        tracing::debug!("clearing storage medium");
        self.medium.clear()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod shared {
    use std::path::PathBuf;
    use std::sync::OnceLock;

    use super::KeyValueStore;
    use crate::error::Error;
    use crate::local_disk::LocalDiskMedium;

    static SHARED: OnceLock<KeyValueStore<LocalDiskMedium>> = OnceLock::new();

    impl KeyValueStore<LocalDiskMedium> {
        /// The process-wide store, backed by [`Self::default_location`].
        ///
        /// Opened on first call and reused for the life of the process.
        pub fn shared() -> Result<&'static Self, Error> {
            if let Some(store) = SHARED.get() {
                return Ok(store);
            }
            let store = KeyValueStore::new(LocalDiskMedium::open(Self::default_location()?)?);
            Ok(SHARED.get_or_init(|| store))
        }

        /// `<local data dir>/clientkit/local_storage.json`.
        pub fn default_location() -> Result<PathBuf, Error> {
            let base = dirs::data_local_dir().ok_or_else(|| Error::Unavailable {
                message: "No local data directory for this platform".to_string(),
            })?;
            Ok(base.join("clientkit").join("local_storage.json"))
        }
    }
}
