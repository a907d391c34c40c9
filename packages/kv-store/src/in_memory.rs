//! In-memory storage medium.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Error;
use crate::medium::{check_quota, StorageMedium};

/// A storage medium backed by a process-local sorted map.
///
/// Keys enumerate in lexicographic order. An optional byte quota mimics the
/// capacity limit of browser local storage.
///
/// # Example
///
/// ```rust
/// use clientkit_kv_store::{InMemoryMedium, StorageMedium};
///
/// let medium = InMemoryMedium::new();
/// medium.set("name", "\"Alice\"").unwrap();
/// assert_eq!(medium.get("name").unwrap().as_deref(), Some("\"Alice\""));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMedium {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryMedium {
    /// Create a new empty medium with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a medium pre-populated with raw entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            quota: None,
        }
    }

    /// Limit the total size of keys and values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageMedium for InMemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.entries();
        check_quota(&entries, key, value, self.quota)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Ok(self.entries().keys().cloned().collect())
    }

    fn clear(&self) -> Result<(), Error> {
        self.entries().clear();
        Ok(())
    }
}
