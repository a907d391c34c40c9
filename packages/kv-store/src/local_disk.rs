use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::{fs, io};

use crate::error::Error;
use crate::medium::{check_quota, StorageMedium};

/// A storage medium persisted as a single JSON object file.
///
/// The file is loaded once when the medium is opened and rewritten on every
/// mutation. Rewrites go to a sibling temp file that is then renamed over the
/// original, so a crash mid-write never leaves a truncated store behind.
pub struct LocalDiskMedium {
    file: PathBuf,
    quota: Option<usize>,
    entries: Mutex<BTreeMap<String, String>>,
}

impl LocalDiskMedium {
    /// Open (or lazily create) the store file at `file`.
    ///
    /// Missing parent directories are created. An existing file must contain
    /// a JSON object of string values.
    pub fn open(file: impl Into<PathBuf>) -> Result<LocalDiskMedium, Error> {
        let file = file.into();

        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let entries = match fs::read_to_string(&file) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|err| Error::Unavailable {
                message: format!(
                    "{} is not a valid storage file: {}",
                    file.display(),
                    err
                ),
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(Error::Io { path: file, source }),
        };

        tracing::debug!(file = %file.display(), entries = entries.len(), "opened local disk medium");

        Ok(LocalDiskMedium {
            file,
            quota: None,
            entries: Mutex::new(entries),
        })
    }

    /// Limit the total size of keys and values to `bytes`.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` to a copy of the entries, persist the copy, and only
    /// then make it visible.
    fn mutate<F>(&self, change: F) -> Result<(), Error>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> Result<(), Error>,
    {
        let mut entries = self.entries();
        let mut next = entries.clone();
        change(&mut next)?;
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), Error> {
        let text = serde_json::to_string(entries)?;

        let mut tmp_name = self.file.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        tracing::trace!(file = %self.file.display(), bytes = text.len(), "writing local disk medium");

        if let Err(source) = fs::write(&tmp, text.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::Io { path: tmp, source });
        }
        if let Err(source) = fs::rename(&tmp, &self.file) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::Io {
                path: self.file.clone(),
                source,
            });
        }
        Ok(())
    }
}

impl StorageMedium for LocalDiskMedium {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.mutate(|entries| {
            check_quota(entries, key, value, self.quota)?;
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        if !self.entries().contains_key(key) {
            return Ok(());
        }
        self.mutate(|entries| {
            entries.remove(key);
            Ok(())
        })
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        Ok(self.entries().keys().cloned().collect())
    }

    fn clear(&self) -> Result<(), Error> {
        self.mutate(|entries| {
            entries.clear();
            Ok(())
        })
    }
}
