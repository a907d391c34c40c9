//! Browser `window.localStorage` medium.

use crate::error::Error;
use crate::medium::StorageMedium;

/// The origin-scoped local storage of the current browser window.
pub struct WebLocalStorage {
    storage: web_sys::Storage,
}

impl WebLocalStorage {
    /// Acquire `window.localStorage`.
    ///
    /// Fails when there is no window (e.g. inside a worker) or when the
    /// browser denies storage access.
    pub fn new() -> Result<Self, Error> {
        let window = web_sys::window().ok_or_else(|| Error::Unavailable {
            message: "No window object".to_string(),
        })?;
        let storage = window
            .local_storage()
            .map_err(|err| Error::Unavailable {
                message: format!("localStorage access denied: {:?}", err),
            })?
            .ok_or_else(|| Error::Unavailable {
                message: "No localStorage".to_string(),
            })?;

        Ok(Self { storage })
    }
}

fn unavailable<E: std::fmt::Debug>(err: E) -> Error {
    Error::Unavailable {
        message: format!("{:?}", err),
    }
}

impl StorageMedium for WebLocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.storage.get_item(key).map_err(unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        // The browser throws QuotaExceededError when the origin is full.
        self.storage
            .set_item(key, value)
            .map_err(|err| Error::StorageWrite {
                key: key.to_string(),
                message: format!("{:?}", err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.storage.remove_item(key).map_err(unavailable)
    }

    fn keys(&self) -> Result<Vec<String>, Error> {
        let len = self.storage.length().map_err(unavailable)?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self.storage.key(index).map_err(unavailable)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn clear(&self) -> Result<(), Error> {
        self.storage.clear().map_err(unavailable)
    }
}
