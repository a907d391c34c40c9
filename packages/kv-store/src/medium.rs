//! The storage medium abstraction.
//!
//! A medium is the raw, string-only mapping underneath a
//! [`KeyValueStore`](crate::KeyValueStore). Implementations can wrap browser
//! local storage, a file on disk, or a plain map for tests.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;

/// A synchronous, string-keyed, string-valued storage medium.
///
/// All methods take `&self`: a medium is an ambient resource that may be
/// shared by several handles at once, so implementations manage their own
/// interior mutability.
pub trait StorageMedium {
    /// Read the raw text stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Delete `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), Error>;

    /// Every key currently present, in the medium's own order.
    fn keys(&self) -> Result<Vec<String>, Error>;

    /// Delete every entry in the medium.
    fn clear(&self) -> Result<(), Error>;
}

macro_rules! forward_medium {
    ($ptr:ident) => {
        impl<M: StorageMedium + ?Sized> StorageMedium for $ptr<M> {
            fn get(&self, key: &str) -> Result<Option<String>, Error> {
                (**self).get(key)
            }

            fn set(&self, key: &str, value: &str) -> Result<(), Error> {
                (**self).set(key, value)
            }

            fn remove(&self, key: &str) -> Result<(), Error> {
                (**self).remove(key)
            }

            fn keys(&self) -> Result<Vec<String>, Error> {
                (**self).keys()
            }

            fn clear(&self) -> Result<(), Error> {
                (**self).clear()
            }
        }
    };
}

forward_medium!(Arc);
forward_medium!(Rc);
forward_medium!(Box);

/// Reject a write of `value` under `key` if it would push `entries` past
/// `quota` bytes. Size is counted as UTF-8 bytes of every key and value, with
/// any existing entry for `key` replaced by the new one.
pub(crate) fn check_quota(
    entries: &BTreeMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> Result<(), Error> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let others: usize = entries
        .iter()
        .filter(|(existing, _)| existing.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    let needed = others + key.len() + value.len();

    if needed > quota {
        return Err(Error::quota_exceeded(key, needed, quota));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_quota_accepts_anything() {
        let map = entries(&[("a", "1")]);
        assert!(check_quota(&map, "b", &"x".repeat(10_000), None).is_ok());
    }

    #[test]
    fn quota_counts_keys_and_values() {
        let map = entries(&[("ab", "12")]);
        // 4 existing + 1 + 3 = 8
        assert!(check_quota(&map, "c", "345", Some(8)).is_ok());
        assert!(check_quota(&map, "c", "3456", Some(8)).is_err());
    }

    #[test]
    fn quota_replaces_existing_entry_size() {
        let map = entries(&[("key", "a-long-old-value")]);
        assert!(check_quota(&map, "key", "short", Some(8)).is_ok());
    }

    #[test]
    fn quota_error_is_a_write_error() {
        let map = BTreeMap::new();
        let err = check_quota(&map, "k", "too long", Some(2)).unwrap_err();
        match err {
            Error::StorageWrite { key, message } => {
                assert_eq!(key, "k");
                assert!(message.contains("quota"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
