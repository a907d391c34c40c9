use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A value could not be converted to or from JSON text.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The medium refused a write, e.g. because its quota is exhausted.
    #[error("Storage write rejected for key '{key}': {message}")]
    StorageWrite { key: String, message: String },

    #[error("Storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn quota_exceeded(key: &str, used: usize, quota: usize) -> Self {
        Error::StorageWrite {
            key: key.to_string(),
            message: format!(
                "quota exceeded: write needs {} bytes but the quota is {} bytes",
                used, quota
            ),
        }
    }
}
