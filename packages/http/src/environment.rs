//! Environment configuration for the HTTP client.
//!
//! The only setting is the API base URL. It can come from the process
//! environment (`CLIENTKIT_API_URL`) or from a JSON file shaped like
//! `{"apiUrl": "https://api.example.com"}`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "CLIENTKIT_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub api_url: String,
}

impl Environment {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// Read the base URL from [`API_URL_VAR`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name))
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: FnOnce(&str) -> Result<String, std::env::VarError>,
    {
        match lookup(API_URL_VAR) {
            Ok(api_url) if !api_url.trim().is_empty() => Ok(Self::new(api_url)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Err(Error::Config {
                message: format!("{} is not set", API_URL_VAR),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(Error::Config {
                message: format!("{} contains invalid UTF-8", API_URL_VAR),
            }),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| Error::Config {
            message: format!("Invalid environment JSON: {}", err),
        })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::Config {
            message: format!("Failed to read {}: {}", path.display(), err),
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::env::VarError;
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn lookup_reads_api_url_var() {
        let env = Environment::from_lookup(|name| {
            assert_eq!(name, API_URL_VAR);
            Ok("https://api.example.com".to_string())
        })
        .unwrap();
        assert_eq!(env.api_url, "https://api.example.com");
    }

    #[test]
    fn lookup_missing_var_is_config_error() {
        let err = Environment::from_lookup(|_| Err(VarError::NotPresent)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(API_URL_VAR));
    }

    #[test]
    fn lookup_blank_var_is_config_error() {
        let err = Environment::from_lookup(|_| Ok("  ".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn lookup_non_unicode_is_config_error() {
        let err =
            Environment::from_lookup(|_| Err(VarError::NotUnicode(OsString::from("x")))).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn parses_camel_case_json() {
        let env = Environment::from_json_str(r#"{"apiUrl": "http://localhost:8080/api"}"#).unwrap();
        assert_eq!(env, Environment::new("http://localhost:8080/api"));
    }

    #[test]
    fn rejects_json_without_api_url() {
        let err = Environment::from_json_str(r#"{"api_url": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("environment.json");
        std::fs::write(&file, r#"{"apiUrl": "https://api.example.com"}"#).unwrap();

        let env = Environment::from_json_file(&file).unwrap();
        assert_eq!(env.api_url, "https://api.example.com");
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Environment::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
