use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request body could not be serialized, or a response body could not
    /// be parsed into the requested type.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No status line arrived within the client's timeout; the request was
    /// abandoned.
    #[error("Request timed out after {}ms", .timeout.as_millis())]
    Timeout { timeout: Duration },

    /// The transport failed before producing any response, or the
    /// connection broke while the body was being read.
    #[error("Network error: {message}")]
    Network { message: String },

    /// A response arrived with a status outside 200..300.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl Error {
    /// The HTTP status code, for [`Error::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}
