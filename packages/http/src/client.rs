//! JSON-over-HTTP client bound to one base URL.
//!
//! Every call goes through the same pipeline:
//!
//! ```text
//! base_url + path ──► merge headers ──► serialize body ──► transport.send
//!                                                              │
//!                               timeout fires ◄── race ────────┘
//!                                     │             │
//!                               Error::Timeout   status + headers
//!                                                   │
//!                                     non-2xx ──► Error::Status
//!                                     2xx     ──► read body ──► parse JSON
//! ```
//!
//! The timeout covers the wait for the response head only. Once the status
//! line is in, the body is read to completion however long it takes.
//!
//! The base URL and path are concatenated verbatim. A base of
//! `https://api.example.com` and a path of `users` produce
//! `https://api.example.comusers`; callers supply the separating slash.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use http::header::{HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::environment::Environment;
use crate::error::Error;
use crate::timeout;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{merge_headers, HttpRequest, Method, RequestOptions};

/// How long a request may wait for its response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

static SHARED: OnceLock<HttpClient> = OnceLock::new();

fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ])
}

/// HTTP client with a fixed base URL, default JSON headers and a per-request
/// timeout.
///
/// Configuration is set at construction and never changes, so a client can
/// be shared by reference across concurrent calls.
///
/// # Example
///
/// ```ignore
/// use clientkit_http::{HttpClient, RequestOptions};
///
/// let client = HttpClient::new("https://api.example.com")?;
///
/// let user: User = client.get("/users/123", RequestOptions::new()).await?;
/// let created: User = client.post("/users", Some(&new_user), RequestOptions::new()).await?;
/// ```
pub struct HttpClient {
    base_url: String,
    default_headers: HashMap<String, String>,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a client for `base_url` using the reqwest transport.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_transport(base_url, ReqwestTransport::new()?)
    }

    pub fn from_environment(environment: &Environment) -> Result<Self, Error> {
        Self::new(&environment.api_url)
    }

    /// Create a client that sends through `transport`.
    ///
    /// `base_url` must be an absolute URL.
    pub fn with_transport(
        base_url: &str,
        transport: impl HttpTransport + 'static,
    ) -> Result<Self, Error> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                message: format!("'{}' cannot be used as a base URL", base_url),
            });
        }

        Ok(Self {
            base_url: base_url.to_string(),
            default_headers: default_headers(),
            timeout: DEFAULT_TIMEOUT,
            transport: Arc::new(transport),
        })
    }

    /// Replace the default timeout. Only available while building the client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The process-wide client, configured from [`Environment::from_env`].
    ///
    /// Built on first call and reused for the life of the process.
    pub fn shared() -> Result<&'static HttpClient, Error> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = Self::from_environment(&Environment::from_env()?)?;
        Ok(SHARED.get_or_init(|| client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let request = self.build_request::<()>(Method::GET, path, None, &options)?;
        self.execute(request).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let request = self.build_request(Method::POST, path, body, &options)?;
        self.execute(request).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let request = self.build_request(Method::PUT, path, body, &options)?;
        self.execute(request).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, Error> {
        let request = self.build_request::<()>(Method::DELETE, path, None, &options)?;
        self.execute(request).await
    }

    /// Build the request a call would send, without sending it.
    ///
    /// Fails with [`Error::InvalidHeaderName`] or [`Error::InvalidHeaderValue`]
    /// if a merged header could not go on the wire.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<HttpRequest, Error> {
        let headers = merge_headers(&self.default_headers, &options.headers);
        for (name, value) in &headers {
            HeaderName::try_from(name.as_str())?;
            HeaderValue::try_from(value.as_str())?;
        }

        let body = body.map(serde_json::to_string).transpose()?;

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, Error> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let response = match timeout::within(self.timeout, self.transport.send(&request)).await {
            Some(Ok(response)) => response,
            Some(Err(message)) => {
                tracing::debug!(url = %request.url, error = %message, "request failed");
                return Err(Error::Network { message });
            }
            None => {
                tracing::debug!(
                    url = %request.url,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "request timed out"
                );
                return Err(Error::Timeout {
                    timeout: self.timeout,
                });
            }
        };

        tracing::debug!(url = %request.url, status = response.status, "received response");

        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
            });
        }

        let text = response.text().await.map_err(|message| {
            tracing::debug!(url = %request.url, error = %message, "reading body failed");
            Error::Network { message }
        })?;

        Ok(serde_json::from_str(&text)?)
    }
}
