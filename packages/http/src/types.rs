use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;

/// HTTP method for requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::POST => http::Method::POST,
            Method::PUT => http::Method::PUT,
            Method::DELETE => http::Method::DELETE,
        }
    }
}

/// Look up a header by name, ignoring ASCII case.
pub(crate) fn find_header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Overlay `overrides` onto `defaults`. An override replaces any default
/// whose name matches ignoring ASCII case.
pub(crate) fn merge_headers(
    defaults: &HashMap<String, String>,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    for (name, value) in overrides {
        merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// A fully-built outgoing request, as handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,

    /// Absolute target URL.
    pub url: String,

    pub headers: HashMap<String, String>,

    /// JSON text payload, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Parse the payload as JSON. `None` if there is no payload.
    pub fn json_body<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.body.as_deref().map(serde_json::from_str)
    }
}

/// The still-unread body of a response.
#[cfg(not(target_arch = "wasm32"))]
pub type BodyFuture = Pin<Box<dyn Future<Output = Result<String, String>> + Send>>;

#[cfg(target_arch = "wasm32")]
pub type BodyFuture = Pin<Box<dyn Future<Output = Result<String, String>>>>;

/// A response whose status line and headers have arrived.
///
/// The body is read separately with [`HttpResponse::text`], so a caller can
/// stop timing the request as soon as the head is in.
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,

    pub headers: HashMap<String, String>,

    body: BodyFuture,
}

impl HttpResponse {
    /// A response whose body is already fully available.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::from_parts(
            status,
            canonical_reason(status),
            HashMap::new(),
            Box::pin(std::future::ready(Ok(body))),
        )
    }

    pub fn from_parts(
        status: u16,
        status_text: impl Into<String>,
        headers: HashMap<String, String>,
        body: BodyFuture,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers,
            body,
        }
    }

    /// Check if the response status indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Read the whole body. `Err` carries the transport's message.
    pub async fn text(self) -> Result<String, String> {
        self.body.await
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

pub(crate) fn canonical_reason(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown")
}

/// Per-request options supplied by the caller.
///
/// Headers here override the client's defaults on a name collision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
