//! # clientkit-http
//!
//! A small JSON-over-HTTP client.
//!
//! [`HttpClient`] sends every request to a fixed base URL with
//! `Content-Type: application/json` and `Accept: application/json` headers,
//! bounds each call by a timeout (10 seconds unless configured otherwise),
//! and turns every failure into an [`Error`]:
//!
//! | Failure | Error |
//! |---------|-------|
//! | no response at all | [`Error::Network`] |
//! | no status line in time | [`Error::Timeout`] |
//! | status outside 2xx | [`Error::Status`] |
//! | bad caller header | [`Error::InvalidHeaderName`], [`Error::InvalidHeaderValue`] |
//! | body is not the expected JSON | [`Error::Serialization`] |
//!
//! Nothing is retried.
//!
//! ```ignore
//! use clientkit_http::{HttpClient, RequestOptions};
//!
//! let client = HttpClient::new("https://api.example.com")?;
//!
//! let todos: Vec<Todo> = client.get("/todos", RequestOptions::new()).await?;
//!
//! let created: Todo = client
//!     .post("/todos", Some(&new_todo), RequestOptions::new())
//!     .await?;
//!
//! let text: String = client
//!     .get("/motd", RequestOptions::new().with_header("Accept", "text/plain"))
//!     .await?;
//! ```
//!
//! ## Transports
//!
//! The network itself sits behind [`HttpTransport`]. [`ReqwestTransport`] is
//! the production implementation, and works on `wasm32` through the browser's
//! fetch. Tests can supply their own.
//!
//! ## Shared client
//!
//! [`HttpClient::shared`] lazily builds one process-wide client whose base
//! URL comes from the `CLIENTKIT_API_URL` environment variable. Prefer
//! passing an explicitly constructed client where you can.

pub mod client;
pub mod environment;
pub mod error;
pub mod transport;
pub mod types;

mod timeout;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use environment::{Environment, API_URL_VAR};
pub use error::Error;
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{BodyFuture, HttpRequest, HttpResponse, Method, RequestOptions};
