//! HTTP transport abstraction.
//!
//! [`HttpClient`](crate::HttpClient) builds requests and interprets responses;
//! a transport only moves bytes. Swapping the transport lets tests script
//! responses without touching the network.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Trait for sending HTTP requests.
///
/// Resolves as soon as the status line and headers are in; the body is read
/// later through [`HttpResponse::text`]. Returns `Err` with a message if no
/// response could be obtained at all (DNS failure, connection refused,
/// offline). Any response, whatever its status, is `Ok`.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String>;
}

/// Production transport using reqwest.
///
/// Applies no timeout of its own; the client bounds every call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        let method: http::Method = request.method.into();

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| e.to_string())?;
            let header_value = HeaderValue::try_from(value.as_str()).map_err(|e| e.to_string())?;
            headers.insert(header_name, header_value);
        }

        let mut req_builder = self.client.request(method, &request.url).headers(headers);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().await.map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut resp_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                resp_headers.insert(name.to_string(), v.to_string());
            }
        }

        Ok(HttpResponse::from_parts(
            status,
            status_text,
            resp_headers,
            Box::pin(async move { response.text().await.map_err(|e| e.to_string()) }),
        ))
    }
}
