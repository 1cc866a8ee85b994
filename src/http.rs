//! Outbound HTTP helpers for lookups against third-party services
//!
//! Requests never fail with an error: transport problems, timeouts and
//! non-200 responses are all folded into [`HttpOutcome`] so lookups can be
//! chained without bailing out on the first unreachable service. There is
//! no retry or backoff.

use crate::config::HttpConfig;
use crate::errors::{AppError, AppResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Deserialise the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Result of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    /// Status 200
    Success(HttpResponse),
    /// Any other status; the response is still available
    Status(HttpResponse),
    /// No response at all (connection, TLS, timeout, invalid URL)
    Failed(String),
}

impl HttpOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, HttpOutcome::Success(_))
    }

    /// The response, if one was received
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            HttpOutcome::Success(resp) | HttpOutcome::Status(resp) => Some(resp),
            HttpOutcome::Failed(_) => None,
        }
    }

    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            HttpOutcome::Success(resp) | HttpOutcome::Status(resp) => Some(resp),
            HttpOutcome::Failed(_) => None,
        }
    }
}

/// HTTP client with the tool's defaults applied
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> AppResult<Self> {
        if !config.verify_tls {
            debug!("TLS certificate verification disabled for outbound requests");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url` with optional query parameters
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> HttpOutcome {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send("GET", url, request).await
    }

    /// POST a JSON body
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> HttpOutcome {
        self.send("POST", url, self.client.post(url).json(body)).await
    }

    /// POST a raw body as-is
    pub async fn post_raw(&self, url: &str, body: impl Into<reqwest::Body>) -> HttpOutcome {
        self.send("POST", url, self.client.post(url).body(body)).await
    }

    async fn send(&self, method: &str, url: &str, request: RequestBuilder) -> HttpOutcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("{} {} failed: {}", method, url, e);
                return HttpOutcome::Failed(e.to_string());
            }
        };

        let status = response.status();
        let final_url = response.url().to_string();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("{} {} body read failed: {}", method, url, e);
                return HttpOutcome::Failed(e.to_string());
            }
        };

        debug!("{} {} -> {}", method, url, status.as_u16());
        let resp = HttpResponse {
            url: final_url,
            status: status.as_u16(),
            body,
        };

        if status == StatusCode::OK {
            HttpOutcome::Success(resp)
        } else {
            HttpOutcome::Status(resp)
        }
    }
}
