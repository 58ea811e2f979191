//! HTTP client wrapper.
//!
//! Builds requests against the configured base URL, attaches the session's
//! bearer token, and normalizes non-success responses into
//! `ApiError::RequestFailed`. The actual exchange goes through a `Transport`
//! so the same logic runs in the browser and in tests. No retries, timeouts or
//! caching.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::protocol::{ApiRequest, HttpMethod};
use crate::session::Session;

#[cfg(test)]
mod tests;

// =========================================================
// Wire types
// =========================================================

/// A fully built request, ready for a transport.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks up a header value, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "[REDACTED]")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange.
///
/// Errors returned here mean no status was received; non-2xx responses are
/// returned as `Ok` and classified by the client.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =========================================================
// Client
// =========================================================

#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            session,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Builds the request for `path`, reading the token at call time.
    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        }
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.execute(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let body = encode(body)?;
        self.execute(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let body = encode(body)?;
        self.execute(HttpMethod::Patch, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.execute(HttpMethod::Delete, path, None).await
    }

    /// Executes a typed endpoint and decodes its response.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<R::Response> {
        let body = if R::METHOD.has_body() {
            Some(encode(request)?)
        } else {
            None
        };
        let value = self.execute(R::METHOD, &request.path(), body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute(&self, method: HttpMethod, path: &str, body: Option<String>) -> ApiResult<Value> {
        let request = self.build_request(method, path, body);
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            log::warn!("{method} {path} failed with status {}", response.status);
            return Err(ApiError::RequestFailed {
                status: response.status,
                body: response.body,
            });
        }

        parse_body(&response.body)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Parses a success body; an empty body is `null`.
fn parse_body(body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
