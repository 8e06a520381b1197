//! HTTP client for the ContentZen REST API.
//!
//! Handles bearer authentication, request timeouts, status interpretation
//! and JSON decoding. Every call is exactly one request/response round trip;
//! nothing is retried or cached.

use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use cz_core::config::ClientConfig;
use cz_core::constants;
use cz_core::error::{CzError, CzResult};

/// Accepted status codes for a category of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Reads and updates: exactly 200.
    Ok,
    /// Creates: 200 or 201.
    Created,
    /// Deletes: 200 or 204.
    Deleted,
}

impl Expect {
    /// Whether `status` counts as success for this category.
    pub fn accepts(self, status: StatusCode) -> bool {
        match self {
            Expect::Ok => status == StatusCode::OK,
            Expect::Created => status == StatusCode::OK || status == StatusCode::CREATED,
            Expect::Deleted => status == StatusCode::OK || status == StatusCode::NO_CONTENT,
        }
    }
}

/// Whether a request carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Bearer,
    Public,
}

/// HTTP client for the ContentZen service.
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// is never mutated after construction, so it can be shared across tasks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    /// Service origin, e.g. "https://api.contentzen.io".
    base_url: String,
    /// Versioned API root, e.g. "https://api.contentzen.io/api/v1".
    api_root: String,
    /// Bearer token; `None` means public-only mode.
    api_token: Option<String>,
    /// Whole-request timeout.
    timeout: Duration,
}

impl ApiClient {
    /// Create a client for the production service. An empty token gives a
    /// client that can only reach the public endpoints.
    pub fn new(api_token: &str) -> CzResult<Self> {
        Self::from_config(&ClientConfig::with_token(api_token))
    }

    /// Create a client from configuration, building its own transport.
    pub fn from_config(config: &ClientConfig) -> CzResult<Self> {
        let inner = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("contentzen-rust/{}", constants::APP_VERSION))
            .build()
            .map_err(|e| CzError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_http_client(config, inner))
    }

    /// Create a client that dispatches over an existing transport.
    ///
    /// The configured timeout is still applied to every request.
    pub fn with_http_client(config: &ClientConfig, inner: Client) -> Self {
        let base_url = ClientConfig::sanitize_base_url(&config.base_url);
        let api_root = format!("{base_url}/api/{}", constants::API_VERSION);
        let api_token = config.has_credential().then(|| config.api_token.clone());

        Self {
            inner,
            base_url,
            api_root,
            api_token,
            timeout: config.timeout(),
        }
    }

    /// Get the service base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the versioned API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether authenticated endpoints are usable.
    pub fn has_credential(&self) -> bool {
        self.api_token.is_some()
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Return the token, or the precondition error if none is configured.
    pub(crate) fn require_token(&self) -> CzResult<&str> {
        self.api_token.as_deref().ok_or(CzError::MissingCredential)
    }

    /// Internal: build a request. Fails before touching the network when
    /// the endpoint needs a token and none is set.
    fn build_request(&self, method: Method, path: &str, auth: Auth) -> CzResult<RequestBuilder> {
        let builder = match auth {
            Auth::Bearer => {
                let token = self.require_token()?;
                self.inner.request(method, self.url(path)).bearer_auth(token)
            }
            Auth::Public => self.inner.request(method, self.url(path)),
        };
        Ok(builder.timeout(self.timeout))
    }

    /// Internal: send a request and check its status.
    async fn dispatch(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
        expect: Expect,
    ) -> CzResult<Response> {
        debug!("{} {}", method, path);

        let response = builder.send().await.map_err(Self::classify_error)?;
        Self::check_status(response, expect, method, path)
    }

    async fn send_empty(
        &self,
        method: Method,
        path: &str,
        auth: Auth,
        expect: Expect,
    ) -> CzResult<Response> {
        let builder = self.build_request(method.clone(), path, auth)?;
        self.dispatch(builder, &method, path, expect).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expect: Expect,
    ) -> CzResult<Response> {
        let builder = self.build_request(method.clone(), path, Auth::Bearer)?;
        let payload = serde_json::to_vec(body)?;
        let builder = builder
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.dispatch(builder, &method, path, expect).await
    }

    // --- Public HTTP methods ---

    /// Execute an authenticated GET, expecting 200.
    pub async fn get(&self, path: &str) -> CzResult<Response> {
        self.send_empty(Method::GET, path, Auth::Bearer, Expect::Ok).await
    }

    /// Execute an unauthenticated GET, expecting 200. No Authorization
    /// header is sent even when the client has a token.
    pub async fn get_public(&self, path: &str) -> CzResult<Response> {
        self.send_empty(Method::GET, path, Auth::Public, Expect::Ok).await
    }

    /// Execute an authenticated POST with a JSON body, expecting 200 or 201.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> CzResult<Response> {
        self.send_json(Method::POST, path, body, Expect::Created).await
    }

    /// Execute an authenticated PUT with a JSON body, expecting 200.
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> CzResult<Response> {
        self.send_json(Method::PUT, path, body, Expect::Ok).await
    }

    /// Execute an authenticated DELETE, expecting 200 or 204.
    pub async fn delete(&self, path: &str) -> CzResult<()> {
        self.send_empty(Method::DELETE, path, Auth::Bearer, Expect::Deleted)
            .await?;
        Ok(())
    }

    /// Execute an authenticated multipart POST, expecting 200 or 201.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> CzResult<Response> {
        let builder = self.build_request(Method::POST, path, Auth::Bearer)?;
        self.dispatch(builder.multipart(form), &Method::POST, path, Expect::Created)
            .await
    }

    // --- Response helpers ---

    /// Decode a response body as JSON.
    pub async fn parse_response<T: DeserializeOwned>(response: Response) -> CzResult<T> {
        let bytes = response.bytes().await.map_err(Self::classify_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| CzError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Convenience: authenticated GET + decode.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CzResult<T> {
        let resp = self.get(path).await?;
        Self::parse_response(resp).await
    }

    /// Convenience: public GET + decode.
    pub async fn get_public_json<T: DeserializeOwned>(&self, path: &str) -> CzResult<T> {
        let resp = self.get_public(path).await?;
        Self::parse_response(resp).await
    }

    /// Convenience: POST + decode.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> CzResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path, body).await?;
        Self::parse_response(resp).await
    }

    /// Convenience: PUT + decode.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> CzResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.put(path, body).await?;
        Self::parse_response(resp).await
    }

    /// Check the HTTP status code against the accepted set.
    fn check_status(
        response: Response,
        expect: Expect,
        method: &Method,
        path: &str,
    ) -> CzResult<Response> {
        let status = response.status();
        if expect.accepts(status) {
            return Ok(response);
        }

        let reason = Self::reason_phrase(&response);
        warn!("{} {} rejected with status {} {}", method, path, status.as_u16(), reason);
        Err(CzError::UnexpectedStatus {
            status: status.as_u16(),
            reason,
        })
    }

    /// The reason phrase from the server's status line. hyper only records
    /// phrases that differ from the canonical one.
    fn reason_phrase(response: &Response) -> String {
        response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .and_then(|r| std::str::from_utf8(r.as_bytes()).ok())
            .filter(|r| !r.is_empty())
            .or_else(|| response.status().canonical_reason())
            .unwrap_or("Unknown")
            .to_string()
    }

    /// Classify a reqwest error into a CzError variant.
    pub(crate) fn classify_error(e: reqwest::Error) -> CzError {
        if e.is_timeout() {
            CzError::Timeout(e.to_string())
        } else if e.is_connect() {
            CzError::Http(format!("connection failed: {e}"))
        } else if e.is_decode() {
            CzError::Serialization(e.to_string())
        } else {
            CzError::Http(e.to_string())
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_root", &self.api_root)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}
