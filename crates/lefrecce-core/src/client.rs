//! HTTP transport for the lefrecce.it private API
//!
//! This module provides the low-level client that owns the session cookie
//! jar and performs GET/POST/PUT calls with the fixed headers the site
//! expects. Endpoint methods live in [`crate::api`]; this layer only knows
//! how to build URLs, attach headers and normalize responses.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::{LefrecceError, Result};

/// Base URL of the lefrecce.it mobile site
const DEFAULT_BASE_URL: &str = "https://www.lefrecce.it/msite";

/// Default interface language, sent as `Accept-Language`
const DEFAULT_LANGUAGE: &str = "en-US";

/// Fixed User-Agent the API expects; it refuses plain library agents
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; WOW64; rv:56.0) Gecko/20100101 Firefox/56.0";

/// How much of a bad response body to keep in JSON decode errors
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the LeFrecce HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the site (override for testing)
    pub base_url: String,
    /// Interface language sent as `Accept-Language` (default: "en-US")
    pub language: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Set a custom base URL (for testing against a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the interface language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client holding the session cookie jar
///
/// The jar is created at construction and mutated implicitly by every
/// round trip as the server sets session cookies; login state lives only
/// in those cookies. Dropping the client drops the session. One client
/// serves one session; there is no internal locking, so share it across
/// threads only behind external synchronization.
pub struct LefrecceClient {
    /// Underlying HTTP client (cookie store enabled)
    http: reqwest::Client,
    /// Base URL all endpoint paths are resolved against
    base_url: String,
    /// Current interface language
    language: String,
    /// Whether a login call has succeeded on this session (informational)
    logged_in: bool,
}

impl LefrecceClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            language: config.language,
            logged_in: false,
        })
    }

    /// Get the current interface language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the interface language for subsequent requests.
    ///
    /// Takes effect on the next request; no request is made here.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Whether a login call has succeeded on this session.
    ///
    /// Informational only: the server tracks the session through cookies,
    /// which may expire without this flag changing.
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub(crate) fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    /// Build a full URL for an API endpoint path.
    ///
    /// API operations all live under `/api/users/` on the mobile site.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/users/{}", self.base_url, path)
    }

    /// Build a full URL for a path directly under the site root.
    ///
    /// Only the logout endpoint lives outside the `/api` namespace.
    pub fn site_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET a URL and decode the response body as JSON
    ///
    /// # Errors
    /// - [`LefrecceError::Http`] on a transport fault
    /// - [`LefrecceError::Status`] on a non-2xx response
    /// - [`LefrecceError::Json`] if the body is not valid JSON
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, &self.language)
            .send()
            .await?;

        let body = Self::check_status(response).await?;
        decode_json(&body)
    }

    /// GET a URL and return the raw text body.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT_LANGUAGE, &self.language)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// GET a URL and return the raw bytes (ticket PDFs).
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT_LANGUAGE, &self.language)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LefrecceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// POST a form-url-encoded body and return the raw text response.
    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let response = self
            .http
            .post(url)
            .header(ACCEPT_LANGUAGE, &self.language)
            .form(form)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// POST a JSON body and decode the response as JSON.
    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Value> {
        self.send_json(Method::POST, url, body).await
    }

    /// PUT a JSON body and decode the response as JSON.
    pub async fn put_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Value> {
        self.send_json(Method::PUT, url, body).await
    }

    /// Send a JSON body with an arbitrary method and decode the response.
    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: &T,
    ) -> Result<Value> {
        let response = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, &self.language)
            .json(body)
            .send()
            .await?;

        let body = Self::check_status(response).await?;
        decode_json(&body)
    }

    /// Turn a non-2xx response into a typed error, otherwise read the body.
    async fn check_status(response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LefrecceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Decode a response body, keeping a truncated copy of it on failure.
fn decode_json(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| LefrecceError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(ERROR_BODY_LIMIT).collect()),
    })
}
