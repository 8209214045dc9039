//! HTTP client for Omise API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to one Omise host (main API or vault).

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{HostUrl, OmiseConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header used to pin the API version.
pub const API_VERSION_HEADER: &str = "Omise-Version";

/// HTTP client bound to one Omise host and one credential.
///
/// The client handles:
/// - Base URI construction from the configured host
/// - Basic authentication with the key as user name and an empty password
/// - Default headers including User-Agent, Accept and the pinned version
/// - JSON body parsing and mapping of non-2xx responses to [`ApiError`]
///
/// No retries are attempted. Every call to [`request`](Self::request) is
/// exactly one round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use omise_api::{OmiseConfig, SecretKey};
/// use omise_api::clients::HttpClient;
///
/// let config = OmiseConfig::builder()
///     .secret_key(SecretKey::new("skey_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(config.api_host(), "skey_test_123", &config).unwrap();
/// assert_eq!(client.base_uri(), "https://api.omise.co");
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.omise.co`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&String> = self.default_headers.keys().collect();
        header_names.sort();
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for `host`, authenticating with `key`.
    ///
    /// # Arguments
    ///
    /// * `host` - The base URL requests are sent to
    /// * `key` - The secret or public key used as the basic auth user name
    /// * `config` - Configuration for `api_version`, `user_agent_prefix` and `timeout`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(host: &HostUrl, key: &str, config: &OmiseConfig) -> Result<Self, HttpError> {
        let base_uri = host.as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}OmiseRust/{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", BASE64.encode(format!("{key}:"))),
        );

        if let Some(version) = config.api_version() {
            default_headers.insert(API_VERSION_HEADER.to_string(), version.to_string());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!(base_uri = %base_uri, "Created Omise HTTP client");

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the host.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Api`)
    /// - A 2xx body is not valid JSON (`MalformedBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        let url = format!(
            "{}/{}",
            self.base_uri,
            request.path.trim_start_matches('/')
        );

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(
            method = %request.http_method,
            host = %self.base_uri,
            path = %request.path,
            "Sending Omise API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = Self::parse_body(code, &body_text)?;
        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error = ApiError::from_body(
            code,
            &response.body,
            response.request_id().map(String::from),
        );
        tracing::warn!(
            status = code,
            code = ?error.code,
            path = %request.path,
            "Omise API returned an error: {}",
            error.message
        );
        Err(HttpError::Api(error))
    }

    /// Parses a response body, treating an empty body as `{}`.
    ///
    /// Unparseable error bodies are kept as `{"raw_body": ...}` so the API
    /// error still surfaces; unparseable success bodies are an error.
    fn parse_body(code: u16, body_text: &str) -> Result<serde_json::Value, HttpError> {
        if body_text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }

        match serde_json::from_str(body_text) {
            Ok(body) => Ok(body),
            Err(_) if !(200..=299).contains(&code) => {
                Ok(serde_json::json!({ "raw_body": body_text }))
            }
            Err(e) => Err(HttpError::MalformedBody {
                status: code,
                reason: e.to_string(),
            }),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
