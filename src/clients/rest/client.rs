//! REST client implementation for the Omise API.
//!
//! This module provides the [`RestClient`] type, which owns one HTTP client
//! per Omise host and routes each request to the right one.

use std::collections::HashMap;
use std::fmt;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{OmiseConfig, SecretKey};
use crate::error::ConfigError;

/// The Omise host a request is sent to.
///
/// Each host is paired with its own credential: the main API uses the
/// secret key and the vault uses the public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
    /// The main API (`https://api.omise.co`), authenticated with the secret key.
    Api,
    /// The vault (`https://vault.omise.co`), authenticated with the public key.
    Vault,
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Vault => write!(f, "vault"),
        }
    }
}

/// REST API client for the Omise API.
///
/// Provides `get`, `post`, `patch` and `delete` methods routed to either
/// host. The vault client only exists when a public key is configured;
/// vault requests otherwise fail with [`ConfigError::MissingVaultKey`]
/// before anything is sent.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use omise_api::{OmiseConfig, RestClient, SecretKey};
/// use omise_api::clients::rest::Host;
///
/// let config = OmiseConfig::builder()
///     .secret_key(SecretKey::new("skey_test_123")?)
///     .build()?;
///
/// let client = RestClient::new(&config)?;
/// let response = client.get(Host::Api, "/account", None).await?;
/// println!("Account: {}", response.body);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The configuration this client was built from.
    config: OmiseConfig,
    /// Client for the main API.
    api: HttpClient,
    /// Client for the vault, present only with a public key.
    vault: Option<HttpClient>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if an underlying HTTP client cannot be built.
    pub fn new(config: &OmiseConfig) -> Result<Self, RestError> {
        let api = HttpClient::new(config.api_host(), config.secret_key().as_ref(), config)?;

        let vault = config
            .public_key()
            .map(|key| HttpClient::new(config.vault_host(), key.as_ref(), config))
            .transpose()?;

        if vault.is_none() {
            tracing::debug!("No public key configured; vault requests will be rejected");
        }

        Ok(Self {
            config: config.clone(),
            api,
            vault,
        })
    }

    /// Creates a client for another account, sharing hosts and settings.
    ///
    /// Entities fetched through different clients share no state.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if an underlying HTTP client cannot be built.
    pub fn with_secret_key(&self, secret_key: SecretKey) -> Result<Self, RestError> {
        Self::new(&self.config.with_secret_key(secret_key))
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &OmiseConfig {
        &self.config
    }

    /// Returns `true` if vault requests can be sent.
    #[must_use]
    pub const fn has_vault(&self) -> bool {
        self.vault.is_some()
    }

    /// Returns the HTTP client serving `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVaultKey`] for [`Host::Vault`] when no
    /// public key is configured.
    pub fn http_client(&self, host: Host) -> Result<&HttpClient, RestError> {
        match host {
            Host::Api => Ok(&self.api),
            Host::Vault => self
                .vault
                .as_ref()
                .ok_or(RestError::Config(ConfigError::MissingVaultKey)),
        }
    }

    /// Sends a GET request to `path` on `host`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Config`] if the host has no credential.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        host: Host,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(host, HttpMethod::Get, path, None, query)
            .await
    }

    /// Sends a POST request with a JSON body to `path` on `host`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        host: Host,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(host, HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PATCH request with a JSON body to `path` on `host`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn patch(
        &self,
        host: Host,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(host, HttpMethod::Patch, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request to `path` on `host`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(&self, host: Host, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(host, HttpMethod::Delete, path, None, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        host: Host,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        // Resolve the credential before doing anything else
        let http_client = self.http_client(host)?;

        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Collapses repeated `/` characters
/// 2. Ensures a single leading `/`
/// 3. Strips trailing `/` characters
/// 4. Returns an error for empty paths
fn normalize_path(path: &str) -> Result<String, RestError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PublicKey;

    fn create_test_config(with_public_key: bool) -> OmiseConfig {
        let builder = OmiseConfig::builder().secret_key(SecretKey::new("skey_test_123").unwrap());
        let builder = if with_public_key {
            builder.public_key(PublicKey::new("pkey_test_123").unwrap())
        } else {
            builder
        };
        builder.build().unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_adds_leading_slash() {
        assert_eq!(normalize_path("customers").unwrap(), "/customers");
    }

    #[test]
    fn test_normalize_path_collapses_double_slashes() {
        assert_eq!(
            normalize_path("//customers//cust_1/cards/").unwrap(),
            "/customers/cust_1/cards"
        );
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { .. })
        ));
        assert!(matches!(
            normalize_path("///"),
            Err(RestError::InvalidPath { .. })
        ));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_without_public_key_has_no_vault() {
        let client = RestClient::new(&create_test_config(false)).unwrap();

        assert!(!client.has_vault());
        assert!(client.http_client(Host::Api).is_ok());
        assert!(matches!(
            client.http_client(Host::Vault),
            Err(RestError::Config(ConfigError::MissingVaultKey))
        ));
    }

    #[test]
    fn test_rest_client_with_public_key_routes_to_vault_host() {
        let client = RestClient::new(&create_test_config(true)).unwrap();

        assert!(client.has_vault());
        assert_eq!(
            client.http_client(Host::Vault).unwrap().base_uri(),
            "https://vault.omise.co"
        );
        assert_eq!(
            client.http_client(Host::Api).unwrap().base_uri(),
            "https://api.omise.co"
        );
    }

    #[test]
    fn test_with_secret_key_switches_credentials_only() {
        let client = RestClient::new(&create_test_config(true)).unwrap();
        let other = client
            .with_secret_key(SecretKey::new("skey_test_other").unwrap())
            .unwrap();

        assert_eq!(other.config().secret_key().as_ref(), "skey_test_other");
        assert!(other.has_vault());
        assert_ne!(
            other.http_client(Host::Api).unwrap().default_headers().get("Authorization"),
            client.http_client(Host::Api).unwrap().default_headers().get("Authorization"),
        );
    }

    #[tokio::test]
    async fn test_vault_request_without_public_key_fails_before_sending() {
        let client = RestClient::new(&create_test_config(false)).unwrap();

        let result = client
            .post(Host::Vault, "/tokens", serde_json::json!({"card": {}}))
            .await;

        assert!(matches!(
            result,
            Err(RestError::Config(ConfigError::MissingVaultKey))
        ));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
