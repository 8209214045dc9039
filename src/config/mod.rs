//! Configuration types for the Omise API SDK.
//!
//! This module provides the configuration used to build a
//! [`RestClient`](crate::clients::RestClient).
//!
//! # Overview
//!
//! - [`OmiseConfig`]: The main configuration struct holding all SDK settings
//! - [`OmiseConfigBuilder`]: A builder for constructing [`OmiseConfig`] instances
//! - [`SecretKey`]: The primary credential (masked debug output)
//! - [`PublicKey`]: The vault credential used for tokenization
//! - [`HostUrl`]: A validated base URL for the API or vault host
//! - [`ApiVersion`]: A dated API version sent as `Omise-Version`
//!
//! # Example
//!
//! ```rust
//! use omise_api::{OmiseConfig, SecretKey, PublicKey};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123").unwrap())
//!     .public_key(PublicKey::new("pkey_test_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.public_key().is_some());
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{HostUrl, PublicKey, SecretKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default base URL of the main API.
pub const DEFAULT_API_HOST: &str = "https://api.omise.co";

/// Default base URL of the vault (tokenization) API.
pub const DEFAULT_VAULT_HOST: &str = "https://vault.omise.co";

/// Configuration for the Omise API SDK.
///
/// Holds two independent credential slots: the secret key for all main
/// resource operations and an optional public key for the vault.
///
/// # Thread Safety
///
/// `OmiseConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OmiseConfig {
    secret_key: SecretKey,
    public_key: Option<PublicKey>,
    api_host: HostUrl,
    vault_host: HostUrl,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl OmiseConfig {
    /// Creates a new builder for constructing an `OmiseConfig`.
    #[must_use]
    pub fn builder() -> OmiseConfigBuilder {
        OmiseConfigBuilder::new()
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the public (vault) key, if configured.
    #[must_use]
    pub const fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Returns the main API base URL.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the vault base URL.
    #[must_use]
    pub const fn vault_host(&self) -> &HostUrl {
        &self.vault_host
    }

    /// Returns the pinned API version, if any.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns a copy of this configuration using another secret key.
    ///
    /// Hosts, version and vault key are kept. Used for multi-account access.
    #[must_use]
    pub fn with_secret_key(&self, secret_key: SecretKey) -> Self {
        Self {
            secret_key,
            ..self.clone()
        }
    }
}

// Verify OmiseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OmiseConfig>();
};

/// Builder for constructing [`OmiseConfig`] instances.
///
/// `secret_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `public_key`: `None` (vault operations fail fast)
/// - `api_host`: [`DEFAULT_API_HOST`]
/// - `vault_host`: [`DEFAULT_VAULT_HOST`]
/// - `api_version`: `None` (account default)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default)
#[derive(Debug, Default)]
pub struct OmiseConfigBuilder {
    secret_key: Option<SecretKey>,
    public_key: Option<PublicKey>,
    api_host: Option<HostUrl>,
    vault_host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl OmiseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the public key used for vault tokenization.
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Overrides the main API base URL.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the vault base URL.
    #[must_use]
    pub fn vault_host(mut self, host: HostUrl) -> Self {
        self.vault_host = Some(host);
        self
    }

    /// Pins the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`OmiseConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `secret_key` is not set.
    pub fn build(self) -> Result<OmiseConfig, ConfigError> {
        let secret_key = self.secret_key.ok_or(ConfigError::MissingRequiredField {
            field: "secret_key",
        })?;

        let api_host = match self.api_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_API_HOST)?,
        };
        let vault_host = match self.vault_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_VAULT_HOST)?,
        };

        Ok(OmiseConfig {
            secret_key,
            public_key: self.public_key,
            api_host,
            vault_host,
            api_version: self.api_version,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
