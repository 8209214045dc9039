//! Error types for the Omise API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use omise_api::{SecretKey, ConfigError};
//!
//! let result = SecretKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySecretKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types, or when an operation needs a
/// credential that was never configured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Omise secret key (skey_...).")]
    EmptySecretKey,

    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid Omise public key (pkey_...).")]
    EmptyPublicKey,

    /// The vault (public) key is required for the attempted operation but is not configured.
    #[error("No public key configured. Tokenizing data through the vault requires `public_key` to be set on the configuration.")]
    MissingVaultKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2019-05-29').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.omise.co').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
