//! Omise API version pinning.
//!
//! Omise versions its API by release date. Requests carry the chosen date in
//! the `Omise-Version` header; without it the account's default applies.

use crate::error::ConfigError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A dated Omise API version (e.g., `2019-05-29`).
///
/// # Example
///
/// ```rust
/// use omise_api::ApiVersion;
///
/// let version: ApiVersion = "2019-05-29".parse().unwrap();
/// assert_eq!(version.to_string(), "2019-05-29");
///
/// assert!("2019-5-29".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The most recent dated version known to this SDK.
    pub const LATEST: &'static str = "2019-05-29";

    /// Returns the most recent dated version known to this SDK.
    #[must_use]
    pub fn latest() -> Self {
        Self(Self::LATEST.to_string())
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(version: &str) -> bool {
        version.len() == 10 && NaiveDate::parse_from_str(version, "%Y-%m-%d").is_ok()
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s.trim();
        if Self::is_valid(version) {
            Ok(Self(version.to_string()))
        } else {
            Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
