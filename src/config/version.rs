//! Notion API version definitions.
//!
//! This module provides the [`ApiVersion`] enum sent in the `Notion-Version`
//! header of every request.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Notion API version.
///
/// Notion versions its API with dated identifiers. The payload shapes modelled
/// by this crate follow `2021-05-13`; newer dated versions can be sent through
/// the `Custom` variant.
///
/// # Example
///
/// ```rust
/// use notion_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "2021-05-13");
///
/// let version: ApiVersion = "2021-08-16".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2021_08_16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2021-05-11 (public beta).
    V2021_05_11,
    /// API version 2021-05-13.
    V2021_05_13,
    /// API version 2021-08-16.
    V2021_08_16,
    /// Any other dated version string.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version whose payload shapes this crate models.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2021_05_13
    }

    /// Returns `true` if this is one of the known dated versions.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        // YYYY-MM-DD
        let parts: Vec<&str> = s.split('-').collect();
        matches!(parts.as_slice(), [year, month, day]
            if year.len() == 4 && month.len() == 2 && day.len() == 2
                && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2021_05_11 => "2021-05-11",
            Self::V2021_05_13 => "2021-05-13",
            Self::V2021_08_16 => "2021-08-16",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2021-05-11" => Ok(Self::V2021_05_11),
            "2021-05-13" => Ok(Self::V2021_05_13),
            "2021-08-16" => Ok(Self::V2021_08_16),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!(
            "2021-05-13".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2021_05_13
        );
        assert_eq!(
            "2021-08-16".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2021_08_16
        );
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V2021_05_11.to_string(), "2021-05-11");
        assert_eq!(ApiVersion::V2021_05_13.to_string(), "2021-05-13");
        assert_eq!(
            ApiVersion::Custom("2022-06-28".to_string()).to_string(),
            "2022-06-28"
        );
    }

    #[test]
    fn test_api_version_parses_future_versions_as_custom() {
        let version: ApiVersion = "2022-06-28".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2022-06-28".to_string()));
        assert!(!version.is_known());
    }

    #[test]
    fn test_api_version_rejects_malformed_strings() {
        assert!("2021-05".parse::<ApiVersion>().is_err());
        assert!("latest".parse::<ApiVersion>().is_err());
        assert!("2021-5-13".parse::<ApiVersion>().is_err());
        assert!("".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }
}
