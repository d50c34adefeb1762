//! Admin API version handling.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A supported Shopify Admin API version.
///
/// Shopify releases a new API version every quarter, named `YYYY-MM`. The
/// `unstable` version tracks upcoming changes and has no stability guarantees.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "2025-10");
///
/// let parsed: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(parsed, ApiVersion::V2025_07);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum ApiVersion {
    /// The 2025-01 stable release.
    V2025_01,
    /// The 2025-04 stable release.
    V2025_04,
    /// The 2025-07 stable release.
    V2025_07,
    /// The 2025-10 stable release.
    V2025_10,
    /// The unstable version. No stability guarantees.
    Unstable,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns the version string as it appears in request paths.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Unstable => "unstable",
        }
    }

    /// Returns `true` for stable (dated) versions.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Unstable)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "unstable" => Ok(Self::Unstable),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
