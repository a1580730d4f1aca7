//! Cache strategy value object
//!
//! - `Critical`: precached during install, the app cannot start offline without it
//! - `Background`: fetched after the critical set is in place

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the service worker manages an asset
///
/// An asset without a strategy is still content-addressed in the manifest
/// but is only cached on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheStrategy {
    /// Precached eagerly before the app can run offline
    Critical,
    /// Fetched opportunistically once the critical set is ready
    Background,
}

impl CacheStrategy {
    /// Strategy used for declared assets that carry no explicit value
    pub const DECLARED_DEFAULT: CacheStrategy = CacheStrategy::Background;

    /// Manifest spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStrategy::Critical => "CRITICAL",
            CacheStrategy::Background => "BACKGROUND",
        }
    }
}

impl fmt::Display for CacheStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strategy strings that are neither `critical` nor `background`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cache strategy '{}'", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for CacheStrategy {
    type Err = UnknownStrategy;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(CacheStrategy::Critical),
            "BACKGROUND" => Ok(CacheStrategy::Background),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
