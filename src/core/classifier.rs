//! Asset Classification Module
//!
//! Maps a release asset file name to the platform key it is published under.
//!
//! # Naming conventions
//!
//! Release binaries are named `<prefix>-<tokens>[.exe]` where each token is
//! lowercase alphanumeric. The number of tokens is versioned:
//! - `legacy`  (v1): `btxz-linux-amd64`          -> `linux-amd64`
//! - `current` (v2): `btxz-linux-amd64-modern`   -> `linux-amd64-modern`
//!
//! Utility files (checksum lists, install scripts) are recognised before any
//! pattern is tried.

use crate::constants::{WINDOWS_EXE_SUFFIX, is_utility_file};
use crate::error::{ManifestError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Versioned layout of release binary names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingConvention {
    /// `<prefix>-<os>-<arch>`
    Legacy,
    /// `<prefix>-<os>-<arch>-<variant>`
    #[default]
    Current,
}

impl NamingConvention {
    /// Number of hyphen-separated tokens forming the platform key
    pub fn token_count(self) -> usize {
        match self {
            Self::Legacy => 2,
            Self::Current => 3,
        }
    }

    /// Human readable shape of the key, used in verbose output
    pub fn key_shape(self) -> &'static str {
        match self {
            Self::Legacy => "<os>-<arch>",
            Self::Current => "<os>-<arch>-<variant>",
        }
    }

    /// Anchored pattern for binaries published under `prefix`.
    ///
    /// Capture group 1 is the platform key.
    pub fn pattern(self, prefix: &str) -> String {
        let token = "[a-z0-9]+";
        let rest = format!("(?:-{})", token).repeat(self.token_count() - 1);
        format!(
            r"^{}-({}{})(?:{})?$",
            regex::escape(prefix),
            token,
            rest,
            regex::escape(WINDOWS_EXE_SUFFIX)
        )
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Current => write!(f, "current"),
        }
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v1" => Ok(Self::Legacy),
            "current" | "v2" => Ok(Self::Current),
            other => Err(format!(
                "unknown naming convention '{}' (expected 'legacy' or 'current')",
                other
            )),
        }
    }
}

/// Result of classifying one asset name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Binary published under this platform key
    Platform(String),
    /// Checksum list, install script or the manifest itself
    Utility,
    /// Not a utility file and does not follow the naming convention
    Unmatched,
}

/// Classifier bound to one prefix and naming convention
#[derive(Debug, Clone)]
pub struct AssetClassifier {
    convention: NamingConvention,
    pattern: Regex,
}

impl AssetClassifier {
    pub fn new(prefix: &str, convention: NamingConvention) -> Result<Self> {
        let pattern = Regex::new(&convention.pattern(prefix))
            .map_err(|e| ManifestError::InvalidRegex(e.to_string()))?;
        Ok(Self {
            convention,
            pattern,
        })
    }

    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    /// Classify a file name. Utility files never reach the pattern.
    pub fn classify(&self, filename: &str) -> Classification {
        if is_utility_file(filename) {
            return Classification::Utility;
        }

        match self.platform_key(filename) {
            Some(key) => Classification::Platform(key),
            None => Classification::Unmatched,
        }
    }

    /// Extract the platform key, ignoring the utility file rules
    pub fn platform_key(&self, filename: &str) -> Option<String> {
        self.pattern
            .captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
