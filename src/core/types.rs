use serde::{Deserialize, Serialize};

/// One uploaded release artifact as reported by the hosting service.
///
/// Any other fields in the upload listing are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// Download metadata recorded for a single platform key.
///
/// `sha256` is lowercase hex, or empty when the local artifact was missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub url: String,
    pub sha256: String,
}

impl PlatformEntry {
    pub fn new(url: impl Into<String>, sha256: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            sha256: sha256.into(),
        }
    }

    pub fn has_checksum(&self) -> bool {
        !self.sha256.is_empty()
    }
}

/// Parse the assets argument: a JSON array of uploaded artifacts.
pub fn parse_assets(raw: &str) -> serde_json::Result<Vec<Asset>> {
    serde_json::from_str(raw)
}
