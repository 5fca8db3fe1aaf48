mod persist;

use crate::error::{ManifestError, Result};
use crate::manifest::types::Manifest;
use std::fs;
use std::path::Path;

pub use persist::save_manifest;

/// Load the manifest the run will update. The file must already exist.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Manifest::from_json_str(&content).map_err(|message| ManifestError::ManifestParse {
        path: path.to_path_buf(),
        message,
    })
}
