use crate::error::{ManifestError, Result};
use crate::manifest::types::Manifest;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write the manifest back to the path it was loaded from.
///
/// The file is truncated and rewritten in place, so a symlinked or
/// hard-linked manifest updates its real target.
pub fn save_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let content = manifest.to_pretty_json()?;
    write_in_place(path, content.as_bytes())
}

fn write_in_place(path: &Path, content: &[u8]) -> Result<()> {
    let io_error = |source: std::io::Error| ManifestError::IoError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_error)?;

    file.write_all(content).map_err(io_error)?;
    file.sync_all().map_err(io_error)
}
