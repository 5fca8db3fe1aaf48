use crate::constants::HASH_CHUNK_SIZE;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Outcome of hashing one local artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactChecksum {
    /// Lowercase hex SHA-256 of the file contents
    Digest(String),
    /// No file at the expected path
    Missing,
    /// The file exists but could not be read
    Unreadable(String),
}

impl ArtifactChecksum {
    /// Checksum as recorded in the manifest: empty unless a digest was computed
    pub fn into_hex(self) -> String {
        match self {
            Self::Digest(hex) => hex,
            Self::Missing | Self::Unreadable(_) => String::new(),
        }
    }
}

/// Hash the artifact at `path`. Never fails: a missing or unreadable
/// file is reported through the returned variant.
pub fn checksum_artifact(path: &Path) -> ArtifactChecksum {
    if !path.exists() {
        return ArtifactChecksum::Missing;
    }

    match sha256_file(path) {
        Ok(hex) => ArtifactChecksum::Digest(hex),
        Err(e) => ArtifactChecksum::Unreadable(e.to_string()),
    }
}

/// Stream a file through SHA-256 in fixed-size chunks.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    sha256_reader(&mut file)
}

pub fn sha256_reader<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
