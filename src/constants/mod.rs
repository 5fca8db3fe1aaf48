pub mod utility_files;

pub use utility_files::{UTILITY_EXTENSIONS, UTILITY_FILE_NAMES, is_utility_file};

/// Indentation used when the manifest is written back
pub const MANIFEST_INDENT: &[u8] = b"    ";

/// Manifest key holding the per-platform download table
pub const PLATFORMS_KEY: &str = "platforms";

/// Manifest key holding the release version
pub const VERSION_KEY: &str = "version";

/// Read buffer size used while hashing artifacts
pub const HASH_CHUNK_SIZE: usize = 4096;

/// Suffix Windows release binaries carry
pub const WINDOWS_EXE_SUFFIX: &str = ".exe";
