/// Release files that are shipped next to the binaries but never
/// become manifest entries.
///
/// Used for:
/// - checksum lists (`sha256sums.txt`)
/// - install scripts (`install.sh`, `install.ps1`)
/// - the manifest itself when it is uploaded as an asset
pub const UTILITY_EXTENSIONS: &[&str] = &[".txt", ".sh", ".ps1"];

/// Exact file names treated as utility files
pub const UTILITY_FILE_NAMES: &[&str] = &["version.json"];

/// Check if a release asset is a utility file
///
/// # Example
/// ```
/// # use update_manifest::constants::utility_files::is_utility_file;
/// assert!(is_utility_file("sha256sums.txt"));
/// assert!(is_utility_file("version.json"));
/// assert!(!is_utility_file("btxz-linux-amd64-modern"));
/// ```
pub fn is_utility_file(name: &str) -> bool {
    UTILITY_FILE_NAMES.contains(&name)
        || UTILITY_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
