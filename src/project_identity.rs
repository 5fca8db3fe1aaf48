//! Central project identity contract.
//!
//! Names that show up in environment keys and release asset names.

pub const BINARY_NAME: &str = "update_manifest";
pub const ENV_PREFIX: &str = "BTXZ";

/// Prefix every release binary carries, e.g. `btxz-linux-amd64-modern`.
pub const RELEASE_ASSET_PREFIX: &str = "btxz";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
