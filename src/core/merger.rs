//! Manifest merging
//!
//! Walks the uploaded assets in order, classifies each one, hashes the
//! local copy of every binary and upserts `{url, sha256}` under its
//! platform key. Per-asset problems never stop the walk.

use crate::core::checksum::{ArtifactChecksum, checksum_artifact};
use crate::core::classifier::{AssetClassifier, Classification};
use crate::core::types::{Asset, PlatformEntry};
use crate::manifest::Manifest;
use crate::ui;
use std::path::{Path, PathBuf};

/// What happened to one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    Utility,
    Unmatched,
    Recorded {
        key: String,
        local_path: PathBuf,
        checksum: ArtifactChecksum,
    },
}

/// Counters for the final summary.
///
/// `added` and `missing` count distinct platform keys as they end up in the
/// manifest, so two assets sharing a key are counted once, by the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Entries written with a non-empty checksum
    pub added: usize,
    /// Entries written with an empty checksum
    pub missing: usize,
    pub skipped_utility: usize,
    pub skipped_unmatched: usize,
    /// Platform keys upserted, first occurrence order, no duplicates
    pub keys: Vec<String>,
}

pub struct ManifestMerger<'a> {
    classifier: &'a AssetClassifier,
    artifacts_dir: &'a Path,
    quiet: bool,
    verbose: bool,
}

impl<'a> ManifestMerger<'a> {
    pub fn new(classifier: &'a AssetClassifier, artifacts_dir: &'a Path) -> Self {
        Self {
            classifier,
            artifacts_dir,
            quiet: false,
            verbose: false,
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Classify and hash one asset without touching the manifest
    pub fn process_asset(&self, asset: &Asset) -> AssetOutcome {
        match self.classifier.classify(&asset.name) {
            Classification::Utility => AssetOutcome::Utility,
            Classification::Unmatched => AssetOutcome::Unmatched,
            Classification::Platform(key) => {
                let local_path = self.artifacts_dir.join(&asset.name);
                let checksum = checksum_artifact(&local_path);
                AssetOutcome::Recorded {
                    key,
                    local_path,
                    checksum,
                }
            }
        }
    }

    /// Upsert every classified asset into `manifest`.
    ///
    /// The manifest always ends up with a `platforms` table, even when no
    /// asset classifies.
    pub fn merge(&self, manifest: &mut Manifest, assets: &[Asset]) -> UpdateReport {
        manifest.ensure_platforms();
        let mut report = UpdateReport::default();

        for asset in assets {
            let outcome = self.process_asset(asset);
            self.announce(asset, &outcome);

            match outcome {
                AssetOutcome::Utility => report.skipped_utility += 1,
                AssetOutcome::Unmatched => report.skipped_unmatched += 1,
                AssetOutcome::Recorded { key, checksum, .. } => {
                    let entry = PlatformEntry::new(&asset.browser_download_url, checksum.into_hex());
                    manifest.upsert_platform(&key, &entry);
                    if !report.keys.contains(&key) {
                        report.keys.push(key);
                    }
                }
            }
        }

        for key in &report.keys {
            match manifest.platform(key) {
                Some(entry) if entry.has_checksum() => report.added += 1,
                _ => report.missing += 1,
            }
        }

        report
    }

    fn announce(&self, asset: &Asset, outcome: &AssetOutcome) {
        match outcome {
            AssetOutcome::Utility => {
                if !self.quiet {
                    ui::skip(&format!("Skipping {}: utility file", asset.name));
                }
            }
            AssetOutcome::Unmatched => {
                if !self.quiet {
                    ui::skip(&format!(
                        "Skipping {}: could not determine platform key",
                        asset.name
                    ));
                }
            }
            AssetOutcome::Recorded {
                key,
                local_path,
                checksum,
            } => match checksum {
                ArtifactChecksum::Digest(hex) => {
                    if self.verbose {
                        ui::success(&format!("Processed {} -> {} (SHA256: {})", asset.name, key, hex));
                    } else if !self.quiet {
                        let short = hex.get(..8).unwrap_or(hex.as_str());
                        ui::success(&format!(
                            "Processed {} -> {} (SHA256: {}...)",
                            asset.name, key, short
                        ));
                    }
                }
                ArtifactChecksum::Missing => ui::warning(&format!(
                    "Local file {} not found. Cannot compute checksum.",
                    local_path.display()
                )),
                ArtifactChecksum::Unreadable(reason) => ui::warning(&format!(
                    "Local file {} could not be read ({}). Cannot compute checksum.",
                    local_path.display(),
                    reason
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests;
