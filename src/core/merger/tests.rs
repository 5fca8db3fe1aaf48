use super::*;
use crate::core::checksum::sha256_file;
use crate::core::classifier::NamingConvention;
use std::fs;
use tempfile::tempdir;

fn asset(name: &str, url: &str) -> Asset {
    Asset {
        name: name.to_string(),
        browser_download_url: url.to_string(),
    }
}

fn classifier() -> AssetClassifier {
    AssetClassifier::new("btxz", NamingConvention::Current).unwrap()
}

#[test]
fn records_binaries_and_skips_utility_files() {
    let dir = tempdir().unwrap();
    let binary = dir.path().join("btxz-linux-amd64-modern");
    fs::write(&binary, b"release bytes").unwrap();
    let digest = sha256_file(&binary).unwrap();

    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::from_json_str(r#"{"version":"1.2.0"}"#).unwrap();

    let report = merger.merge(
        &mut manifest,
        &[
            asset("btxz-linux-amd64-modern", "http://x/a"),
            asset("sha256sums.txt", "http://x/b"),
        ],
    );

    assert_eq!(report.added, 1);
    assert_eq!(report.skipped_utility, 1);
    assert_eq!(report.keys, ["linux-amd64-modern"]);
    assert_eq!(manifest.platform_count(), 1);
    assert_eq!(
        manifest.platform("linux-amd64-modern"),
        Some(PlatformEntry::new("http://x/a", digest))
    );
}

#[test]
fn missing_artifact_gets_empty_checksum() {
    let dir = tempdir().unwrap();
    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::default();

    let report = merger.merge(
        &mut manifest,
        &[asset("btxz-windows-amd64-modern.exe", "http://x/w")],
    );

    assert_eq!(report.added, 0);
    assert_eq!(report.missing, 1);
    assert_eq!(
        manifest.platform("windows-amd64-modern"),
        Some(PlatformEntry::new("http://x/w", ""))
    );
}

#[test]
fn unmatched_names_are_left_out() {
    let dir = tempdir().unwrap();
    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::default();

    let report = merger.merge(
        &mut manifest,
        &[
            asset("btxz-linux-amd64", "http://x/legacy"),
            asset("README.md", "http://x/readme"),
        ],
    );

    assert_eq!(report.skipped_unmatched, 2);
    assert_eq!(manifest.platform_count(), 0);
    assert!(manifest.platforms().is_some());
}

#[test]
fn later_asset_for_same_key_wins() {
    let dir = tempdir().unwrap();
    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::from_json_str(
        r#"{"platforms":{"linux-arm64-modern":{"url":"http://old","sha256":"dead"}}}"#,
    )
    .unwrap();

    merger.merge(
        &mut manifest,
        &[
            asset("btxz-linux-arm64-modern", "http://x/first"),
            asset("btxz-linux-arm64-modern", "http://x/second"),
        ],
    );

    assert_eq!(manifest.platform_count(), 1);
    assert_eq!(
        manifest.platform("linux-arm64-modern"),
        Some(PlatformEntry::new("http://x/second", ""))
    );
}

#[test]
fn process_asset_reports_local_path() {
    let dir = tempdir().unwrap();
    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path());

    let outcome = merger.process_asset(&asset("btxz-darwin-arm64-modern", "http://x/d"));
    assert_eq!(
        outcome,
        AssetOutcome::Recorded {
            key: "darwin-arm64-modern".to_string(),
            local_path: dir.path().join("btxz-darwin-arm64-modern"),
            checksum: ArtifactChecksum::Missing,
        }
    );
    assert_eq!(merger.process_asset(&asset("install.sh", "u")), AssetOutcome::Utility);
}

#[test]
fn summary_counts_final_entries_per_key() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("btxz-windows-amd64-modern"), b"bytes").unwrap();

    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::default();

    // same key twice: hashed first, missing second, so the entry ends up empty
    let report = merger.merge(
        &mut manifest,
        &[
            asset("btxz-windows-amd64-modern", "http://x/plain"),
            asset("btxz-windows-amd64-modern.exe", "http://x/exe"),
        ],
    );

    assert_eq!(report.keys, ["windows-amd64-modern"]);
    assert_eq!(report.added, 0);
    assert_eq!(report.missing, 1);
    assert_eq!(
        manifest.platform("windows-amd64-modern"),
        Some(PlatformEntry::new("http://x/exe", ""))
    );
}

#[test]
fn repeated_hashed_key_is_added_once() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("btxz-linux-amd64-modern"), b"bytes").unwrap();

    let classifier = classifier();
    let merger = ManifestMerger::new(&classifier, dir.path()).quiet(true);
    let mut manifest = Manifest::default();

    let report = merger.merge(
        &mut manifest,
        &[
            asset("btxz-linux-amd64-modern", "http://x/1"),
            asset("btxz-linux-amd64-modern", "http://x/2"),
        ],
    );

    assert_eq!(report.added, 1);
    assert_eq!(report.missing, 0);
    assert_eq!(manifest.platform_count(), 1);
}
