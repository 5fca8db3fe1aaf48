use super::{Cli, parse_args};
use crate::core::classifier::NamingConvention;
use crate::error::ManifestError;
use crate::project_identity;
use clap::CommandFactory;

#[test]
fn parser_accepts_three_positionals() {
    let cli = parse_args([
        project_identity::BINARY_NAME,
        "version.json",
        "[]",
        "dist",
    ])
    .expect("three positionals should parse");
    assert_eq!(cli.version_file.to_str(), Some("version.json"));
    assert_eq!(cli.assets_json, "[]");
    assert_eq!(cli.artifacts_dir.to_str(), Some("dist"));
    assert_eq!(cli.flags.prefix, project_identity::RELEASE_ASSET_PREFIX);
    assert!(cli.flags.convention.is_none());
    assert!(!cli.flags.dry_run);
}

#[test]
fn parser_rejects_missing_positionals_as_usage_error() {
    let err = parse_args([project_identity::BINARY_NAME, "version.json", "[]"]).unwrap_err();
    assert!(matches!(err, ManifestError::Usage(_)));
    assert!(err.to_string().contains("Usage: update_manifest"));
}

#[test]
fn parser_reads_convention_flag() {
    let cli = parse_args([
        project_identity::BINARY_NAME,
        "--convention",
        "legacy",
        "version.json",
        "[]",
        "dist",
    ])
    .unwrap();
    assert_eq!(cli.flags.convention, Some(NamingConvention::Legacy));
}

#[test]
fn parser_rejects_unknown_convention() {
    let err = parse_args([
        project_identity::BINARY_NAME,
        "version.json",
        "[]",
        "dist",
        "--convention",
        "v9",
    ])
    .unwrap_err();
    assert!(matches!(err, ManifestError::Usage(_)));
}

#[test]
fn quiet_and_verbose_conflict() {
    let err = parse_args([
        project_identity::BINARY_NAME,
        "version.json",
        "[]",
        "dist",
        "-q",
        "-v",
    ])
    .unwrap_err();
    assert!(matches!(err, ManifestError::Usage(_)));
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn command_name_is_binary_name() {
    assert_eq!(Cli::command().get_name(), project_identity::BINARY_NAME);
}
