//! Run flow
//!
//! parse assets -> load manifest -> classify, hash, upsert -> write -> summary

use crate::cli::args::Cli;
use crate::config::Settings;
use crate::core::classifier::AssetClassifier;
use crate::core::merger::{ManifestMerger, UpdateReport};
use crate::core::types::parse_assets;
use crate::error::{ManifestError, Result};
use crate::manifest::{load_manifest, save_manifest};
use crate::ui as output;

/// Run one manifest update for the parsed command line
pub fn dispatch(args: &Cli) -> Result<UpdateReport> {
    let settings = Settings::from_cli(args)?;
    run(&settings)
}

/// Run one manifest update with resolved settings.
///
/// The assets argument is decoded before the manifest is touched.
pub fn run(settings: &Settings) -> Result<UpdateReport> {
    let assets = parse_assets(&settings.assets_json).map_err(ManifestError::Decode)?;
    let mut manifest = load_manifest(&settings.manifest_path)?;
    let classifier = AssetClassifier::new(&settings.prefix, settings.convention)?;

    if settings.verbose {
        output::header("Settings");
        output::keyval("manifest", &settings.manifest_path.display().to_string());
        output::keyval("artifacts", &settings.artifacts_dir.display().to_string());
        let convention = classifier.convention();
        output::keyval(
            "convention",
            &format!("{} ({})", convention, convention.key_shape()),
        );
        output::keyval("prefix", &settings.prefix);
        output::keyval("assets", &assets.len().to_string());
        output::keyval("platforms before", &manifest.platform_count().to_string());
    }

    if !settings.quiet {
        output::info(&format!(
            "Updating manifest for version {}...",
            manifest.version_label()
        ));
    }

    let report = ManifestMerger::new(&classifier, &settings.artifacts_dir)
        .quiet(settings.quiet)
        .verbose(settings.verbose)
        .merge(&mut manifest, &assets);

    if settings.dry_run {
        print!("{}", manifest.to_pretty_json()?);
        if !settings.quiet {
            output::info("Dry run: manifest not written.");
        }
        return Ok(report);
    }

    save_manifest(&settings.manifest_path, &manifest)?;

    if !settings.quiet {
        output::success(&format!(
            "Manifest updated successfully. {} binaries added.",
            report.added
        ));
    }
    if settings.verbose && report.missing > 0 {
        output::keyval("entries without checksum", &report.missing.to_string());
    }

    Ok(report)
}
