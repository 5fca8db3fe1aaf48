//! Settings Module
//!
//! Resolves the run configuration from command-line flags and environment.
//! Flags win over environment, environment wins over defaults.

use crate::cli::args::Cli;
use crate::core::classifier::NamingConvention;
use crate::error::{ManifestError, Result};
use crate::project_identity;
use std::path::PathBuf;

/// Environment key suffix selecting the naming convention
pub const CONVENTION_ENV_SUFFIX: &str = "NAMING_CONVENTION";

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manifest_path: PathBuf,
    pub assets_json: String,
    pub artifacts_dir: PathBuf,
    pub convention: NamingConvention,
    pub prefix: String,
    pub dry_run: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings against the process environment
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let convention = match cli.flags.convention {
            Some(convention) => convention,
            None => convention_from_env(&env)?.unwrap_or_default(),
        };

        if cli.flags.prefix.trim().is_empty() {
            return Err(ManifestError::ConfigError(
                "asset prefix must not be empty".to_string(),
            ));
        }

        Ok(Self {
            manifest_path: cli.version_file.clone(),
            assets_json: cli.assets_json.clone(),
            artifacts_dir: cli.artifacts_dir.clone(),
            convention,
            prefix: cli.flags.prefix.clone(),
            dry_run: cli.flags.dry_run,
            quiet: cli.flags.quiet,
            verbose: cli.flags.verbose,
        })
    }
}

fn convention_from_env<F>(env: &F) -> Result<Option<NamingConvention>>
where
    F: Fn(&str) -> Option<String>,
{
    let key = project_identity::env_key(CONVENTION_ENV_SUFFIX);
    match env(&key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse()
            .map(Some)
            .map_err(|e| ManifestError::ConfigError(format!("{}: {}", key, e))),
        _ => Ok(None),
    }
}
