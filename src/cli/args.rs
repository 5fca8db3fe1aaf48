use crate::core::classifier::NamingConvention;
use crate::error::{ManifestError, Result};
use crate::project_identity;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = project_identity::BINARY_NAME,
    about = "Record per-platform download URLs and SHA-256 checksums in a release manifest",
    long_about = "Matches uploaded release assets against the binary naming convention, hashes \
                  the local copies and upserts {url, sha256} entries into the manifest's \
                  platforms table.",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// Release manifest to update in place (must already exist)
    pub version_file: PathBuf,

    /// JSON array of uploaded assets: [{"name": ..., "browser_download_url": ...}]
    pub assets_json: String,

    /// Directory holding the built release binaries
    pub artifacts_dir: PathBuf,

    #[command(flatten)]
    pub flags: RunFlags,
}

#[derive(Parser, Debug)]
pub struct RunFlags {
    /// Binary naming convention: legacy (os-arch) or current (os-arch-variant)
    #[arg(long, value_name = "NAME")]
    pub convention: Option<NamingConvention>,

    /// Prefix release binaries are published under
    #[arg(long, value_name = "PREFIX", default_value = project_identity::RELEASE_ASSET_PREFIX)]
    pub prefix: String,

    /// Print the updated manifest instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Parse command-line arguments.
///
/// `--help` and `--version` print and exit 0; every other parse failure
/// becomes a usage error.
pub fn parse_args<I, T>(argv: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => Err(ManifestError::Usage(e.render().to_string().trim_end().to_string())),
    }
}

#[cfg(test)]
mod tests;
