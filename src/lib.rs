pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod manifest;
pub mod project_identity;
pub mod ui;

use std::process::exit;

/// Run the manifest updater CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Parse (help/version exit 0 from inside the parser)
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            ui::error(&e.to_string());
            exit(1);
        }
    };

    // 2. Run
    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&e.to_string());
        exit(1);
    }
}
