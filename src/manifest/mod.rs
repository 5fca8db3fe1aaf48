pub mod io;
pub mod types;

pub use io::{load_manifest, save_manifest};
pub use types::Manifest;
