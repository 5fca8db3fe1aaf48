pub mod checksum;
pub mod classifier;
pub mod merger;
pub mod types;
