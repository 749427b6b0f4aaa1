//! Content loaders for reading game data from files.
//!
//! Rule constants come from TOML, the track layout and card decks from RON.
//! Every loader returns core types directly.

pub mod config;
pub mod deck;
pub mod factory;
pub mod track;

pub use config::ConfigLoader;
pub use deck::{DeckFile, DeckLoader};
pub use factory::ContentFactory;
pub use track::{TrackFile, TrackLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
