//! Content factory for loading a whole game's data from one directory.

use std::path::{Path, PathBuf};

use monopoly_core::{Card, Deck, GameConfig, Track};

use crate::loaders::{ConfigLoader, DeckLoader, LoadResult, TrackLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── track.ron
/// ├── chance.ron
/// └── community_chest.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The `data/` directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Self::bundled_data_dir())
    }

    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load rule constants from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the board layout from `track.ron`.
    pub fn load_track(&self) -> LoadResult<Track> {
        TrackLoader::load(&self.data_dir.join("track.ron"))
    }

    /// Load the Chance deck from `chance.ron`.
    pub fn load_chance(&self) -> LoadResult<Deck<Card>> {
        DeckLoader::load(&self.data_dir.join("chance.ron"))
    }

    /// Load the Community Chest deck from `community_chest.ron`.
    pub fn load_community_chest(&self) -> LoadResult<Deck<Card>> {
        DeckLoader::load(&self.data_dir.join("community_chest.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
