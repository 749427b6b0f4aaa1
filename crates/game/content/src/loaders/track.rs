//! Track layout loader.

use std::path::Path;

use monopoly_core::{Tile, Track};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Track layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackFile {
    pub tiles: Vec<Tile>,
}

/// Loader for the board layout from RON files.
pub struct TrackLoader;

impl TrackLoader {
    /// Load and validate a track.
    pub fn load(path: &Path) -> LoadResult<Track> {
        let content = read_file(path)?;
        let file: TrackFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse track RON: {}", e))?;

        Track::new(file.tiles)
            .map_err(|e| anyhow::anyhow!("Invalid track {}: {}", path.display(), e))
    }
}
