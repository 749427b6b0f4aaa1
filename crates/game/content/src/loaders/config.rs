//! Game configuration loader.

use std::path::Path;

use monopoly_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule constants from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.max_turns_in_jail == 0 {
            anyhow::bail!("max_turns_in_jail must be at least 1");
        }
        Ok(config)
    }
}
