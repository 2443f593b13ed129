//! Game configuration loader.

use std::path::Path;

use school_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use school_core::{Locale, Vec2};

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "typing_delay_ms = 30").unwrap();
        writeln!(file, "default_locale = \"korean\"").unwrap();
        writeln!(file, "default_spawn = {{ x = 40.0, y = 80.0 }}").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.typing_delay_ms, 30);
        assert_eq!(config.default_locale, Locale::Korean);
        assert_eq!(config.default_spawn, Vec2::new(40.0, 80.0));
        assert_eq!(config.status_max, GameConfig::DEFAULT_STATUS_MAX);
    }
}
