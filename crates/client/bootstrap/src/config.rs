//! Client runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use school_core::Locale;

/// Scene entered when no `START_SCENE` is given.
pub const DEFAULT_START_SCENE: &str = "first";

/// Configuration required to bootstrap a game session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub data_dir: PathBuf,
    pub start_scene: String,
    /// Overrides `default_locale` from `config.toml`.
    pub locale: Option<Locale>,
    /// Overrides `typing_delay_ms` from `config.toml`.
    pub typing_delay_ms: Option<u32>,
    pub session_id: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            start_scene: DEFAULT_START_SCENE.to_string(),
            locale: None,
            typing_delay_ms: None,
            session_id: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `START_SCENE` - First scene to enter (default: `first`)
    /// - `GAME_LOCALE` - `english` or `korean` (default: from config.toml)
    /// - `TYPING_DELAY_MS` - Per-character reveal delay (default: from config.toml)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CONTENT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(scene) = env::var("START_SCENE") {
            if !scene.trim().is_empty() {
                config.start_scene = scene;
            }
        }
        config.locale = read_env::<Locale>("GAME_LOCALE");
        config.typing_delay_ms = read_env::<u32>("TYPING_DELAY_MS");
        config.session_id = env::var("GAME_SESSION_ID").ok();

        config
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_start_scene(mut self, scene: impl Into<String>) -> Self {
        self.start_scene = scene.into();
        self
    }
}

/// Bundled content directory, looked up next to the executable first and
/// then under the current directory.
fn default_data_dir() -> PathBuf {
    const RELATIVE: &str = "crates/game/content/data";

    env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.ancestors()
                .map(|dir| dir.join(RELATIVE))
                .find(|candidate| candidate.is_dir())
        })
        .unwrap_or_else(|| {
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(RELATIVE)
        })
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().to_lowercase().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_in_first_scene() {
        let config = RuntimeConfig::default();
        assert_eq!(config.start_scene, DEFAULT_START_SCENE);
        assert!(config.data_dir.ends_with("crates/game/content/data"));
        assert!(config.locale.is_none());
    }

    #[test]
    fn builders_override_paths() {
        let config = RuntimeConfig::default()
            .with_data_dir("/tmp/content")
            .with_start_scene("restroom");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/content"));
        assert_eq!(config.start_scene, "restroom");
    }
}
