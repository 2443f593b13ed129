//! Content factory for loading scene data from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{
    ConfigLoader, DialogueLoader, DialogueTable, LoadResult, MapLoader, QuestCatalog, QuestLoader,
    SceneLoader, SceneManifest, TiledMap,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── quests.ron
/// ├── scenes/
/// │   └── first.ron
/// ├── maps/
/// │   └── first.json
/// └── dialogue/
///     └── first.ron
/// ```
#[derive(Debug, Clone)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<school_core::GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the quest catalog from `quests.ron`.
    pub fn load_quests(&self) -> LoadResult<QuestCatalog> {
        QuestLoader::load(&self.data_dir.join("quests.ron"))
    }

    /// Load a scene manifest from `scenes/{name}.ron`.
    pub fn load_scene(&self, name: &str) -> LoadResult<SceneManifest> {
        SceneLoader::load(&self.data_dir.join("scenes").join(format!("{name}.ron")))
    }

    /// Load a Tiled export from `maps/{name}.json`.
    pub fn load_map(&self, name: &str) -> LoadResult<TiledMap> {
        MapLoader::load(&self.data_dir.join("maps").join(format!("{name}.json")))
    }

    /// Load a dialogue table from `dialogue/{name}.ron`.
    pub fn load_dialogue(&self, name: &str) -> LoadResult<DialogueTable> {
        DialogueLoader::load(&self.data_dir.join("dialogue").join(format!("{name}.ron")))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
