//! Content loaders for reading game data from files.
//!
//! Maps are Tiled JSON exports; scene manifests, dialogue tables and the quest
//! catalog are RON; the game configuration is TOML.

pub mod config;
pub mod dialogue;
pub mod factory;
pub mod quests;
pub mod scene;
pub mod tiled;

pub use config::ConfigLoader;
pub use dialogue::{DialogueEntry, DialogueLoader, DialogueTable, LocaleTable};
pub use factory::ContentFactory;
pub use quests::{QuestCatalog, QuestLoader};
pub use scene::{
    DEFAULT_SPAWN_NAME, LayerRole, NamePattern, ObjectRule, SceneLoader, SceneManifest,
    ScriptedBeat, TransitionRule,
};
pub use tiled::{MapLoader, TiledChunk, TiledLayer, TiledMap, TiledObject, TiledProperty};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
