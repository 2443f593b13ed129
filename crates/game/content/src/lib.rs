//! Data-driven content definitions and loaders.
//!
//! This crate reads the external data a scene is built from:
//! - Tiled map exports (JSON)
//! - Scene manifests describing how map objects become entities (RON)
//! - Localized dialogue tables (RON)
//! - The quest catalog and quest chains (RON)
//! - Game configuration (TOML)
//!
//! Content is consumed by the scene runtime and never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, DEFAULT_SPAWN_NAME, DialogueEntry, DialogueLoader, DialogueTable,
    LayerRole, LoadResult, LocaleTable, MapLoader, NamePattern, ObjectRule, QuestCatalog,
    QuestLoader, SceneLoader, SceneManifest, ScriptedBeat, TiledLayer, TiledMap, TiledObject,
    TiledProperty, TransitionRule,
};
