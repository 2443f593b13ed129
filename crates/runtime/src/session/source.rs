//! Where a session gets scene content from.

use std::collections::HashMap;
use std::sync::Arc;

use school_content::{ContentFactory, SceneManifest, TiledMap};
use school_core::DialogueOracle;

use crate::error::{Result, RuntimeError};

/// Provides manifests, maps and dialogue for scenes by name.
pub trait SceneSource: Send {
    fn manifest(&self, scene: &str) -> Result<SceneManifest>;

    fn map(&self, manifest: &SceneManifest) -> Result<TiledMap>;

    fn dialogue(&self, manifest: &SceneManifest) -> Result<Arc<dyn DialogueOracle>>;
}

impl SceneSource for ContentFactory {
    fn manifest(&self, scene: &str) -> Result<SceneManifest> {
        self.load_scene(scene)
            .map_err(|e| RuntimeError::content(scene, "manifest", format!("{e:#}")))
    }

    fn map(&self, manifest: &SceneManifest) -> Result<TiledMap> {
        self.load_map(&manifest.map)
            .map_err(|e| RuntimeError::content(&manifest.name, "map", format!("{e:#}")))
    }

    fn dialogue(&self, manifest: &SceneManifest) -> Result<Arc<dyn DialogueOracle>> {
        let table = self
            .load_dialogue(manifest.dialogue_name())
            .map_err(|e| RuntimeError::content(&manifest.name, "dialogue", format!("{e:#}")))?;
        Ok(Arc::new(table))
    }
}

struct StoredScene {
    manifest: SceneManifest,
    map: Option<TiledMap>,
    dialogue: Option<Arc<dyn DialogueOracle>>,
}

/// Scene content held in memory, for tests and embedded demos.
#[derive(Default)]
pub struct InMemorySource {
    scenes: HashMap<String, StoredScene>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scene. A `None` map makes the scene fail to load.
    pub fn with_scene(
        mut self,
        manifest: SceneManifest,
        map: Option<TiledMap>,
        dialogue: Option<Arc<dyn DialogueOracle>>,
    ) -> Self {
        self.scenes.insert(
            manifest.name.clone(),
            StoredScene {
                manifest,
                map,
                dialogue,
            },
        );
        self
    }

    fn stored(&self, scene: &str, what: &'static str) -> Result<&StoredScene> {
        self.scenes
            .get(scene)
            .ok_or_else(|| RuntimeError::content(scene, what, "unknown scene"))
    }
}

impl SceneSource for InMemorySource {
    fn manifest(&self, scene: &str) -> Result<SceneManifest> {
        Ok(self.stored(scene, "manifest")?.manifest.clone())
    }

    fn map(&self, manifest: &SceneManifest) -> Result<TiledMap> {
        self.stored(&manifest.name, "map")?
            .map
            .clone()
            .ok_or_else(|| RuntimeError::content(&manifest.name, "map", "no map stored"))
    }

    fn dialogue(&self, manifest: &SceneManifest) -> Result<Arc<dyn DialogueOracle>> {
        self.stored(&manifest.name, "dialogue")?
            .dialogue
            .clone()
            .ok_or_else(|| RuntimeError::content(&manifest.name, "dialogue", "no dialogue stored"))
    }
}
