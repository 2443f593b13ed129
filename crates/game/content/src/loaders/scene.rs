//! Scene manifest loader.
//!
//! A manifest tells the scene builder how to read a Tiled map: which layers
//! hold spawns, interactables and boundaries, how object names map to
//! categories, which objects are doors, and what completing each kind does.

use std::collections::HashMap;
use std::path::Path;

use school_core::{Category, InteractionEffects, Vec2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Name of the spawn marker used when no scene-specific one is configured.
pub const DEFAULT_SPAWN_NAME: &str = "player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    Spawn,
    /// Every named object becomes an interactable.
    Object,
    /// Named objects without a rule stay plain walls.
    Boundary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePattern {
    Exact(String),
    Prefix(String),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => name == exact,
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRule {
    pub pattern: NamePattern,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    pub pattern: NamePattern,
    /// Scene entered when the player touches the trigger.
    pub target: String,
    /// Spawn marker to use in the target scene.
    #[serde(default)]
    pub spawn: Option<String>,
}

/// Dialogue shown without an interactable, e.g. an intro monologue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedBeat {
    /// Dialogue table kind holding the lines.
    pub kind: String,
    /// Flag set after the beat ran; the beat is skipped while it is set.
    pub once_flag: String,
    #[serde(default = "default_true")]
    pub forced: bool,
}

fn default_true() -> bool {
    true
}

fn default_category() -> Category {
    Category::Object
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    pub name: String,
    /// Map file stem under `maps/`.
    pub map: String,
    /// Dialogue file stem under `dialogue/`. Defaults to the scene name.
    #[serde(default)]
    pub dialogue: Option<String>,
    #[serde(default)]
    pub layers: HashMap<String, LayerRole>,
    /// Category for object-layer entries no rule matches.
    #[serde(default = "default_category")]
    pub default_category: Category,
    #[serde(default)]
    pub rules: Vec<ObjectRule>,
    #[serde(default)]
    pub transitions: Vec<TransitionRule>,
    /// Spawn marker name keyed by the scene the player arrives from.
    #[serde(default)]
    pub spawns: HashMap<String, String>,
    #[serde(default)]
    pub default_spawn: Option<Vec2>,
    #[serde(default)]
    pub effects: HashMap<String, InteractionEffects>,
    #[serde(default)]
    pub intro: Option<ScriptedBeat>,
}

impl SceneManifest {
    /// Manifest that reads every object layer as a boundary layer.
    pub fn bare(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            map: name.clone(),
            name,
            dialogue: None,
            layers: HashMap::new(),
            default_category: default_category(),
            rules: Vec::new(),
            transitions: Vec::new(),
            spawns: HashMap::new(),
            default_spawn: None,
            effects: HashMap::new(),
            intro: None,
        }
    }

    pub fn dialogue_name(&self) -> &str {
        self.dialogue.as_deref().unwrap_or(&self.name)
    }

    /// Role of a layer; unlisted object layers act as boundaries.
    pub fn role(&self, layer: &str) -> LayerRole {
        self.layers.get(layer).copied().unwrap_or(LayerRole::Boundary)
    }

    pub fn category_for(&self, name: &str) -> Option<Category> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(name))
            .map(|rule| rule.category)
    }

    pub fn transition_for(&self, name: &str) -> Option<&TransitionRule> {
        self.transitions.iter().find(|rule| rule.pattern.matches(name))
    }

    /// Spawn marker name for a player arriving from `previous`.
    pub fn spawn_name(&self, previous: Option<&str>) -> &str {
        previous
            .and_then(|scene| self.spawns.get(scene))
            .map(String::as_str)
            .unwrap_or(DEFAULT_SPAWN_NAME)
    }

    pub fn effects_for(&self, kind: &str) -> Option<&InteractionEffects> {
        self.effects.get(kind)
    }
}

/// Loader for scene manifests from RON files.
pub struct SceneLoader;

impl SceneLoader {
    pub fn load(path: &Path) -> LoadResult<SceneManifest> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SceneManifest> {
        let manifest: SceneManifest = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scene RON: {}", e))?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use school_core::{Effect, StatKind};

    use super::*;

    const SCENE: &str = r#"
        SceneManifest(
            name: "first",
            map: "first",
            layers: { "spawnpoints": spawn, "npcs": object, "boundaries": boundary },
            rules: [
                (pattern: exact("cat1"), category: npc),
                (pattern: prefix("student"), category: student),
            ],
            transitions: [
                (pattern: prefix("door_wc"), target: "restroom", spawn: Some("player_from_first")),
            ],
            spawns: { "restroom": "player_from_restroom" },
            effects: {
                "cat1": (effects: [adjust_status(stat: mood, delta: 1)]),
            },
            intro: Some((kind: "intro", once_flag: "seen_first_intro")),
        )
    "#;

    #[test]
    fn parses_rules_and_effects() {
        let scene = SceneLoader::parse(SCENE).unwrap();
        assert_eq!(scene.category_for("cat1"), Some(Category::Npc));
        assert_eq!(scene.category_for("student12"), Some(Category::Student));
        assert_eq!(scene.category_for("ball"), None);
        assert_eq!(scene.role("npcs"), LayerRole::Object);
        assert_eq!(scene.role("unknown"), LayerRole::Boundary);
        assert_eq!(scene.dialogue_name(), "first");
        assert_eq!(
            scene.effects_for("cat1").map(|e| e.effects.clone()),
            Some(vec![Effect::AdjustStatus {
                stat: StatKind::Mood,
                delta: 1
            }])
        );
        assert!(scene.intro.as_ref().is_some_and(|beat| beat.forced));
    }

    #[test]
    fn spawn_depends_on_previous_scene() {
        let scene = SceneLoader::parse(SCENE).unwrap();
        assert_eq!(scene.spawn_name(None), DEFAULT_SPAWN_NAME);
        assert_eq!(scene.spawn_name(Some("restroom")), "player_from_restroom");
        assert_eq!(scene.spawn_name(Some("garage")), DEFAULT_SPAWN_NAME);
        let door = scene.transition_for("door_wc2").unwrap();
        assert_eq!(door.target, "restroom");
    }
}
