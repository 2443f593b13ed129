//! Builds a scene's entity store from a Tiled map and its manifest.
//!
//! Every object in every object layer becomes at most one entity:
//!
//! - unnamed objects are plain walls
//! - `player*` markers spawn the player, but only the selected marker does
//! - `category`/`kind` custom properties override the manifest rules
//! - transition rules, then category rules, then the layer role decide the rest
//!
//! A scene that fails to load is replaced by an empty scene with a player at
//! the default spawn so the game keeps running.

use std::str::FromStr;

use school_content::{DEFAULT_SPAWN_NAME, LayerRole, SceneManifest, TiledLayer, TiledMap, TiledObject};
use school_core::{
    Category, EntityId, EntityKind, EntityStore, GameConfig, GameError, InteractionKey, Rect, Vec2,
};
use tracing::{debug, error, warn};

use crate::error::{Result, RuntimeError};

/// Entities of one scene, ready for the session.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub name: String,
    pub entities: EntityStore,
    /// True when the map failed to load and a bare scene was built instead.
    pub fallback: bool,
}

impl LoadedScene {
    pub fn player(&self) -> Option<EntityId> {
        self.entities.player().map(|player| player.id)
    }
}

/// Turns Tiled objects into scene entities according to a manifest.
pub struct MapObjectLoader<'a> {
    manifest: &'a SceneManifest,
    config: &'a GameConfig,
    spawn_name: &'a str,
}

impl<'a> MapObjectLoader<'a> {
    pub fn new(manifest: &'a SceneManifest, config: &'a GameConfig, spawn_name: &'a str) -> Self {
        Self {
            manifest,
            config,
            spawn_name,
        }
    }

    /// Builds the scene, failing on layers the manifest names but the map
    /// lacks, and on objects with negative or non-finite rectangles.
    pub fn build(&self, map: &TiledMap) -> Result<LoadedScene> {
        for layer in self.manifest.layers.keys() {
            if map.layer(layer).is_none() {
                return Err(RuntimeError::MissingLayer {
                    layer: layer.clone(),
                });
            }
        }

        let mut layers = Vec::new();
        collect_object_layers(&map.layers, &mut layers);

        let mut entities = EntityStore::new();
        let mut fallback_marker = None;
        for layer in layers {
            let role = self.manifest.role(&layer.name);
            for object in &layer.objects {
                validate(layer, object)?;
                if let Some(marker) = self.place(&mut entities, role, object) {
                    fallback_marker.get_or_insert(marker);
                }
            }
        }

        if entities.player().is_none() {
            let position = fallback_marker
                .or(self.manifest.default_spawn)
                .unwrap_or(self.config.default_spawn);
            warn!(
                target: "runtime::scene",
                scene = %self.manifest.name,
                spawn = self.spawn_name,
                %position,
                "Spawn marker not found, using fallback position"
            );
            entities.place_player(position, self.config.player_size);
        }

        let pruned = entities.prune_duplicate_players();
        if pruned > 0 {
            warn!(
                target: "runtime::scene",
                scene = %self.manifest.name,
                pruned,
                "Removed duplicate player entities"
            );
        }

        Ok(LoadedScene {
            name: self.manifest.name.clone(),
            entities,
            fallback: false,
        })
    }

    /// Builds from a map load result, replacing any failure with a bare scene.
    pub fn build_or_fallback(&self, map: Result<TiledMap>) -> LoadedScene {
        match map.and_then(|map| self.build(&map)) {
            Ok(scene) => scene,
            Err(e) => {
                error!(
                    target: "runtime::scene",
                    scene = %self.manifest.name,
                    error = %e,
                    code = e.error_code(),
                    "Scene failed to load, using empty fallback scene"
                );
                self.fallback()
            }
        }
    }

    /// Scene with nothing but the player at the default spawn.
    pub fn fallback(&self) -> LoadedScene {
        let mut entities = EntityStore::new();
        let position = self
            .manifest
            .default_spawn
            .unwrap_or(self.config.default_spawn);
        entities.place_player(position, self.config.player_size);
        LoadedScene {
            name: self.manifest.name.clone(),
            entities,
            fallback: true,
        }
    }

    /// Spawns the entity for one object. Returns the position of an unselected
    /// default spawn marker so it can serve as a fallback.
    fn place(&self, entities: &mut EntityStore, role: LayerRole, object: &TiledObject) -> Option<Vec2> {
        let rect = object.rect();
        if object.is_unnamed() {
            entities.spawn(EntityKind::Wall { name: None }, rect);
            return None;
        }

        let name = object.name.as_str();
        if role == LayerRole::Spawn || name.starts_with(DEFAULT_SPAWN_NAME) {
            if name == self.spawn_name {
                entities.spawn(
                    EntityKind::Player,
                    Rect::at(object.position(), self.config.player_size),
                );
            } else if name == DEFAULT_SPAWN_NAME {
                return Some(object.position());
            } else {
                debug!(target: "runtime::scene", marker = name, "Skipping unselected spawn marker");
            }
            return None;
        }

        let kind = match self.classify(role, object) {
            Some(kind) => kind,
            None => EntityKind::Wall {
                name: Some(name.to_string()),
            },
        };
        entities.spawn(kind, rect);
        None
    }

    fn classify(&self, role: LayerRole, object: &TiledObject) -> Option<EntityKind> {
        let name = object.name.as_str();

        if let Some(category) = object.property("category") {
            match Category::from_str(category) {
                Ok(category) => {
                    let kind = object.property("kind").unwrap_or(name);
                    return Some(EntityKind::Interactable {
                        key: InteractionKey::new(category, kind),
                    });
                }
                Err(_) => warn!(
                    target: "runtime::scene",
                    object = name,
                    category,
                    "Unknown category property, falling back to manifest rules"
                ),
            }
        }

        if let Some(rule) = self.manifest.transition_for(name) {
            return Some(EntityKind::Transition {
                target: rule.target.clone(),
                spawn: rule.spawn.clone(),
            });
        }

        let category = self.manifest.category_for(name).or(match role {
            LayerRole::Object => Some(self.manifest.default_category),
            LayerRole::Boundary | LayerRole::Spawn => None,
        })?;
        let kind = object.property("kind").unwrap_or(name);
        Some(EntityKind::Interactable {
            key: InteractionKey::new(category, kind),
        })
    }
}

fn collect_object_layers<'m>(layers: &'m [TiledLayer], out: &mut Vec<&'m TiledLayer>) {
    for layer in layers {
        if layer.is_object_layer() {
            out.push(layer);
        }
        collect_object_layers(&layer.layers, out);
    }
}

fn validate(layer: &TiledLayer, object: &TiledObject) -> Result<()> {
    let values = [object.x, object.y, object.width, object.height];
    if values.iter().all(|v| v.is_finite()) && object.width >= 0.0 && object.height >= 0.0 {
        return Ok(());
    }
    Err(RuntimeError::InvalidObject {
        layer: layer.name.clone(),
        name: object.name.clone(),
    })
}
