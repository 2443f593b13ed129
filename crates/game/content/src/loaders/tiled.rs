//! Tiled JSON map loader.
//!
//! Only the parts of the Tiled export the interaction layer needs are parsed:
//! object layers with name, rectangle and custom properties. Tile grids
//! (`data` and infinite-map `chunks`) are kept as raw gid arrays.

use std::path::Path;

use school_core::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiledMap {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub tilewidth: u32,
    #[serde(default)]
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

impl TiledMap {
    /// Finds a layer by name, searching group layers depth first.
    pub fn layer(&self, name: &str) -> Option<&TiledLayer> {
        fn find<'a>(layers: &'a [TiledLayer], name: &str) -> Option<&'a TiledLayer> {
            layers.iter().find_map(|layer| {
                if layer.name == name {
                    Some(layer)
                } else {
                    find(&layer.layers, name)
                }
            })
        }
        find(&self.layers, name)
    }

    pub fn object_layers(&self) -> impl Iterator<Item = &TiledLayer> {
        self.layers.iter().filter(|layer| layer.is_object_layer())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiledLayer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub layer_type: String,
    #[serde(default)]
    pub objects: Vec<TiledObject>,
    /// Tile gids of a finite tile layer.
    #[serde(default)]
    pub data: Vec<u32>,
    /// Tile gids of an infinite tile layer.
    #[serde(default)]
    pub chunks: Vec<TiledChunk>,
    /// Children of a group layer.
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
}

impl TiledLayer {
    pub fn is_object_layer(&self) -> bool {
        self.layer_type == "objectgroup"
    }

    pub fn is_tile_layer(&self) -> bool {
        self.layer_type == "tilelayer"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiledChunk {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TiledObject {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub properties: Vec<TiledProperty>,
}

impl TiledObject {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// String value of a custom property, if present and non-empty.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .and_then(|property| property.value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledProperty {
    pub name: String,
    #[serde(rename = "type", default)]
    pub property_type: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Loader for Tiled map exports.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a Tiled JSON export.
    pub fn load(path: &Path) -> LoadResult<TiledMap> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<TiledMap> {
        let map: TiledMap = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse Tiled JSON: {}", e))?;
        Ok(map)
    }
}
