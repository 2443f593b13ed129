//! Scene construction and per-frame geometry.
//!
//! - [`loader`] turns a Tiled map plus a scene manifest into entities
//! - [`collision`] tracks which regions the player is touching
//! - [`movement`] moves the player against solid regions
pub mod collision;
pub mod loader;
pub mod movement;

pub use collision::{CollisionDelta, CollisionTracker};
pub use loader::{LoadedScene, MapObjectLoader};
pub use movement::move_player;
