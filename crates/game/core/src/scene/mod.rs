//! Scene entity model.
//!
//! A scene owns every collidable it spawned from the map in an [`EntityStore`].
//! Entities are created on scene load and dropped with the store on teardown.
mod entity;
mod store;

pub use entity::{EntityId, EntityKind, EntityTags, SceneEntity};
pub use store::EntityStore;
