use bitflags::bitflags;

use crate::geometry::Rect;
use crate::interaction::InteractionKey;

/// Unique identifier for an entity within one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Collision tags attached to scene entities.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EntityTags: u8 {
        const PLAYER = 1 << 0;
        const WALL = 1 << 1;
        const NON_INTERACTIVE = 1 << 2;
        const INTERACTIVE = 1 << 3;
        const TRANSITION = 1 << 4;
        /// Blocks player movement.
        const SOLID = 1 << 5;
    }
}

/// What an entity does when the player touches it.
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    Player,
    /// Plain collider. `name` is kept for logging only.
    Wall { name: Option<String> },
    Interactable { key: InteractionKey },
    /// Door-like trigger that moves the player into another scene.
    Transition { target: String, spawn: Option<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub rect: Rect,
    pub tags: EntityTags,
}

impl SceneEntity {
    pub fn new(id: EntityId, kind: EntityKind, rect: Rect) -> Self {
        let tags = match &kind {
            EntityKind::Player => EntityTags::PLAYER,
            EntityKind::Wall { .. } => {
                EntityTags::WALL | EntityTags::NON_INTERACTIVE | EntityTags::SOLID
            }
            EntityKind::Interactable { .. } => EntityTags::INTERACTIVE | EntityTags::SOLID,
            EntityKind::Transition { .. } => EntityTags::TRANSITION,
        };
        Self {
            id,
            kind,
            rect,
            tags,
        }
    }

    pub fn is_player(&self) -> bool {
        self.tags.contains(EntityTags::PLAYER)
    }

    pub fn is_solid(&self) -> bool {
        self.tags.contains(EntityTags::SOLID)
    }

    pub fn interaction_key(&self) -> Option<&InteractionKey> {
        match &self.kind {
            EntityKind::Interactable { key } => Some(key),
            _ => None,
        }
    }
}
