use crate::geometry::{Rect, Vec2};

use super::{EntityId, EntityKind, EntityTags, SceneEntity};

/// Entity collection for a single loaded scene.
///
/// Ids are assigned in spawn order and never reused while the store lives.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vec<SceneEntity>,
    next_id: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, kind: EntityKind, rect: Rect) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(SceneEntity::new(id, kind, rect));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEntity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count_tagged(&self, tags: EntityTags) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.tags.contains(tags))
            .count()
    }

    /// First player entity in spawn order.
    pub fn player(&self) -> Option<&SceneEntity> {
        self.entities.iter().find(|entity| entity.is_player())
    }

    pub fn player_mut(&mut self) -> Option<&mut SceneEntity> {
        self.entities.iter_mut().find(|entity| entity.is_player())
    }

    /// Keeps the first player entity and removes every later one.
    ///
    /// Returns the number of entities removed.
    pub fn prune_duplicate_players(&mut self) -> usize {
        let before = self.entities.len();
        let mut seen = false;
        self.entities.retain(|entity| {
            if !entity.is_player() {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });
        before - self.entities.len()
    }

    /// Solid entities whose rectangles overlap `rect`, excluding players.
    pub fn solids_overlapping<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a SceneEntity> {
        self.entities
            .iter()
            .filter(move |entity| entity.is_solid() && entity.rect.intersects(rect))
    }

    /// Moves the player to `position`, spawning one if the store has none.
    pub fn place_player(&mut self, position: Vec2, size: Vec2) -> EntityId {
        if let Some(player) = self.player_mut() {
            player.rect = Rect::at(position, size);
            return player.id;
        }
        self.spawn(EntityKind::Player, Rect::at(position, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32) -> Rect {
        Rect::new(x, 0.0, 16.0, 16.0)
    }

    #[test]
    fn prune_keeps_first_player() {
        let mut store = EntityStore::new();
        let first = store.spawn(EntityKind::Player, rect(0.0));
        store.spawn(EntityKind::Wall { name: None }, rect(32.0));
        store.spawn(EntityKind::Player, rect(64.0));

        assert_eq!(store.prune_duplicate_players(), 1);
        assert_eq!(store.count_tagged(EntityTags::PLAYER), 1);
        assert_eq!(store.player().map(|p| p.id), Some(first));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn place_player_spawns_when_missing() {
        let mut store = EntityStore::new();
        let id = store.place_player(Vec2::new(10.0, 20.0), Vec2::new(16.0, 16.0));
        assert_eq!(store.player().map(|p| p.rect.origin()), Some(Vec2::new(10.0, 20.0)));
        assert_eq!(store.place_player(Vec2::ZERO, Vec2::new(16.0, 16.0)), id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn walls_are_tagged_non_interactive() {
        let mut store = EntityStore::new();
        let id = store.spawn(EntityKind::Wall { name: None }, rect(0.0));
        let wall = store.get(id).unwrap();
        assert!(wall.tags.contains(EntityTags::WALL | EntityTags::NON_INTERACTIVE));
        assert!(wall.is_solid());
    }
}
