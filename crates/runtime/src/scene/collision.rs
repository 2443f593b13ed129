use std::collections::BTreeSet;

use school_core::{EntityId, EntityStore, EntityTags, Rect};

/// Regions that started or stopped touching the player this frame.
///
/// Both lists are in spawn order, so when several regions are entered in one
/// frame the last entry is the one that ends up in the holder.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollisionDelta {
    pub entered: Vec<EntityId>,
    pub exited: Vec<EntityId>,
}

impl CollisionDelta {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// Remembers touched interactive and transition regions between frames.
#[derive(Debug, Default)]
pub struct CollisionTracker {
    touching: BTreeSet<EntityId>,
}

impl CollisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares the regions touching `probe` against the previous frame.
    pub fn update(&mut self, store: &EntityStore, probe: &Rect) -> CollisionDelta {
        let now: BTreeSet<EntityId> = store
            .iter()
            .filter(|entity| {
                entity
                    .tags
                    .intersects(EntityTags::INTERACTIVE | EntityTags::TRANSITION)
            })
            .filter(|entity| entity.rect.intersects(probe))
            .map(|entity| entity.id)
            .collect();

        let delta = CollisionDelta {
            entered: now.difference(&self.touching).copied().collect(),
            exited: self.touching.difference(&now).copied().collect(),
        };
        self.touching = now;
        delta
    }

    pub fn is_touching(&self, entity: EntityId) -> bool {
        self.touching.contains(&entity)
    }

    pub fn reset(&mut self) {
        self.touching.clear();
    }
}

#[cfg(test)]
mod tests {
    use school_core::{Category, EntityKind, InteractionKey};

    use super::*;

    #[test]
    fn reports_enter_and_exit_once() {
        let mut store = EntityStore::new();
        let cat = store.spawn(
            EntityKind::Interactable {
                key: InteractionKey::new(Category::Npc, "cat1"),
            },
            Rect::new(20.0, 0.0, 10.0, 10.0),
        );
        store.spawn(EntityKind::Wall { name: None }, Rect::new(0.0, 0.0, 100.0, 1.0));
        let mut tracker = CollisionTracker::new();

        let far = Rect::new(0.0, 20.0, 10.0, 10.0);
        let near = Rect::new(15.0, 5.0, 10.0, 10.0);

        assert!(tracker.update(&store, &far).is_empty());
        assert_eq!(tracker.update(&store, &near).entered, vec![cat]);
        assert!(tracker.update(&store, &near).is_empty());
        assert_eq!(tracker.update(&store, &far).exited, vec![cat]);
    }
}
