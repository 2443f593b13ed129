use crate::dialogue::ContentBundle;
use crate::scene::EntityId;

use super::InteractionKey;

/// Text resolved for one interaction in the active locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionData {
    pub speaker: String,
    pub content: ContentBundle,
}

/// The entity the player can currently interact with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interactable {
    pub entity: EntityId,
    pub key: InteractionKey,
    pub data: InteractionData,
}

/// Single-slot record of the current interaction candidate.
///
/// Writes are unconditional: when two regions are touched in the same frame
/// the later collision callback wins. Nothing is queued.
#[derive(Clone, Debug, Default)]
pub struct InteractionHolder {
    current: Option<Interactable>,
}

impl InteractionHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot and returns the previous occupant, if any.
    pub fn set(&mut self, interactable: Interactable) -> Option<Interactable> {
        self.current.replace(interactable)
    }

    pub fn clear(&mut self) -> Option<Interactable> {
        self.current.take()
    }

    /// Clears the slot only if it currently holds `entity`.
    pub fn release(&mut self, entity: EntityId) -> bool {
        if self.current.as_ref().is_some_and(|held| held.entity == entity) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<&Interactable> {
        self.current.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Interactable> {
        self.current.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::Category;

    fn interactable(id: u32, kind: &str) -> Interactable {
        Interactable {
            entity: EntityId(id),
            key: InteractionKey::new(Category::Npc, kind),
            data: InteractionData {
                speaker: kind.to_string(),
                content: ContentBundle::from_lines([format!("hi from {kind}")]),
            },
        }
    }

    #[test]
    fn last_write_wins() {
        let mut holder = InteractionHolder::new();
        let kinds = ["cat1", "student1", "ball", "teacher"];
        for (idx, kind) in kinds.iter().enumerate() {
            holder.set(interactable(idx as u32 + 1, kind));
            assert_eq!(holder.get().map(|i| i.key.kind.as_str()), Some(*kind));
        }
        let held = holder.get().unwrap();
        assert_eq!(held.entity, EntityId(4));
        assert_eq!(held.key.kind, "teacher");
    }

    #[test]
    fn release_ignores_other_entities() {
        let mut holder = InteractionHolder::new();
        holder.set(interactable(1, "cat1"));
        holder.set(interactable(2, "ball"));

        assert!(!holder.release(EntityId(1)));
        assert_eq!(holder.get().map(|i| i.entity), Some(EntityId(2)));
        assert!(holder.release(EntityId(2)));
        assert!(holder.is_empty());
    }

    #[test]
    fn clear_returns_previous() {
        let mut holder = InteractionHolder::new();
        assert!(holder.clear().is_none());
        holder.set(interactable(7, "cat1"));
        assert_eq!(holder.clear().map(|i| i.entity), Some(EntityId(7)));
        assert!(holder.get().is_none());
    }
}
