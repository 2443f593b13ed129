//! Collision-to-dialogue wiring for one scene.

use std::collections::HashMap;
use std::sync::Arc;

use school_core::env::{self, DialogueOracle};
use school_core::{
    EntityId, Interactable, InteractionEffects, InteractionHolder, InteractionKey, Locale,
};
use tracing::debug;

/// Resolves interaction content for a scene and owns its holder.
///
/// One registry is created per scene from the scene's dialogue oracle and
/// effects table, and dropped with the scene.
pub struct InteractionRegistry {
    oracle: Arc<dyn DialogueOracle>,
    effects: HashMap<String, InteractionEffects>,
    holder: InteractionHolder,
}

impl InteractionRegistry {
    pub fn new(oracle: Arc<dyn DialogueOracle>, effects: HashMap<String, InteractionEffects>) -> Self {
        Self {
            oracle,
            effects,
            holder: InteractionHolder::new(),
        }
    }

    /// Makes `entity` the current interaction candidate (last write wins).
    pub fn on_enter(&mut self, entity: EntityId, key: InteractionKey, locale: Locale) {
        let data = env::resolve(self.oracle.as_ref(), locale, &key.kind);
        let previous = self.holder.set(Interactable { entity, key, data });
        if let Some(previous) = previous.filter(|previous| previous.entity != entity) {
            debug!(
                target: "runtime::interaction",
                replaced = %previous.key,
                "Interaction candidate replaced"
            );
        }
    }

    /// Clears the holder if it still points at `entity`.
    pub fn on_exit(&mut self, entity: EntityId) -> bool {
        self.holder.release(entity)
    }

    /// Re-resolves the held content after a locale change.
    pub fn refresh(&mut self, locale: Locale) {
        let oracle = Arc::clone(&self.oracle);
        if let Some(held) = self.holder.get_mut() {
            held.data = env::resolve(oracle.as_ref(), locale, &held.key.kind);
        }
    }

    pub fn holder(&self) -> &InteractionHolder {
        &self.holder
    }

    pub fn clear(&mut self) -> Option<Interactable> {
        self.holder.clear()
    }

    pub fn effects_for(&self, kind: &str) -> Option<&InteractionEffects> {
        self.effects.get(kind)
    }

    pub fn oracle(&self) -> &dyn DialogueOracle {
        self.oracle.as_ref()
    }

    pub fn speed_multiplier(&self, kind: &str) -> f32 {
        self.oracle.speed_multiplier(kind)
    }
}

#[cfg(test)]
mod tests {
    use school_core::{Category, ContentBundle, DisplayUnit, EmptyDialogue};

    use super::*;

    struct Bilingual;

    impl DialogueOracle for Bilingual {
        fn speaker(&self, _locale: Locale, _kind: &str) -> Option<String> {
            None
        }

        fn content(&self, locale: Locale, _kind: &str) -> Option<Vec<DisplayUnit>> {
            let line = match locale {
                Locale::Korean => "야옹",
                Locale::English => "meow",
            };
            Some(vec![DisplayUnit::Line(line.into())])
        }
    }

    #[test]
    fn enter_resolves_with_fallback() {
        let mut registry = InteractionRegistry::new(Arc::new(EmptyDialogue), HashMap::new());
        registry.on_enter(EntityId(3), InteractionKey::new(Category::Object, "ball"), Locale::English);

        let held = registry.holder().get().unwrap();
        assert_eq!(held.data.content, ContentBundle::placeholder("ball"));
        assert_eq!(held.data.speaker, "ball");
    }

    #[test]
    fn exit_only_clears_own_entity() {
        let mut registry = InteractionRegistry::new(Arc::new(EmptyDialogue), HashMap::new());
        registry.on_enter(EntityId(1), InteractionKey::new(Category::Npc, "cat1"), Locale::English);
        registry.on_enter(EntityId(2), InteractionKey::new(Category::Npc, "cat2"), Locale::English);

        assert!(!registry.on_exit(EntityId(1)));
        assert_eq!(registry.holder().get().map(|h| h.entity), Some(EntityId(2)));
        assert!(registry.on_exit(EntityId(2)));
        assert!(registry.holder().is_empty());
    }

    #[test]
    fn refresh_switches_locale() {
        let mut registry = InteractionRegistry::new(Arc::new(Bilingual), HashMap::new());
        registry.on_enter(EntityId(1), InteractionKey::new(Category::Npc, "cat1"), Locale::English);
        registry.refresh(Locale::Korean);
        assert_eq!(
            registry.holder().get().unwrap().data.content.lines,
            vec!["야옹".to_string()]
        );
    }
}
