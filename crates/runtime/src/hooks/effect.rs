//! Declared per-kind effects.

use school_core::{EffectOutcome, GameError, Locale, Notification};
use tracing::{debug, warn};

use super::{CompletionHook, HookContext, HookRegistry};
use crate::error::HookError;
use crate::services::NotificationSink;

/// Applies the effects a scene declared for the finished kind.
///
/// Effects fire on the first completion of a key, and on every completion
/// when the declaration is repeatable. Recoverable state errors (duplicate
/// item or quest) are logged and the remaining effects still apply.
pub struct EffectHook;

impl CompletionHook for EffectHook {
    fn name(&self) -> &str {
        "effects"
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        ctx.effects
            .is_some_and(|effects| ctx.first_completion || effects.repeatable)
    }

    fn execute(&self, ctx: &mut HookContext<'_>, registry: &HookRegistry) -> Result<(), HookError> {
        let Some(declared) = ctx.effects else {
            return Ok(());
        };
        let locale = ctx.state.locale;

        for effect in &declared.effects {
            let outcome = match effect.apply(ctx.state) {
                Ok(outcome) => outcome,
                Err(e) if e.severity().is_recoverable() => {
                    warn!(target: "runtime::hooks", key = %ctx.key, code = e.error_code(), error = %e, "Effect skipped");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match outcome {
                EffectOutcome::StatusChanged {
                    stat,
                    applied,
                    current,
                } => {
                    if applied == 0 {
                        debug!(target: "runtime::hooks", %stat, current, "Status already at bound");
                        continue;
                    }
                    let maximum = ctx.state.status.meter(stat).maximum();
                    ctx.services.notifications.notify(Notification::status_changed(
                        stat, applied, current, maximum, locale,
                    ));
                }
                EffectOutcome::FlagSet(flag) => {
                    debug!(target: "runtime::hooks", flag = %flag, "Flag set");
                }
                EffectOutcome::ItemAdded(item) => {
                    let message = match locale {
                        Locale::Korean => format!("아이템 획득: {}", item.name),
                        Locale::English => format!("Got item: {}", item.name),
                    };
                    ctx.services.notifications.notify(Notification::info(message));
                }
                EffectOutcome::QuestAdded(quest) => {
                    ctx.services
                        .notifications
                        .notify(Notification::quest_added(&quest, locale));
                }
                EffectOutcome::Invoke(name) => {
                    registry.invoke(&name, ctx)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use school_core::{
        Category, DialogueOutcome, Effect, GameConfig, GameState, InteractionEffects,
        InteractionKey, InventoryItem, StatKind,
    };

    use super::*;
    use crate::services::SceneServices;

    fn complete(
        state: &mut GameState,
        services: &mut SceneServices,
        effects: &InteractionEffects,
        first: bool,
    ) {
        let key = InteractionKey::new(Category::Object, "ball");
        let outcome = DialogueOutcome::default();
        let registry = HookRegistry::default_hooks();
        let mut ctx = HookContext {
            key: &key,
            outcome: &outcome,
            first_completion: first,
            effects: Some(effects),
            chains: &[],
            state,
            services,
        };
        if EffectHook.should_trigger(&ctx) {
            EffectHook.execute(&mut ctx, &registry).unwrap();
        }
    }

    #[test]
    fn one_shot_effects_fire_once() {
        let mut state = GameState::new(&GameConfig::default());
        let mut services = SceneServices::default();
        let effects = InteractionEffects::once([Effect::AdjustStatus {
            stat: StatKind::Health,
            delta: -1,
        }]);

        complete(&mut state, &mut services, &effects, true);
        complete(&mut state, &mut services, &effects, false);
        assert_eq!(state.status.health.current(), 8);
    }

    #[test]
    fn repeatable_effects_fire_every_time() {
        let mut state = GameState::new(&GameConfig::default());
        let mut services = SceneServices::default();
        let effects = InteractionEffects::repeatable([Effect::AdjustStatus {
            stat: StatKind::Health,
            delta: -2,
        }]);

        for first in [true, false, false, false, false, false] {
            complete(&mut state, &mut services, &effects, first);
        }
        assert_eq!(state.status.health.current(), 0);
    }

    #[test]
    fn duplicate_item_does_not_block_later_effects() {
        let mut state = GameState::new(&GameConfig::default());
        state.inventory.add(InventoryItem::new("letter3", "Letter")).unwrap();
        let mut services = SceneServices::default();
        let effects = InteractionEffects::once([
            Effect::AddItem(InventoryItem::new("letter3", "Letter")),
            Effect::SetFlag("read_letter3".into()),
        ]);

        complete(&mut state, &mut services, &effects, true);
        assert!(state.has_flag("read_letter3"));
        assert_eq!(state.inventory.len(), 1);
    }
}
