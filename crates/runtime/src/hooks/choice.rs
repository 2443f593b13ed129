//! Actions attached to dialogue choices.

use school_core::ChoiceAction;
use tracing::debug;

use super::{CompletionHook, HookContext, HookRegistry};
use crate::error::HookError;
use crate::events::{Event, InteractionEvent};

/// Dispatches the action of the confirmed choice.
///
/// Links and mini games are requests for the front-end and go out on the
/// event bus. They repeat on every completion. Named actions run the matching
/// registered callback only on the first completion of the key.
pub struct ChoiceActionHook;

impl CompletionHook for ChoiceActionHook {
    fn name(&self) -> &str {
        "choice_action"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        match ctx.outcome.action {
            Some(ChoiceAction::Named(_)) => ctx.first_completion,
            Some(_) => true,
            None => false,
        }
    }

    fn execute(&self, ctx: &mut HookContext<'_>, registry: &HookRegistry) -> Result<(), HookError> {
        let outcome = ctx.outcome;
        let Some(action) = outcome.action.as_ref() else {
            return Ok(());
        };

        match action {
            ChoiceAction::Cancel => {
                debug!(target: "runtime::hooks", key = %ctx.key, "Choice cancelled");
            }
            ChoiceAction::OpenLink { url } => {
                ctx.services
                    .bus
                    .publish(Event::Interaction(InteractionEvent::LinkRequested {
                        url: url.clone(),
                    }));
            }
            ChoiceAction::PlayGame => {
                ctx.services
                    .bus
                    .publish(Event::Interaction(InteractionEvent::GameRequested {
                        key: ctx.key.to_string(),
                    }));
            }
            ChoiceAction::Named(name) => {
                registry.invoke(name, ctx)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use school_core::{Category, DialogueOutcome, GameConfig, GameState, InteractionKey};

    use super::*;
    use crate::events::Topic;
    use crate::hooks::NotifyCallback;
    use crate::services::SceneServices;

    #[test]
    fn named_action_runs_on_first_completion_only() {
        let registry = HookRegistry::with_callbacks(vec![Arc::new(NotifyCallback::new(
            "kick_ball",
            "The ball bounced away!",
            "공이 튕겨 나갔다!",
        ))]);
        let mut state = GameState::new(&GameConfig::default());
        let mut services = SceneServices::default();
        let key = InteractionKey::new(Category::Object, "ball");
        let outcome = DialogueOutcome {
            selected: Some(0),
            action: Some(ChoiceAction::Named("kick_ball".into())),
            ..DialogueOutcome::default()
        };

        for first in [true, false, false] {
            let mut ctx = HookContext {
                key: &key,
                outcome: &outcome,
                first_completion: first,
                effects: None,
                chains: &[],
                state: &mut state,
                services: &mut services,
            };
            if ChoiceActionHook.should_trigger(&ctx) {
                ChoiceActionHook.execute(&mut ctx, &registry).unwrap();
            }
        }

        assert_eq!(services.notifications.len(), 1);
    }

    #[test]
    fn open_link_is_published() {
        let mut services = SceneServices::default();
        let mut rx = services.bus.subscribe(Topic::Interaction);
        let mut state = GameState::new(&GameConfig::default());
        let key = InteractionKey::new(Category::Object, "game");
        let outcome = DialogueOutcome {
            selected: Some(0),
            action: Some(ChoiceAction::OpenLink {
                url: "https://example.com".into(),
            }),
            ..DialogueOutcome::default()
        };
        let mut ctx = HookContext {
            key: &key,
            outcome: &outcome,
            first_completion: true,
            effects: None,
            chains: &[],
            state: &mut state,
            services: &mut services,
        };

        assert!(ChoiceActionHook.should_trigger(&ctx));
        ChoiceActionHook
            .execute(&mut ctx, &HookRegistry::default_hooks())
            .unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::Interaction(InteractionEvent::LinkRequested {
                url: "https://example.com".into()
            })
        );
    }
}
