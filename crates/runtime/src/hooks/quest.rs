//! Quest completion and chaining.

use school_core::Notification;
use tracing::{debug, info};

use super::{CompletionHook, HookContext, HookRegistry};
use crate::error::HookError;
use crate::services::NotificationSink;

/// Completes the first open quest targeting the finished interaction, then
/// appends the quests chained to it.
///
/// Both steps are naturally idempotent: completed quests never match again and
/// chained quests are deduplicated by id and `[Qnn]` number.
pub struct QuestCompletionHook;

impl CompletionHook for QuestCompletionHook {
    fn name(&self) -> &str {
        "quest_completion"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn execute(&self, ctx: &mut HookContext<'_>, _registry: &HookRegistry) -> Result<(), HookError> {
        let locale = ctx.state.locale;
        let key = ctx.key;

        if let Some(quest) = ctx.state.quests.complete_matching(key) {
            info!(target: "runtime::hooks", quest = %quest.id, %key, "Quest completed");
            ctx.services
                .notifications
                .notify(Notification::quest_completed(&quest, locale));
        }

        for chain in ctx.chains.iter().filter(|chain| chain.on.matches(key)) {
            match ctx.state.quests.add_safely(chain.add.clone()) {
                Ok(()) => {
                    info!(target: "runtime::hooks", quest = %chain.add.id, %key, "Quest added");
                    ctx.services
                        .notifications
                        .notify(Notification::quest_added(&chain.add, locale));
                }
                Err(e) => debug!(target: "runtime::hooks", error = %e, "Chained quest already tracked"),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use school_core::{
        Category, DialogueOutcome, GameConfig, GameState, InteractionKey, QuestChain, QuestItem,
        QuestTarget, TargetType,
    };

    use super::*;
    use crate::services::SceneServices;

    #[test]
    fn completes_and_chains_once() {
        let student = QuestItem::new(
            "meet",
            "[Q02] Talk to a classmate",
            QuestTarget::new(TargetType::Npc, "student1"),
        );
        let chain = QuestChain {
            on: QuestTarget::new(TargetType::Npc, "student1"),
            add: QuestItem::new(
                "teacher",
                "[Q03] Find the teacher",
                QuestTarget::new(TargetType::Npc, "teacher"),
            ),
        };
        let chains = [chain];
        let mut state = GameState::new(&GameConfig::default()).with_quests(vec![student]);
        let mut services = SceneServices::default();
        let key = InteractionKey::new(Category::Student, "student1");
        let outcome = DialogueOutcome::default();
        let registry = HookRegistry::default_hooks();

        for first in [true, false] {
            let mut ctx = HookContext {
                key: &key,
                outcome: &outcome,
                first_completion: first,
                effects: None,
                chains: &chains,
                state: &mut state,
                services: &mut services,
            };
            QuestCompletionHook.execute(&mut ctx, &registry).unwrap();
        }

        assert!(state.quests.get("meet").unwrap().completed);
        assert_eq!(state.quests.items().len(), 2);
        assert!(!state.quests.get("teacher").unwrap().completed);
        // one completion + one new quest
        assert_eq!(services.notifications.len(), 2);
    }
}
