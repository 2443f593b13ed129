//! Hook registry for managing and executing completion hooks.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::{
    ChoiceActionHook, CompletionHook, EffectHook, HookContext, HookCriticality,
    QuestCompletionHook,
};
use crate::error::HookError;

/// Registry that manages and executes completion hooks.
///
/// - **Root hooks** run on every completion, checked via `should_trigger()`
/// - **Lookup hooks** run only when invoked by name
pub struct HookRegistry {
    root_hooks: Arc<[Arc<dyn CompletionHook>]>,
    lookup_table: HashMap<String, Arc<dyn CompletionHook>>,
}

impl HookRegistry {
    /// Creates a registry. Root hooks are sorted by priority (lower first);
    /// every hook in `all_hooks` can be invoked by name.
    pub fn new(
        mut root_hooks: Vec<Arc<dyn CompletionHook>>,
        all_hooks: Vec<Arc<dyn CompletionHook>>,
    ) -> Self {
        root_hooks.sort_by_key(|h| h.priority());

        let lookup_table = all_hooks
            .iter()
            .map(|h| (h.name().to_string(), Arc::clone(h)))
            .collect();

        Self {
            root_hooks: root_hooks.into(),
            lookup_table,
        }
    }

    /// Creates a registry with the default root hooks and no callbacks:
    /// QuestCompletionHook, EffectHook, ChoiceActionHook.
    pub fn default_hooks() -> Self {
        Self::with_callbacks(Vec::new())
    }

    /// Default root hooks plus named callbacks.
    pub fn with_callbacks(callbacks: Vec<Arc<dyn CompletionHook>>) -> Self {
        let root_hooks = vec![
            Arc::new(QuestCompletionHook) as Arc<dyn CompletionHook>,
            Arc::new(EffectHook) as Arc<dyn CompletionHook>,
            Arc::new(ChoiceActionHook) as Arc<dyn CompletionHook>,
        ];
        let all_hooks = root_hooks.iter().cloned().chain(callbacks).collect();
        Self::new(root_hooks, all_hooks)
    }

    /// Executes all root hooks for a finished interaction.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: returns the error immediately; later hooks do not run
    /// - `Important`: logs the error and continues
    /// - `Optional`: logs at debug level and continues
    pub fn execute_hooks(&self, ctx: &mut HookContext<'_>) -> Result<(), HookError> {
        for hook in self.root_hooks.iter() {
            if !hook.should_trigger(ctx) {
                continue;
            }
            if let Err(e) = hook.execute(ctx, self) {
                self.handle_hook_error(hook.as_ref(), e)?;
            }
        }

        Ok(())
    }

    /// Runs the callback registered under `name`.
    ///
    /// Returns `Ok(false)` when nothing is registered under that name.
    pub fn invoke(&self, name: &str, ctx: &mut HookContext<'_>) -> Result<bool, HookError> {
        let Some(hook) = self.find(name) else {
            warn!(
                target: "runtime::hooks",
                callback = name,
                key = %ctx.key,
                "Callback not registered, skipping"
            );
            return Ok(false);
        };

        if let Err(e) = hook.execute(ctx, self) {
            self.handle_hook_error(hook.as_ref(), e)?;
        }
        Ok(true)
    }

    /// Finds a hook by name from the lookup table.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn CompletionHook>> {
        self.lookup_table.get(name)
    }

    /// Returns the number of root hooks.
    pub fn len(&self) -> usize {
        self.root_hooks.len()
    }

    /// Returns true if no root hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.root_hooks.is_empty()
    }

    /// Returns an iterator over root hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.root_hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Handles hook execution errors based on criticality level.
    fn handle_hook_error(
        &self,
        hook: &dyn CompletionHook,
        error: HookError,
    ) -> Result<(), HookError> {
        let criticality = hook.criticality();
        match criticality {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = criticality.as_str(),
                    error = %error,
                    "Critical hook failed, skipping remaining hooks"
                );
                return Err(error);
            }
            HookCriticality::Important => error!(
                target: "runtime::hooks",
                hook = hook.name(),
                criticality = criticality.as_str(),
                error = %error,
                "Hook failed, continuing"
            ),
            HookCriticality::Optional => debug!(
                target: "runtime::hooks",
                hook = hook.name(),
                criticality = criticality.as_str(),
                error = %error,
                "Optional hook failed"
            ),
        }

        Ok(())
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use school_core::{
        Category, DialogueOutcome, GameConfig, GameState, InteractionKey,
    };

    use super::*;
    use crate::services::SceneServices;

    struct Recorder {
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl CompletionHook for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn criticality(&self) -> HookCriticality {
            self.criticality
        }

        fn execute(&self, _ctx: &mut HookContext<'_>, _registry: &HookRegistry) -> Result<(), HookError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                Err(HookError::Callback {
                    name: self.name.to_string(),
                    message: "boom".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn recorder(
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn CompletionHook> {
        Arc::new(Recorder {
            name,
            priority,
            criticality,
            fail,
            log: Arc::clone(log),
        })
    }

    fn run(registry: &HookRegistry) -> Result<(), HookError> {
        let key = InteractionKey::new(Category::Npc, "cat1");
        let outcome = DialogueOutcome::default();
        let mut state = GameState::new(&GameConfig::default());
        let mut services = SceneServices::default();
        let mut ctx = HookContext {
            key: &key,
            outcome: &outcome,
            first_completion: true,
            effects: None,
            chains: &[],
            state: &mut state,
            services: &mut services,
        };
        registry.execute_hooks(&mut ctx)
    }

    #[test]
    fn root_hooks_run_in_priority_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let roots = vec![
            recorder("late", 10, HookCriticality::Important, false, &log),
            recorder("early", -10, HookCriticality::Important, false, &log),
            recorder("middle", 0, HookCriticality::Important, true, &log),
        ];
        let registry = HookRegistry::new(roots.clone(), roots);

        assert!(run(&registry).is_ok());
        assert_eq!(*log.lock().unwrap(), ["early", "middle", "late"]);
    }

    #[test]
    fn critical_failure_stops_the_chain() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let roots = vec![
            recorder("first", 0, HookCriticality::Critical, true, &log),
            recorder("second", 1, HookCriticality::Important, false, &log),
        ];
        let registry = HookRegistry::new(roots.clone(), roots);

        assert!(run(&registry).is_err());
        assert_eq!(*log.lock().unwrap(), ["first"]);
    }

    #[test]
    fn missing_callback_is_skipped() {
        let registry = HookRegistry::default_hooks();
        let key = InteractionKey::new(Category::Object, "ball");
        let outcome = DialogueOutcome::default();
        let mut state = GameState::new(&GameConfig::default());
        let mut services = SceneServices::default();
        let mut ctx = HookContext {
            key: &key,
            outcome: &outcome,
            first_completion: true,
            effects: None,
            chains: &[],
            state: &mut state,
            services: &mut services,
        };
        assert!(!registry.invoke("kick_ball", &mut ctx).unwrap());
        assert_eq!(registry.len(), 3);
        assert!(registry.find("effects").is_some());
    }
}
