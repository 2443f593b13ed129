//! Completion hook system.
//!
//! Hooks run after the dialogue presenter reports `Done` for an interaction.
//! They are the only place where interaction completions mutate
//! [`school_core::GameState`].
//!
//! # Architecture
//!
//! - Root hooks run on every completion, sorted by priority
//! - Named callbacks live only in the lookup table and run when an effect or a
//!   choice action names them
//! - A name with no registered callback is logged and skipped
//!
//! # Idempotence
//!
//! The dispatcher records each [`school_core::InteractionKey`] on completion.
//! Hooks see whether this was the first completion and decide whether to fire
//! again: declared effects only repeat when marked repeatable, and quest
//! completion only matches open quests.

mod callbacks;
mod choice;
mod context;
mod effect;
mod quest;
mod registry;

pub use callbacks::NotifyCallback;
pub use choice::ChoiceActionHook;
pub use context::HookContext;
pub use effect::EffectHook;
pub use quest::QuestCompletionHook;
pub use registry::HookRegistry;

use crate::error::HookError;

/// Defines the criticality level of a hook for error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Failure is returned to the session, which logs it and keeps running.
    Critical,

    /// Failure is logged as an error and the remaining hooks still run.
    Important,

    /// Failure is logged at debug level.
    Optional,
}

impl HookCriticality {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Optional => "optional",
        }
    }
}

/// Reaction to a finished interaction.
pub trait CompletionHook: Send + Sync {
    /// Identifier used in logs and as the lookup key for named callbacks.
    fn name(&self) -> &str;

    /// Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Whether a root hook should run for this completion.
    ///
    /// Not consulted for callbacks invoked by name.
    fn should_trigger(&self, _ctx: &HookContext<'_>) -> bool {
        true
    }

    fn execute(&self, ctx: &mut HookContext<'_>, registry: &HookRegistry) -> Result<(), HookError>;
}
