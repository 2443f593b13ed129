//! Execution context provided to hooks during evaluation.

use school_core::{DialogueOutcome, GameState, InteractionEffects, InteractionKey, QuestChain};

use crate::services::SceneServices;

/// Everything a completion hook may read or mutate.
pub struct HookContext<'a> {
    /// The interaction that just finished
    pub key: &'a InteractionKey,

    /// How the dialogue ended (selected choice, cancellation)
    pub outcome: &'a DialogueOutcome,

    /// True the first time this key completes in the session
    pub first_completion: bool,

    /// Effects declared for this kind by the scene
    pub effects: Option<&'a InteractionEffects>,

    /// Quest chains from the catalog
    pub chains: &'a [QuestChain],

    pub state: &'a mut GameState,

    pub services: &'a mut SceneServices,
}
