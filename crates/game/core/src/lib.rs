//! Deterministic interaction rules shared by the runtime and content loaders.
//!
//! `school-core` models what the player can touch in a scene, the dialogue
//! shown for it, and the persistent state that completions mutate. It performs
//! no I/O; content arrives through [`env::DialogueOracle`] and the runtime
//! drives [`dialogue::DialoguePresenter`] one frame at a time.
pub mod config;
pub mod dialogue;
pub mod effects;
pub mod env;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod locale;
pub mod notification;
pub mod scene;
pub mod state;

pub use config::GameConfig;
pub use dialogue::{
    BranchPoint, ChoiceAction, ChoiceOption, ContentBundle, DialogueError, DialogueOutcome,
    DialoguePresenter, DisplayUnit, PresenterEvent, PresenterOptions, PresenterState,
};
pub use effects::{Effect, EffectOutcome, InteractionEffects};
pub use env::{DialogueOracle, EmptyDialogue};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Rect, Vec2};
pub use interaction::{Category, Interactable, InteractionData, InteractionHolder, InteractionKey};
pub use locale::Locale;
pub use notification::{Notification, NotificationKind};
pub use scene::{EntityId, EntityKind, EntityStore, EntityTags, SceneEntity};
pub use state::{
    GameState, Inventory, InventoryItem, PlayerStatus, QuestChain, QuestItem, QuestLog,
    QuestTarget, StatKind, StatMeter, StateError, TargetType,
};
