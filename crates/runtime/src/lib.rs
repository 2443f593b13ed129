//! Scene runtime for the school exploration game.
//!
//! This crate turns loaded content into a playable scene and drives it one
//! frame at a time. Consumers build a [`GameSession`], feed it
//! [`FrameInput`]s, and render from the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`scene`] builds entities from Tiled maps and handles collision and movement
//! - [`interaction`] resolves dialogue content for touched interactables
//! - [`hooks`] runs quest, effect and choice side effects after a dialogue ends
//! - [`events`] provides the topic-based event bus for observers
//! - [`services`] bundles what hooks may touch besides game state
//! - [`session`] hosts the frame loop and its builder
pub mod error;
pub mod events;
pub mod hooks;
pub mod input;
pub mod interaction;
pub mod scene;
pub mod services;
pub mod session;

pub use error::{HookError, Result, RuntimeError};
pub use events::{
    DialogueEvent, Event, EventBus, InteractionEvent, NotificationEvent, SceneEvent, Topic,
};
pub use hooks::{
    ChoiceActionHook, CompletionHook, EffectHook, HookContext, HookCriticality, HookRegistry,
    NotifyCallback, QuestCompletionHook,
};
pub use input::{FrameInput, InputAction};
pub use interaction::InteractionRegistry;
pub use scene::{CollisionDelta, CollisionTracker, LoadedScene, MapObjectLoader, move_player};
pub use services::{NotificationQueue, NotificationSink, SceneServices};
pub use session::{GameSession, GameSessionBuilder, InMemorySource, SceneSource, TALK_CUE};
