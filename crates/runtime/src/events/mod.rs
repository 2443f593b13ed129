//! Topic-based event bus for observers of a running session.
//!
//! The session publishes everything a front-end needs to draw: dialogue text
//! as it is revealed, interaction candidates, scene changes and notifications.
//! Consumers subscribe only to the topics they render.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DialogueEvent, InteractionEvent, NotificationEvent, SceneEvent};
