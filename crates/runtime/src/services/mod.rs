//! Services handed to scenes and hooks at construction time.
//!
//! Hooks never reach for globals: everything they may touch besides
//! [`school_core::GameState`] is bundled in [`SceneServices`].
mod notifications;

pub use notifications::{NotificationQueue, NotificationSink};

use crate::events::EventBus;

pub struct SceneServices {
    pub notifications: NotificationQueue,
    pub bus: EventBus,
}

impl SceneServices {
    pub fn new(notifications: NotificationQueue, bus: EventBus) -> Self {
        Self { notifications, bus }
    }
}

impl Default for SceneServices {
    fn default() -> Self {
        Self::new(NotificationQueue::default(), EventBus::default())
    }
}
