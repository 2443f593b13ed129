//! Topic-based event bus implementation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{DialogueEvent, InteractionEvent, NotificationEvent, SceneEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Dialogue box contents and choices
    Dialogue,
    /// Interaction candidates and completions
    Interaction,
    /// Scene loads, transitions and toggles
    Scene,
    /// Queued notifications as they are displayed
    Notification,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Dialogue(DialogueEvent),
    Interaction(InteractionEvent),
    Scene(SceneEvent),
    Notification(NotificationEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Dialogue(_) => Topic::Dialogue,
            Event::Interaction(_) => Topic::Interaction,
            Event::Scene(_) => Topic::Scene,
            Event::Notification(_) => Topic::Notification,
        }
    }
}

struct Channels {
    dialogue: broadcast::Sender<Event>,
    interaction: broadcast::Sender<Event>,
    scene: broadcast::Sender<Event>,
    notification: broadcast::Sender<Event>,
}

impl Channels {
    fn get(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Dialogue => &self.dialogue,
            Topic::Interaction => &self.interaction,
            Topic::Scene => &self.scene,
            Topic::Notification => &self.notification,
        }
    }
}

/// Topic-based event bus
///
/// Publishing never blocks. Slow subscribers lag and lose the oldest events,
/// which is acceptable for presentation-only consumers.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                dialogue: broadcast::channel(capacity).0,
                interaction: broadcast::channel(capacity).0,
                scene: broadcast::channel(capacity).0,
                notification: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.get(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.get(topic).subscribe()
    }

    /// Subscribe to several topics at once.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").finish_non_exhaustive()
    }
}
