use school_core::{DialogueOutcome, Notification, PresenterEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueEvent {
    Started {
        speaker: String,
        /// Interaction key, or `None` for scripted beats.
        key: Option<String>,
    },
    LineStarted {
        index: usize,
        text: String,
    },
    Revealed {
        visible: usize,
    },
    LineSettled {
        index: usize,
    },
    TalkCue {
        cue: String,
    },
    ChoiceOpened {
        question: String,
        labels: Vec<String>,
    },
    SelectionMoved {
        selected: usize,
    },
    Finished {
        selected: Option<usize>,
        cancelled: bool,
    },
}

impl From<&PresenterEvent> for DialogueEvent {
    fn from(event: &PresenterEvent) -> Self {
        match event {
            PresenterEvent::LineStarted { index, text } => Self::LineStarted {
                index: *index,
                text: text.clone(),
            },
            PresenterEvent::Revealed { visible } => Self::Revealed { visible: *visible },
            PresenterEvent::LineSettled { index } => Self::LineSettled { index: *index },
            PresenterEvent::TalkCue(cue) => Self::TalkCue { cue: cue.clone() },
            PresenterEvent::ChoiceOpened { question, labels } => Self::ChoiceOpened {
                question: question.clone(),
                labels: labels.clone(),
            },
            PresenterEvent::SelectionMoved { selected } => Self::SelectionMoved {
                selected: *selected,
            },
            PresenterEvent::Finished(DialogueOutcome {
                selected,
                cancelled,
                ..
            }) => Self::Finished {
                selected: *selected,
                cancelled: *cancelled,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// The player touched an interactable; it is now the holder's candidate.
    Entered { entity: u32, key: String },
    /// The player moved away from the held interactable.
    Exited { entity: u32 },
    Completed { key: String, first_time: bool },
    LinkRequested { url: String },
    GameRequested { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneEvent {
    Loaded {
        scene: String,
        entities: usize,
        /// True when the map failed to load and only the player was spawned.
        fallback: bool,
    },
    TransitionStarted {
        from: String,
        to: String,
    },
    LocaleChanged {
        locale: String,
    },
    MuteChanged {
        muted: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub kind: String,
    pub priority: u8,
    pub message: String,
}

impl From<&Notification> for NotificationEvent {
    fn from(notification: &Notification) -> Self {
        Self {
            kind: notification.kind.to_string(),
            priority: notification.priority(),
            message: notification.message.clone(),
        }
    }
}
