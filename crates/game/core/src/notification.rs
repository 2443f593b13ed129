//! Player-facing notifications.
//!
//! Messages are rendered in the active locale at creation time. Ordering and
//! pacing are handled by the runtime queue using [`NotificationKind::priority`].

use crate::locale::Locale;
use crate::state::{QuestItem, StatKind};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    QuestCompleted,
    QuestAdded,
    Status,
    Info,
    System,
}

impl NotificationKind {
    /// Higher values are shown first.
    pub const fn priority(self) -> u8 {
        match self {
            Self::QuestCompleted => 5,
            Self::QuestAdded => 4,
            Self::Status => 3,
            Self::Info => 2,
            Self::System => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn quest_completed(quest: &QuestItem, locale: Locale) -> Self {
        let message = match locale {
            Locale::Korean => format!("퀘스트 완료: {}", quest.title),
            Locale::English => format!("Quest completed: {}", quest.title),
        };
        Self::new(NotificationKind::QuestCompleted, message)
    }

    pub fn quest_added(quest: &QuestItem, locale: Locale) -> Self {
        let message = match locale {
            Locale::Korean => format!("새 퀘스트: {}", quest.title),
            Locale::English => format!("New quest: {}", quest.title),
        };
        Self::new(NotificationKind::QuestAdded, message)
    }

    /// Status change message, e.g. `Mood +1 (7/9)`.
    pub fn status_changed(stat: StatKind, applied: i32, current: u8, maximum: u8, locale: Locale) -> Self {
        let name = match (locale, stat) {
            (Locale::Korean, StatKind::Mood) => "기분",
            (Locale::Korean, StatKind::Health) => "체력",
            (Locale::English, StatKind::Mood) => "Mood",
            (Locale::English, StatKind::Health) => "Health",
        };
        Self::new(
            NotificationKind::Status,
            format!("{name} {applied:+} ({current}/{maximum})"),
        )
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::System, message)
    }

    pub fn priority(&self) -> u8 {
        self.kind.priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{QuestTarget, TargetType};

    #[test]
    fn quest_events_outrank_status() {
        assert!(NotificationKind::QuestCompleted.priority() > NotificationKind::QuestAdded.priority());
        assert!(NotificationKind::QuestAdded.priority() > NotificationKind::Status.priority());
        assert!(NotificationKind::Info.priority() > NotificationKind::System.priority());
    }

    #[test]
    fn messages_follow_locale() {
        let quest = QuestItem::new("q1", "[Q01] Pet the cat", QuestTarget::new(TargetType::Npc, "cat1"));
        assert_eq!(
            Notification::quest_completed(&quest, Locale::English).message,
            "Quest completed: [Q01] Pet the cat"
        );
        assert_eq!(
            Notification::status_changed(StatKind::Mood, 1, 7, 9, Locale::English).message,
            "Mood +1 (7/9)"
        );
        assert_eq!(
            Notification::status_changed(StatKind::Health, -2, 3, 9, Locale::Korean).message,
            "체력 -2 (3/9)"
        );
    }
}
