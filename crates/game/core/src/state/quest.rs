//! Quest tracking.
//!
//! Quests are created from a static catalog or appended by chains, completed
//! by matching interactions, and never removed.

use crate::interaction::InteractionKey;

use super::StateError;

/// Family of interactions a quest waits for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetType {
    Npc,
    Object,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestTarget {
    pub target_type: TargetType,
    pub target_id: String,
}

impl QuestTarget {
    pub fn new(target_type: TargetType, target_id: impl Into<String>) -> Self {
        Self {
            target_type,
            target_id: target_id.into(),
        }
    }

    /// True when finishing `key` satisfies this target.
    pub fn matches(&self, key: &InteractionKey) -> bool {
        self.target_type == key.category.target_type() && self.target_id == key.kind
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestItem {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: bool,
    pub target: QuestTarget,
}

impl QuestItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, target: QuestTarget) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            details: Vec::new(),
            completed: false,
            target,
        }
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    /// Number from a `[Qnn]` title prefix.
    pub fn number(&self) -> Option<u32> {
        quest_number(&self.title)
    }
}

/// Parses the `nn` out of a `[Qnn]` marker anywhere in `title`.
pub fn quest_number(title: &str) -> Option<u32> {
    let start = title.find("[Q")? + 2;
    let rest = &title[start..];
    let end = rest.find(']')?;
    rest[..end].parse().ok()
}

/// Rule that appends a quest when an interaction with `on` finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestChain {
    pub on: QuestTarget,
    pub add: QuestItem,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestLog {
    items: Vec<QuestItem>,
}

impl QuestLog {
    pub fn new(items: Vec<QuestItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[QuestItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&QuestItem> {
        self.items.iter().find(|quest| quest.id == id)
    }

    /// True if a quest with the same id or the same `[Qnn]` number exists.
    pub fn contains(&self, quest: &QuestItem) -> bool {
        let number = quest.number();
        self.items
            .iter()
            .any(|known| known.id == quest.id || (number.is_some() && known.number() == number))
    }

    /// Appends `quest` unless an equivalent one is already tracked.
    pub fn add_safely(&mut self, quest: QuestItem) -> Result<(), StateError> {
        if self.contains(&quest) {
            return Err(StateError::DuplicateQuest { id: quest.id });
        }
        self.items.push(quest);
        Ok(())
    }

    /// Flags the first open quest targeting `key` as completed and returns it.
    ///
    /// Already completed quests never match again, so repeating an interaction
    /// is harmless. A second quest on the same target waits for the next
    /// completion.
    pub fn complete_matching(&mut self, key: &InteractionKey) -> Option<QuestItem> {
        let quest = self
            .items
            .iter_mut()
            .find(|quest| !quest.completed && quest.target.matches(key))?;
        quest.completed = true;
        Some(quest.clone())
    }

    pub fn open(&self) -> impl Iterator<Item = &QuestItem> {
        self.items.iter().filter(|quest| !quest.completed)
    }
}
