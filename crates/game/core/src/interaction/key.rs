use std::fmt;

use crate::state::TargetType;

/// Semantic category of an interactable region.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Npc,
    Object,
    Student,
    Letter,
}

impl Category {
    /// Quest target family this category completes.
    ///
    /// Students are talked to like NPCs; letters are read like objects.
    pub const fn target_type(self) -> TargetType {
        match self {
            Self::Npc | Self::Student => TargetType::Npc,
            Self::Object | Self::Letter => TargetType::Object,
        }
    }
}

/// Stable identity of an interaction: `category` plus content `kind`.
///
/// Used for content lookup, quest matching and completion bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionKey {
    pub category: Category,
    pub kind: String,
}

impl InteractionKey {
    pub fn new(category: Category, kind: impl Into<String>) -> Self {
        Self {
            category,
            kind: kind.into(),
        }
    }
}

impl fmt::Display for InteractionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.kind)
    }
}
