//! Persistent state errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when mutating [`super::GameState`].
///
/// None of these abort an interaction; the runtime logs them and moves on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("inventory is full (max: {max})")]
    InventoryFull { max: usize },

    #[error("item '{id}' is already in the inventory")]
    DuplicateItem { id: String },

    /// A quest with the same id or `[Qnn]` number is already tracked.
    #[error("quest '{id}' is already tracked")]
    DuplicateQuest { id: String },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InventoryFull { .. } => ErrorSeverity::Validation,
            Self::DuplicateItem { .. } | Self::DuplicateQuest { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryFull { .. } => "STATE_INVENTORY_FULL",
            Self::DuplicateItem { .. } => "STATE_DUPLICATE_ITEM",
            Self::DuplicateQuest { .. } => "STATE_DUPLICATE_QUEST",
        }
    }
}
