use crate::error::{ErrorSeverity, GameError};

/// Errors raised when building or starting a dialogue.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialogueError {
    /// A dialogue is already on screen. Nothing is queued.
    #[error("a dialogue is already active")]
    AlreadyActive,

    #[error("content bundle has no lines and no branch point")]
    EmptyBundle,

    #[error("branch point has {count} choices, at most {max} are supported")]
    TooManyChoices { count: usize, max: usize },
}

impl GameError for DialogueError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyActive => ErrorSeverity::Recoverable,
            Self::EmptyBundle | Self::TooManyChoices { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyActive => "DIALOGUE_ALREADY_ACTIVE",
            Self::EmptyBundle => "DIALOGUE_EMPTY_BUNDLE",
            Self::TooManyChoices { .. } => "DIALOGUE_TOO_MANY_CHOICES",
        }
    }
}
