//! Errors surfaced by the scene runtime.
//!
//! Almost nothing here stops the game: scene construction falls back to a
//! bare scene, hooks are classified by criticality, and the session logs and
//! carries on. These types exist so the failures can be logged with context.

use school_core::{DialogueError, ErrorSeverity, GameError, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to load {what} for scene '{scene}': {message}")]
    Content {
        scene: String,
        what: &'static str,
        message: String,
    },

    #[error("map has no layer named '{layer}'")]
    MissingLayer { layer: String },

    #[error("object '{name}' in layer '{layer}' has an invalid rectangle")]
    InvalidObject { layer: String, name: String },

    #[error(transparent)]
    Dialogue(#[from] DialogueError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Hook(#[from] HookError),
}

impl RuntimeError {
    /// Wraps a loader failure. Loader errors carry their own context chain,
    /// which is flattened into the message.
    pub fn content(scene: &str, what: &'static str, error: impl std::fmt::Display) -> Self {
        Self::Content {
            scene: scene.to_string(),
            what,
            message: error.to_string(),
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Content { .. } | Self::MissingLayer { .. } | Self::InvalidObject { .. } => {
                ErrorSeverity::Validation
            }
            Self::Dialogue(e) => e.severity(),
            Self::State(e) => e.severity(),
            Self::Hook(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Content { .. } => "RUNTIME_CONTENT",
            Self::MissingLayer { .. } => "RUNTIME_MISSING_LAYER",
            Self::InvalidObject { .. } => "RUNTIME_INVALID_OBJECT",
            Self::Dialogue(e) => e.error_code(),
            Self::State(e) => e.error_code(),
            Self::Hook(e) => e.error_code(),
        }
    }
}

/// Failure inside a completion hook or named callback.
#[derive(Debug, Error)]
pub enum HookError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("callback '{name}' failed: {message}")]
    Callback { name: String, message: String },
}

impl GameError for HookError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::State(e) => e.severity(),
            Self::Callback { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::State(e) => e.error_code(),
            Self::Callback { .. } => "HOOK_CALLBACK_FAILED",
        }
    }
}
