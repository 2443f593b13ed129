//! Common error infrastructure for school-core.
//!
//! Domain-specific errors (e.g. [`crate::dialogue::DialogueError`],
//! [`crate::state::StateError`]) live next to the modules that raise them and
//! implement [`GameError`] so callers can decide how loudly to report them.
//!
//! Most failures in this crate are soft: missing content degrades to a
//! placeholder, and the runtime logs and continues instead of aborting a scene.

/// Severity level of an error, used for logging priority and recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request can be retried later (e.g. dialogue already running).
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: empty content bundle, too many choices in a branch point.
    Validation,

    /// Unexpected inconsistency that indicates a bug in content or wiring.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the same request may succeed later.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error points at a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all school-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant.
    ///
    /// Used as a structured field in log records.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
