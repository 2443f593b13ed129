//! Dialogue content and presentation.
//!
//! [`ContentBundle`] is the normalized text shown for one interaction and
//! [`DialoguePresenter`] is the input-driven state machine that reveals it.
mod content;
mod error;
mod presenter;

pub use content::{BranchPoint, ChoiceAction, ChoiceOption, ContentBundle, DisplayUnit};
pub use error::DialogueError;
pub use presenter::{
    DialogueOutcome, DialoguePresenter, PresenterEvent, PresenterOptions, PresenterState,
};
