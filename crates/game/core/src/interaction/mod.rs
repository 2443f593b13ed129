//! Interaction dispatch types.
//!
//! An [`InteractionKey`] names what the player is touching; the
//! [`InteractionHolder`] is the single slot recording the current candidate.
mod holder;
mod key;

pub use holder::{Interactable, InteractionData, InteractionHolder};
pub use key::{Category, InteractionKey};
