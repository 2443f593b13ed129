//! Traits describing read-only content.
//!
//! Oracles let the interaction rules read dialogue tables without knowing how
//! or where they were loaded.
mod dialogue;

pub use dialogue::{DialogueOracle, EmptyDialogue, lookup_content, lookup_speaker, resolve};
