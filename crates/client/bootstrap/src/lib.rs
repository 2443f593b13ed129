//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content discovery, and session setup that
//! can be reused by the script runner, a windowed frontend, or tests.
pub mod builder;
pub mod config;

pub use builder::{SessionBuilder, SessionSetup, default_callbacks};
pub use config::RuntimeConfig;
