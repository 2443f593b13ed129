//! Per-scene interaction dispatch.
mod registry;

pub use registry::InteractionRegistry;
