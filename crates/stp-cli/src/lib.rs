//! CLI library components for the skip-trace preprocessor.

pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod summary;
