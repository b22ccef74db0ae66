//! Configuration module for rich-text normalization
//!
//! This module provides the `RichTextConfig` struct, its builder, JSON
//! loading and the per-field presets. Tag, attribute and style allow-lists
//! are the security boundary for stored markup that is later rendered raw,
//! so they are configuration rather than constants buried in the passes.

// Sub-modules
pub mod builder;
pub mod errors;
pub mod getters;
pub mod methods;
pub mod presets;
pub mod types;

// Re-exports for public API
pub use builder::RichTextConfigBuilder;
pub use errors::{ConfigError, ConfigResult};
pub use types::RichTextConfig;
