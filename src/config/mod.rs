//! Configuration module for mirror runs
//!
//! This module provides the `MirrorConfig` struct and its type-safe builder
//! for configuring batch runs with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{Complete, MirrorConfigBuilder, WithImageDir};
pub use types::MirrorConfig;
