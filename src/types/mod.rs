//! Core types for the translator.
//!
//! This module provides foundational types used throughout the crate:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the translator and its
//!   observability surface

mod config;
mod errors;

pub use config::{InspectOpts, ObservabilityConfig, TranslatorConfig};
pub use errors::{Error, Result};
