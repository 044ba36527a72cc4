//! # Statem Translator - Termination-Report Diagnostics
//!
//! Diagnostic translator for supervised state-machine processes: it
//! intercepts abnormal-termination log events and rewrites the raw,
//! engine-specific crash record into a normalized, human-readable incident
//! report. The state-machine engine itself, process registration, and
//! supervision wiring are external collaborators; this crate only consumes
//! the termination reports they emit.
//!
//! ## Architecture
//!
//! One component, three stages composed as a pipeline:
//! ```text
//!   raw event → filter → (if matched) normalize → render → message
//!                  ↓
//!              not handled (passed through unchanged)
//! ```
//!
//! Each event is processed independently with no shared mutable state; the
//! pipeline is safe for unrestricted concurrent invocation.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod event;
pub mod inspect;
pub mod report;
pub mod translator;
pub mod types;

// Internal utilities
pub mod observability;

pub use event::{Level, Payload};
pub use report::Report;
pub use translator::{install, translate, Translation};
pub use types::{Error, InspectOpts, ObservabilityConfig, Result, TranslatorConfig};
