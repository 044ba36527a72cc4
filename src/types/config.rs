//! Configuration structures.
//!
//! Configuration is loaded once at process startup and consumed read-only
//! afterwards.

use serde::{Deserialize, Serialize};

/// Global translator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslatorConfig {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Pretty-printing limits for embedded term values.
    #[serde(default)]
    pub inspect: InspectOpts,
}

impl TranslatorConfig {
    /// Load configuration from a JSON document.
    pub fn from_json(raw: &str) -> crate::types::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Limits applied when rendering embedded term values (state, events,
/// reasons) into report text. `None` means unlimited.
///
/// Configured once via [`crate::translator::install`] and read on demand at
/// translation time; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InspectOpts {
    /// Maximum nesting depth before eliding with `...`.
    pub max_depth: Option<usize>,

    /// Maximum elements rendered per sequence or record.
    pub max_items: Option<usize>,

    /// Maximum characters rendered per string value.
    pub max_string: Option<usize>,
}
