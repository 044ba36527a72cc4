//! Event filter — classifies raw payloads into the shapes the translator
//! understands.
//!
//! Pure classification with no side effects: anything outside the two known
//! termination-report shapes is rejected without touching its contents.

use serde_json::{Map, Value};

use crate::event::Payload;

/// Leading literal of the legacy termination template, narrow directive.
pub const TERMINATING_HEADER: &str = "** State machine ~p terminating";

/// Wide-directive variant of the same header. Semantically identical to
/// [`TERMINATING_HEADER`]; the two differ in a single format-directive
/// character.
pub const TERMINATING_HEADER_WIDE: &str = "** State machine ~tp terminating";

/// Sentinel label identifying structured state-machine terminate reports.
const TERMINATE_LABEL: [&str; 2] = ["gen_statem", "terminate"];

/// Routing decision for a matched payload, borrowing from the raw event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route<'a> {
    /// Legacy format-template report.
    Legacy {
        template: &'a str,
        args: &'a [Value],
    },

    /// Structured labeled record.
    Structured(&'a Map<String, Value>),
}

/// Decide whether a payload is a state-machine termination report.
///
/// Returns `None` for every payload outside the matching vocabulary; the
/// caller treats that as the pass-through signal.
pub fn classify(payload: &Payload) -> Option<Route<'_>> {
    match payload {
        Payload::Format { template, args }
            if template.starts_with(TERMINATING_HEADER)
                || template.starts_with(TERMINATING_HEADER_WIDE) =>
        {
            Some(Route::Legacy { template, args })
        }
        Payload::Report(record) if has_terminate_label(record) => {
            Some(Route::Structured(record))
        }
        _ => None,
    }
}

fn has_terminate_label(record: &Map<String, Value>) -> bool {
    match record.get("label") {
        Some(Value::Array(pair)) => {
            pair.len() == 2
                && pair[0] == TERMINATE_LABEL[0]
                && pair[1] == TERMINATE_LABEL[1]
        }
        _ => false,
    }
}
