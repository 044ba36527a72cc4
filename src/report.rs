//! Canonical termination report — the normalized crash record.
//!
//! Built per event by the normalizer, consumed by the renderer, then
//! discarded. Never stored and never mutated after construction.

use serde_json::Value;

/// Normalized view of one abnormal-termination report.
///
/// `name`, `class`, and `reason` are derivable from any valid raw event of
/// either shape. Every other field is present only when the raw encoding
/// included that section: a legacy template that omitted the stack-trace
/// section yields `stack: None`, not an empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    /// Identifier of the terminating process (registered name or handle).
    pub name: Value,

    /// Failure classification: an exception name for raised errors, or the
    /// `exit`/`throw` class markers.
    pub class: Value,

    /// Failure payload.
    pub reason: Value,

    /// Call-stack trace captured at failure time.
    pub stack: Option<Value>,

    /// The event being processed when the failure occurred.
    pub last_event: Option<Value>,

    /// State value at failure time.
    pub state: Option<Value>,

    /// Dispatch mode the machine was running under.
    pub callback_mode: Option<Value>,

    /// Events still pending processing, in arrival order.
    pub queued: Option<Vec<Value>>,

    /// Events deferred for reprocessing after a state change.
    pub postponed: Option<Vec<Value>>,

    /// Combined pending-event encoding from older structured reports:
    /// head is the last event, tail is the remaining queue. Carried as-is;
    /// the renderer splits it when the separate fields are absent.
    pub queue: Option<Vec<Value>>,
}
