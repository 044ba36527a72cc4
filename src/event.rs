//! Raw diagnostic events delivered by the host logging subsystem.
//!
//! The translator receives one [`Payload`] per error-level log occurrence.
//! The payload shape depends on the runtime generation that produced it:
//! older engines emit a textual format template plus positional arguments,
//! newer engines emit a labeled record. Everything else is an opaque value
//! the translator never inspects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Log severity, ordered from most to least verbose.
///
/// Used both as an event's own level and as the caller's configured
/// minimum level, which selects the rendering verbosity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Raw payload of one diagnostic event.
///
/// The two report-carrying shapes are mutually exclusive generations of the
/// same wire format; dispatch is by variant, never by sniffing the contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Legacy form: a format template with `~`-style positional directives
    /// (`~p`, `~tp`, `~w`, `~tw` each consume one argument; `~n` consumes
    /// none) and the ordered argument list.
    Format { template: String, args: Vec<Value> },

    /// Structured form: a labeled record with explicit field keys.
    Report(Map<String, Value>),

    /// Any other log kind; always passed through untouched.
    Other(Value),
}

impl Payload {
    /// Builds a legacy-form payload.
    pub fn format(template: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Format {
            template: template.into(),
            args,
        }
    }

    /// Builds a structured-form payload.
    pub fn report(record: Map<String, Value>) -> Self {
        Self::Report(record)
    }
}
