//! Termination-report translator pipeline.
//!
//! Composes the three stages — filter, normalizer, renderer — into the
//! single hook the host logging subsystem calls per diagnostic event:
//! classify the payload, normalize a match into the canonical report, and
//! render it at the caller's verbosity tier.
//!
//! Every invocation operates only on its arguments and produces a fresh
//! value; the translator is safe for unrestricted concurrent use. The one
//! shared resource is the formatting-options value installed once at
//! startup and read on demand afterwards.

pub mod filter;
pub mod normalize;
pub mod render;

use std::sync::OnceLock;

use crate::event::{Level, Payload};
use crate::types::{InspectOpts, TranslatorConfig};

static INSPECT_OPTS: OnceLock<InspectOpts> = OnceLock::new();

/// Outcome of one translation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// The event is outside the translator's vocabulary (or a matched event
    /// was malformed); the host emits the original diagnostic unchanged.
    Skip,

    /// The rewritten message that replaces the raw report in the log sink.
    Rewrite(String),
}

impl Translation {
    pub fn is_skip(&self) -> bool {
        matches!(self, Translation::Skip)
    }

    /// The rewritten message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Translation::Skip => None,
            Translation::Rewrite(msg) => Some(msg),
        }
    }
}

/// Register the translator with the host process, exactly once.
///
/// Initializes observability and stores the configured pretty-printing
/// limits for the lifetime of the process; later calls are no-ops. There is
/// no explicit teardown — process shutdown tears the registration down with
/// it.
pub fn install(config: &TranslatorConfig) {
    crate::observability::init_tracing(&config.observability);

    let mut installed = false;
    INSPECT_OPTS.get_or_init(|| {
        installed = true;
        config.inspect.clone()
    });
    if installed {
        tracing::debug!("termination-report translator installed");
    }
}

/// Translate one diagnostic event.
///
/// Returns [`Translation::Skip`] for everything outside the known report
/// shapes and for matched events whose internal structure is malformed; a
/// translator defect never suppresses the original diagnostic and nothing
/// escapes this boundary as an error.
pub fn translate(min_level: Level, payload: &Payload) -> Translation {
    let Some(route) = filter::classify(payload) else {
        return Translation::Skip;
    };
    match normalize::normalize(route) {
        Ok(report) => {
            let opts = inspect_opts();
            Translation::Rewrite(render::render(&report, min_level, opts))
        }
        Err(_) => Translation::Skip,
    }
}

/// Installed options, or defaults when [`install`] was never called.
fn inspect_opts() -> &'static InspectOpts {
    static DEFAULT: OnceLock<InspectOpts> = OnceLock::new();
    INSPECT_OPTS
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(InspectOpts::default))
}
