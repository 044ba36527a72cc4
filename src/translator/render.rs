//! Report renderer — formats a canonical report at the requested verbosity
//! tier.
//!
//! Base rendering carries the terminating-process header and the formatted
//! failure. Extended rendering (debug tier only) appends one labeled line
//! per present optional field, in an order fixed by canonical field name so
//! identical reports render identically regardless of which raw-form path
//! produced them.

use serde_json::Value;

use crate::event::Level;
use crate::inspect::{inspect, inspect_seq};
use crate::report::Report;
use crate::types::InspectOpts;

/// Component name prefixed to every rendered report.
const COMPONENT: &str = "GenStateMachine";

/// Render a report. Pure; writes to no sink.
pub fn render(report: &Report, min_level: Level, opts: &InspectOpts) -> String {
    let mut out = String::new();
    out.push_str(COMPONENT);
    out.push(' ');
    out.push_str(&inspect(&report.name, opts));
    out.push_str(" terminating\n");
    write_failure(&mut out, report, opts);

    if min_level == Level::Debug {
        write_details(&mut out, report, opts);
    }
    out
}

/// Failure line plus stack frames, in the runtime's exception-formatting
/// convention: `** (<class>) <reason>` with four-space indented frames.
/// Renders cleanly when no stack trace was captured.
fn write_failure(out: &mut String, report: &Report, opts: &InspectOpts) {
    out.push_str("** (");
    out.push_str(&inspect(&report.class, opts));
    out.push_str(") ");
    out.push_str(&inspect(&report.reason, opts));
    if let Some(stack) = &report.stack {
        for frame in frames(stack) {
            out.push_str("\n    ");
            out.push_str(&inspect(frame, opts));
        }
    }
}

/// Optional-field lines, sorted by canonical field name:
/// callback_mode, last_event, postponed, queued, state.
fn write_details(out: &mut String, report: &Report, opts: &InspectOpts) {
    let (last_event, queued) = pending_events(report);

    if let Some(mode) = &report.callback_mode {
        push_line(out, "Callback mode", &inspect(mode, opts));
    }
    if let Some(event) = last_event {
        push_line(out, "Last event", &inspect(event, opts));
    }
    if let Some(postponed) = &report.postponed {
        push_line(out, "Postponed events", &inspect_seq(postponed, opts));
    }
    if let Some(queued) = queued {
        push_line(out, "Queued events", &inspect_seq(queued, opts));
    }
    if let Some(state) = &report.state {
        push_line(out, "State", &inspect(state, opts));
    }
}

/// Resolve the pending-event view across both report-encoding generations:
/// explicit `last_event`/`queued` fields win; otherwise the combined
/// `queue` splits into head (last event) and non-empty tail (queued).
fn pending_events(report: &Report) -> (Option<&Value>, Option<&[Value]>) {
    let last_event = report
        .last_event
        .as_ref()
        .or_else(|| report.queue.as_ref().and_then(|q| q.first()));
    let queued = report.queued.as_deref().or_else(|| {
        report
            .queue
            .as_deref()
            .and_then(|q| q.get(1..))
            .filter(|tail| !tail.is_empty())
    });
    (last_event, queued)
}

fn frames(stack: &Value) -> &[Value] {
    match stack {
        Value::Array(frames) => frames,
        other => std::slice::from_ref(other),
    }
}

fn push_line(out: &mut String, label: &str, value: &str) {
    out.push('\n');
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
}
