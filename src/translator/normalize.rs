//! Report normalizer — turns a matched raw event into a [`Report`].
//!
//! The structured path is direct key lookup. The legacy path splits the
//! format template on its argument-consuming directives and matches each
//! literal segment against a fixed header vocabulary; recognized headers
//! contribute field slots that are then paired positionally with the
//! argument list.

use serde_json::{Map, Value};

use crate::report::Report;
use crate::translator::filter::Route;
use crate::types::{Error, Result};

/// Canonical field slots a template section can contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Class,
    Reason,
    Stack,
    LastEvent,
    State,
    CallbackMode,
    Queued,
    Postponed,
}

/// Section-header vocabulary, consulted in order.
///
/// Each entry maps a header's leading literal to the field slots it
/// contributes. The termination-reason section alone consumes two
/// positional arguments (class, then reason).
pub(crate) const SECTION_FIELDS: &[(&str, &[Field])] = &[
    ("State machine", &[Field::Name]),
    ("Last event", &[Field::LastEvent]),
    ("When server state", &[Field::State]),
    ("Reason for termination", &[Field::Class, Field::Reason]),
    ("Callback mode", &[Field::CallbackMode]),
    ("Stacktrace", &[Field::Stack]),
    ("Queued", &[Field::Queued]),
    ("Postponed", &[Field::Postponed]),
];

/// Normalize a matched raw event into the canonical report.
pub fn normalize(route: Route<'_>) -> Result<Report> {
    match route {
        Route::Legacy { template, args } => normalize_legacy(template, args),
        Route::Structured(record) => normalize_structured(record),
    }
}

// =============================================================================
// Legacy format-template path
// =============================================================================

fn normalize_legacy(template: &str, args: &[Value]) -> Result<Report> {
    let mut slots: Vec<Field> = Vec::new();
    for segment in split_segments(template) {
        if let Some(fields) = section_fields(segment) {
            slots.extend_from_slice(fields);
        }
    }
    if slots.len() != args.len() {
        return Err(Error::slot_mismatch(slots.len(), args.len()));
    }

    let mut report = Report::default();
    for (field, arg) in slots.iter().zip(args) {
        match field {
            Field::Name => report.name = arg.clone(),
            Field::Class => report.class = arg.clone(),
            Field::Reason => report.reason = arg.clone(),
            Field::Stack => report.stack = Some(arg.clone()),
            Field::LastEvent => report.last_event = Some(arg.clone()),
            Field::State => report.state = Some(arg.clone()),
            Field::CallbackMode => report.callback_mode = Some(arg.clone()),
            Field::Queued => report.queued = Some(event_list(arg)),
            Field::Postponed => report.postponed = Some(event_list(arg)),
        }
    }
    Ok(report)
}

/// Split a template into the literal segments between argument-consuming
/// directives (`~p`, `~tp`, `~w`, `~tw`). The newline directive `~n`
/// consumes no argument and stays inside its segment.
fn split_segments(template: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let bytes = template.as_bytes();
    while i < bytes.len() {
        if bytes[i] == b'~' {
            let rest = &template[i + 1..];
            let len = if rest.starts_with("tp") || rest.starts_with("tw") {
                Some(3)
            } else if rest.starts_with('p') || rest.starts_with('w') {
                Some(2)
            } else {
                None
            };
            if let Some(len) = len {
                segments.push(&template[start..i]);
                i += len;
                start = i;
                continue;
            }
        }
        i += 1;
    }
    segments.push(&template[start..]);
    segments
}

/// Match one literal segment against the header vocabulary.
///
/// A segment is located by its `"** "` section marker; the text after the
/// marker is compared against the table. Segments with no marker or no
/// matching header (bare delimiters, trailing newlines) contribute nothing.
fn section_fields(segment: &str) -> Option<&'static [Field]> {
    let marker = segment.find("** ")?;
    let header = &segment[marker + 3..];
    SECTION_FIELDS
        .iter()
        .find(|(prefix, _)| header.starts_with(prefix))
        .map(|(_, fields)| *fields)
}

// =============================================================================
// Structured record path
// =============================================================================

fn normalize_structured(record: &Map<String, Value>) -> Result<Report> {
    let name = record
        .get("name")
        .cloned()
        .ok_or_else(|| Error::malformed("structured report without name"))?;

    // The failure triple appears either as three separate keys (older
    // encoding) or as one combined 3-element reason (newer encoding).
    let (class, reason, stack) = if let Some(class) = record.get("class") {
        let reason = record
            .get("reason")
            .cloned()
            .ok_or_else(|| Error::malformed("structured report without reason"))?;
        (class.clone(), reason, stack_value(record.get("stacktrace")))
    } else {
        match record.get("reason") {
            Some(Value::Array(triple)) if triple.len() == 3 => (
                triple[0].clone(),
                triple[1].clone(),
                stack_value(Some(&triple[2])),
            ),
            Some(other) => {
                return Err(Error::malformed(format!(
                    "failure triple is not a 3-element sequence: {other}"
                )))
            }
            None => return Err(Error::malformed("structured report without reason")),
        }
    };

    Ok(Report {
        name,
        class,
        reason,
        stack,
        last_event: present(record.get("last_event")),
        state: present(record.get("state")),
        callback_mode: present(record.get("callback_mode")),
        queued: present(record.get("queued")).map(|v| event_list(&v)),
        postponed: present(record.get("postponed")).map(|v| event_list(&v)),
        queue: present(record.get("queue")).map(|v| event_list(&v)),
    })
}

/// A key counts as present only when it holds a non-null value.
fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}

/// A stack trace element counts only when it is non-null and non-empty.
fn stack_value(value: Option<&Value>) -> Option<Value> {
    present(value).filter(|v| match v {
        Value::Array(frames) => !frames.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn event_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Payload;
    use crate::translator::filter::{classify, Route};
    use serde_json::json;

    /// Full legacy template as emitted by the engine when every optional
    /// section was active at crash time.
    const FULL_TEMPLATE: &str = "** State machine ~tp terminating~n\
        ** Last event = ~tp~n\
        ** When server state  = ~tp~n\
        ** Reason for termination = ~w:~tp~n\
        ** Callback mode = ~p~n\
        ** Stacktrace =~n** ~tp~n\
        ** Queued = ~tp~n\
        ** Postponed = ~tp~n";

    fn legacy(template: &str, args: Vec<Value>) -> Report {
        let payload = Payload::format(template, args);
        let Some(route) = classify(&payload) else {
            panic!("template should classify as legacy");
        };
        normalize(route).unwrap()
    }

    #[test]
    fn test_segments_split_on_argument_directives_only() {
        let segments = split_segments("** State machine ~tp terminating~n** Last event = ~p~n");
        assert_eq!(
            segments,
            vec!["** State machine ", " terminating~n** Last event = ", "~n"]
        );
    }

    #[test]
    fn test_section_table_matches_headers_after_marker() {
        assert_eq!(
            section_fields("** State machine "),
            Some(&[Field::Name][..])
        );
        assert_eq!(
            section_fields(" terminating~n** Last event = "),
            Some(&[Field::LastEvent][..])
        );
        assert_eq!(
            section_fields("~n** Reason for termination = "),
            Some(&[Field::Class, Field::Reason][..])
        );
        assert_eq!(
            section_fields("~n** Stacktrace =~n** "),
            Some(&[Field::Stack][..])
        );
    }

    #[test]
    fn test_noise_segments_contribute_nothing() {
        assert_eq!(section_fields(":"), None);
        assert_eq!(section_fields("~n"), None);
        assert_eq!(section_fields(""), None);
        assert_eq!(section_fields("~n** Unrecognized section = "), None);
    }

    #[test]
    fn test_full_template_pairs_all_nine_arguments_in_order() {
        let report = legacy(
            FULL_TEMPLATE,
            vec![
                json!("Switch1"),
                json!(["internal", "error"]),
                json!({"state": "off", "data": 0}),
                json!("RuntimeError"),
                json!("oops"),
                json!("handle_event_function"),
                json!(["frame_a", "frame_b"]),
                json!([["internal", "queued"]]),
                json!([["internal", "postpone"]]),
            ],
        );
        assert_eq!(report.name, json!("Switch1"));
        assert_eq!(report.class, json!("RuntimeError"));
        assert_eq!(report.reason, json!("oops"));
        assert_eq!(report.last_event, Some(json!(["internal", "error"])));
        assert_eq!(report.state, Some(json!({"state": "off", "data": 0})));
        assert_eq!(report.callback_mode, Some(json!("handle_event_function")));
        assert_eq!(report.stack, Some(json!(["frame_a", "frame_b"])));
        assert_eq!(report.queued, Some(vec![json!(["internal", "queued"])]));
        assert_eq!(report.postponed, Some(vec![json!(["internal", "postpone"])]));
    }

    #[test]
    fn test_template_without_stacktrace_yields_no_stack() {
        let template = "** State machine ~tp terminating~n\
            ** Last event = ~tp~n\
            ** When server state  = ~tp~n\
            ** Reason for termination = ~w:~tp~n";
        let report = legacy(
            template,
            vec![
                json!("Switch1"),
                json!(["cast", "flip"]),
                json!("off"),
                json!("exit"),
                json!("shutdown"),
            ],
        );
        assert_eq!(report.stack, None);
        assert_eq!(report.queued, None);
        assert_eq!(report.postponed, None);
    }

    #[test]
    fn test_slot_count_mismatch_is_malformed() {
        let payload = Payload::format(
            "** State machine ~tp terminating~n** Last event = ~tp~n",
            vec![json!("Switch1")],
        );
        let Some(route) = classify(&payload) else {
            panic!("template should classify as legacy");
        };
        let err = normalize(route).unwrap_err();
        assert!(matches!(err, Error::MalformedReport(_)));
    }

    #[test]
    fn test_structured_separate_keys() {
        let mut record = Map::new();
        record.insert("label".into(), json!(["gen_statem", "terminate"]));
        record.insert("name".into(), json!("Switch1"));
        record.insert("class".into(), json!("RuntimeError"));
        record.insert("reason".into(), json!("oops"));
        record.insert("stacktrace".into(), json!(["frame_a"]));
        record.insert("state".into(), json!({"state": "off", "data": 0}));

        let report = normalize(Route::Structured(&record)).unwrap();
        assert_eq!(report.class, json!("RuntimeError"));
        assert_eq!(report.reason, json!("oops"));
        assert_eq!(report.stack, Some(json!(["frame_a"])));
        assert_eq!(report.state, Some(json!({"state": "off", "data": 0})));
        assert_eq!(report.callback_mode, None);
    }

    #[test]
    fn test_structured_combined_triple() {
        let mut record = Map::new();
        record.insert("label".into(), json!(["gen_statem", "terminate"]));
        record.insert("name".into(), json!("Switch1"));
        record.insert("reason".into(), json!(["exit", "shutdown", []]));

        let report = normalize(Route::Structured(&record)).unwrap();
        assert_eq!(report.class, json!("exit"));
        assert_eq!(report.reason, json!("shutdown"));
        // Empty stack element in the triple means no stack at all.
        assert_eq!(report.stack, None);
    }

    #[test]
    fn test_structured_combined_queue_carried_as_is() {
        let mut record = Map::new();
        record.insert("label".into(), json!(["gen_statem", "terminate"]));
        record.insert("name".into(), json!("Switch1"));
        record.insert("class".into(), json!("exit"));
        record.insert("reason".into(), json!("shutdown"));
        record.insert("queue".into(), json!([["cast", "flip"], ["cast", "flop"]]));

        let report = normalize(Route::Structured(&record)).unwrap();
        assert_eq!(
            report.queue,
            Some(vec![json!(["cast", "flip"]), json!(["cast", "flop"])])
        );
        assert_eq!(report.last_event, None);
        assert_eq!(report.queued, None);
    }

    #[test]
    fn test_structured_missing_name_is_malformed() {
        let mut record = Map::new();
        record.insert("label".into(), json!(["gen_statem", "terminate"]));
        record.insert("class".into(), json!("exit"));
        record.insert("reason".into(), json!("shutdown"));
        assert!(normalize(Route::Structured(&record)).is_err());
    }

    #[test]
    fn test_structured_bad_triple_is_malformed() {
        let mut record = Map::new();
        record.insert("label".into(), json!(["gen_statem", "terminate"]));
        record.insert("name".into(), json!("Switch1"));
        record.insert("reason".into(), json!(["exit", "shutdown"]));
        assert!(normalize(Route::Structured(&record)).is_err());
    }
}
