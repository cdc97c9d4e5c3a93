// File: ./src/model/envelope.rs
//! Extraction of the record list from the upstream response envelope.
//!
//! Observed shapes of the `jsonArray` container, checked in this order:
//!   1. `{"jsonArray": [ ... ]}`            -> the list itself
//!   2. `{"jsonArray": {"item": [ ... ]}}`  -> the `item` list
//!   3. `{"jsonArray": {"item": { ... }}}`  -> a single record
//!   4. anything else                       -> no results
//!
//! A list container must be recognised before any `item` unwrapping happens.
//! The order is inferred from live responses, not from documentation.
use crate::error::FinderError;
use crate::model::filters::RecordKind;
use crate::model::raw::RawRecord;
use serde_json::Value;

pub const CONTAINER_FIELD: &str = "jsonArray";
pub const ITEM_FIELD: &str = "item";
// JSON-wrapping relays put the upstream body in a string field.
const RELAY_CONTENTS_FIELD: &str = "contents";

/// Parses `body` and returns the records it carries.
///
/// Fails with [`FinderError::Parse`] only when the body is not JSON. Unknown
/// envelope shapes yield an empty list.
pub fn parse_envelope(body: &str, kind: RecordKind) -> Result<Vec<RawRecord>, FinderError> {
    let doc = parse_document(body)?;
    Ok(extract_records(doc, kind))
}

fn parse_document(body: &str) -> Result<Value, FinderError> {
    let text = body.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Err(FinderError::Parse("empty response body".to_string()));
    }

    let doc: Value = serde_json::from_str(text).map_err(|e| {
        FinderError::Parse(format!("response is not valid JSON ({}): {}", e, preview(text)))
    })?;

    if doc.get(CONTAINER_FIELD).is_none()
        && let Some(Value::String(inner)) = doc.get(RELAY_CONTENTS_FIELD)
    {
        log::debug!("Unwrapping relay `{}` field", RELAY_CONTENTS_FIELD);
        return parse_document(inner);
    }

    Ok(doc)
}

fn extract_records(doc: Value, kind: RecordKind) -> Vec<RawRecord> {
    let Value::Object(mut root) = doc else {
        log::warn!("Response document is not an object; treating as zero results");
        return Vec::new();
    };

    let items = match root.remove(CONTAINER_FIELD) {
        Some(Value::Array(list)) => list,
        Some(Value::Object(mut container)) => match container.remove(ITEM_FIELD) {
            Some(Value::Array(list)) => list,
            Some(single @ Value::Object(_)) => vec![single],
            _ => Vec::new(),
        },
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            log::warn!("Unrecognised `{}` container: {}", CONTAINER_FIELD, other);
            Vec::new()
        }
    };

    let total = items.len();
    let records: Vec<RawRecord> = items
        .into_iter()
        .filter_map(|v| RawRecord::from_value(kind, v))
        .collect();
    if records.len() != total {
        log::warn!(
            "Skipped {} non-object entries in {} response",
            total - records.len(),
            kind
        );
    }
    records
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(80).collect();
    if head.len() < text.len() {
        format!("{}…", head)
    } else {
        head
    }
}
