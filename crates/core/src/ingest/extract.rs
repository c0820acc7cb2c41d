//! Extraction of normalized fragments from raw engine output.

use serde_json::Value;
use tracing::debug;

use super::raw::{POSITION_KEYS, RawShape, SCORE_KEYS, TEXT_KEYS};
use crate::model::{Point, Position, TextFragment};

/// Recursion guard for group flattening. Real engine output nests two
/// levels (pages, then lines); anything deeper is noise.
const MAX_GROUP_DEPTH: usize = 4;

/// Normalizes a raw engine result into fragments.
///
/// Follows the precedence of [`RawShape`]: `null` yields no fragments,
/// structured records and coordinate/text pairs are extracted directly,
/// any other scalar with visible content becomes an unpositioned fragment,
/// and unrecognizable items are skipped. Never fails, whatever the input.
///
/// The result may be empty; the high-level API substitutes the sentinel
/// text there, so callers that go through [`crate::reconstruct_value`]
/// never see an empty document.
pub fn extract_fragments(raw: &Value) -> Vec<TextFragment> {
    let mut fragments = Vec::new();
    match raw {
        Value::Null => {}
        Value::Array(items) => {
            for item in items {
                collect(item, 0, &mut fragments);
            }
        }
        other => collect(other, 0, &mut fragments),
    }
    debug!(count = fragments.len(), "normalized OCR output");
    fragments
}

fn collect(value: &Value, depth: usize, out: &mut Vec<TextFragment>) {
    match RawShape::classify(value) {
        RawShape::Record(map) => out.push(record_to_fragment(map)),
        RawShape::Pair { coords, text } => out.push(pair_to_fragment(coords, text)),
        RawShape::Group(items) => {
            if depth < MAX_GROUP_DEPTH {
                for item in items {
                    collect(item, depth + 1, out);
                }
            } else {
                debug!("group nested deeper than {MAX_GROUP_DEPTH} levels, skipping");
            }
        }
        RawShape::Plain(text) => out.push(TextFragment::unpositioned(text)),
        RawShape::Unknown => debug!("skipping unrecognized OCR item"),
    }
}

/// Builds a fragment from a structured record, tolerating alias keys.
/// A record without any text alias still yields a fragment with empty
/// text; the prose renderer drops it later.
fn record_to_fragment(map: &serde_json::Map<String, Value>) -> TextFragment {
    let text = TEXT_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .map(text_value)
        .unwrap_or_default();
    let score = SCORE_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .and_then(Value::as_f64)
        .unwrap_or(1.0);
    let position = POSITION_KEYS
        .iter()
        .find_map(|key| map.get(*key))
        .map(parse_position)
        .unwrap_or(Position::Empty);
    TextFragment {
        text,
        score,
        position,
    }
}

/// Renders a record's text field: strings pass through, string lists are
/// joined with newlines, other scalars use their display form.
fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Builds a fragment from a classic `[coordinates, text]` pairing. The
/// text slot is either a bare string or a `[text, score]` tuple; the
/// score defaults to 1.0 when absent.
fn pair_to_fragment(coords: &Value, text: &Value) -> TextFragment {
    let (text, score) = match text {
        Value::String(s) => (s.clone(), 1.0),
        Value::Array(items) => {
            let s = items
                .first()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let score = items.get(1).and_then(Value::as_f64).unwrap_or(1.0);
            (s, score)
        }
        _ => (String::new(), 1.0),
    };
    TextFragment {
        text,
        score,
        position: parse_position(coords),
    }
}

/// Parses a raw position value into the typed form, dropping corners that
/// fail to parse. Anything without a usable shape becomes
/// [`Position::Empty`].
pub(crate) fn parse_position(value: &Value) -> Position {
    let Value::Array(items) = value else {
        return Position::Empty;
    };
    match items.first() {
        Some(Value::Array(_)) => {
            Position::Polygon(items.iter().filter_map(point_of).collect())
        }
        Some(_) if items.iter().all(Value::is_number) => {
            Position::Flat(items.iter().filter_map(Value::as_f64).collect())
        }
        _ => Position::Empty,
    }
}

fn point_of(value: &Value) -> Option<Point> {
    let Value::Array(parts) = value else {
        return None;
    };
    match (
        parts.first().and_then(Value::as_f64),
        parts.get(1).and_then(Value::as_f64),
    ) {
        (Some(x), Some(y)) => Some([x, y]),
        _ => None,
    }
}
