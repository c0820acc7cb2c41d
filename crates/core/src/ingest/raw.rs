//! Classification of raw engine output values.

use serde_json::Value;

/// Key aliases accepted for the text field of a record.
pub(crate) const TEXT_KEYS: [&str; 5] = [
    "text",
    "rec_texts",
    "content",
    "value",
    "recognition_result",
];

/// Key aliases accepted for the confidence field of a record.
pub(crate) const SCORE_KEYS: [&str; 2] = ["score", "confidence"];

/// Key aliases accepted for the position field of a record.
pub(crate) const POSITION_KEYS: [&str; 3] = ["position", "coordinates", "bbox"];

/// The input shapes the normalizer recognizes, in extraction precedence
/// order.
#[derive(Debug)]
pub enum RawShape<'a> {
    /// Structured per-fragment record: an object with text under one of
    /// the accepted key aliases, and optional score and position keys.
    Record(&'a serde_json::Map<String, Value>),
    /// Two-element `[coordinates, text]` pairing, the classic engine's
    /// per-line shape. The text slot may itself be a `[text, score]`
    /// recognition tuple.
    Pair {
        coords: &'a Value,
        text: &'a Value,
    },
    /// An array of recognizable shapes. The classic engine wraps each
    /// page's line list in an outer array; flattening here absorbs that.
    Group(&'a [Value]),
    /// A bare value with a non-whitespace string rendition.
    Plain(String),
    /// Nothing usable; skipped.
    Unknown,
}

impl<'a> RawShape<'a> {
    /// Classifies one raw item.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => RawShape::Record(map),
            Value::Array(items) => classify_array(items),
            Value::String(s) if !s.trim().is_empty() => RawShape::Plain(s.clone()),
            Value::Number(n) => RawShape::Plain(n.to_string()),
            Value::Bool(b) => RawShape::Plain(b.to_string()),
            _ => RawShape::Unknown,
        }
    }
}

fn classify_array(items: &[Value]) -> RawShape<'_> {
    if let [coords, text] = items {
        if is_coordinate_set(coords) && is_text_slot(text) {
            return RawShape::Pair { coords, text };
        }
    }
    if !items.is_empty()
        && items
            .iter()
            .any(|item| item.is_object() || item.is_array())
    {
        return RawShape::Group(items);
    }
    RawShape::Unknown
}

/// A coordinate set is a non-empty array of numbers or of numeric pairs.
fn is_coordinate_set(value: &Value) -> bool {
    match value {
        Value::Array(items) => {
            !items.is_empty()
                && items.iter().all(|item| match item {
                    Value::Number(_) => true,
                    Value::Array(point) => {
                        point.len() >= 2 && point.iter().all(Value::is_number)
                    }
                    _ => false,
                })
        }
        _ => false,
    }
}

/// The text slot of a pair: a string, or an array led by one.
fn is_text_slot(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Array(items) => matches!(items.first(), Some(Value::String(_))),
        _ => false,
    }
}
