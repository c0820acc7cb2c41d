//! High-level reconstruction API.
//!
//! Provides the main public entry points:
//! - `reconstruct()` - fragments to ordered text with default parameters
//! - `reconstruct_with_params()` - same with explicit [`LayoutParams`]
//! - `reconstruct_value()` - raw engine JSON to ordered text

use serde_json::Value;

use crate::format::render_lines;
use crate::ingest::extract_fragments;
use crate::layout::{LayoutParams, group_lines};
use crate::model::TextFragment;

/// Placeholder emitted when nothing could be recognized at all.
///
/// Reconstruction never returns an empty string; callers can rely on this
/// marker to tell "no text recognized" apart from real content.
pub const NO_TEXT_SENTINEL: &str = "no text recognized";

/// Reconstructs reading order, and tabular structure where detected, from
/// an unordered fragment list.
///
/// Pure and deterministic. The order of `fragments` carries no meaning;
/// only positions determine output order. Rows are joined with `\n`.
/// Empty input yields [`NO_TEXT_SENTINEL`].
///
/// # Example
/// ```
/// use renglon_core::model::{Position, TextFragment};
/// use renglon_core::reconstruct;
///
/// let fragments = vec![
///     TextFragment::new(
///         "world",
///         0.99,
///         Position::Polygon(vec![[30.0, 0.0], [50.0, 0.0], [50.0, 10.0], [30.0, 10.0]]),
///     ),
///     TextFragment::new(
///         "hello",
///         0.98,
///         Position::Polygon(vec![[0.0, 0.0], [20.0, 0.0], [20.0, 10.0], [0.0, 10.0]]),
///     ),
/// ];
/// assert_eq!(reconstruct(&fragments), "hello world");
/// ```
pub fn reconstruct(fragments: &[TextFragment]) -> String {
    reconstruct_with_params(fragments, &LayoutParams::default())
}

/// Reconstructs with explicit layout parameters.
pub fn reconstruct_with_params(fragments: &[TextFragment], params: &LayoutParams) -> String {
    if fragments.is_empty() {
        return NO_TEXT_SENTINEL.to_string();
    }
    let lines = group_lines(fragments, params);
    let rendered = render_lines(&lines);
    if rendered.is_empty() {
        // Every fragment was blank; still never hand back an empty document.
        NO_TEXT_SENTINEL.to_string()
    } else {
        rendered
    }
}

/// Normalizes a raw engine result and reconstructs it with default
/// parameters. Accepts any of the shapes
/// [`crate::ingest::RawShape`] recognizes and never fails.
pub fn reconstruct_value(raw: &Value) -> String {
    reconstruct_value_with_params(raw, &LayoutParams::default())
}

/// Normalizes a raw engine result and reconstructs it with explicit
/// layout parameters.
pub fn reconstruct_value_with_params(raw: &Value, params: &LayoutParams) -> String {
    reconstruct_with_params(&extract_fragments(raw), params)
}
