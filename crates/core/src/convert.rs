//! Renditions of normalized OCR output.
//!
//! Beside the plain-text reconstruction, callers historically keep two
//! sibling artifacts per recognition: a normalized JSON dump of the
//! fragments and a small Markdown report with per-fragment confidence.
//! Both are pure renderers; writing the strings out is the caller's
//! business.

use crate::error::Result;
use crate::model::TextFragment;

/// Pretty-printed JSON dump of the normalized fragments, a list of
/// `{"text", "score", "position"}` objects.
pub fn fragments_to_json(fragments: &[TextFragment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(fragments)?)
}

/// Markdown report: one fenced section per fragment with its confidence
/// rendered to four decimals.
pub fn fragments_to_markdown(title: &str, fragments: &[TextFragment]) -> String {
    let mut out = format!("# {title}\n\n## Recognized text\n\n");
    for (idx, fragment) in fragments.iter().enumerate() {
        out.push_str(&format!("### Text {}\n", idx + 1));
        out.push_str(&format!("```\n{}\n```\n", fragment.text));
        out.push_str(&format!("**Confidence**: {:.4}\n\n", fragment.score));
    }
    out
}
