//! Prose rendering.

use crate::layout::Line;

/// Renders lines as plain text, one visual row per output line.
///
/// Within a row, fragments appear left to right joined with single spaces.
/// Rows whose joined text is empty or whitespace-only are dropped; the
/// remaining rows are joined with `\n`.
pub fn render_prose(lines: &[Line]) -> String {
    let mut rendered = Vec::new();
    for line in lines {
        let joined = line
            .sorted_by_x()
            .iter()
            .map(|fragment| fragment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            rendered.push(trimmed.to_string());
        }
    }
    rendered.join("\n")
}
