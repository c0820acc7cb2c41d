//! Rendering clustered lines as prose or as a boxed table.

pub mod prose;
pub mod table;

pub use prose::render_prose;
pub use table::render_table;

use crate::layout::{Line, detect_table};

/// Renders lines as a table when their alignment supports it, as prose
/// otherwise. Deterministic, pure, no I/O.
pub fn render_lines(lines: &[Line]) -> String {
    match detect_table(lines) {
        Some(table) => render_table(&table),
        None => render_prose(lines),
    }
}
