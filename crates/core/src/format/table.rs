//! Boxed table rendering with `+`, `-` and `|`.

use crate::layout::TableModel;

/// Renders a detected table, one bordered row per clustered line.
///
/// Column widths are the maximum cell text length per detected column,
/// measured over left-to-right cells. Every cell gets one leading and one
/// trailing space; cells beyond the detected column count are appended
/// without padding. A border row precedes the first data row and follows
/// every data row.
pub fn render_table(table: &TableModel) -> String {
    let mut widths = vec![0usize; table.column_anchors.len()];
    for row in &table.rows {
        for (column, fragment) in row.sorted_by_x().iter().enumerate() {
            if column < widths.len() {
                widths[column] = widths[column].max(fragment.text.chars().count());
            }
        }
    }

    let mut border = String::from("+");
    for width in &widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }

    let mut rendered = vec![border.clone()];
    for row in &table.rows {
        let mut cells = String::from("|");
        for (column, fragment) in row.sorted_by_x().iter().enumerate() {
            if column < widths.len() {
                cells.push_str(&format!(" {:<width$} |", fragment.text, width = widths[column]));
            } else {
                cells.push_str(&format!(" {} |", fragment.text));
            }
        }
        rendered.push(cells);
        rendered.push(border.clone());
    }

    rendered.join("\n")
}
