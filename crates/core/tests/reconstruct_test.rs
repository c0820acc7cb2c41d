//! End-to-end reconstruction tests: fragments (or raw engine output) in,
//! ordered text out.

use renglon_core::model::{Position, TextFragment};
use renglon_core::{NO_TEXT_SENTINEL, reconstruct, reconstruct_value};
use serde_json::json;

fn frag(text: &str, x: f64, y: f64) -> TextFragment {
    TextFragment::new(
        text,
        0.95,
        Position::Polygon(vec![
            [x, y],
            [x + 10.0, y],
            [x + 10.0, y + 10.0],
            [x, y + 10.0],
        ]),
    )
}

// ============================================================================
// Prose scenarios
// ============================================================================

#[test]
fn test_same_row_fragments_join_with_space() {
    let fragments = vec![frag("A", 0.0, 0.0), frag("B", 20.0, 0.0)];
    assert_eq!(reconstruct(&fragments), "A B");
}

#[test]
fn test_distinct_rows_emit_ascending_lines() {
    // Bottom row listed first; output is still top to bottom.
    let fragments = vec![frag("bottom", 0.0, 50.0), frag("top", 0.0, 0.0)];
    assert_eq!(reconstruct(&fragments), "top\nbottom");
}

#[test]
fn test_input_order_carries_no_meaning() {
    let a = vec![frag("one", 0.0, 0.0), frag("two", 30.0, 0.0), frag("three", 0.0, 40.0)];
    let b = vec![frag("three", 0.0, 40.0), frag("two", 30.0, 0.0), frag("one", 0.0, 0.0)];
    assert_eq!(reconstruct(&a), reconstruct(&b));
    assert_eq!(reconstruct(&a), "one two\nthree");
}

// ============================================================================
// Table scenario
// ============================================================================

#[test]
fn test_aligned_grid_renders_as_table() {
    let fragments = vec![
        frag("Name", 0.0, 0.0),
        frag("Age", 100.0, 0.0),
        frag("Alice", 0.0, 40.0),
        frag("30", 100.0, 40.0),
    ];

    let rendered = reconstruct(&fragments);

    assert!(rendered.starts_with("+-"));
    assert!(rendered.contains("| Name  | Age |"));
    assert!(rendered.contains("| Alice | 30  |"));
    // A border before the first row and after every row.
    assert_eq!(rendered.matches("+-------+-----+").count(), 3);
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn test_empty_input_yields_sentinel() {
    assert_eq!(reconstruct(&[]), NO_TEXT_SENTINEL);
    assert_eq!(reconstruct_value(&serde_json::Value::Null), NO_TEXT_SENTINEL);
}

#[test]
fn test_blank_fragments_yield_sentinel() {
    let fragments = vec![frag("   ", 0.0, 0.0)];
    assert_eq!(reconstruct(&fragments), NO_TEXT_SENTINEL);
}

#[test]
fn test_unparseable_position_sorts_first_and_survives() {
    let raw = json!([
        {"text": "body", "position": [[0, 100], [10, 100], [10, 110], [0, 110]]},
        {"text": "ghost", "position": "invalid"}
    ]);

    assert_eq!(reconstruct_value(&raw), "ghost\nbody");
}

// ============================================================================
// Raw value round trips
// ============================================================================

#[test]
fn test_reconstruct_value_over_records() {
    let raw = json!([
        {"text": "world", "score": 0.9, "position": [[30, 0], [50, 0], [50, 10], [30, 10]]},
        {"text": "hello", "score": 0.9, "position": [[0, 0], [20, 0], [20, 10], [0, 10]]}
    ]);

    assert_eq!(reconstruct_value(&raw), "hello world");
}

#[test]
fn test_reconstruct_value_over_plain_strings() {
    // Strings carry no geometry; each stands on its own line, in order.
    let raw = json!(["first line", "second line"]);
    assert_eq!(reconstruct_value(&raw), "first line\nsecond line");
}

#[test]
fn test_reconstruct_value_never_panics_on_junk() {
    for raw in [
        json!({}),
        json!([[], {}, [[]], 3.5]),
        json!([[null, null]]),
        json!("  "),
        json!(false),
    ] {
        let rendered = reconstruct_value(&raw);
        assert!(!rendered.is_empty());
    }
}
