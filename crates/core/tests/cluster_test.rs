//! Tests for line clustering: stable vertical sorting, greedy grouping,
//! the fixed reference center, and unpositioned fragments.

use renglon_core::layout::{LayoutParams, group_lines};
use renglon_core::model::{Position, TextFragment};

/// Fragment whose polygon is centered vertically on `center`.
fn frag_center(text: &str, x: f64, center: f64) -> TextFragment {
    TextFragment::new(
        text,
        0.95,
        Position::Polygon(vec![
            [x, center - 5.0],
            [x + 40.0, center - 5.0],
            [x + 40.0, center + 5.0],
            [x, center + 5.0],
        ]),
    )
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_same_row_groups_into_one_line() {
    let fragments = vec![frag_center("A", 0.0, 5.0), frag_center("B", 60.0, 5.0)];

    let lines = group_lines(&fragments, &LayoutParams::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 2);
}

#[test]
fn test_distinct_rows_produce_ordered_lines() {
    // Input order is bottom row first; output must be top to bottom.
    let fragments = vec![
        frag_center("bottom", 0.0, 55.0),
        frag_center("top", 0.0, 5.0),
    ];

    let lines = group_lines(&fragments, &LayoutParams::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].fragments[0].text, "top");
    assert_eq!(lines[1].fragments[0].text, "bottom");
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    let joined = group_lines(
        &[frag_center("a", 0.0, 0.0), frag_center("b", 60.0, 15.0)],
        &LayoutParams::default(),
    );
    assert_eq!(joined.len(), 1);

    let split = group_lines(
        &[frag_center("a", 0.0, 0.0), frag_center("b", 60.0, 15.2)],
        &LayoutParams::default(),
    );
    assert_eq!(split.len(), 2);
}

#[test]
fn test_reference_is_first_member_not_centroid() {
    // Centers 0, 10, 20: the third fragment is 20 away from the line's
    // first member even though it is only 15 from the running average, so
    // it must open a new line.
    let fragments = vec![
        frag_center("a", 0.0, 0.0),
        frag_center("b", 60.0, 10.0),
        frag_center("c", 120.0, 20.0),
    ];

    let lines = group_lines(&fragments, &LayoutParams::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[1].len(), 1);
    assert_eq!(lines[1].fragments[0].text, "c");
}

#[test]
fn test_custom_threshold_widens_lines() {
    let fragments = vec![
        frag_center("a", 0.0, 0.0),
        frag_center("b", 60.0, 25.0),
    ];

    assert_eq!(group_lines(&fragments, &LayoutParams::default()).len(), 2);
    assert_eq!(group_lines(&fragments, &LayoutParams::new(30.0)).len(), 1);
}

// ============================================================================
// Ordering details
// ============================================================================

#[test]
fn test_equal_centers_keep_input_order() {
    // Stable sort: same vertical center, the right-hand fragment listed
    // first stays first inside the line until rendering sorts by x.
    let fragments = vec![
        frag_center("right", 80.0, 5.0),
        frag_center("left", 0.0, 5.0),
    ];

    let lines = group_lines(&fragments, &LayoutParams::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].fragments[0].text, "right");
    assert_eq!(lines[0].fragments[1].text, "left");

    let sorted: Vec<&str> = lines[0]
        .sorted_by_x()
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect();
    assert_eq!(sorted, vec!["left", "right"]);
}

#[test]
fn test_monotonic_line_order() {
    let fragments = vec![
        frag_center("c", 0.0, 90.0),
        frag_center("a", 0.0, 5.0),
        frag_center("b", 0.0, 48.0),
    ];

    let lines = group_lines(&fragments, &LayoutParams::default());

    let texts: Vec<&str> = lines
        .iter()
        .map(|line| line.fragments[0].text.as_str())
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn test_empty_input_produces_no_lines() {
    assert!(group_lines(&[], &LayoutParams::default()).is_empty());
}

#[test]
fn test_unpositioned_fragments_stand_alone() {
    let fragments = vec![
        frag_center("positioned", 0.0, 40.0),
        TextFragment::unpositioned("first"),
        TextFragment::unpositioned("second"),
    ];

    let lines = group_lines(&fragments, &LayoutParams::default());

    // The unpositioned fragments sort first (center 0) and each get their
    // own line instead of merging into one.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].fragments[0].text, "first");
    assert_eq!(lines[1].fragments[0].text, "second");
    assert_eq!(lines[2].fragments[0].text, "positioned");
}
