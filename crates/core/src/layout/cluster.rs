//! Grouping fragments into visual lines.

use ordered_float::OrderedFloat;

use super::params::LayoutParams;
use crate::model::{Position, TextFragment};

/// A horizontal cluster of fragments judged to be on the same visual row.
///
/// Constructed per reconstruction call, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub fragments: Vec<TextFragment>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragments ordered left to right.
    pub fn sorted_by_x(&self) -> Vec<&TextFragment> {
        let mut sorted: Vec<&TextFragment> = self.fragments.iter().collect();
        sorted.sort_by(|a, b| a.left_x().total_cmp(&b.left_x()));
        sorted
    }
}

impl From<Vec<TextFragment>> for Line {
    fn from(fragments: Vec<TextFragment>) -> Self {
        Self { fragments }
    }
}

/// Groups fragments into top-to-bottom visual lines.
///
/// Fragments are stably sorted by vertical center (ties keep input order),
/// then swept once: a fragment joins the current line while its center
/// stays within `params.line_threshold` of the line's reference center,
/// otherwise it closes the line and opens a new one.
///
/// The reference center is fixed at the center of the first fragment added
/// to a line, not a running centroid. A tall cluster whose first member
/// sits at a vertical extreme can therefore split what reads as one visual
/// row; known limitation, kept for parity with the upstream engine
/// wrapper.
///
/// Fragments without any usable position each form a line of their own at
/// the top of the output.
pub fn group_lines(fragments: &[TextFragment], params: &LayoutParams) -> Vec<Line> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&TextFragment> = fragments.iter().collect();
    ordered.sort_by_key(|fragment| OrderedFloat(fragment.center_y()));

    let mut lines = Vec::new();
    let mut current = Line::new();
    let mut reference_y: Option<f64> = None;

    for fragment in ordered {
        if fragment.position == Position::Empty {
            // No vertical evidence to group on: the fragment stands alone.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            reference_y = None;
            lines.push(Line::from(vec![fragment.clone()]));
            continue;
        }

        let y = fragment.center_y();
        match reference_y {
            Some(reference) if (y - reference).abs() <= params.line_threshold => {}
            Some(_) => {
                lines.push(std::mem::take(&mut current));
                reference_y = Some(y);
            }
            None => reference_y = Some(y),
        }
        current.fragments.push(fragment.clone());
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
