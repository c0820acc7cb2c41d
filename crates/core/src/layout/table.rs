//! Table detection over clustered lines.
//!
//! Columnar alignment is inferred by comparing per-line "column profiles",
//! the sorted left-x positions of each line's fragments, across lines. No
//! ruling lines are involved; alignment of the text itself is the only
//! evidence.

use itertools::Itertools;
use tracing::debug;

use super::cluster::Line;

/// A detected table: every clustered line as a row, plus the averaged
/// x-anchor of each column. Exists only transiently during formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub rows: Vec<Line>,
    pub column_anchors: Vec<f64>,
}

/// Tests the clustered lines for tabular alignment.
///
/// Pure predicate with no partial output: `Some` carries the full table
/// model, `None` means the hypothesis was rejected and the caller falls
/// back to prose. The hypothesis is rejected when there are fewer than two
/// lines, fewer than two lines with at least two fragments, more than two
/// distinct column counts (one odd row, such as a merged cell, is
/// tolerated), a mean column count below two, or fewer than two derived
/// anchors.
pub fn detect_table(lines: &[Line]) -> Option<TableModel> {
    if lines.len() < 2 {
        return None;
    }

    // One x-position profile per line holding at least two fragments.
    let profiles: Vec<Vec<f64>> = lines
        .iter()
        .filter(|line| line.len() > 1)
        .map(|line| {
            line.sorted_by_x()
                .iter()
                .map(|fragment| fragment.left_x())
                .collect()
        })
        .collect();

    if profiles.len() < 2 {
        return None;
    }

    let counts: Vec<usize> = profiles.iter().map(Vec::len).collect();
    let distinct = counts.iter().unique().count();
    if distinct > 2 {
        debug!(distinct, "table hypothesis rejected: ragged column counts");
        return None;
    }

    let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
    if mean < 2.0 {
        return None;
    }

    let max_columns = counts.iter().copied().max().unwrap_or(0);
    let mut column_anchors = Vec::with_capacity(max_columns);
    for column in 0..max_columns {
        let xs: Vec<f64> = profiles
            .iter()
            .filter_map(|profile| profile.get(column).copied())
            .collect();
        if !xs.is_empty() {
            column_anchors.push(xs.iter().sum::<f64>() / xs.len() as f64);
        }
    }

    if column_anchors.len() < 2 {
        return None;
    }

    debug!(
        rows = lines.len(),
        columns = column_anchors.len(),
        "table structure detected"
    );

    Some(TableModel {
        rows: lines.to_vec(),
        column_anchors,
    })
}
