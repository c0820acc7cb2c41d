//! Geometry accessors over fragment positions.
//!
//! Upstream OCR output is untrusted and heterogeneous, so both accessors
//! are total functions: any malformed or missing shape degrades to 0.0
//! instead of failing the reconstruction.

use super::fragment::{Position, TextFragment};

/// Vertical center of a fragment's bounding polygon.
///
/// For a polygon this is the average of the minimum and maximum corner y.
/// A polygon with fewer than three parsed corners (the four-corner shape
/// with an opposite corner missing) and every non-polygon form yield 0.0.
pub fn center_y(fragment: &TextFragment) -> f64 {
    match &fragment.position {
        Position::Polygon(points) if points.len() >= 3 => {
            let mut top = f64::INFINITY;
            let mut bottom = f64::NEG_INFINITY;
            for point in points {
                top = top.min(point[1]);
                bottom = bottom.max(point[1]);
            }
            (top + bottom) / 2.0
        }
        _ => 0.0,
    }
}

/// Leftmost x-coordinate of a fragment.
///
/// Minimum corner x for polygons, the first entry of a flat `[x, y, ...]`
/// form, and 0.0 for anything else.
pub fn left_x(fragment: &TextFragment) -> f64 {
    match &fragment.position {
        Position::Polygon(points) if !points.is_empty() => {
            points.iter().map(|point| point[0]).fold(f64::INFINITY, f64::min)
        }
        Position::Flat(values) if values.len() >= 2 => values[0],
        _ => 0.0,
    }
}
