//! Text fragment and position types.

use serde::{Deserialize, Serialize};

use super::geometry;

/// A single corner of a bounding polygon, `[x, y]`.
pub type Point = [f64; 2];

/// Positional metadata attached to a fragment.
///
/// OCR engines report positions in several shapes; the normalizer fixes
/// the shape once at ingestion and every geometric query over the result
/// is total. Serialized forms match the raw engine output: a polygon is a
/// list of corner pairs, the flat form is a plain number list, and a
/// missing position is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// Ordered polygon corners, usually four. Corners that failed to parse
    /// were dropped at ingestion, so the list may be shorter than the raw
    /// input.
    Polygon(Vec<Point>),
    /// Degenerate flat form such as `[x, y, w, h]`.
    Flat(Vec<f64>),
    /// Missing or unparseable position. Sorts first and renders as its own
    /// line.
    Empty,
}

/// One recognized text unit plus its confidence score and bounding
/// polygon.
///
/// Immutable once produced by normalization. The order fragments arrive in
/// carries no meaning; only `position` determines output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub score: f64,
    pub position: Position,
}

impl TextFragment {
    /// Creates a fragment with full metadata.
    pub fn new(text: impl Into<String>, score: f64, position: Position) -> Self {
        Self {
            text: text.into(),
            score,
            position,
        }
    }

    /// Creates a fragment that carries no usable position.
    pub fn unpositioned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: 1.0,
            position: Position::Empty,
        }
    }

    /// Vertical center of the bounding polygon, 0.0 when the position
    /// carries no usable vertical extent.
    pub fn center_y(&self) -> f64 {
        geometry::center_y(self)
    }

    /// Leftmost x-coordinate, 0.0 when the position carries none.
    pub fn left_x(&self) -> f64 {
        geometry::left_x(self)
    }
}
