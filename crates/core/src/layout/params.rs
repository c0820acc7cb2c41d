//! Layout reconstruction parameters.

/// Parameters for layout reconstruction.
///
/// Controls how fragments are grouped into visual lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Maximum distance, in pixels, between a fragment's vertical center
    /// and the current line's reference center for the fragment to join
    /// that line.
    pub line_threshold: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_threshold: 15.0,
        }
    }
}

impl LayoutParams {
    /// Creates parameters with the given line threshold.
    ///
    /// # Panics
    /// Panics if the threshold is negative or not finite.
    pub fn new(line_threshold: f64) -> Self {
        assert!(
            line_threshold.is_finite() && line_threshold >= 0.0,
            "line_threshold should be a non-negative finite number"
        );
        Self { line_threshold }
    }
}
