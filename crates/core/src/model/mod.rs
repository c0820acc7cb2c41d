//! Data model for OCR text fragments.
//!
//! This module contains:
//! - TextFragment: one recognized text unit with score and position
//! - Position: the normalized positional metadata variants
//! - Geometry accessors (center_y, left_x) that are total over any input

pub mod fragment;
pub mod geometry;

pub use fragment::{Point, Position, TextFragment};
pub use geometry::{center_y, left_x};
