//! renglon - OCR layout reconstruction.
//!
//! Turns the unordered text fragments an OCR engine emits (text, confidence
//! score, bounding polygon) into ordered, human-readable text, detecting
//! and rendering tabular alignment where the fragment positions support it.

pub mod api;
pub mod convert;
pub mod error;
pub mod format;
pub mod ingest;
pub mod layout;
pub mod model;

// Re-export the high-level entry points at the crate root.
pub use api::high_level::{
    NO_TEXT_SENTINEL, reconstruct, reconstruct_value, reconstruct_value_with_params,
    reconstruct_with_params,
};
pub use error::{ReconstructError, Result};
pub use ingest::extract_fragments;
pub use layout::LayoutParams;
pub use model::{Position, TextFragment};
