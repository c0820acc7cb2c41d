//! Normalization of heterogeneous OCR engine output.
//!
//! A raw engine call can come back as almost anything: `null`, a list of
//! strings, structured per-fragment records, nested coordinate/text pairs,
//! or a page wrapper around any of those. The shapes are classified once
//! here, into [`RawShape`], and everything downstream only ever sees
//! [`crate::model::TextFragment`] lists.

pub mod extract;
pub mod raw;

pub use extract::extract_fragments;
pub use raw::RawShape;
