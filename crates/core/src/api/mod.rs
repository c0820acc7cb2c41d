//! High-level API module for OCR layout reconstruction.
//!
//! # Example
//!
//! ```ignore
//! use renglon_core::reconstruct_value;
//!
//! let raw = serde_json::from_str(&std::fs::read_to_string("dump.json")?)?;
//! let text = reconstruct_value(&raw);
//! ```

pub mod high_level;

pub use high_level::{
    NO_TEXT_SENTINEL, reconstruct, reconstruct_value, reconstruct_value_with_params,
    reconstruct_with_params,
};
