//! Error types for the renglon reconstruction library.

use thiserror::Error;

/// Primary error type for the I/O- and serialization-bearing edges of the
/// library.
///
/// The reconstruction pipeline itself never fails: malformed geometry
/// degrades to default coordinates, unrecognized input shapes are skipped
/// or replaced with a placeholder, and a rejected table hypothesis falls
/// back to prose. These variants cover the surrounding converters and the
/// orchestration that feeds the pipeline.
#[derive(Error, Debug)]
pub enum ReconstructError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid OCR dump: {0}")]
    InvalidDump(#[from] serde_json::Error),

    #[error("no OCR output for {0}")]
    NoOutput(String),
}

/// Convenience Result type alias for ReconstructError.
pub type Result<T> = std::result::Result<T, ReconstructError>;
