//! Error types shared by all preprocessing operations.
//!
//! The taxonomy is deliberately flat: every operation reads one input,
//! delegates to Leptonica, and writes one or more outputs, so the same
//! failure modes apply everywhere.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the preprocessing operations
#[derive(Debug, Error)]
pub enum PrepError {
    /// Input path is missing or not a regular file
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    /// Leptonica could not decode the input file
    #[error("Could not decode image: {0}")]
    ReadFailed(PathBuf),

    /// Bit depth precondition violated (e.g. dewarp on a grayscale image)
    #[error("Unsupported bit depth: expected {expected} bpp, got {actual} bpp")]
    UnsupportedDepth { expected: u32, actual: u32 },

    /// Numeric parameters outside their valid range
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Sweep output path has no file name or no extension to template
    #[error("Output path has no file name or extension: {0}")]
    MissingExtension(PathBuf),

    /// Path cannot be passed to the C API (non-UTF-8 or interior NUL)
    #[error("Path is not representable: {0}")]
    InvalidPath(PathBuf),

    /// The delegated Leptonica routine reported failure
    #[error("Leptonica operation failed: {op}")]
    LibraryFailed { op: &'static str },

    /// Leptonica could not encode or write the output file
    #[error("Could not write image: {0}")]
    WriteFailed(PathBuf),

    /// IO error outside the image codec paths
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
