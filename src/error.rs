//! Error types for Vitrine
//!
//! Uses `thiserror` for library errors. Most storefront conditions (missing
//! catalog file, unparseable price, below-minimum quantity, orphaned cart
//! reference) are recovered where they are detected and never become
//! errors; this enum covers the genuinely unrecoverable ones.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Vitrine operations
pub type VitrineResult<T> = Result<T, VitrineError>;

/// Main error type for Vitrine operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Configuration file exists but cannot be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
