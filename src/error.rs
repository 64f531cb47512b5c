use std::path::PathBuf;

use thiserror::Error;

/// Domain checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Insufficient input: expected {expected} domain lines, found {found}")]
    InsufficientInput { expected: usize, found: usize },

    #[error("Failed to open input file '{}': {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
