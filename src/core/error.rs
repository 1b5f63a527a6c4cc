//! Error types for kernel ridge models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RidgeError {
    #[error("Unsupported kernel: {0}")]
    UnsupportedKernel(String),

    #[error("Singular or ill-conditioned system: regularized Gram matrix is not positive definite")]
    IllConditioned,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, RidgeError>;
