//! Error types for Quotefile

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Quotefile operations
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Main error type for Quotefile
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Pre-dispatch validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Validation errors raised after parsing but before any action runs
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("At least one search term is required")]
    EmptySearchTerms,
}

/// Specialized result type for validation operations
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
