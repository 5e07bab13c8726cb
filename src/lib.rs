//! Quotefile - keep a plain-text file of quotes from the command line
//!
//! Quotefile manages a newline-delimited quotes file through three actions:
//! a paced read-and-display, deletion of lines matching search terms, and
//! appending a quote/byline entry.

// Public modules
pub mod actions;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{QuoteError, Result};

/// Current version of Quotefile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
