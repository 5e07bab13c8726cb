//! File actions on the quotes file
//!
//! This module holds the three operations a parsed invocation dispatches to:
//! paced read, delete-matching-lines, and append-entry.

pub mod add;
pub mod delete;
pub mod read;
pub mod style;

// Re-export main types
pub use add::*;
pub use delete::*;
pub use read::*;
pub use style::*;
