//! CLI interface and argument parsing
//!
//! This module builds the command tree, validates parsed values, and
//! dispatches to the file actions.

pub mod app;
pub mod validate;

// Re-export main types
pub use app::*;
pub use validate::*;
