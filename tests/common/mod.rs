//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory holding a quotes file with the given content
pub fn create_quotes_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("quotes.txt");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
