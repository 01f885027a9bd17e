//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

/// A module with a typed, documented function and a skipped dunder.
pub const COMPLIANT_MODULE: &str = r#"class Greeter:
    def __init__(self, name: str):
        """Store the name."""
        self.name = name

    def __repr__(self):
        return self.name


def greet(name: str) -> str:
    """Return a greeting."""
    return f"hello {name}"
"#;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}
