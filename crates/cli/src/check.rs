//! Check trait and result types for output formatting.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::reader::FileReader;

/// Context passed to every check for a single file.
pub struct CheckContext<'a> {
    /// The file being checked, as given on the command line.
    pub path: &'a Path,
    /// Reader used by checks that need file contents.
    pub reader: &'a FileReader,
}

/// The Check trait defines a single lint over one file.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Check>`.
pub trait Check: Send + Sync {
    /// Unique identifier for this check (e.g., "naming", "docstrings").
    fn name(&self) -> &'static str;

    /// Human-readable description for help output.
    fn description(&self) -> &'static str;

    /// Run the check against one file.
    ///
    /// Read failures are returned as errors and abort the whole run.
    fn run(&self, ctx: &CheckContext) -> Result<Vec<Violation>>;
}

/// A single violation found by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// File the violation was found in.
    pub file: PathBuf,

    /// Line number (None for path-level violations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Violation category (check-specific).
    #[serde(rename = "type")]
    pub violation_type: &'static str,

    /// The offending path segment or function name.
    pub name: String,

    /// Diagnostic message, without location prefix.
    pub message: String,
}

impl Violation {
    /// Create a file-based violation with line number.
    pub fn file(
        file: impl Into<PathBuf>,
        line: usize,
        violation_type: &'static str,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
            violation_type,
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a violation about the path itself, with no line number.
    pub fn path_only(
        file: impl Into<PathBuf>,
        violation_type: &'static str,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line: None,
            violation_type,
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Renders the diagnostic line: `<file>:<line>: <message>` when a line is
/// known, the bare message otherwise.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.file.display(), line, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Result of running a single check across all files.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check identifier (e.g., "naming").
    pub name: String,

    /// Whether this check passed.
    pub passed: bool,

    /// Violations found by this check (omitted if empty).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            violations: Vec::new(),
        }
    }

    /// Create a result from collected violations.
    pub fn from_violations(name: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            name: name.into(),
            passed: violations.is_empty(),
            violations,
        }
    }
}

/// Aggregated results from a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether every check passed.
    pub passed: bool,

    /// Results for each check, in registry order.
    pub checks: Vec<CheckResult>,

    /// All violations in discovery order: per file, per check.
    #[serde(skip)]
    pub violations: Vec<Violation>,
}

impl CheckOutput {
    /// Create output from per-check results and the ordered violation list.
    pub fn new(timestamp: String, checks: Vec<CheckResult>, violations: Vec<Violation>) -> Self {
        let passed = violations.is_empty() && checks.iter().all(|c| c.passed);
        Self {
            timestamp,
            passed,
            checks,
            violations,
        }
    }

    /// Count total violations across all checks.
    pub fn total_violations(&self) -> usize {
        self.violations.len()
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
