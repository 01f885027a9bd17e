// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential check runner.
//!
//! Files are processed strictly in the order given; for each file every
//! check runs in registry order. The first read failure aborts the run and
//! discards all violations gathered so far.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::check::{Check, CheckContext, CheckOutput, CheckResult, Violation};
use crate::error::Result;
use crate::reader::FileReader;

/// The check runner executes checks over a list of files.
pub struct CheckRunner {
    reader: FileReader,
}

impl CheckRunner {
    pub fn new(reader: FileReader) -> Self {
        Self { reader }
    }

    /// Run all provided checks over all files.
    ///
    /// Violations are ordered by file, then by check.
    pub fn run(&self, checks: &[Arc<dyn Check>], files: &[PathBuf]) -> Result<CheckOutput> {
        let mut ordered: Vec<Violation> = Vec::new();
        let mut by_check: Vec<Vec<Violation>> = vec![Vec::new(); checks.len()];

        for file in files {
            let path = lexical_path(file);
            tracing::debug!(path = %path.display(), "checking file");

            let ctx = CheckContext {
                path: &path,
                reader: &self.reader,
            };

            for (check, found) in checks.iter().zip(by_check.iter_mut()) {
                let violations = check.run(&ctx)?;
                tracing::debug!(
                    check = check.name(),
                    violations = violations.len(),
                    "check complete"
                );
                found.extend(violations.iter().cloned());
                ordered.extend(violations);
            }
        }

        let results = checks
            .iter()
            .zip(by_check)
            .map(|(check, violations)| CheckResult::from_violations(check.name(), violations))
            .collect();

        Ok(CheckOutput::new(timestamp(), results, ordered))
    }
}

/// Current time as an RFC 3339 timestamp with second precision.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Lexically clean a path: drop `.` components, repeated and trailing
/// separators. `..` is kept and nothing touches the filesystem.
pub fn lexical_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
