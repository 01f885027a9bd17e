// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Docstring and type-hint check.
//!
//! A line-oriented heuristic, not a parser. Each line starting with
//! `def name(params)` is inspected:
//! - parameters without `self`/`cls` and without any `:` lack type hints
//! - the next non-blank line must open with `"""`
//!
//! Dunder functions other than `__init__` are skipped. Signatures spanning
//! several lines are matched only if the first `)` is on the `def` line.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::check::{Check, CheckContext, Violation};
use crate::error::Result;

/// Function definition: name and the parameter text up to the first `)`.
#[allow(clippy::expect_used)]
static DEF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*def\s+(\w+)\s*\((.*?)\)").expect("valid regex"));

/// Token a docstring line must start with.
const DOCSTRING_QUOTE: &str = "\"\"\"";

/// The docstrings check reads each file and scans its function definitions.
pub struct DocstringsCheck;

impl Check for DocstringsCheck {
    fn name(&self) -> &'static str {
        "docstrings"
    }

    fn description(&self) -> &'static str {
        "Function docstrings and type hints"
    }

    fn run(&self, ctx: &CheckContext) -> Result<Vec<Violation>> {
        let content = ctx.reader.read_text(ctx.path)?;
        Ok(check_docstrings_and_types(ctx.path, &content))
    }
}

/// Scan `content` for undocumented or untyped function definitions.
///
/// Lines are split on `\n` only; text after the final newline is a line.
/// The blank-line lookahead consumes the line it stops on, so that line is
/// never itself examined as a definition.
pub fn check_docstrings_and_types(path: &Path, content: &str) -> Vec<Violation> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut violations = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = DEF_PATTERN.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let name = caps.get(1).map_or("", |m| m.as_str());
        let params = caps.get(2).map_or("", |m| m.as_str());
        tracing::trace!(line = i + 1, name, "function definition");

        if is_skipped_dunder(name) {
            i += 1;
            continue;
        }

        if lacks_type_hints(params) {
            violations.push(Violation::file(
                path,
                i + 1,
                "missing_type_hints",
                name,
                format!("Function '{name}' missing type hints"),
            ));
        }

        i += 1;
        while i < lines.len() && lines[i].trim().is_empty() {
            i += 1;
        }

        // Reported line is the 0-based index of the inspected line.
        if let Some(next) = lines.get(i)
            && !next.trim().starts_with(DOCSTRING_QUOTE)
        {
            violations.push(Violation::file(
                path,
                i,
                "missing_docstring",
                name,
                format!("Function '{name}' missing docstring"),
            ));
        }

        i += 1;
    }

    violations
}

/// Dunder names are exempt, except the constructor.
fn is_skipped_dunder(name: &str) -> bool {
    name.starts_with("__") && name != "__init__"
}

/// Coarse lexical test: any `:` in the parameter text counts as a hint, and
/// any mention of `self` or `cls` exempts the whole list.
fn lacks_type_hints(params: &str) -> bool {
    !params.is_empty()
        && !params.contains("self")
        && !params.contains("cls")
        && !params.contains(':')
}

#[cfg(test)]
#[path = "docstrings_tests.rs"]
mod tests;
