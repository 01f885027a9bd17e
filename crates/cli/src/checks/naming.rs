// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Service/package naming check.
//!
//! Any path segment that looks like a service (`service` anywhere,
//! case-insensitive) or a package (`-pkg` suffix) must end in `-cfs` or
//! `-rfs`. Only the path is inspected; file contents are never read.

use std::path::Path;

use crate::check::{Check, CheckContext, Violation};
use crate::error::Result;

/// Suffixes that satisfy the convention.
pub const ALLOWED_SUFFIXES: &[&str] = &["-cfs", "-rfs"];

/// The naming check validates service/package path segments.
pub struct NamingCheck;

impl Check for NamingCheck {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn description(&self) -> &'static str {
        "Service/package name suffixes"
    }

    fn run(&self, ctx: &CheckContext) -> Result<Vec<Violation>> {
        Ok(check_package_naming(ctx.path))
    }
}

/// Check every component of `path` against the suffix convention.
///
/// Each offending segment yields one violation, so a segment repeated in
/// the path is reported once per occurrence.
pub fn check_package_naming(path: &Path) -> Vec<Violation> {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .filter(|segment| needs_suffix(segment) && !has_allowed_suffix(segment))
        .map(|segment| {
            let message =
                format!("Package/service name '{segment}' must end with '-cfs' or '-rfs'");
            Violation::path_only(path, "naming", segment, message)
        })
        .collect()
}

/// Whether a segment is subject to the convention.
fn needs_suffix(segment: &str) -> bool {
    segment.to_lowercase().contains("service") || segment.ends_with("-pkg")
}

fn has_allowed_suffix(segment: &str) -> bool {
    ALLOWED_SUFFIXES
        .iter()
        .any(|suffix| segment.ends_with(suffix))
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
