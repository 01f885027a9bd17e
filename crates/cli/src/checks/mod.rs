// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check registry.
//!
//! Both built-in checks run on every file, in this order:
//! - naming: service/package path segments carry a `-cfs` or `-rfs` suffix
//! - docstrings: function definitions have docstrings and type hints

pub mod docstrings;
pub mod naming;

use std::sync::Arc;

use crate::check::Check;

/// All registered check names in canonical order.
pub const CHECK_NAMES: &[&str] = &["naming", "docstrings"];

/// Create all registered checks, in canonical order.
pub fn all_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(naming::NamingCheck),
        Arc::new(docstrings::DocstringsCheck),
    ]
}

/// Get a check by name.
pub fn get_check(name: &str) -> Option<Arc<dyn Check>> {
    all_checks().into_iter().find(|c| c.name() == name)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
