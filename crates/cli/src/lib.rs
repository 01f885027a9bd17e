//! Pre-commit checks for service naming suffixes, docstrings and type hints.

pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod error;
pub mod output;
pub mod reader;
pub mod runner;

pub use check::{Check, CheckContext, CheckOutput, CheckResult, Violation};
pub use cli::{Cli, OutputFormat};
pub use color::ColorFlags;
pub use error::{Error, ExitCode, Result};
pub use reader::{FileContent, FileReader};
pub use runner::CheckRunner;

#[cfg(test)]
pub mod test_utils;
