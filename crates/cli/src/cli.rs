// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorFlags;

/// Check service naming suffixes, docstrings and type hints in source files
#[derive(Parser)]
#[command(name = "check-naming")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files to check, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Abort when a file is larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

impl Cli {
    /// Color flags as given on the command line.
    pub fn color_flags(&self) -> ColorFlags {
        ColorFlags {
            force: self.color,
            disable: self.no_color,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
