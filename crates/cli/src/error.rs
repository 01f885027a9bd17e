// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// check-naming error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("decode error: {}: file is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },

    /// File exceeds the configured size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Result type using check-naming Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No violations found
    Success = 0,
    /// One or more violations found
    CheckFailed = 1,
    /// Invalid command-line usage
    ConfigError = 2,
    /// A file could not be read; the run was aborted
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Decode { .. } | Error::FileTooLarge { .. } => {
                ExitCode::InternalError
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
