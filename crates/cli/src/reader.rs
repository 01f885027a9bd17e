//! Size-gated file reading.
//!
//! Files are read whole into a buffer and decoded as UTF-8. Line endings
//! are normalized to `\n` so that `\r\n` and lone `\r` terminators split
//! lines the same way a universal-newline text read would.
//!
//! An optional size limit rejects oversized files before they are read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a large-file notice (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// File content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The file content as bytes.
    pub bytes: Vec<u8>,

    /// File size in bytes.
    pub size: u64,
}

impl FileContent {
    /// Decode as UTF-8 text with normalized line endings.
    pub fn into_text(self, path: &Path) -> Result<String> {
        let text = String::from_utf8(self.bytes).map_err(|_| Error::Decode {
            path: path.to_path_buf(),
        })?;
        Ok(normalize_newlines(text))
    }
}

/// Size-gated file reader.
#[derive(Debug, Clone, Default)]
pub struct FileReader {
    /// Maximum file size to read (None = unlimited).
    max_size: Option<u64>,
}

impl FileReader {
    /// Create a reader with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding the limit.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = metadata.len();

        if let Some(max_size) = self.max_size
            && size > max_size
        {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let bytes = self.read_direct(path, size)?;

        Ok(FileContent { bytes, size })
    }

    /// Read a file and decode it as text.
    pub fn read_text(&self, path: &Path) -> Result<String> {
        self.read(path)?.into_text(path)
    }

    /// Read file directly into buffer.
    fn read_direct(&self, path: &Path, size: u64) -> Result<Vec<u8>> {
        let mut file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut buffer = Vec::with_capacity(size as usize);
        file.read_to_end(&mut buffer).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(buffer)
    }
}

/// Convert `\r\n` and lone `\r` line terminators to `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
