// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed):
//! ```json
//! {
//!   "timestamp": "2026-01-01T00:00:00Z",
//!   "passed": false,
//!   "checks": [
//!     { "name": "naming", "passed": false, "violations": [
//!       { "file": "a-pkg/x.py", "type": "naming", "name": "a-pkg", "message": "..." }
//!     ] },
//!     { "name": "docstrings", "passed": true }
//!   ]
//! }
//! ```

use std::io::Write;

use crate::check::CheckOutput;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
