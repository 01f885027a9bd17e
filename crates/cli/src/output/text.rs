// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One diagnostic per line, in discovery order:
//! ```text
//! Package/service name '<segment>' must end with '-cfs' or '-rfs'
//! <file>:<line>: Function '<name>' missing type hints
//! <file>:<line>: Function '<name>' missing docstring
//! ```
//!
//! Nothing is written when the run passed. Color only wraps the location
//! prefix; with color off the bytes are exactly the lines above.

use std::io::Write;

use termcolor::WriteColor;

use crate::check::{CheckOutput, Violation};
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    violations_shown: usize,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            violations_shown: 0,
        }
    }

    /// Write every violation of a run. Silent on pass.
    pub fn write(&mut self, output: &CheckOutput) -> std::io::Result<()> {
        for violation in &output.violations {
            self.write_violation(violation)?;
            self.violations_shown += 1;
        }
        self.writer.flush()
    }

    fn write_violation(&mut self, v: &Violation) -> std::io::Result<()> {
        let Some(line) = v.line else {
            return writeln!(self.writer, "{}", v.message);
        };

        self.writer.set_color(&scheme::path())?;
        write!(self.writer, "{}", v.file.display())?;
        self.writer.reset()?;
        write!(self.writer, ":")?;
        self.writer.set_color(&scheme::line_number())?;
        write!(self.writer, "{}", line)?;
        self.writer.reset()?;
        writeln!(self.writer, ": {}", v.message)
    }

    /// Get the number of violations written.
    pub fn violations_shown(&self) -> usize {
        self.violations_shown
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
