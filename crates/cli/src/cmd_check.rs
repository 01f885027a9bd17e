// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use termcolor::StandardStream;

use check_naming::checks;
use check_naming::cli::{Cli, OutputFormat};
use check_naming::color::resolve_color;
use check_naming::error::{Error, ExitCode};
use check_naming::output::json::JsonFormatter;
use check_naming::output::text::TextFormatter;
use check_naming::reader::FileReader;
use check_naming::runner::CheckRunner;

/// Run every check over the files named on the command line.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if cli.color && cli.no_color {
        return Err(
            Error::Argument("--color and --no-color cannot be used together".into()).into(),
        );
    }

    let reader = match cli.max_file_size {
        Some(max) => FileReader::with_max_size(max),
        None => FileReader::new(),
    };

    tracing::debug!(files = cli.files.len(), "check command starting");

    // Any read failure aborts here, before anything is printed.
    let output = CheckRunner::new(reader).run(&checks::all_checks(), &cli.files)?;

    tracing::debug!(
        violations = output.total_violations(),
        passed = output.passed,
        "check command finished"
    );

    match cli.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(cli.color_flags()));
            TextFormatter::new(stdout.lock()).write(&output)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock()).write(&output)?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
