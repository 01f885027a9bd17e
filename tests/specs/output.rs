//! Behavioral specs for output formats.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Text output has no ANSI codes when stdout is not a terminal
#[test]
fn piped_text_output_has_no_color() {
    check(&["services-pkg/handler.py"])
        .on("violations")
        .fails()
        .stdout_lacks("\x1b[");
}

/// > COLOR=1 forces color on the location prefix
#[test]
fn color_env_forces_color() {
    check(&["reports-service-cfs/report.py"])
        .on("violations")
        .env("COLOR", "1")
        .fails()
        .stdout_has("\x1b[");
}

/// > NO_COLOR wins over COLOR
#[test]
fn no_color_env_disables_color() {
    check(&["reports-service-cfs/report.py"])
        .on("violations")
        .env("COLOR", "1")
        .env("NO_COLOR", "")
        .fails()
        .stdout_lacks("\x1b[");
}

/// > --color and --no-color together are a usage error
#[test]
fn conflicting_color_flags_rejected() {
    check(&[])
        .args(&["--color", "--no-color"])
        .exits(2)
        .stderr_has("cannot be used together");
}

/// > JSON output reports per-check results and still exits 1 on violations
#[test]
fn json_output_on_failure() {
    let json = check(&["services-pkg/handler.py"])
        .on("violations")
        .json()
        .fails();

    assert_eq!(json.value()["passed"], false);
    let naming = json.require_violation("naming", "naming");
    assert_eq!(naming["name"], "services-pkg");
    assert!(naming.get("line").is_none());

    let hints = json.require_violation("docstrings", "missing_type_hints");
    assert_eq!(hints["file"], "services-pkg/handler.py");
    assert_eq!(hints["line"], 1);
    assert_eq!(hints["message"], "Function 'handle' missing type hints");
}

/// > JSON output is written on success too
#[test]
fn json_output_on_success() {
    let json = check(&["billing-rfs/invoice.py"])
        .on("compliant")
        .json()
        .passes();

    assert_eq!(json.value()["passed"], true);
    assert_eq!(json.check("naming")["passed"], true);
    assert_eq!(json.check("docstrings")["passed"], true);
    assert!(json.violations("docstrings").is_empty());
}

/// > CHECK_NAMING_LOG enables debug logging to stderr
#[test]
fn log_env_enables_debug() {
    check(&["billing-rfs/invoice.py"])
        .on("compliant")
        .env("CHECK_NAMING_LOG", "debug")
        .passes()
        .stderr_has("checking file");
}
