//! Behavioral specs for aborted runs.
//!
//! Read failures are not lint results: they abort the run, print nothing
//! to stdout and exit 3.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A missing file aborts with exit 3 and an error on stderr
#[test]
fn missing_file_aborts() {
    let temp = Project::empty();

    check(&["missing.py"])
        .pwd(temp.path())
        .exits(3)
        .stdout_eq("")
        .stderr_has("check-naming: io error: missing.py");
}

/// > Violations found before the failure are not printed
#[test]
fn earlier_violations_discarded_on_abort() {
    let temp = Project::empty();
    temp.file("a-pkg/a.py", "def a(x):\n    pass\n");

    check(&["a-pkg/a.py", "missing.py"])
        .pwd(temp.path())
        .exits(3)
        .stdout_eq("");
}

/// > Files after the failure are never read
#[test]
fn later_files_not_checked() {
    let temp = Project::empty();
    temp.file("b-pkg/b.py", "");

    check(&["missing.py", "b-pkg/b.py"])
        .pwd(temp.path())
        .exits(3)
        .stdout_lacks("b-pkg");
}

/// > Non-UTF-8 content aborts the run
#[test]
fn undecodable_file_aborts() {
    let temp = Project::empty();
    temp.file("blob.py", [0xffu8, 0xfe, 0x00, 0x0a]);

    check(&["blob.py"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("decode error: blob.py");
}

/// > A directory is not a readable file
#[test]
fn directory_argument_aborts() {
    let temp = Project::empty();
    temp.file("pkg-rfs/a.py", "");

    check(&["pkg-rfs"]).pwd(temp.path()).exits(3);
}

/// > --max-file-size rejects larger files
#[test]
fn oversized_file_aborts() {
    let temp = Project::empty();
    temp.file("big.py", "x = 1\n".repeat(100));

    check(&["big.py"])
        .pwd(temp.path())
        .args(&["--max-file-size", "10"])
        .exits(3)
        .stderr_has("file too large");
}
