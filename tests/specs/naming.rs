//! Behavioral specs for the naming check.
//!
//! Service and package path segments must end in `-cfs` or `-rfs`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A `-rfs` suffixed service directory passes
#[test]
fn suffixed_service_directory_passes() {
    let temp = Project::empty();
    temp.file("my-service-rfs/app.py", "");

    check(&["my-service-rfs/app.py"]).pwd(temp.path()).passes();
}

/// > An unsuffixed service directory is reported once, by name
#[test]
fn unsuffixed_service_directory_fails() {
    let temp = Project::empty();
    temp.file("my-service/app.py", "");

    check(&["my-service/app.py"])
        .pwd(temp.path())
        .fails()
        .stdout_eq("Package/service name 'my-service' must end with '-cfs' or '-rfs'\n");
}

/// > `service` matches case-insensitively, including in file names
#[test]
fn service_match_is_case_insensitive() {
    let temp = Project::empty();
    temp.file("src/UserService.py", "");

    check(&["src/UserService.py"])
        .pwd(temp.path())
        .fails()
        .stdout_eq("Package/service name 'UserService.py' must end with '-cfs' or '-rfs'\n");
}

/// > Segments without `service` or a `-pkg` suffix are never flagged
#[test]
fn unrelated_segments_pass() {
    let temp = Project::empty();
    temp.file("pkg-tools/lib/util.py", "");

    check(&["pkg-tools/lib/util.py"]).pwd(temp.path()).passes();
}

/// > Naming is checked on the path as given, even for absolute paths
#[test]
fn absolute_path_segments_checked() {
    let temp = Project::empty();
    temp.file("orders-pkg/app.py", "");
    let path = temp.path().join("orders-pkg/app.py");

    check(&[path.to_str().unwrap()])
        .fails()
        .stdout_eq("Package/service name 'orders-pkg' must end with '-cfs' or '-rfs'\n");
}
