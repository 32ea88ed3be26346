//! Integration tests for CLI commands

#![allow(deprecated)]

use assert_cmd::{assert::OutputAssertExt, cargo::CommandCargoExt};
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// docnav with a config path that does not exist, so user config never leaks in
fn docnav(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docnav").unwrap();
    cmd.arg("--config").arg(tmp.path().join("config.toml"));
    cmd
}

#[test]
fn test_main_command_help() {
    let mut cmd = Command::cargo_bin("docnav").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_render_json_fixture() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = docnav(&tmp);
    cmd.arg("render").arg(fixture("sidebar.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<div class=\"relative\">"))
        .stdout(predicate::str::contains("href=\"/docs/guides/advanced/links\""))
        .stdout(predicate::str::contains("<img src=\"/img/rocket.svg\""))
        .stdout(predicate::str::contains(">Reference API</div>"));
}

#[test]
fn test_render_toml_demo_as_page() {
    let tmp = TempDir::new().unwrap();
    let demo = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sidebar.toml");
    let mut cmd = docnav(&tmp);
    cmd.arg("render").arg(demo).arg("--page").arg("--routed");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>Documentation</title>"))
        .stdout(predicate::str::contains("data-router-link"));
}

#[test]
fn test_render_uses_sidebar_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[site]\ntitle = \"Acme\"\nsidebar = {:?}\n",
            fixture("sidebar.json").display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("docnav").unwrap();
    cmd.arg("--config").arg(&config).arg("render").arg("--page");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<title>Acme</title>"))
        .stdout(predicate::str::contains(">FAQ</a>"));
}

#[test]
fn test_render_without_file_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = docnav(&tmp);
    cmd.arg("render");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No sidebar file given"));
}

#[test]
fn test_render_malformed_file_fails() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(&nav, r#"[["Orphan"]]"#).unwrap();

    let mut cmd = docnav(&tmp);
    cmd.arg("render").arg(&nav);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load sidebar"));
}

#[test]
fn test_check_clean_fixture() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = docnav(&tmp);
    cmd.arg("check").arg(fixture("sidebar.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("9 entries, depth 3, no issues"));
}

#[test]
fn test_check_reports_duplicates() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(
        &nav,
        r#"[["Guides", [["Setup", "/a", null], ["Setup", "/b", null]], null]]"#,
    )
    .unwrap();

    let mut cmd = docnav(&tmp);
    cmd.arg("check").arg(&nav);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Guides: duplicate sibling title"));
}
