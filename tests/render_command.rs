use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn render_command() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("autoscale-site"));
    cmd.env("AUTOSCALE__LOGGING__LEVEL", "warn")
        .env_remove("AUTOSCALE_CONFIG_FILE")
        .arg("render");
    cmd
}

#[test]
fn render_writes_document_to_file() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("site").join("index.html");

    render_command()
        .arg("--year")
        .arg("2031")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).expect("rendered file");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("© 2031 AutoScale Systems. All rights reserved."));
    assert!(!html.contains(r#"id="mobile-menu""#));
}

#[test]
fn render_streams_open_menu_to_stdout() {
    render_command()
        .arg("--year")
        .arg("2031")
        .arg("--menu-open")
        .assert()
        .success()
        .stdout(contains(r#"id="mobile-menu""#))
        .stdout(contains("https://tally.so/embed/rjlEaN"));
}

#[test]
fn render_rejects_out_of_range_year() {
    render_command()
        .arg("--year")
        .arg("0")
        .assert()
        .failure()
        .stderr(contains("application error"));
}
