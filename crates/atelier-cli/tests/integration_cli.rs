//! Integration tests exercising the compiled `atelier` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn atelier() -> Command {
    Command::cargo_bin("atelier").unwrap()
}

#[test]
fn help_lists_all_subcommands() {
    atelier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn templates_lists_built_ins_and_marks_the_default() {
    atelier()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("svelte"))
        .stdout(predicate::str::contains("react"))
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn build_produces_html_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Widget.svelte"), "<h1>widget</h1>").unwrap();

    atelier()
        .current_dir(temp.path())
        .args(["build", "Widget.svelte", "-o", "dist"])
        .assert()
        .success();

    assert!(temp.path().join("dist/html/index.html").is_file());
    assert!(temp.path().join("dist/cache/manifest.json").is_file());
}

#[test]
fn build_with_unknown_template_reports_missing_entry() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Widget.jsx"), "export default 1;").unwrap();

    atelier()
        .current_dir(temp.path())
        .args([
            "build",
            "Widget.jsx",
            "-o",
            "dist",
            "-t",
            "no-such-template-here",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-template-here"));
}

#[test]
fn cert_flag_requires_ssl() {
    atelier()
        .args(["serve", "App.svelte", "--cert", "cert.pem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--ssl"));
}

#[test]
fn explicit_config_path_must_exist() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Widget.svelte"), "<h1>widget</h1>").unwrap();

    atelier()
        .current_dir(temp.path())
        .args(["build", "Widget.svelte", "-c", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn config_file_sets_the_template() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Widget.jsx"), "export default 1;").unwrap();
    fs::write(
        temp.path().join("atelier.config.json"),
        r#"{ "template": "react", "output": "out" }"#,
    )
    .unwrap();

    atelier()
        .current_dir(temp.path())
        .args(["build", "Widget.jsx"])
        .assert()
        .success();

    let mount = fs::read_to_string(temp.path().join("out/app/index.js")).unwrap();
    assert!(mount.contains("React.createElement"));
}
