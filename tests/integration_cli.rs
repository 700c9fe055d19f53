//! Integration tests for the depwiz CLI
//!
//! Every test runs the binary non-interactively against a mock registry and
//! a scratch project directory.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// depwiz with a clean environment pointed at `config`
fn depwiz(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depwiz").unwrap();
    cmd.env("DEPWIZ_CONFIG", config)
        .env_remove("DEPWIZ_REGISTRY")
        .env_remove("DEPWIZ_PACKAGE_MANAGER")
        .env_remove("RUST_LOG");
    cmd
}

fn mock_latest(server: &MockServer, name: &str, version: &str) {
    let path = format!("/{}/latest", name);
    let body = serde_json::json!({ "name": name, "version": version });
    server.mock(move |when, then| {
        when.method(GET).path(path);
        then.status(200).json_body(body);
    });
}

fn registry() -> MockServer {
    let server = MockServer::start();
    mock_latest(&server, "express", "4.19.2");
    mock_latest(&server, "nodemon", "3.1.0");
    mock_latest(&server, "cors", "2.8.5");
    mock_latest(&server, "@types/cors", "2.8.17");
    mock_latest(&server, "dotenv", "16.4.5");
    server
}

fn manifest(dir: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap()
}

#[test]
fn test_help() {
    Command::cargo_bin("depwiz")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("notes"));
}

#[test]
fn test_list_shows_catalog() {
    let temp = TempDir::new().unwrap();
    depwiz(&temp.path().join("none.toml"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("typescript"))
        .stdout(predicate::str::contains("express"));
}

#[test]
fn test_notes_prints_numbered_notes() {
    let temp = TempDir::new().unwrap();
    depwiz(&temp.path().join("none.toml"))
        .args(["notes", "tailwindcss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup notes for tailwindcss"))
        .stdout(predicate::str::contains("@tailwind base;"));
}

#[test]
fn test_notes_unknown_package_fails() {
    let temp = TempDir::new().unwrap();
    depwiz(&temp.path().join("none.toml"))
        .args(["notes", "left-pad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the catalog"));
}

#[test]
fn test_add_by_name_writes_manifest() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("My App!!");
    fs::create_dir(&project).unwrap();

    depwiz(&temp.path().join("none.toml"))
        .args(["add", "cors", "--yes", "--skip-install"])
        .arg("--dir")
        .arg(&project)
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("cors@2.8.5"));

    let json = manifest(&project);
    assert_eq!(json["name"], "my-app");
    assert_eq!(json["dependencies"]["cors"], "^2.8.5");
    assert_eq!(json["devDependencies"]["@types/cors"], "^2.8.17");
}

#[test]
fn test_add_is_default_command() {
    let server = registry();
    let temp = TempDir::new().unwrap();

    depwiz(&temp.path().join("none.toml"))
        .env("DEPWIZ_REGISTRY", server.base_url())
        .args(["dotenv", "--yes", "--skip-install"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(manifest(temp.path())["dependencies"]["dotenv"], "^16.4.5");
}

#[test]
fn test_existing_manifest_is_merged() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{"name":"keep-me","scripts":{"start":"node ."},"devDependencies":{"cors":"^1.0.0"}}"#,
    )
    .unwrap();

    depwiz(&temp.path().join("none.toml"))
        .args(["add", "cors", "--yes", "--skip-install"])
        .arg("--dir")
        .arg(temp.path())
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .success();

    let json = manifest(temp.path());
    assert_eq!(json["name"], "keep-me");
    assert_eq!(json["scripts"]["start"], "node .");
    assert_eq!(json["dependencies"]["cors"], "^2.8.5");
    assert!(json["devDependencies"].get("cors").is_none());
}

#[test]
fn test_failed_lookup_still_writes_other_packages() {
    let server = MockServer::start();
    mock_latest(&server, "express", "4.19.2");
    server.mock(|when, then| {
        when.method(GET).path("/dotenv/latest");
        then.status(500);
    });
    let temp = TempDir::new().unwrap();

    depwiz(&temp.path().join("none.toml"))
        .args(["add", "express", "dotenv", "--yes", "--skip-install"])
        .arg("--dir")
        .arg(temp.path())
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .success()
        .stderr(predicate::str::contains("dotenv"));

    let json = manifest(temp.path());
    assert_eq!(json["dependencies"]["express"], "^4.19.2");
    assert!(json["dependencies"].get("dotenv").is_none());
}

#[test]
fn test_unknown_package_fails_without_writing() {
    let temp = TempDir::new().unwrap();

    depwiz(&temp.path().join("none.toml"))
        .args(["add", "typscript", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean 'typescript'"));

    assert!(!temp.path().join("package.json").exists());
}

#[test]
fn test_malformed_manifest_is_not_overwritten() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{ nope").unwrap();

    depwiz(&temp.path().join("none.toml"))
        .args(["add", "express", "--yes", "--skip-install"])
        .arg("--dir")
        .arg(temp.path())
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));

    assert_eq!(
        fs::read_to_string(temp.path().join("package.json")).unwrap(),
        "{ nope"
    );
}

#[test]
fn test_picker_without_terminal_fails_cleanly() {
    let server = registry();
    let temp = TempDir::new().unwrap();

    depwiz(&temp.path().join("none.toml"))
        .arg("add")
        .arg("--dir")
        .arg(temp.path())
        .arg("--registry")
        .arg(server.base_url())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt failed"));

    assert!(!temp.path().join("package.json").exists());
}

#[test]
fn test_invalid_user_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "package_manager = \"bun\"\n").unwrap();

    depwiz(&config)
        .args(["add", "express", "--yes"])
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[cfg(unix)]
#[test]
fn test_install_failure_exits_nonzero_and_keeps_manifest() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "install_command = \"exit 7\"\n").unwrap();
    let project = temp.path().join("proj");
    fs::create_dir(&project).unwrap();

    depwiz(&config)
        .args(["add", "express", "--yes", "--no-notes"])
        .arg("--dir")
        .arg(&project)
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Install failed"));

    assert_eq!(manifest(&project)["dependencies"]["express"], "^4.19.2");
}

#[cfg(unix)]
#[test]
fn test_install_success_prints_notes() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "install_command = \"true\"\n").unwrap();
    let project = temp.path().join("proj");
    fs::create_dir(&project).unwrap();

    depwiz(&config)
        .args(["add", "dotenv", "--yes"])
        .arg("--dir")
        .arg(&project)
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Setup notes for dotenv"))
        .stdout(predicate::str::contains("require('dotenv').config();"));
}

#[cfg(unix)]
#[test]
fn test_successful_install_output_is_shown() {
    let server = registry();
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        "install_command = \"echo added 1 package; echo npm warn peer >&2\"\n",
    )
    .unwrap();
    let project = temp.path().join("proj");
    fs::create_dir(&project).unwrap();

    depwiz(&config)
        .args(["add", "express", "--yes", "--no-notes"])
        .arg("--dir")
        .arg(&project)
        .arg("--registry")
        .arg(server.base_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("added 1 package"))
        .stderr(predicate::str::contains("npm warn peer"));
}

#[cfg(unix)]
#[test]
fn test_notes_follow_failed_post_install_step() {
    use std::os::unix::fs::PermissionsExt;

    let server = registry();
    mock_latest(&server, "typescript", "5.4.5");
    mock_latest(&server, "@types/node", "20.12.7");
    mock_latest(&server, "ts-node", "10.9.2");
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "install_command = \"true\"\n").unwrap();
    let project = temp.path().join("proj");
    fs::create_dir(&project).unwrap();

    // npx stand-in that always fails
    let bin = temp.path().join("bin");
    fs::create_dir(&bin).unwrap();
    let npx = bin.join("npx");
    fs::write(&npx, "#!/bin/sh\necho 'tsc: not installed' >&2\nexit 1\n").unwrap();
    fs::set_permissions(&npx, fs::Permissions::from_mode(0o755)).unwrap();
    let inherited = std::env::var("PATH").unwrap_or_default();
    let path = format!("{}:{}", bin.display(), inherited);

    let output = depwiz(&config)
        .env("PATH", path)
        .args(["add", "typescript", "--yes"])
        .arg("--dir")
        .arg(&project)
        .arg("--registry")
        .arg(server.base_url())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Post-install step `npx tsc --init` failed"));

    let step = stdout.find("$ npx tsc --init").unwrap();
    let notes = stdout.find("Setup notes for typescript").unwrap();
    assert!(step < notes);
}
