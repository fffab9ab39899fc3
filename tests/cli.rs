//! CLIの統合テスト
//!
//! バイナリを実行し、終了コードと出力を検証する

mod common;

use assert_cmd::Command;
use common::test_fixtures::{write_manifest, ManifestFixture};
use predicates::prelude::*;
use tempfile::TempDir;

fn installer() -> Command {
    let mut cmd = Command::cargo_bin("bild-installer").unwrap();
    cmd.env_remove("BILD_INSTALLER_USER")
        .env_remove("BILD_INSTALLER_PASSWORD")
        .env_remove("BILD_INSTALLER_GIT")
        .env_remove("RUST_LOG");
    cmd
}

fn with_credentials(cmd: &mut Command) -> &mut Command {
    cmd.env("BILD_INSTALLER_USER", "alice")
        .env("BILD_INSTALLER_PASSWORD", "secret")
}

#[test]
fn test_no_argument_does_nothing() {
    installer()
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_several_arguments_do_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_manifest(temp_dir.path(), "a.json", ManifestFixture::simple());
    let second = write_manifest(temp_dir.path(), "b.json", ManifestFixture::simple());

    with_credentials(&mut installer())
        .current_dir(temp_dir.path())
        .arg(&first)
        .arg(&second)
        .args(["--select", "A"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(!temp_dir.path().join("a").exists());

    installer()
        .args(["a.txt", "b.txt", "c.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_non_json_argument() {
    let temp_dir = TempDir::new().unwrap();

    installer()
        .current_dir(temp_dir.path())
        .arg("apps.yaml")
        .assert()
        .code(1)
        .stdout(predicate::str::diff("File is not correct!!!\n"))
        .stderr(predicate::str::is_empty());

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_credentials_required_without_terminal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "apps.json", ManifestFixture::simple());

    installer()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No interactive terminal"));
}

#[test]
fn test_missing_manifest_file() {
    let temp_dir = TempDir::new().unwrap();

    with_credentials(&mut installer())
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_existing_application_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "apps.json", ManifestFixture::simple());
    std::fs::create_dir_all(temp_dir.path().join("a")).unwrap();

    with_credentials(&mut installer())
        .arg(&path)
        .args(["--select", "A", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing application: A"))
        .stdout(predicate::str::contains("Application exists!!!"))
        .stdout(predicate::str::contains("Application A is not installed!"));

    with_credentials(&mut installer())
        .arg(&path)
        .args(["--select", "A", "--fail-on-error"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 1 applications were not installed"));
}

#[test]
fn test_missing_git_executable_fails_application() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "apps.json", ManifestFixture::simple());

    with_credentials(&mut installer())
        .arg(&path)
        .args(["--select", "B", "--select", "A", "--no-color"])
        .args(["--git", "definitely-not-a-real-git-binary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Application B is not installed!"))
        .stdout(predicate::str::contains("Application A is not installed!"));
}

#[test]
fn test_unknown_selection() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "apps.json", ManifestFixture::simple());

    with_credentials(&mut installer())
        .arg(&path)
        .args(["--select", "Z"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'Z'"));
}

#[test]
fn test_duplicate_names_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "apps.json", ManifestFixture::duplicated());

    with_credentials(&mut installer())
        .arg(&path)
        .args(["--select", "A"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Duplicate application name"));
}

#[test]
fn test_version() {
    installer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
