//! Integration tests for the mlforge binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mlforge() -> Command {
    Command::cargo_bin("mlforge").unwrap()
}

#[test]
fn help_flag() {
    mlforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project_name"))
        .stdout(predicate::str::contains("--dry_run"))
        .stdout(predicate::str::contains("--overwrite"));
}

#[test]
fn version_flag() {
    mlforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn fresh_run_creates_skeleton() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created file: setup.py with template content",
        ))
        .stdout(predicate::str::contains("Created directory: src/demo"));

    // Package layout with the name substituted into the path.
    let init = temp.path().join("src/demo/__init__.py");
    assert!(init.exists());
    assert_eq!(fs::metadata(&init).unwrap().len(), 0);

    // Packaging descriptor names the project.
    let setup = fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));

    // Literal template.
    let reqs = fs::read_to_string(temp.path().join("requirements.txt")).unwrap();
    assert_eq!(reqs, "# Add your project dependencies here\n");

    // Empty placeholder.
    let gitkeep = temp.path().join(".github/workflows/.gitkeep");
    assert_eq!(fs::metadata(&gitkeep).unwrap().len(), 0);
}

#[test]
fn default_project_name_is_cnn_classifier() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .arg("--no-color")
        .assert()
        .success();

    assert!(temp.path().join("src/cnnClassifier/__init__.py").exists());
    let setup = fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert!(setup.contains("name='cnnClassifier'"));
}

#[test]
fn rerun_skips_existing_nonempty_files() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--no-color"])
        .assert()
        .success();

    let setup_before = fs::read_to_string(temp.path().join("setup.py")).unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "File already exists and is non-empty: setup.py",
        ));

    let setup_after = fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert_eq!(setup_before, setup_after);
}

#[test]
fn overwrite_rewrites_existing_content() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("setup.py"), "# local edits").unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--overwrite", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Overwritten file: setup.py with template content",
        ));

    let setup = fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));
    assert!(!setup.contains("local edits"));
}

#[test]
fn without_overwrite_existing_content_is_preserved() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("setup.py"), "# local edits").unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--no-color"])
        .assert()
        .success();

    let setup = fs::read_to_string(temp.path().join("setup.py")).unwrap();
    assert_eq!(setup, "# local edits");
}

#[test]
fn dry_run_touches_nothing() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "demo", "--dry_run", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Dry Run] Would create directory: src/demo",
        ))
        .stdout(predicate::str::contains(
            "[Dry Run] Would create/overwrite file: setup.py with content: provided template",
        ))
        .stdout(predicate::str::contains(
            "[Dry Run] Would create/overwrite file: research/trials.ipynb with content: empty file",
        ));

    // Nothing was created.
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn quiet_run_is_silent_but_effective() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-q", "-p", "demo", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("setup.py").exists());
}

#[test]
fn empty_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-p", "", "--no-color"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn config_file_provides_default_name() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("mlforge.toml");
    fs::write(&config, "[defaults]\nproject_name = \"fromconfig\"\n").unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["--config", "mlforge.toml", "--no-color"])
        .assert()
        .success();

    assert!(temp.path().join("src/fromconfig/__init__.py").exists());
}

#[test]
fn flag_overrides_config_default() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("mlforge.toml");
    fs::write(&config, "[defaults]\nproject_name = \"fromconfig\"\n").unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["--config", "mlforge.toml", "-p", "demo", "--no-color"])
        .assert()
        .success();

    assert!(temp.path().join("src/demo/__init__.py").exists());
    assert!(!temp.path().join("src/fromconfig").exists());
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["--config", "missing.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}
