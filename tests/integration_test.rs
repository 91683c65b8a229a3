// tests/integration_test.rs
use assert_cmd::Command;
use git2::{Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary command isolated from the caller's environment and user config
fn auto_version(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("auto-version").unwrap();
    cmd.current_dir(dir)
        .env_remove("VERSION_FILE")
        .env_remove("COMMIT_MESSAGE")
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir);
    cmd
}

fn init_repo_with_commit(dir: &Path, message: &str) {
    let repo = Repository::init(dir).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap();
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    auto_version(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto-version"))
        .stdout(predicate::str::contains("bump"))
        .stdout(predicate::str::contains("setup"));
}

#[test]
fn test_bump_minor_with_message() {
    let dir = TempDir::new().unwrap();
    let version_file = dir.path().join("__version__.py");
    fs::write(&version_file, "__version__ = \"1.2.3\"\n").unwrap();

    auto_version(dir.path())
        .args(["bump", "--message", "Add feature [minor]"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("1.3.0"));

    assert_eq!(
        fs::read_to_string(&version_file).unwrap(),
        "__version__ = \"1.3.0\"\n"
    );
}

#[test]
fn test_bump_initial_commit_from_git_creates_file() {
    let dir = TempDir::new().unwrap();
    init_repo_with_commit(dir.path(), "Initial commit");

    auto_version(dir.path()).arg("bump").assert().code(0);

    assert_eq!(
        fs::read_to_string(dir.path().join("__version__.py")).unwrap(),
        "__version__ = \"0.0.1\"\n"
    );
}

#[test]
fn test_bump_skip_guard_exits_one() {
    let dir = TempDir::new().unwrap();
    let version_file = dir.path().join("__version__.py");
    fs::write(&version_file, "__version__ = \"1.2.3\"\n").unwrap();

    auto_version(dir.path())
        .args([
            "bump",
            "--message",
            "chore: auto-increment version to 1.2.3 [skip ci]",
        ])
        .assert()
        .code(1);

    assert_eq!(
        fs::read_to_string(&version_file).unwrap(),
        "__version__ = \"1.2.3\"\n"
    );
}

#[test]
fn test_bump_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("__version__.py"), "not-a-version").unwrap();

    auto_version(dir.path())
        .args(["bump", "--message", "Fix [patch]"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed version file"));

    assert_eq!(
        fs::read_to_string(dir.path().join("__version__.py")).unwrap(),
        "not-a-version"
    );
}

#[test]
fn test_bump_overflow_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let version_file = dir.path().join("__version__.py");
    let original = "__version__ = \"1.2.18446744073709551615\"\n";
    fs::write(&version_file, original).unwrap();

    auto_version(dir.path())
        .args(["bump", "--message", "fix"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Version overflow"));

    assert_eq!(fs::read_to_string(&version_file).unwrap(), original);
}

#[test]
fn test_bump_honours_version_file_env() {
    let dir = TempDir::new().unwrap();

    auto_version(dir.path())
        .env("VERSION_FILE", "pkg/_version.py")
        .env("COMMIT_MESSAGE", "Breaking [major]")
        .arg("bump")
        .assert()
        .code(0);

    assert_eq!(
        fs::read_to_string(dir.path().join("pkg/_version.py")).unwrap(),
        "__version__ = \"1.0.0\"\n"
    );
    assert!(!dir.path().join("__version__.py").exists());
}

#[test]
fn test_bump_dry_run_leaves_file() {
    let dir = TempDir::new().unwrap();
    let version_file = dir.path().join("__version__.py");
    fs::write(&version_file, "__version__ = \"0.2.0\"\n").unwrap();

    auto_version(dir.path())
        .args(["bump", "--dry-run", "--message", "[minor]"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Would bump"));

    assert_eq!(
        fs::read_to_string(&version_file).unwrap(),
        "__version__ = \"0.2.0\"\n"
    );
}

#[test]
fn test_setup_installs_workflow_and_version_file() {
    let dir = TempDir::new().unwrap();

    auto_version(dir.path()).arg("setup").assert().success();

    let workflow =
        fs::read_to_string(dir.path().join(".github/workflows/auto-version.yml")).unwrap();
    assert!(workflow.contains("auto-version bump"));
    assert_eq!(
        fs::read_to_string(dir.path().join("__version__.py")).unwrap(),
        "__version__ = \"0.0.0\"\n"
    );
}

#[test]
fn test_setup_keeps_existing_workflow_when_declined() {
    let dir = TempDir::new().unwrap();
    let workflow = dir.path().join(".github/workflows/auto-version.yml");
    fs::create_dir_all(workflow.parent().unwrap()).unwrap();
    fs::write(&workflow, "mine\n").unwrap();

    auto_version(dir.path())
        .arg("setup")
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&workflow).unwrap(), "mine\n");
}

#[test]
fn test_current_quiet() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("__version__.py"), "__version__ = '2.5.1'\n").unwrap();

    auto_version(dir.path())
        .args(["current", "--quiet"])
        .assert()
        .success()
        .stdout("2.5.1\n");
}

#[test]
fn test_current_without_version_file_succeeds() {
    let dir = TempDir::new().unwrap();

    auto_version(dir.path())
        .arg("current")
        .assert()
        .code(0)
        .stdout("0.0.0\n")
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_file_sets_version_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("autoversion.toml"),
        "[version]\nfile = \"VERSION.py\"\n",
    )
    .unwrap();

    auto_version(dir.path())
        .args(["bump", "--message", "x"])
        .assert()
        .code(0);

    assert_eq!(
        fs::read_to_string(dir.path().join("VERSION.py")).unwrap(),
        "__version__ = \"0.0.1\"\n"
    );
}
