// tests/cli_test.rs
mod common;

use common::TestRepo;
use std::path::Path;
use std::process::{Command, Output};

fn rc_align(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rc-align"))
        .args(args)
        .current_dir(dir)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("RC_ALIGN_LOG")
        .output()
        .expect("Failed to execute rc-align")
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = rc_align(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("rc-align"));
    assert!(stdout.contains("release-candidate"));
}

#[test]
fn test_prints_next_version_to_stdout() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v0.1.0");
    test.commit("fix: typo");

    let output = rc_align(test.dir.path(), &["--repo", "."]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "next_version=0.1.1-rc.1\n"
    );
}

#[test]
fn test_appends_to_github_output_file() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v1.4.2-rc.3");
    test.commit("fix!: critical bug");

    let out_dir = tempfile::tempdir().unwrap();
    let out_file = out_dir.path().join("gh_output");
    let out_arg = out_file.to_string_lossy().to_string();

    let output = rc_align(test.dir.path(), &["--github-output", &out_arg]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&out_file).unwrap(),
        "next_version=2.0.0-rc.1\n"
    );
}

#[test]
fn test_dry_run_emits_nothing() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v0.1.0");
    test.commit("feat: new");

    let output = rc_align(test.dir.path(), &["--dry-run"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unparseable_baseline_exits_successfully() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v1.0-rc.1");
    test.commit("fix: a");

    let output = rc_align(test.dir.path(), &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("v1.0-rc.1"));
}

#[test]
fn test_broken_config_exits_successfully() {
    let test = TestRepo::new();
    test.commit("fix: a");
    std::fs::write(test.dir.path().join("rcalign.toml"), "[output\n").unwrap();

    let output = rc_align(test.dir.path(), &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_repository_exits_successfully() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let missing_arg = missing.to_string_lossy().to_string();

    let output = rc_align(dir.path(), &["--repo", &missing_arg]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_github_output_env_is_used_when_flag_absent() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v0.2.0-rc.1");
    test.commit("feat: more");

    let out_dir = tempfile::tempdir().unwrap();
    let out_file = out_dir.path().join("gh_output");

    let output = Command::new(env!("CARGO_BIN_EXE_rc-align"))
        .current_dir(test.dir.path())
        .env("GITHUB_OUTPUT", &out_file)
        .env_remove("RC_ALIGN_LOG")
        .output()
        .expect("Failed to execute rc-align");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        std::fs::read_to_string(&out_file).unwrap(),
        "next_version=0.2.0-rc.2\n"
    );
}

#[test]
fn test_empty_github_output_env_falls_back_to_stdout() {
    let test = TestRepo::new();
    test.commit("chore: init");
    test.tag("v0.1.0");
    test.commit("fix: a");

    let output = Command::new(env!("CARGO_BIN_EXE_rc-align"))
        .current_dir(test.dir.path())
        .env("GITHUB_OUTPUT", "")
        .env_remove("RC_ALIGN_LOG")
        .output()
        .expect("Failed to execute rc-align");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "next_version=0.1.1-rc.1\n"
    );
}
