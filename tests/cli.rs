//! Integration tests for the tasklane binary

mod common;

use assert_cmd::Command;
use common::create_test_config;
use predicates::prelude::*;
use std::fs;

const CONFIG: &str = r#"
name: demo
usage: Demo tasks
tasks:
  greet:
    usage: Say hello
    run: echo "Hello, ${name}!"
  write:
    usage: Write a file
    quiet: true
    run: echo "${env}" > env.txt
  fail:
    run: exit 3
  helper:
    private: true
    run: echo "helper ran"
  all:
    usage: Greet then write
    tasks: [greet, write]
  assist:
    usage: Run the private sub-task
    tasks: [helper]
before:
  greet:
    - default:
        name: World
"#;

fn tasklane() -> Command {
    Command::cargo_bin("tasklane").unwrap()
}

#[test]
fn test_run_task_with_arguments() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .args(["greet", "name=Ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ada!"));
}

#[test]
fn test_hook_default_applies() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("--file")
        .arg(&config_path)
        .arg("greet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"));
}

#[test]
fn test_config_discovered_from_subdirectory() {
    let (temp_dir, _config_path) = create_test_config(CONFIG);
    let sub_dir = temp_dir.path().join("nested");
    fs::create_dir(&sub_dir).unwrap();

    tasklane()
        .current_dir(&sub_dir)
        .args(["write", "env=ci"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("env.txt")).unwrap();
    assert_eq!(written.trim(), "ci");
}

#[test]
fn test_relative_config_path() {
    let (temp_dir, _config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .args(["-f", "tasklane.yml", "write", "env=local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp_dir.path().join("env.txt")).unwrap();
    assert_eq!(written.trim(), "local");
}

#[test]
fn test_composed_task_from_cli() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .arg("-f")
        .arg(&config_path)
        .args(["all", "name=CI", "env=prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, CI!"));

    let written = fs::read_to_string(temp_dir.path().join("env.txt")).unwrap();
    assert_eq!(written.trim(), "prod");
}

#[test]
fn test_failing_task_exits_with_error() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .arg("fail")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Execution error"));
}

#[test]
fn test_list_hides_private_tasks() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("greet"))
        .stdout(predicate::str::contains("Greet then write"))
        .stdout(predicate::str::contains("helper").not());
}

#[test]
fn test_private_task_is_not_a_subcommand() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .arg("helper")
        .assert()
        .failure();
}

#[test]
fn test_private_task_runs_as_sub_task() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .arg("assist")
        .assert()
        .success()
        .stdout(predicate::str::contains("helper ran"));
}

#[test]
fn test_task_named_help() {
    let (temp_dir, _config_path) = create_test_config(
        r#"
tasks:
  help:
    run: echo helped
"#,
    );

    tasklane()
        .current_dir(temp_dir.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("helped"));
}

#[test]
fn test_malformed_argument() {
    let (temp_dir, config_path) = create_test_config(CONFIG);

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(&config_path)
        .args(["greet", "oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_missing_config() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    tasklane()
        .current_dir(temp_dir.path())
        .arg("-f")
        .arg(temp_dir.path().join("nope.yml"))
        .arg("greet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
