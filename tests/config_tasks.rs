//! Integration tests for tasks declared in tasklane.yml

mod common;

use common::{call_log, create_test_config, quiet_runner, recording_action};
use std::fs;
use tasklane::config::{parse_config, parse_config_file, validate_config, ConfigExtension};
use tasklane::error::{ConfigError, ExecutionError};
use tasklane::{Arguments, TaskError};

#[test]
fn test_parse_complete_config() {
    let yaml = r#"
name: my-app
usage: My test application

tasks:
  build:
    usage: Build the project
    run: cargo build ${profile}

  test:
    usage: Run tests
    run: cargo test

  all:
    usage: Build and test
    tasks: [build, test]

before:
  build:
    - default:
        profile: ""
"#;

    let config = parse_config(yaml, None).unwrap();
    validate_config(&config).unwrap();

    assert_eq!(config.name, Some("my-app".to_string()));
    assert_eq!(config.tasks.len(), 3);
    assert_eq!(config.tasks["all"].tasks, vec!["build", "test"]);
    assert_eq!(config.before["build"].len(), 1);
}

#[test]
fn test_command_task_writes_file() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  hello:
    quiet: true
    run: echo "Hello, ${name}!" > hello.txt
"#,
    );

    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);

    runner
        .invoke("hello", Arguments::new().with("name", "Ada"))
        .unwrap();

    let output = fs::read_to_string(temp_dir.path().join("hello.txt")).unwrap();
    assert_eq!(output.trim(), "Hello, Ada!");
}

#[test]
fn test_declared_hooks_rewrite_arguments() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  show:
    quiet: true
    run: echo "${profile}-${target}-${secret}" > out.txt
before:
  show:
    - default:
        profile: debug
        target: x86
    - set:
        target: arm
    - unset: [secret]
"#,
    );

    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);

    runner
        .invoke(
            "show",
            Arguments::new()
                .with("profile", "release")
                .with("secret", "hidden"),
        )
        .unwrap();

    let output = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert_eq!(output.trim(), "release-arm-");
}

#[test]
fn test_composed_declared_tasks_run_in_order() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  first:
    quiet: true
    run: echo "first ${env}" >> order.txt
  second:
    quiet: true
    run: echo "second ${env}" >> order.txt
  all:
    tasks: [first, second]
"#,
    );

    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);

    runner
        .invoke("all", Arguments::new().with("env", "ci"))
        .unwrap();

    let output = fs::read_to_string(temp_dir.path().join("order.txt")).unwrap();
    assert_eq!(output, "first ci\nsecond ci\n");
}

#[test]
fn test_failing_command_stops_composition() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  fail:
    quiet: true
    run:
      - "false"
      - touch after_false.txt
  later:
    quiet: true
    run: touch later.txt
  all:
    tasks: [fail, later]
"#,
    );

    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);

    let err = runner.invoke("all", Arguments::new()).unwrap_err();
    assert!(matches!(
        err,
        TaskError::Execution(ExecutionError::CommandFailed { ref task, .. }) if task == "fail"
    ));
    assert!(!temp_dir.path().join("after_false.txt").exists());
    assert!(!temp_dir.path().join("later.txt").exists());
}

#[test]
fn test_private_task_runs_as_sub_task() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  prepare:
    private: true
    quiet: true
    run: touch prepared.txt
  build:
    tasks: [prepare]
"#,
    );

    let extension = ConfigExtension::load(&config_path).unwrap();
    assert!(extension.task("prepare").unwrap().private);

    let mut runner = quiet_runner();
    runner.extend(&extension);
    runner.invoke("build", Arguments::new()).unwrap();

    assert!(temp_dir.path().join("prepared.txt").exists());
}

#[test]
fn test_declared_hook_for_code_task() {
    let (_temp_dir, config_path) = create_test_config(
        r#"
tasks:
  noop:
    quiet: true
    run: "true"
before:
  native:
    - set:
        source: config
"#,
    );

    let log = call_log();
    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);
    runner.add("native", recording_action(&log));

    runner.invoke("native", Arguments::new()).unwrap();
    assert_eq!(log.borrow()[0].1.get_str("source"), Some("config"));
}

#[test]
fn test_include_file() {
    let (temp_dir, config_path) = create_test_config(
        r#"
tasks:
  lint:
    include: lint.yml
"#,
    );
    fs::write(
        temp_dir.path().join("lint.yml"),
        "usage: Lint\nquiet: true\nrun: touch linted.txt\n",
    )
    .unwrap();

    let config = parse_config_file(&config_path).unwrap();
    assert_eq!(config.tasks["lint"].usage.as_deref(), Some("Lint"));

    let extension = ConfigExtension::load(&config_path).unwrap();
    let mut runner = quiet_runner();
    runner.extend(&extension);
    runner.invoke("lint", Arguments::new()).unwrap();

    assert!(temp_dir.path().join("linted.txt").exists());
}

#[test]
fn test_circular_composition_rejected() {
    let (_temp_dir, config_path) = create_test_config(
        r#"
tasks:
  a:
    tasks: [b]
  b:
    tasks: [a]
"#,
    );

    let result = ConfigExtension::load(&config_path);
    assert!(matches!(
        result,
        Err(TaskError::Config(ConfigError::CircularDependency(_)))
    ));
}

#[test]
fn test_task_without_action_rejected() {
    let yaml = r#"
tasks:
  empty:
    usage: Does nothing
"#;

    let config = parse_config(yaml, None).unwrap();
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(TaskError::UnsupportedCallableShape { ref task, .. }) if task == "empty"
    ));
}

#[test]
fn test_invalid_yaml() {
    let result = parse_config("tasks: [not, a, map]", None);
    assert!(matches!(result, Err(TaskError::Yaml(_))));
}
