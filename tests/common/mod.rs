//! Common test utilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tasklane::runner::NullLogger;
use tasklane::{Action, Arguments, TaskRunner, Value};
use tempfile::TempDir;

/// Create a temporary directory with a tasklane.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("tasklane.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// A runner that logs nothing
pub fn quiet_runner() -> TaskRunner {
    TaskRunner::new(Arc::new(NullLogger))
}

/// Shared record of task calls: task name and the arguments it saw
pub type CallLog = Rc<RefCell<Vec<(String, Arguments)>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Context action that records each call in `log`
pub fn recording_action(log: &CallLog) -> Action {
    let log = Rc::clone(log);
    Action::with_context(move |ctx| {
        log.borrow_mut()
            .push((ctx.task().to_string(), ctx.arguments().clone()));
        Ok(Value::Null)
    })
}

/// Names of the recorded calls, in order
pub fn called(log: &CallLog) -> Vec<String> {
    log.borrow().iter().map(|(name, _)| name.clone()).collect()
}
