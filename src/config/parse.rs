//! Configuration file parsing and discovery

use crate::config::types::{Config, Task};
use crate::error::{ConfigError, ConfigResult, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["tasklane.yml", "tasklane.yaml"];

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut searched_paths = Vec::new();

    for dir in start_dir.ancestors() {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = dir.join(file_name);
            if config_path.is_file() {
                return Ok(config_path);
            }
            searched_paths.push(config_path.display().to_string());
        }
    }

    Err(ConfigError::NotFound(searched_paths.join(", ")))
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_config(&contents, Some(path))
}

/// Parse configuration from a string
///
/// `include` directives are resolved relative to `config_path`; without a
/// path they are left in place.
pub fn parse_config(yaml: &str, config_path: Option<&Path>) -> Result<Config> {
    let mut config: Config = serde_yaml::from_str(yaml)?;

    if let Some(base_path) = config_path {
        process_includes(&mut config, base_path)?;
    }

    Ok(config)
}

/// Directory holding the config file at `config_path`
///
/// A bare file name yields `.` rather than an empty path.
pub fn config_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Replace tasks that carry an `include` with the task read from that file
fn process_includes(config: &mut Config, config_path: &Path) -> ConfigResult<()> {
    let base_dir = config_dir(config_path);

    for task in config.tasks.values_mut() {
        if let Some(include_path) = task.include.take() {
            *task = load_included_task(&base_dir.join(include_path))?;
        }
    }

    Ok(())
}

/// Load a task from an included file
fn load_included_task(path: &Path) -> ConfigResult<Task> {
    let include_error = |error: String| ConfigError::IncludeFile {
        path: path.to_path_buf(),
        error,
    };

    let contents = fs::read_to_string(path).map_err(|e| include_error(e.to_string()))?;
    let task: Task = serde_yaml::from_str(&contents).map_err(|e| include_error(e.to_string()))?;

    if task.include.is_some() {
        return Err(include_error("included tasks cannot include other files".to_string()));
    }

    Ok(task)
}

/// Parse configuration with automatic file discovery
pub fn parse_config_auto() -> Result<(Config, PathBuf)> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}
