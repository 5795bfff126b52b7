//! Main CLI application

use crate::config::{config_dir, parse_config_auto, parse_config_file, Config, ConfigExtension};
use crate::error::{ConfigError, ConfigResult, Result};
use crate::runner::{render_value, Arguments, ConsoleLogger, TaskRunner, Value, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Tasks and hooks declared in the config file
    extension: ConfigExtension,
}

impl App {
    /// Create a new app from the discovered configuration file
    pub fn new() -> Result<Self> {
        let (config, config_path) = parse_config_auto()?;
        Self::from_config(&config, &config_path)
    }

    /// Create app with a specific config file
    pub fn with_config_file(path: PathBuf) -> Result<Self> {
        let config = parse_config_file(&path)?;
        Self::from_config(&config, &path)
    }

    fn from_config(config: &Config, config_path: &Path) -> Result<Self> {
        let extension = ConfigExtension::from_config(config, config_dir(config_path))?;
        let command = build_command(config, &extension);

        Ok(App { command, extension })
    }

    /// Run the application with the process arguments
    pub fn run(self) -> Result<()> {
        self.run_from(std::env::args_os())
    }

    /// Run the application with the given command line
    pub fn run_from<I, T>(mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.clone().get_matches_from(args);

        let verbosity = get_verbosity(&matches);
        let mut runner = TaskRunner::new(Arc::new(ConsoleLogger::new(verbosity)));
        runner.extend(&self.extension);

        if matches.get_flag("list") {
            self.print_tasks(&runner);
            return Ok(());
        }

        let (task_name, task_matches) = match matches.subcommand() {
            Some((name, sub_matches)) => (name.to_string(), sub_matches),
            None => {
                // No task specified, show help
                self.command.print_help()?;
                println!();
                return Ok(());
            }
        };

        let values: Vec<String> = task_matches
            .get_many::<String>("arguments")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let arguments = parse_task_arguments(&values)?;

        let value = runner.invoke(&task_name, arguments)?;
        if value != Value::Null {
            println!("{}", render_value(&value));
        }

        Ok(())
    }

    /// Print the runner's public tasks with their usage
    fn print_tasks(&self, runner: &TaskRunner) {
        for (name, usage) in self.public_tasks(runner) {
            println!("{}  {}", name.bold(), usage);
        }
    }

    /// Names padded to a common width, paired with their usage text
    fn public_tasks(&self, runner: &TaskRunner) -> Vec<(String, String)> {
        let public: Vec<(&str, &str)> = runner
            .tasks()
            .names()
            .into_iter()
            .filter_map(|name| match self.extension.task(name) {
                Some(task) if task.private => None,
                Some(task) => Some((name, task.usage.as_deref().unwrap_or_default())),
                None => Some((name, "")),
            })
            .collect();
        let width = public.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        public
            .into_iter()
            .map(|(name, usage)| (format!("{:<width$}", name, width = width), usage.to_string()))
            .collect()
    }
}

/// Build the clap command from configuration
fn build_command(config: &Config, extension: &ConfigExtension) -> Command {
    let mut cmd = Command::new(config.name.clone().unwrap_or_else(|| "tasklane".to_string()))
        .version(env!("CARGO_PKG_VERSION"))
        // Task names own the subcommand namespace, `--help` still works
        .disable_help_subcommand(true)
        .about(config.usage.clone().unwrap_or_else(|| {
            "Run named tasks with composition and before-hooks".to_string()
        }))
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to tasklane.yml config file")
                .global(true),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List available tasks")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        );

    // Add subcommands for each task
    for task in extension.tasks() {
        // Skip private tasks
        if task.private {
            continue;
        }

        let mut task_cmd = Command::new(task.name.clone())
            .about(task.usage.clone().unwrap_or_default())
            .arg(
                Arg::new("arguments")
                    .value_name("KEY=VALUE")
                    .help("Arguments passed to the task")
                    .num_args(0..)
                    .action(ArgAction::Append),
            );

        if let Some(desc) = &task.description {
            task_cmd = task_cmd.long_about(desc.clone());
        }

        cmd = cmd.subcommand(task_cmd);
    }

    cmd
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Parse `KEY=VALUE` pairs into task arguments
fn parse_task_arguments(values: &[String]) -> ConfigResult<Arguments> {
    let mut arguments = Arguments::new();

    for value in values {
        match value.split_once('=') {
            Some((key, val)) if !key.is_empty() => {
                arguments.insert(key, val);
            }
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Invalid task argument '{}', expected KEY=VALUE",
                    value
                )))
            }
        }
    }

    Ok(arguments)
}

/// Run the CLI application with provided arguments
pub fn run() -> Result<()> {
    // Check if --file flag is provided first
    let args: Vec<String> = std::env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_config_file(path)?
    } else {
        App::new()?
    };

    app.run()
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    args.windows(2).find_map(|pair| {
        let flag = pair[0].as_str();
        (flag == "--file" || flag == "-f").then(|| PathBuf::from(&pair[1]))
    }).or_else(|| {
        args.iter()
            .find_map(|arg| arg.strip_prefix("--file="))
            .map(PathBuf::from)
    })
}
