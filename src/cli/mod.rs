// CLI module for command-line interface

pub mod new;
pub mod plan;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use crate::utils::config::{ConfigParser, GeneratorConfig};
use crate::utils::logging::{self, LogLevel};

use self::new::NewCommand;
use self::plan::PlanCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "pjgen")]
#[command(about = "Scaffold a new Python project")]
#[command(long_about = r#"pjgen creates a new Python project with a standard layout:

  docs/  logs/  tests/  <name>/  <name>/config/
  README.md  pyproject.toml  LICENSE  .gitignore

and then optionally creates a .venv virtual environment and runs git init.

Examples:
  pjgen new myproject                   Create ./myproject
  pjgen new myproject --parent ~/src    Create ~/src/myproject
  pjgen new myproject --no-venv --no-git
  pjgen plan myproject                  Show what would be created"#)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: <config dir>/pjgen/config.toml)
    #[arg(long, global = true, env = "PJGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level: CRITICAL, ERROR, WARNING, INFO or DEBUG
    #[arg(long, global = true, env = "PJGEN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, global = true, env = "PJGEN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new project
    #[command(long_about = r#"Generate a new project directory under the parent directory.

The project name may not contain any of \ / : * ? < > | +
Generation fails if <parent>/<name> already exists.

After the skeleton is written, a virtual environment is created in .venv/
with `<python> -m venv` and a git repository is initialized, unless turned
off with --no-venv / --no-git or in the configuration file."#)]
    New {
        /// Project name (default: [project].name from the configuration)
        name: Option<String>,

        /// Parent directory (default: configured default_parent, else the current directory)
        #[arg(long)]
        parent: Option<PathBuf>,

        /// Do not create a virtual environment
        #[arg(long)]
        no_venv: bool,

        /// Do not run git init
        #[arg(long)]
        no_git: bool,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Show the directories and files a project would get, without creating them
    Plan {
        /// Project name
        name: String,

        /// Parent directory (default: the current directory)
        #[arg(long)]
        parent: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Load configuration, install the logger and run the command
    pub fn run(cli: Cli) -> anyhow::Result<()> {
        let config = ConfigParser::load(cli.config.as_deref())?;

        let level = cli
            .log_level
            .as_deref()
            .map_or_else(|| config.level(), LogLevel::from_name);
        let log_file = cli.log_file.as_deref().or(config.log_file.as_deref());
        logging::init(level, log_file).context("Failed to initialize logging")?;

        Self::execute(cli.command, &config)
    }

    /// Execute a CLI command
    pub fn execute(command: Commands, config: &GeneratorConfig) -> anyhow::Result<()> {
        match command {
            Commands::New { name, parent, no_venv, no_git, json } => {
                let cmd = NewCommand {
                    name,
                    parent,
                    no_venv,
                    no_git,
                    json,
                };
                cmd.run(config)
            }

            Commands::Plan { name, parent, json } => {
                let cmd = PlanCommand { name, parent, json };
                cmd.run()
            }
        }
    }
}
