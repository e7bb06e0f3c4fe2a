use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use crate::models::project::{GenerationResult, NameInput, ProjectSpec};
use crate::services::command_runner::{CommandOutput, CommandRunner, SystemCommandRunner};
use crate::services::layout_planner::LayoutPlanner;
use crate::utils::config::GeneratorConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_collision, validate_parent_dir, validate_project_name};

/// Virtual environment directory created inside the project
pub const VENV_DIR: &str = ".venv";

/// What an optional post-generation step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step was disabled by the caller
    Skipped,
    /// The external tool is not installed
    Unavailable,
    /// The external tool ran to completion
    Completed(CommandOutput),
}

impl StepOutcome {
    /// True only when the tool ran and exited with status 0
    pub const fn succeeded(&self) -> bool {
        match self {
            Self::Completed(output) => output.success(),
            Self::Skipped | Self::Unavailable => false,
        }
    }
}

/// Validates a project request and generates the project on disk.
///
/// Setters record inputs only when they are valid; `execute` drives the
/// whole chain. A generator owns all of its state, so concurrent
/// scaffolding needs one generator per thread.
#[derive(Debug)]
pub struct ProjectGenerator<R: CommandRunner = SystemCommandRunner> {
    parent_dir: Option<PathBuf>,
    project_name: Option<String>,
    project_dir: Option<PathBuf>,
    project_root_path: Option<PathBuf>,
    python: String,
    git: String,
    runner: R,
}

impl ProjectGenerator<SystemCommandRunner> {
    /// Create a generator that runs real external tools
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner)
    }

    /// Create a generator using the interpreter and git from the configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new()
            .with_python(&config.python)
            .with_git(&config.git)
    }
}

impl Default for ProjectGenerator<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ProjectGenerator<R> {
    /// Create a generator that runs external tools through `runner`
    pub fn with_runner(runner: R) -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            parent_dir: None,
            project_name: None,
            project_dir: None,
            project_root_path: None,
            python: defaults.python,
            git: defaults.git,
            runner,
        }
    }

    /// Interpreter used by `create_venv`
    #[must_use]
    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    /// Executable used by `is_git` and `git_init`
    #[must_use]
    pub fn with_git(mut self, git: impl Into<String>) -> Self {
        self.git = git.into();
        self
    }

    /// Set the directory the project is created in.
    ///
    /// Returns false and keeps the previous value when `path` is not an
    /// existing directory.
    pub fn set_parent_dir_path(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match validate_parent_dir(path) {
            Ok(()) => {
                self.parent_dir = Some(path.to_path_buf());
                info!(parent = %path.display(), "Valid parent directory set");
                true
            }
            Err(err) => {
                error!(parent = %path.display(), "{err}");
                false
            }
        }
    }

    /// Set the project name.
    ///
    /// Returns false and keeps the previous value when the name is not a
    /// string or contains a forbidden character.
    pub fn set_project_name(&mut self, name: impl Into<NameInput>) -> bool {
        let name = name.into();
        match validate_project_name(&name) {
            Ok(valid) => {
                info!(name = valid, "Valid project name set");
                self.project_name = Some(valid.to_string());
                true
            }
            Err(err) => {
                error!("{err}");
                false
            }
        }
    }

    pub fn parent_dir(&self) -> Option<&Path> {
        self.parent_dir.as_deref()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Validated request, once both parent and name are set
    pub fn spec(&self) -> Option<ProjectSpec> {
        match (&self.project_name, &self.parent_dir) {
            (Some(name), Some(parent)) => Some(ProjectSpec::new(name.clone(), parent.clone())),
            _ => None,
        }
    }

    /// Root of the generated project, set by a successful `execute`
    pub fn project_root_path(&self) -> Option<&Path> {
        self.project_root_path.as_deref()
    }

    /// Result of the last `execute`
    pub fn result(&self) -> GenerationResult {
        self.project_root_path
            .as_deref()
            .map_or_else(GenerationResult::failed, GenerationResult::succeeded)
    }

    /// Generate the project.
    ///
    /// Returns `Ok(false)` when validation fails or the project directory
    /// already exists. Filesystem errors while building the tree are
    /// returned as `Err` and leave whatever was already created in place.
    pub fn execute(&mut self) -> Result<bool> {
        let parent_ok = match self.parent_dir.clone() {
            Some(parent) => self.set_parent_dir_path(parent),
            None => {
                error!("No parent directory has been set");
                false
            }
        };
        let name_ok = match self.project_name.clone() {
            Some(name) => self.set_project_name(name),
            None => {
                error!("No project name has been set");
                false
            }
        };

        if !self.create_project_dir(parent_ok, name_ok)? {
            return Ok(false);
        }

        self.generate_project()?;
        self.project_root_path = self.project_dir.clone();
        Ok(true)
    }

    fn create_project_dir(&mut self, parent_ok: bool, name_ok: bool) -> Result<bool> {
        let spec = match self.spec() {
            Some(spec) if parent_ok && name_ok => spec,
            _ => {
                error!("Cannot create the project directory");
                return Ok(false);
            }
        };

        let project_dir = spec.project_dir();
        if let Err(err) = validate_no_collision(&project_dir) {
            error!("{err}");
            return Ok(false);
        }

        fs::create_dir_all(&project_dir)?;
        info!(path = %project_dir.display(), "Created project directory");
        self.project_dir = Some(project_dir);
        Ok(true)
    }

    fn generate_project(&self) -> Result<()> {
        let (Some(name), Some(project_dir)) = (&self.project_name, &self.project_dir) else {
            return Ok(());
        };

        let planner = LayoutPlanner::new(name.clone(), project_dir.clone());
        let layout = planner.plan();

        for dir in layout.directories() {
            fs::create_dir_all(dir)?;
        }
        for file in layout.files() {
            fs::write(file, "")?;
        }

        planner.write_readme()?;
        planner.write_manifest()?;
        planner.write_gitignore()?;

        info!(
            path = %project_dir.display(),
            directories = layout.directories().len(),
            files = layout.files().len(),
            "Generated project skeleton"
        );
        Ok(())
    }

    /// Create `<project_path>/.venv` with `<python> -m venv`, blocking
    /// until the interpreter exits
    pub fn create_venv(&self, project_path: &Path, enabled: bool) -> Result<StepOutcome> {
        if !enabled {
            info!("Skipping virtual environment creation");
            return Ok(StepOutcome::Skipped);
        }

        let venv_dir = project_path.join(VENV_DIR);
        info!(path = %venv_dir.display(), python = %self.python, "Creating virtual environment");

        let args: Vec<OsString> = vec!["-m".into(), "venv".into(), venv_dir.into_os_string()];
        let output = self.runner.run(&self.python, &args)?;

        if output.success() {
            info!("Virtual environment created");
        } else {
            error!(code = ?output.code, stderr = %output.stderr.trim(), "Virtual environment creation failed");
        }
        Ok(StepOutcome::Completed(output))
    }

    /// Whether git is installed, probed with `git --version`
    pub fn is_git(&self) -> bool {
        let args: Vec<OsString> = vec!["--version".into()];
        match self.runner.run(&self.git, &args) {
            Ok(output) => output.stdout.contains("git version"),
            Err(_) => false,
        }
    }

    /// Run `git init <project_path>`, blocking until git exits.
    ///
    /// Does nothing when disabled or when git is not installed.
    pub fn git_init(&self, project_path: &Path, enabled: bool) -> Result<StepOutcome> {
        if !enabled {
            info!("Skipping git init");
            return Ok(StepOutcome::Skipped);
        }
        if !self.is_git() {
            info!("Git is not installed, skipping git init");
            return Ok(StepOutcome::Unavailable);
        }

        info!(path = %project_path.display(), "Running git init");
        let args: Vec<OsString> = vec!["init".into(), project_path.as_os_str().to_os_string()];
        let output = self.runner.run(&self.git, &args)?;

        if output.success() {
            info!("git init completed");
        } else {
            error!(code = ?output.code, stderr = %output.stderr.trim(), "git init failed");
        }
        Ok(StepOutcome::Completed(output))
    }
}
