use anyhow::{bail, Context};
use serde::Serialize;
use std::path::PathBuf;
use crate::models::project::NameInput;
use crate::services::project_generator::{ProjectGenerator, StepOutcome};
use crate::utils::config::GeneratorConfig;

/// Generate a new project and run the optional post-generation steps
#[derive(Debug)]
pub struct NewCommand {
    pub name: Option<String>,
    pub parent: Option<PathBuf>,
    pub no_venv: bool,
    pub no_git: bool,
    pub json: bool,
}

/// JSON response format for the new command
#[derive(Debug, Serialize)]
pub struct NewResponse {
    pub status: String,
    pub project_name: String,
    pub project_root_path: String,
    pub venv: StepOutcome,
    pub git: StepOutcome,
}

impl NewCommand {
    /// Execute the new command
    pub fn run(&self, config: &GeneratorConfig) -> anyhow::Result<()> {
        let parent = self.parent_dir(config)?;
        let name = self.name_input(config)?;

        let mut generator = ProjectGenerator::from_config(config);
        generator.set_parent_dir_path(&parent);
        generator.set_project_name(name);

        if !generator.execute()? {
            bail!("Failed to generate project (see the log above for the reason)");
        }

        let (Some(root), Some(project_name)) = (
            generator.project_root_path().map(|p| p.to_path_buf()),
            generator.project_name().map(str::to_string),
        ) else {
            bail!("Project generation did not record a project root");
        };

        let venv = generator
            .create_venv(&root, config.create_venv && !self.no_venv)
            .with_context(|| format!("Project generated at {} but the virtual environment was not created", root.display()))?;
        let git = generator
            .git_init(&root, config.git_init && !self.no_git)
            .with_context(|| format!("Project generated at {} but git init could not run", root.display()))?;

        if self.json {
            let response = NewResponse {
                status: "success".to_string(),
                project_name,
                project_root_path: root.to_string_lossy().replace('\\', "/"),
                venv,
                git,
            };

            let json_output = serde_json::to_string_pretty(&response)
                .context("Failed to serialize JSON response")?;
            println!("{json_output}");
        } else {
            println!("Created project {project_name} at {}", root.display());
            println!("  virtual environment: {}", describe(&venv));
            println!("  git repository: {}", describe(&git));
        }

        Ok(())
    }

    fn parent_dir(&self, config: &GeneratorConfig) -> anyhow::Result<PathBuf> {
        if let Some(parent) = self.parent.as_ref().or(config.default_parent.as_ref()) {
            return Ok(parent.clone());
        }
        std::env::current_dir().context("Failed to read the current directory")
    }

    fn name_input(&self, config: &GeneratorConfig) -> anyhow::Result<NameInput> {
        match (&self.name, &config.project.name) {
            (Some(name), _) => Ok(NameInput::from(name)),
            (None, Some(value)) => Ok(NameInput::from(value)),
            (None, None) => bail!("No project name given (pass one or set [project].name in the configuration)"),
        }
    }
}

fn describe(outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Skipped => "skipped".to_string(),
        StepOutcome::Unavailable => "skipped (tool not installed)".to_string(),
        StepOutcome::Completed(output) if output.success() => "created".to_string(),
        StepOutcome::Completed(output) => match output.code {
            Some(code) => format!("failed (exit code {code})"),
            None => "failed (terminated by signal)".to_string(),
        },
    }
}
