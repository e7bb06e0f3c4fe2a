use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use crate::models::project::{NameInput, ProjectSpec};
use crate::services::layout_planner::LayoutPlanner;
use crate::utils::validation::validate_project_name;

/// Print the skeleton a project would get, without touching the filesystem
#[derive(Debug)]
pub struct PlanCommand {
    pub name: String,
    pub parent: Option<PathBuf>,
    pub json: bool,
}

/// JSON response format for the plan command
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub project_root_path: String,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

impl PlanCommand {
    /// Execute the plan command
    pub fn run(&self) -> anyhow::Result<()> {
        let input = NameInput::from(&self.name);
        let name = validate_project_name(&input)?;

        let parent = match &self.parent {
            Some(parent) => parent.clone(),
            None => std::env::current_dir().context("Failed to read the current directory")?,
        };
        let spec = ProjectSpec::new(name, parent);
        let layout = LayoutPlanner::new(spec.project_name.clone(), spec.project_dir()).plan();

        if self.json {
            let response = PlanResponse {
                project_root_path: layout.root().to_string_lossy().replace('\\', "/"),
                directories: layout.relative_directories(),
                files: layout.relative_files(),
            };
            let json_output = serde_json::to_string_pretty(&response)
                .context("Failed to serialize JSON response")?;
            println!("{json_output}");
        } else {
            println!("{}", layout.root().display());
            for dir in layout.relative_directories() {
                println!("  {dir}/");
            }
            for file in layout.relative_files() {
                println!("  {file}");
            }
            println!("  .gitignore");
        }

        Ok(())
    }
}
