use std::fs;
use std::io;
use std::path::PathBuf;
use crate::models::layout::Layout;

/// Version written to a new project's manifest
pub const INITIAL_VERSION: &str = "0.0.1";

pub const README_FILE: &str = "README.md";
pub const MANIFEST_FILE: &str = "pyproject.toml";
pub const LICENSE_FILE: &str = "LICENSE";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Plans the skeleton of a new project and writes its boilerplate files
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    project_name: String,
    project_dir: PathBuf,
}

impl LayoutPlanner {
    /// `project_name` must already be validated; `project_dir` is
    /// `<parent>/<project_name>`
    pub fn new(project_name: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            project_dir: project_dir.into(),
        }
    }

    fn docs_dir(&self) -> PathBuf {
        self.project_dir.join("docs")
    }

    fn logs_dir(&self) -> PathBuf {
        self.project_dir.join("logs")
    }

    fn tests_dir(&self) -> PathBuf {
        self.project_dir.join("tests")
    }

    fn package_dir(&self) -> PathBuf {
        self.project_dir.join(&self.project_name)
    }

    fn config_dir(&self) -> PathBuf {
        self.package_dir().join("config")
    }

    pub fn readme_path(&self) -> PathBuf {
        self.project_dir.join(README_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(MANIFEST_FILE)
    }

    pub fn gitignore_path(&self) -> PathBuf {
        self.project_dir.join(GITIGNORE_FILE)
    }

    /// Compute the directories and files of the skeleton.
    ///
    /// Every call builds a new `Layout`; nothing accumulates between calls.
    pub fn plan(&self) -> Layout {
        let package_dir = self.package_dir();
        let tests_dir = self.tests_dir();
        let config_dir = self.config_dir();

        let directories = vec![
            self.docs_dir(),
            self.logs_dir(),
            tests_dir.clone(),
            package_dir.clone(),
            config_dir.clone(),
        ];

        let files = vec![
            self.readme_path(),
            tests_dir.join(format!("test_{}.py", self.project_name)),
            tests_dir.join("__init__.py"),
            package_dir.join("__init__.py"),
            package_dir.join(format!("{}.py", self.project_name)),
            self.manifest_path(),
            self.project_dir.join(LICENSE_FILE),
            config_dir.join(".env"),
            config_dir.join(".env.example"),
        ];

        Layout::new(self.project_dir.clone(), directories, files)
    }

    /// Write the README skeleton
    pub fn write_readme(&self) -> io::Result<()> {
        fs::write(self.readme_path(), readme_content())
    }

    /// Write `pyproject.toml` with the project name and initial version
    pub fn write_manifest(&self) -> io::Result<()> {
        fs::write(self.manifest_path(), manifest_content(&self.project_name))
    }

    /// Write `.gitignore`
    pub fn write_gitignore(&self) -> io::Result<()> {
        fs::write(self.gitignore_path(), gitignore_content())
    }
}

fn readme_content() -> String {
    let mut content = String::new();

    content.push_str("# (Project / Module name)\n\n");
    content.push_str("## Overview\n\n");
    content.push_str("Work in progress.\n\n");
    content.push_str("## Usage\n\n");
    content.push_str("### Installation\n\n");
    content.push_str("`Work in progress.`\n\n");
    content.push_str("### class / method / function\n\n");
    content.push_str("`Work in progress.`\n\n");
    content.push_str("### Examples of use\n\n");
    content.push_str("```python\n");
    content.push_str("'Work in progress.'\n");
    content.push_str("```\n\n");
    content.push_str("### Uninstallation\n\n");
    content.push_str("`Work in progress.`\n\n");
    content.push_str("## Dependencies\n\n");
    content.push_str("- Work in progress.\n");

    content
}

/// Project name as a TOML basic string, quotes and control characters escaped
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn manifest_content(project_name: &str) -> String {
    let name = toml_string(project_name);
    let mut content = String::new();

    content.push_str("[project]\n");
    content.push_str(&format!("name = {name}\n"));
    content.push_str(&format!("version = \"{INITIAL_VERSION}\"\n"));
    content.push('\n');
    content.push_str("dependencies = []\n");
    content.push('\n');
    content.push_str("[tool.pytest.ini_options]\n");
    content.push_str(&format!("pythonpath = {name}\n"));
    content.push_str("testpaths = [\"tests\"]\n");

    content
}

fn gitignore_content() -> String {
    let mut content = String::new();

    content.push_str("# python cache\n");
    content.push_str("__pycache__/\n\n");
    content.push_str("# venv\n");
    content.push_str("venv/\n");
    content.push_str(".venv/\n");
    content.push_str(".env\n\n");
    content.push_str("# test\n");
    content.push_str(".pytest_cache/\n\n");
    content.push_str("# vscode\n");
    content.push_str(".vscode/\n");

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_plan_directories_in_order() {
        let planner = LayoutPlanner::new("myproject", "/tmp/x/myproject");
        let layout = planner.plan();

        let root = Path::new("/tmp/x/myproject");
        assert_eq!(layout.root(), root);
        assert_eq!(
            layout.directories(),
            &[
                root.join("docs"),
                root.join("logs"),
                root.join("tests"),
                root.join("myproject"),
                root.join("myproject").join("config"),
            ]
        );
    }

    #[test]
    fn test_plan_files() {
        let planner = LayoutPlanner::new("myproject", "/tmp/x/myproject");
        let layout = planner.plan();

        assert_eq!(
            layout.relative_files(),
            vec![
                "README.md",
                "tests/test_myproject.py",
                "tests/__init__.py",
                "myproject/__init__.py",
                "myproject/myproject.py",
                "pyproject.toml",
                "LICENSE",
                "myproject/config/.env",
                "myproject/config/.env.example",
            ]
        );
    }

    #[test]
    fn test_plan_is_fresh_per_call() {
        let planner = LayoutPlanner::new("app", "/tmp/app");
        let first = planner.plan();
        let second = planner.plan();
        assert_eq!(first, second);
        assert_eq!(second.directories().len(), 5);
        assert_eq!(second.files().len(), 9);

        let other = LayoutPlanner::new("other", "/tmp/other").plan();
        assert!(other.files().iter().all(|p| p.starts_with("/tmp/other")));
    }

    #[test]
    fn test_relative_paths() {
        let layout = LayoutPlanner::new("app", "/tmp/app").plan();
        assert_eq!(
            layout.relative_directories(),
            vec!["docs", "logs", "tests", "app", "app/config"]
        );
        let files = layout.relative_files();
        assert_eq!(files.len(), 9);
        assert_eq!(files[0], "README.md");
        assert_eq!(files[8], "app/config/.env.example");
    }

    #[test]
    fn test_manifest_content() {
        let content = manifest_content("myproject");
        assert!(content.contains("name = \"myproject\""));
        assert!(content.contains("version = \"0.0.1\""));

        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(parsed["project"]["name"].as_str(), Some("myproject"));
        assert_eq!(parsed["project"]["dependencies"].as_array().map(Vec::len), Some(0));
        assert_eq!(
            parsed["tool"]["pytest"]["ini_options"]["pythonpath"].as_str(),
            Some("myproject")
        );
        assert_eq!(
            parsed["tool"]["pytest"]["ini_options"]["testpaths"][0].as_str(),
            Some("tests")
        );
    }

    #[test]
    fn test_manifest_escapes_quoted_name() {
        let temp_dir = TempDir::new().unwrap();
        let planner = LayoutPlanner::new("my\"app", temp_dir.path());
        planner.write_manifest().unwrap();

        let content = fs::read_to_string(planner.manifest_path()).unwrap();
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(parsed["project"]["name"].as_str(), Some("my\"app"));
        assert_eq!(
            parsed["tool"]["pytest"]["ini_options"]["pythonpath"].as_str(),
            Some("my\"app")
        );
    }

    #[test]
    fn test_manifest_escapes_control_characters() {
        let content = manifest_content("tab\tname");
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(parsed["project"]["name"].as_str(), Some("tab\tname"));
    }

    #[test]
    fn test_readme_sections() {
        let content = readme_content();
        for section in [
            "## Overview",
            "## Usage",
            "### Installation",
            "### Examples of use",
            "### Uninstallation",
            "## Dependencies",
        ] {
            assert!(content.contains(section), "missing section {section}");
        }
    }

    #[test]
    fn test_write_boilerplate() {
        let temp_dir = TempDir::new().unwrap();
        let planner = LayoutPlanner::new("sample", temp_dir.path());

        planner.write_readme().unwrap();
        planner.write_manifest().unwrap();
        planner.write_gitignore().unwrap();

        let gitignore = fs::read_to_string(planner.gitignore_path()).unwrap();
        for entry in ["__pycache__/", "venv/", ".venv/", ".env", ".pytest_cache/", ".vscode/"] {
            assert!(gitignore.lines().any(|line| line == entry), "missing {entry}");
        }

        let manifest = fs::read_to_string(planner.manifest_path()).unwrap();
        assert!(manifest.contains("name = \"sample\""));
        assert!(fs::read_to_string(planner.readme_path()).unwrap().starts_with("# "));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let planner = LayoutPlanner::new("sample", temp_dir.path().join("missing"));
        assert!(planner.write_readme().is_err());
    }
}
