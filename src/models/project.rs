use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A validated request to generate a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Name of the project, also used for the source package directory
    pub project_name: String,
    /// Existing directory the project directory is created in
    pub parent_dir: PathBuf,
}

impl ProjectSpec {
    /// Create a new project spec
    pub fn new(project_name: impl Into<String>, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            parent_dir: parent_dir.into(),
        }
    }

    /// Directory the project is generated into
    pub fn project_dir(&self) -> PathBuf {
        self.parent_dir.join(&self.project_name)
    }
}

/// Outcome of a single generation attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub project_root_path: Option<PathBuf>,
}

impl GenerationResult {
    pub fn succeeded(project_root_path: &Path) -> Self {
        Self {
            success: true,
            project_root_path: Some(project_root_path.to_path_buf()),
        }
    }

    pub const fn failed() -> Self {
        Self {
            success: false,
            project_root_path: None,
        }
    }
}

/// A project name as supplied by a caller, before its type is checked.
///
/// Names typed on the command line are always text, but names read from a
/// configuration file can be any TOML value.
#[derive(Debug, Clone, PartialEq)]
pub enum NameInput {
    /// A textual name
    Text(String),
    /// Any non-string value, identified by its type name
    Other { type_name: String },
}

impl From<&str> for NameInput {
    fn from(name: &str) -> Self {
        Self::Text(name.to_string())
    }
}

impl From<String> for NameInput {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

impl From<&String> for NameInput {
    fn from(name: &String) -> Self {
        Self::Text(name.clone())
    }
}

impl From<toml::Value> for NameInput {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(name) => Self::Text(name),
            other => Self::Other {
                type_name: other.type_str().to_string(),
            },
        }
    }
}

impl From<&toml::Value> for NameInput {
    fn from(value: &toml::Value) -> Self {
        Self::from(value.clone())
    }
}
