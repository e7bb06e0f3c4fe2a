// Configuration loading and TOML parsing

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::utils::error::{GenerationError, Result};
use crate::utils::logging::LogLevel;

/// File name of the user configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Generator configuration, as stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Python interpreter used to create virtual environments
    pub python: String,
    /// Version control executable
    pub git: String,
    /// Create a virtual environment after generation
    pub create_venv: bool,
    /// Initialize a git repository after generation
    pub git_init: bool,
    /// CRITICAL, ERROR, WARNING, INFO or DEBUG
    pub log_level: String,
    /// Also write logs to this file
    pub log_file: Option<PathBuf>,
    /// Parent directory used when none is given on the command line
    pub default_parent: Option<PathBuf>,
    /// Project defaults
    pub project: ProjectDefaults,
}

/// Defaults for the `[project]` table.
///
/// The name is kept as a raw TOML value so that a wrongly typed name is
/// reported by the generator instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    pub name: Option<toml::Value>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            git: "git".to_string(),
            create_venv: true,
            git_init: true,
            log_level: "DEBUG".to_string(),
            log_file: None,
            default_parent: None,
            project: ProjectDefaults::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parsed log level, falling back to DEBUG for unknown names
    pub fn level(&self) -> LogLevel {
        LogLevel::from_name(&self.log_level)
    }
}

const fn default_python() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Configuration parsing utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration from an explicit path, or from the user config
    /// directory when it exists, or fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<GeneratorConfig> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load_file(&path),
            _ => Ok(GeneratorConfig::default()),
        }
    }

    /// Load and parse a configuration file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<GeneratorConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(GenerationError::Config(
                format!("Configuration file not found: {}", path.display())
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| GenerationError::Config(
                format!("Failed to read {}: {e}", path.display())
            ))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<GeneratorConfig> {
        let config: GeneratorConfig = toml::from_str(content)
            .map_err(|e| GenerationError::Config(
                format!("Invalid TOML syntax: {e}")
            ))?;

        if config.python.trim().is_empty() {
            return Err(GenerationError::Config(
                "'python' must name an interpreter".to_string()
            ));
        }
        if config.git.trim().is_empty() {
            return Err(GenerationError::Config(
                "'git' must name an executable".to_string()
            ));
        }

        Ok(config)
    }

    /// `<user config dir>/pjgen/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pjgen").join(CONFIG_FILE_NAME))
    }
}
