// Common error types for pjgen

use std::path::PathBuf;

/// Reason a project name was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The name was supplied as something other than a string
    #[error("project name must be a string, got {type_name}")]
    NotAString { type_name: String },

    /// The name contains a character that is not allowed in a directory name
    #[error("project name '{name}' contains forbidden character '{character}'")]
    ForbiddenCharacter { name: String, character: char },
}

/// Errors raised while generating a project
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Project name failed validation
    #[error("Invalid project name: {0}")]
    InvalidName(#[from] NameError),

    /// Parent directory does not exist
    #[error("Parent directory does not exist: {}", .0.display())]
    InvalidParent(PathBuf),

    /// Target project directory already exists
    #[error("A project already exists at {}", .0.display())]
    Collision(PathBuf),

    /// Filesystem failure while materializing the layout
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// External tool could not be started
    #[error("Failed to run '{program}': {message}")]
    CommandFailed { program: String, message: String },

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl GenerationError {
    /// Validation errors are reported as a failed step, everything else is fatal
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName(_) | Self::InvalidParent(_) | Self::Collision(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Error message and exit code presented to the user by the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    /// Map any error coming out of the CLI into a user-facing error
    pub fn from_error(err: &anyhow::Error) -> Self {
        let exit_code = match err.downcast_ref::<GenerationError>() {
            Some(gen_err) if gen_err.is_validation() => 1,
            Some(GenerationError::Io(_) | GenerationError::CommandFailed { .. }) => 2,
            _ => 1,
        };

        Self {
            message: format!("{err:#}"),
            exit_code,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
