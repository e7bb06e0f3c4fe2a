use serde::Serialize;
use std::ffi::OsString;
use std::process::Command;
use crate::utils::error::GenerationError;

/// Captured result of an external command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Runs external tools on behalf of the generator.
///
/// `run` blocks until the child exits. There is no timeout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, GenerationError>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<CommandOutput, GenerationError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| GenerationError::CommandFailed {
                program: program.to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
