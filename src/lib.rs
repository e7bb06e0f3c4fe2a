// pjgen - Python project generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::layout::Layout;
pub use models::project::{GenerationResult, NameInput, ProjectSpec};
pub use services::command_runner::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use services::layout_planner::LayoutPlanner;
pub use services::project_generator::{ProjectGenerator, StepOutcome};
pub use utils::error::{GenerationError, NameError};
