// Services that plan, generate and finish a new project
pub mod command_runner;
pub mod layout_planner;
pub mod project_generator;
