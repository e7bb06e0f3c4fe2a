// Data models for project generation
pub mod layout;
pub mod project;
