// Shared utilities: errors, validation, configuration and logging

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;
