// Validation of generator inputs

use crate::models::project::NameInput;
use crate::utils::error::{GenerationError, NameError, Result};
use std::path::Path;

/// Characters that may not appear in a project name
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['\\', '/', ':', '*', '?', '<', '>', '|', '+'];

/// Validate a project name and return it as text.
///
/// The type check runs first, so a non-string name never reaches the
/// character check.
pub fn validate_project_name(name: &NameInput) -> std::result::Result<&str, NameError> {
    let text = match name {
        NameInput::Text(text) => text.as_str(),
        NameInput::Other { type_name } => {
            return Err(NameError::NotAString {
                type_name: type_name.clone(),
            })
        }
    };

    if let Some(character) = find_forbidden_character(text) {
        return Err(NameError::ForbiddenCharacter {
            name: text.to_string(),
            character,
        });
    }

    Ok(text)
}

/// First forbidden character in `name`, if any
pub fn find_forbidden_character(name: &str) -> Option<char> {
    name.chars().find(|c| FORBIDDEN_CHARACTERS.contains(c))
}

/// Validate that the parent directory exists
pub fn validate_parent_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(GenerationError::InvalidParent(path.to_path_buf()))
    }
}

/// Validate that nothing has been generated at the project directory yet
pub fn validate_no_collision(project_dir: &Path) -> Result<()> {
    if project_dir.is_dir() {
        Err(GenerationError::Collision(project_dir.to_path_buf()))
    } else {
        Ok(())
    }
}
