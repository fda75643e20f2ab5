use validator::ValidationError;

pub const EMPTY_NAME_CODE: &str = "empty_name";

/// A name is usable once it has at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(EMPTY_NAME_CODE));
    }
    Ok(())
}
