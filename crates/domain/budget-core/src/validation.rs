use crate::draft::Draft;

/// Minimum display name length, counted in characters after trimming.
pub const MIN_DISPLAY_NAME_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The display name is too short.")]
    DisplayNameTooShort,
    #[error("The passwords don't match.")]
    PasswordMismatch,
}

/// Client-side checks run before any backend call. First failure wins.
///
/// Password strength and email syntax are left to the identity backend,
/// which rejects them with its own messages.
pub fn validate_draft(draft: &Draft) -> Result<(), ValidationError> {
    if draft.display_name.trim().chars().count() < MIN_DISPLAY_NAME_CHARS {
        return Err(ValidationError::DisplayNameTooShort);
    }

    if draft.password_one != draft.password_two {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}
