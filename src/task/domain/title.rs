//! Task title normalization and validation.

use super::TaskTitleError;

/// Maximum number of characters permitted in a trimmed task title.
pub const TASK_TITLE_MAX_LENGTH: usize = 120;

/// Trims leading and trailing whitespace from raw title input.
///
/// A byte order mark (U+FEFF) counts as whitespace here.
#[must_use]
pub fn normalize_task_title(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validates raw title input and returns the normalized title.
///
/// Length is counted in Unicode scalar values after trimming.
///
/// # Errors
///
/// Returns [`TaskTitleError::EmptyTitle`] when nothing remains after
/// trimming, or [`TaskTitleError::TitleTooLong`] when the trimmed title is
/// longer than [`TASK_TITLE_MAX_LENGTH`] characters.
pub fn validate_task_title(input: &str) -> Result<String, TaskTitleError> {
    let normalized = normalize_task_title(input);
    if normalized.is_empty() {
        return Err(TaskTitleError::EmptyTitle);
    }

    let actual = normalized.chars().count();
    if actual > TASK_TITLE_MAX_LENGTH {
        return Err(TaskTitleError::TitleTooLong { actual });
    }

    Ok(normalized.to_owned())
}
