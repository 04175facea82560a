//! Field-level validation for incoming task data.
//!
//! All checks run before any store interaction, so a rejected payload
//! never opens a transaction. Lengths are counted in characters rather
//! than bytes to keep the limits meaningful for non-ASCII titles.

use crate::libs::error::TaskError;
use crate::libs::task::{NewTask, Page, TaskFilter, TaskPatch};

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 300;
pub const SEARCH_MIN_LEN: usize = 2;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validates a creation payload: `title` is required, `description` is not.
pub fn validate_new_task(task: &NewTask) -> Result<(), TaskError> {
    match task.title.as_deref() {
        Some(title) => validate_title(title)?,
        None => return Err(TaskError::validation("title", "is required")),
    }
    if let Some(description) = task.description.as_deref() {
        validate_description(description)?;
    }
    Ok(())
}

/// Validates a partial update: only supplied fields are checked.
pub fn validate_patch(patch: &TaskPatch) -> Result<(), TaskError> {
    if let Some(title) = patch.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(description) = patch.description.as_deref() {
        validate_description(description)?;
    }
    Ok(())
}

/// Validates listing criteria; a search term shorter than two characters
/// is rejected rather than silently matching everything.
pub fn validate_filter(filter: &TaskFilter) -> Result<(), TaskError> {
    if let Some(term) = filter.search_term.as_deref() {
        if term.chars().count() < SEARCH_MIN_LEN {
            return Err(TaskError::validation(
                "q",
                format!("must be at least {} characters long", SEARCH_MIN_LEN),
            ));
        }
    }
    Ok(())
}

pub fn validate_page(page: Page) -> Result<(), TaskError> {
    if page.number < 1 {
        return Err(TaskError::validation("page", "must be 1 or greater"));
    }
    if page.size < 1 || page.size > MAX_PAGE_SIZE {
        return Err(TaskError::validation(
            "size",
            format!("must be between 1 and {}", MAX_PAGE_SIZE),
        ));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), TaskError> {
    let len = title.chars().count();
    if len < TITLE_MIN_LEN || len > TITLE_MAX_LEN {
        return Err(TaskError::validation(
            "title",
            format!(
                "must be between {} and {} characters long",
                TITLE_MIN_LEN, TITLE_MAX_LEN
            ),
        ));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), TaskError> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(TaskError::validation(
            "description",
            format!("must be at most {} characters long", DESCRIPTION_MAX_LEN),
        ));
    }
    Ok(())
}
