//! Event draft validation.
//!
//! Every rule is checked independently; the returned list is in a fixed
//! order (title, description, start, end, range). Each message names the one
//! field it concerns, and [`ValidationError::field`] exposes that field so
//! forms can place the message next to the right input.

use serde::Serialize;
use thiserror::Error;

use crate::event::EventDraft;

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be 100 characters or less")]
    TitleTooLong,

    #[error("Description must be 500 characters or less")]
    DescriptionTooLong,

    #[error("Start date is required")]
    StartRequired,

    #[error("End date is required")]
    EndRequired,

    #[error("End date must be after start date")]
    EndBeforeStart,
}

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventField {
    Title,
    Description,
    StartDate,
    EndDate,
}

impl ValidationError {
    pub fn field(self) -> EventField {
        match self {
            ValidationError::TitleRequired | ValidationError::TitleTooLong => EventField::Title,
            ValidationError::DescriptionTooLong => EventField::Description,
            ValidationError::StartRequired => EventField::StartDate,
            ValidationError::EndRequired | ValidationError::EndBeforeStart => EventField::EndDate,
        }
    }
}

/// Check a draft against every rule. An empty list means the draft is valid.
///
/// Lengths are counted in characters, not bytes.
pub fn validate_event(draft: &EventDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::TitleRequired);
    }
    if draft.title.chars().count() > MAX_TITLE_CHARS {
        errors.push(ValidationError::TitleTooLong);
    }
    if let Some(description) = &draft.description {
        if description.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.push(ValidationError::DescriptionTooLong);
        }
    }
    if draft.start_date.is_none() {
        errors.push(ValidationError::StartRequired);
    }
    if draft.end_date.is_none() {
        errors.push(ValidationError::EndRequired);
    }
    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if end <= start {
            errors.push(ValidationError::EndBeforeStart);
        }
    }

    errors
}

/// Per-field messages for display next to form inputs.
///
/// When a field has several errors the last one in validation order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl FormErrors {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut form = FormErrors::default();
        for error in errors {
            let slot = match error.field() {
                EventField::Title => &mut form.title,
                EventField::Description => &mut form.description,
                EventField::StartDate => &mut form.start_date,
                EventField::EndDate => &mut form.end_date,
            };
            *slot = Some(error.to_string());
        }
        form
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Drop the message for a field, as a form does when the user edits it.
    pub fn clear(&mut self, field: EventField) {
        match field {
            EventField::Title => self.title = None,
            EventField::Description => self.description = None,
            EventField::StartDate => self.start_date = None,
            EventField::EndDate => self.end_date = None,
        }
    }
}
