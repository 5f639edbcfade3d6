//! Error types for calendar-grid operations.

use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid event: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Incomplete event: {0}")]
    IncompleteEvent(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid event data: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, CalendarError>;
