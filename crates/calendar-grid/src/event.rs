//! Calendar event values.
//!
//! A [`CalendarEvent`] is an immutable value from the engine's point of view:
//! placement and grid functions only read events and derive new data from
//! them (duration, multi-day flag, per-day geometry). Mutation happens by
//! replacement inside [`crate::store::EventStore`].
//!
//! Timestamps are `NaiveDateTime` in local wall-clock time. Serialized forms
//! use camelCase keys (`startDate`, `endDate`) and ISO 8601 timestamps without
//! an offset, e.g. `"2025-10-29T09:00:00"`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::grid::set_time_on_date;

/// Color given to new events when the user does not pick one.
pub const DEFAULT_EVENT_COLOR: &str = "#3b82f6";

/// Category given to new events.
pub const DEFAULT_EVENT_CATEGORY: &str = "Other";

/// Palette offered by event forms, as `(value, label)` pairs.
pub const EVENT_COLORS: [(&str, &str); 8] = [
    ("#3b82f6", "Blue"),
    ("#10b981", "Green"),
    ("#f59e0b", "Amber"),
    ("#8b5cf6", "Purple"),
    ("#ef4444", "Red"),
    ("#ec4899", "Pink"),
    ("#06b6d4", "Cyan"),
    ("#84cc16", "Lime"),
];

/// Category labels offered by event forms.
pub const EVENT_CATEGORIES: [&str; 6] = [
    "Meeting",
    "Work",
    "Personal",
    "Design",
    "Development",
    "Other",
];

/// Label of a palette color, matched case-insensitively on the hex value.
pub fn color_label(color: &str) -> Option<&'static str> {
    EVENT_COLORS
        .iter()
        .find(|(value, _)| value.eq_ignore_ascii_case(color))
        .map(|&(_, label)| label)
}

pub fn is_known_category(category: &str) -> bool {
    EVENT_CATEGORIES.contains(&category)
}

/// A scheduled event.
///
/// Invariant for events accepted by the store: `end_date > start_date`.
/// Placement functions tolerate events that break it; they simply match
/// fewer dates and slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Display hint, usually one of [`EVENT_COLORS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CalendarEvent {
    /// The event's color, falling back to [`DEFAULT_EVENT_COLOR`].
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Turn the event back into an editable draft (id dropped).
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            color: self.color.clone(),
            category: self.category.clone(),
        }
    }

    /// Apply a partial update, producing a new event with the same id.
    pub fn with_patch(&self, patch: &EventPatch) -> CalendarEvent {
        CalendarEvent {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            start_date: patch.start_date.unwrap_or(self.start_date),
            end_date: patch.end_date.unwrap_or(self.end_date),
            color: patch.color.clone().unwrap_or_else(|| self.color.clone()),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
        }
    }
}

/// An event under construction: no id yet, dates possibly missing.
///
/// This is what a form edits and what [`crate::validation::validate_event`]
/// checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EventDraft {
    /// Attach an id, producing a full event.
    ///
    /// Only checks that both dates are present; run
    /// [`crate::validation::validate_event`] first for the full rule set.
    pub fn into_event(self, id: impl Into<String>) -> Result<CalendarEvent> {
        let start_date = self
            .start_date
            .ok_or_else(|| CalendarError::IncompleteEvent("missing start date".to_string()))?;
        let end_date = self
            .end_date
            .ok_or_else(|| CalendarError::IncompleteEvent("missing end date".to_string()))?;

        Ok(CalendarEvent {
            id: id.into(),
            title: self.title,
            description: self.description,
            start_date,
            end_date,
            color: self.color,
            category: self.category,
        })
    }
}

/// A partial update. `None` leaves the field unchanged; for optional fields
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub color: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

/// A blank draft for `date`: 09:00 to 10:00, default color, category "Other".
pub fn create_default_event(date: NaiveDate) -> EventDraft {
    EventDraft {
        title: String::new(),
        description: Some(String::new()),
        start_date: Some(set_time_on_date(date, 9, 0)),
        end_date: Some(set_time_on_date(date, 10, 0)),
        color: Some(DEFAULT_EVENT_COLOR.to_string()),
        category: Some(DEFAULT_EVENT_CATEGORY.to_string()),
    }
}

/// Parse a JSON array of events.
pub fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>> {
    Ok(serde_json::from_str(json)?)
}
