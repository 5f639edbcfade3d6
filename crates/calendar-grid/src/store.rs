//! The owning controller for a user's event collection.
//!
//! The collection is held as an immutable `Arc<[CalendarEvent]>` snapshot.
//! Each add, update or delete builds a complete new collection and swaps it
//! in, so a snapshot handed out earlier never changes underneath its reader
//! and no caller can observe a half-applied edit. Failed operations leave the
//! current snapshot untouched.

use std::sync::Arc;

use crate::error::{CalendarError, Result};
use crate::event::{CalendarEvent, EventDraft, EventPatch};
use crate::id::generate_event_id;
use crate::validation::validate_event;

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Arc<[CalendarEvent]>,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl EventStore {
    /// Wrap an existing collection. Events are taken as-is, without validation.
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// The current collection. Cheap to clone and stable across later edits.
    pub fn snapshot(&self) -> Arc<[CalendarEvent]> {
        Arc::clone(&self.events)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Validate `draft`, give it a fresh id and append it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Validation`] listing every failed rule.
    pub fn add(&mut self, draft: EventDraft) -> Result<CalendarEvent> {
        let errors = validate_event(&draft);
        if !errors.is_empty() {
            return Err(CalendarError::Validation(errors));
        }

        let event = draft.into_event(generate_event_id())?;
        let mut next = Vec::with_capacity(self.events.len() + 1);
        next.extend_from_slice(&self.events);
        next.push(event.clone());
        self.events = next.into();

        tracing::debug!(id = %event.id, total = self.events.len(), "event added");
        Ok(event)
    }

    /// Merge `patch` into the event with `id`, re-validate, and replace it in place.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for an unknown id, or
    /// [`CalendarError::Validation`] if the merged event breaks a rule.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> Result<CalendarEvent> {
        let current = self
            .get(id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;

        let updated = current.with_patch(patch);
        let errors = validate_event(&updated.to_draft());
        if !errors.is_empty() {
            return Err(CalendarError::Validation(errors));
        }

        self.events = self
            .events
            .iter()
            .map(|event| {
                if event.id == id {
                    updated.clone()
                } else {
                    event.clone()
                }
            })
            .collect();

        tracing::debug!(id = %id, "event updated");
        Ok(updated)
    }

    /// Remove the event with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<CalendarEvent> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;

        self.events = self
            .events
            .iter()
            .filter(|event| event.id != id)
            .cloned()
            .collect();

        tracing::debug!(id = %id, total = self.events.len(), "event deleted");
        Ok(removed)
    }

    /// Load a store from a JSON array of events.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(crate::event::parse_events_json(json)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use chrono::NaiveDateTime;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: None,
            start_date: Some(dt("2025-10-29T09:00")),
            end_date: Some(dt("2025-10-29T10:00")),
            color: None,
            category: None,
        }
    }

    #[test]
    fn test_add_assigns_id_and_appends() {
        let mut store = EventStore::default();
        let first = store.add(draft("One")).unwrap();
        let second = store.add(draft("Two")).unwrap();
        assert!(first.id.starts_with("evt-"));
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.events()[1].title, "Two");
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let mut store = EventStore::default();
        let err = store.add(draft("")).unwrap_err();
        match err {
            CalendarError::Validation(errors) => {
                assert_eq!(errors, vec![ValidationError::TitleRequired]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = EventStore::default();
        let event = store.add(draft("Old")).unwrap();
        let patch = EventPatch {
            title: Some("New".to_string()),
            end_date: Some(dt("2025-10-29T11:30")),
            ..Default::default()
        };
        let updated = store.update(&event.id, &patch).unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.start_date, dt("2025-10-29T09:00"));
        assert_eq!(store.get(&event.id), Some(&updated));
    }

    #[test]
    fn test_update_rejects_reversed_dates_and_keeps_old() {
        let mut store = EventStore::default();
        let event = store.add(draft("Keep")).unwrap();
        let patch = EventPatch {
            end_date: Some(dt("2025-10-29T08:00")),
            ..Default::default()
        };
        let err = store.update(&event.id, &patch).unwrap_err().to_string();
        assert!(err.contains("End date must be after start date"), "got: {err}");
        assert_eq!(store.get(&event.id), Some(&event));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = EventStore::default();
        let err = store.update("missing", &EventPatch::default()).unwrap_err();
        assert!(matches!(err, CalendarError::EventNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_delete_removes_event() {
        let mut store = EventStore::default();
        let keep = store.add(draft("Keep")).unwrap();
        let drop = store.add(draft("Drop")).unwrap();
        let removed = store.delete(&drop.id).unwrap();
        assert_eq!(removed, drop);
        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0], keep);
        assert!(store.delete(&drop.id).is_err());
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_edits() {
        let mut store = EventStore::default();
        let event = store.add(draft("Before")).unwrap();
        let before = store.snapshot();

        store.delete(&event.id).unwrap();
        store.add(draft("After")).unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before[0].title, "Before");
        assert_eq!(store.events()[0].title, "After");
    }

    #[test]
    fn test_from_json() {
        let store = EventStore::from_json(
            r#"[{"id":"evt-1","title":"A","startDate":"2025-10-29T09:00:00","endDate":"2025-10-29T10:00:00"}]"#,
        )
        .unwrap();
        assert_eq!(store.get("evt-1").map(|e| e.title.as_str()), Some("A"));
    }
}
