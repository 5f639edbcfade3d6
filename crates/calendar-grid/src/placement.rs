//! Event placement: which events land on a date, a range, or a time slot,
//! and where they sit in a time-ruled view.
//!
//! # Interval conventions
//!
//! Date filtering works at calendar-day granularity. An event occupies the
//! closed range of days `[start_date.date(), end_date.date()]`; a query covers
//! the closed range `[range_start, range_end]`; the event matches when the two
//! ranges intersect. [`events_on_date`] is exactly
//! `events_in_date_range(events, date, date)`, so multi-day events appear on
//! every day they touch, including partial first and last days.
//!
//! Time-slot filtering works on timestamps with the slot treated as
//! half-open: see [`is_event_in_time_slot`].
//!
//! Filters return borrowed subsequences in input order.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::event::CalendarEvent;

// ── Date filtering ──────────────────────────────────────────────────────────

/// True when `event` touches any part of `date`.
pub fn is_event_on_date(event: &CalendarEvent, date: NaiveDate) -> bool {
    overlaps_days(event, date, date)
}

/// Events that touch `date`.
pub fn events_on_date(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events_in_date_range(events, date, date)
}

/// Events that touch any day in `[range_start, range_end]`.
pub fn events_in_date_range(
    events: &[CalendarEvent],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| overlaps_days(event, range_start, range_end))
        .collect()
}

fn overlaps_days(event: &CalendarEvent, range_start: NaiveDate, range_end: NaiveDate) -> bool {
    event.start_date.date() <= range_end && event.end_date.date() >= range_start
}

// ── Time-slot filtering ─────────────────────────────────────────────────────

/// Three-way overlap between an event and a slot `[slot_start, slot_end)`:
/// the event starts inside the slot, ends inside it, or covers it entirely.
pub fn is_event_in_time_slot(
    event_start: NaiveDateTime,
    event_end: NaiveDateTime,
    slot_start: NaiveDateTime,
    slot_end: NaiveDateTime,
) -> bool {
    (event_start >= slot_start && event_start < slot_end)
        || (event_end > slot_start && event_end <= slot_end)
        || (event_start <= slot_start && event_end >= slot_end)
}

/// Events overlapping the slot `[slot_start, slot_end)`.
pub fn events_overlapping_time_slot(
    events: &[CalendarEvent],
    slot_start: NaiveDateTime,
    slot_end: NaiveDateTime,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|event| {
            is_event_in_time_slot(event.start_date, event.end_date, slot_start, slot_end)
        })
        .collect()
}

// ── Geometry ────────────────────────────────────────────────────────────────

/// Vertical placement of an event block, in the units of [`LayoutConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSlotPosition {
    /// Distance from midnight.
    pub top: f64,
    /// Block height, never below `min_event_height`.
    pub height: f64,
}

/// Hours since midnight, with minutes as a fraction. Seconds are ignored.
fn clock_hours(t: NaiveDateTime) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0
}

/// Position an event from its start and end clock times.
///
/// `top = start_hours × units_per_hour` and
/// `height = max((end_hours − start_hours) × units_per_hour, min_event_height)`.
/// Only the time of day is used, so an event ending on a later day gets the
/// minimum height; use [`compute_segment_position`] with a [`day_segment`] for
/// multi-day events.
///
/// # Examples
///
/// ```
/// use calendar_grid::config::LayoutConfig;
/// use calendar_grid::placement::compute_time_slot_position;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap();
/// let start = day.and_hms_opt(9, 0, 0).unwrap();
/// let end = day.and_hms_opt(10, 30, 0).unwrap();
/// let pos = compute_time_slot_position(start, end, &LayoutConfig::default());
/// assert_eq!((pos.top, pos.height), (540.0, 90.0));
/// ```
pub fn compute_time_slot_position(
    event_start: NaiveDateTime,
    event_end: NaiveDateTime,
    layout: &LayoutConfig,
) -> TimeSlotPosition {
    let start_hours = clock_hours(event_start);
    let end_hours = clock_hours(event_end);

    let top = start_hours * layout.units_per_hour;
    let height = (end_hours - start_hours) * layout.units_per_hour;

    TimeSlotPosition {
        top,
        height: height.max(layout.min_event_height),
    }
}

/// The part of `event` that falls on `date`, clipped to
/// `[date 00:00, next day 00:00)`. `None` when the event misses the date.
pub fn day_segment(
    event: &CalendarEvent,
    date: NaiveDate,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = date
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN))
        .unwrap_or(NaiveDateTime::MAX);

    let start = event.start_date.max(day_start);
    let end = event.end_date.min(day_end);

    if start > end || !is_event_on_date(event, date) {
        return None;
    }
    Some((start, end))
}

/// Position a same-day segment from its start clock time and its duration.
///
/// Unlike [`compute_time_slot_position`] this handles segments that end at
/// the following midnight.
pub fn compute_segment_position(
    segment_start: NaiveDateTime,
    segment_end: NaiveDateTime,
    layout: &LayoutConfig,
) -> TimeSlotPosition {
    let minutes = (segment_end - segment_start).num_minutes() as f64;
    let top = clock_hours(segment_start) * layout.units_per_hour;
    let height = minutes / 60.0 * layout.units_per_hour;

    TimeSlotPosition {
        top,
        height: height.max(layout.min_event_height),
    }
}

// ── Duration ────────────────────────────────────────────────────────────────

/// Whole minutes from start to end, rounded down (negative for reversed events).
pub fn event_duration_minutes(event: &CalendarEvent) -> i64 {
    (event.end_date - event.start_date)
        .num_milliseconds()
        .div_euclid(60_000)
}

/// Format minutes as `"45m"`, `"2h"` or `"1h 30m"`.
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remaining}m")
    }
}

/// [`format_duration`] of the event's length.
pub fn format_event_duration(event: &CalendarEvent) -> String {
    format_duration(event_duration_minutes(event))
}

/// True when the event ends on a different calendar day than it starts.
pub fn is_multi_day_event(event: &CalendarEvent) -> bool {
    event.end_date.date() != event.start_date.date()
}

// ── Ordering and grouping ───────────────────────────────────────────────────

/// Events sorted by start, earliest first. Ties keep their input order.
pub fn sort_events_by_start_date(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.start_date);
    sorted
}

/// Group events by the calendar day they start on.
///
/// Keys iterate in date order; each group keeps input order.
pub fn group_events_by_date(events: &[CalendarEvent]) -> BTreeMap<NaiveDate, Vec<&CalendarEvent>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&CalendarEvent>> = BTreeMap::new();
    for event in events {
        grouped
            .entry(event.start_date.date())
            .or_default()
            .push(event);
    }
    grouped
}
