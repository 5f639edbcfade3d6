//! Render-ready models for month and week views.
//!
//! These combine the grid builder with event placement so a front-end only
//! has to draw what it is given. Models borrow events from the caller's
//! collection.

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use crate::config::{CalendarConfig, LayoutConfig};
use crate::event::CalendarEvent;
use crate::grid::{build_month_grid, build_week_days, is_in_current_month, is_today};
use crate::placement::{compute_segment_position, day_segment, events_on_date};

// ── Month view ──────────────────────────────────────────────────────────────

/// One day cell of a month view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCell<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
    pub is_today: bool,
    pub is_current_month: bool,
    pub is_selected: bool,
}

impl<'a> MonthCell<'a> {
    /// The first `limit` events, the ones a cell lists by title.
    pub fn visible_events(&self, limit: usize) -> &[&'a CalendarEvent] {
        &self.events[..self.events.len().min(limit)]
    }

    /// How many events are collapsed into "+N more".
    pub fn overflow_count(&self, limit: usize) -> usize {
        self.events.len().saturating_sub(limit)
    }
}

/// Build the 42 cells of the month containing `reference`.
pub fn build_month_view<'a>(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &'a [CalendarEvent],
    config: &CalendarConfig,
) -> Vec<MonthCell<'a>> {
    let cells: Vec<MonthCell<'a>> = build_month_grid(reference, config.week_start)
        .into_iter()
        .map(|date| MonthCell {
            date,
            events: events_on_date(events, date),
            is_today: is_today(date, today),
            is_current_month: is_in_current_month(date, reference),
            is_selected: selected == Some(date),
        })
        .collect();

    tracing::debug!(
        %reference,
        cells = cells.len(),
        events = events.len(),
        "built month view"
    );
    cells
}

// ── Week view ───────────────────────────────────────────────────────────────

/// An event block drawn inside one hour row of a day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBlock<'a> {
    pub event: &'a CalendarEvent,
    /// Hour row (0-23) the block is anchored in.
    pub hour_row: u32,
    /// Offset from the top of the hour row.
    pub offset_top: f64,
    /// Block height, between `min_event_height` and `max_block_height`.
    pub height: f64,
    /// True when the event continues from the previous day.
    pub continues_before: bool,
    /// True when the event continues into the next day.
    pub continues_after: bool,
}

/// One day column of a week view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekColumn<'a> {
    pub date: NaiveDate,
    pub blocks: Vec<EventBlock<'a>>,
}

impl<'a> WeekColumn<'a> {
    /// Blocks anchored in `hour`.
    pub fn blocks_in_hour(&self, hour: u32) -> impl Iterator<Item = &EventBlock<'a>> + '_ {
        self.blocks.iter().filter(move |block| block.hour_row == hour)
    }
}

/// Build the 7 columns of the week containing `reference`.
///
/// Each event contributes one block per day it touches, clipped to that day,
/// so multi-day events show on every day of their span. A zero-length
/// segment (an event ending exactly at midnight) is skipped unless the event
/// itself has zero length.
pub fn build_week_view<'a>(
    reference: NaiveDate,
    events: &'a [CalendarEvent],
    config: &CalendarConfig,
) -> Vec<WeekColumn<'a>> {
    build_week_days(reference, config.week_start)
        .into_iter()
        .map(|date| WeekColumn {
            date,
            blocks: day_blocks(events, date, &config.layout),
        })
        .collect()
}

fn day_blocks<'a>(
    events: &'a [CalendarEvent],
    date: NaiveDate,
    layout: &LayoutConfig,
) -> Vec<EventBlock<'a>> {
    let mut blocks: Vec<EventBlock<'a>> = events_on_date(events, date)
        .into_iter()
        .filter_map(|event| {
            let (start, end) = day_segment(event, date)?;
            if start == end && event.start_date != event.end_date {
                return None;
            }

            let position = compute_segment_position(start, end, layout);
            let hour_row = start.hour();
            Some(EventBlock {
                event,
                hour_row,
                offset_top: position.top - f64::from(hour_row) * layout.units_per_hour,
                height: position.height.min(layout.max_block_height),
                continues_before: event.start_date.date() < date,
                continues_after: event.end_date.date() > date,
            })
        })
        .collect();

    blocks.sort_by_key(|block| (block.hour_row, block.event.start_date));
    blocks
}
