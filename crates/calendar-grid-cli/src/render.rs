//! Plain-text rendering of month and week view models.

use std::fmt::Write;

use calendar_grid::placement::{
    format_event_duration, is_event_on_date, is_multi_day_event, sort_events_by_start_date,
};
use calendar_grid::view::{MonthCell, WeekColumn};
use calendar_grid::{CalendarConfig, CalendarEvent};
use chrono::{Datelike, NaiveDate};

/// Month grid followed by the events of each busy day in the month.
///
/// Cell markers: `[d]` today, `(d)` outside the month, `*` has events.
pub fn render_month(reference: NaiveDate, cells: &[MonthCell<'_>], config: &CalendarConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", reference.format("%B %Y"));

    let header: Vec<String> = cells
        .iter()
        .take(7)
        .map(|cell| format!(" {:<4}", cell.date.format("%a").to_string()))
        .collect();
    let _ = writeln!(out, "{}", header.join("").trim_end());

    for row in cells.chunks(7) {
        let line: Vec<String> = row.iter().map(month_cell_text).collect();
        let _ = writeln!(out, "{}", line.join("").trim_end());
    }

    let limit = config.max_visible_events;
    for cell in cells.iter().filter(|c| c.is_current_month && !c.events.is_empty()) {
        let titles: Vec<&str> = cell
            .visible_events(limit)
            .iter()
            .map(|event| event.title.as_str())
            .collect();
        let _ = write!(out, "\n{}: {}", cell.date.format("%b %d"), titles.join(", "));
        let hidden = cell.overflow_count(limit);
        if hidden > 0 {
            let _ = write!(out, " +{hidden} more");
        }
        if cell.is_selected {
            out.push_str(" <");
        }
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn month_cell_text(cell: &MonthCell<'_>) -> String {
    let (open, close) = if cell.is_today {
        ('[', ']')
    } else if !cell.is_current_month {
        ('(', ')')
    } else if cell.is_selected {
        ('>', ' ')
    } else {
        (' ', ' ')
    };
    let mark = if cell.events.is_empty() { ' ' } else { '*' };
    format!("{open}{:>2}{close}{mark}", cell.date.day())
}

/// One section per day, listing blocks with their hour row and geometry.
pub fn render_week(columns: &[WeekColumn<'_>]) -> String {
    let mut out = String::new();
    if let (Some(first), Some(last)) = (columns.first(), columns.last()) {
        let _ = writeln!(
            out,
            "Week of {} - {}",
            first.date.format("%b %d %Y"),
            last.date.format("%b %d %Y")
        );
    }

    for column in columns {
        let _ = writeln!(out, "\n{}", column.date.format("%a %b %d"));
        if column.blocks.is_empty() {
            out.push_str("  (no events)\n");
            continue;
        }
        for block in &column.blocks {
            let mut flags = String::new();
            if block.continues_before {
                flags.push_str(" <-");
            }
            if block.continues_after {
                flags.push_str(" ->");
            }
            let _ = writeln!(
                out,
                "  {:02}:00 +{} h={}  {} ({}){}",
                block.hour_row,
                block.offset_top,
                block.height,
                block.event.title,
                time_range(block.event),
                flags
            );
        }
    }
    out
}

/// Events on one date, earliest first, with durations.
pub fn render_day(date: NaiveDate, events: &[CalendarEvent]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", date.format("%A, %B %-d, %Y"));

    let on_date: Vec<&CalendarEvent> = sort_events_by_start_date(events)
        .into_iter()
        .filter(|event| is_event_on_date(event, date))
        .collect();
    if on_date.is_empty() {
        out.push_str("  (no events)\n");
        return out;
    }

    for event in on_date {
        let multi = if is_multi_day_event(event) { " [multi-day]" } else { "" };
        let _ = writeln!(
            out,
            "  {}  {}  ({}){}",
            time_range(event),
            event.title,
            format_event_duration(event),
            multi
        );
    }
    out
}

fn time_range(event: &CalendarEvent) -> String {
    if is_multi_day_event(event) {
        format!(
            "{} - {}",
            event.start_date.format("%b %d %H:%M"),
            event.end_date.format("%b %d %H:%M")
        )
    } else {
        format!(
            "{}-{}",
            event.start_date.format("%H:%M"),
            event.end_date.format("%H:%M")
        )
    }
}
