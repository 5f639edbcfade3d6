//! Fixed-size date grids for month and week views.
//!
//! Every function here is a pure transform over calendar dates. Nothing reads
//! the system clock: predicates such as [`is_today`] take the caller's
//! observed "today" as an argument, so grids are reproducible in tests and
//! identical across repeated calls.
//!
//! Dates are `NaiveDate`, so daylight-saving transitions never move a cell to
//! a different calendar day.
//!
//! # Functions
//!
//! - [`build_month_grid`] — 42 consecutive dates covering a month (6 rows)
//! - [`build_week_days`] — 7 consecutive dates for the week containing a date
//! - [`is_in_current_month`] / [`is_today`] — cell styling predicates
//! - Month and week boundary helpers used by the grids and by navigation

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Number of cells in a month grid: six rows of seven days.
pub const MONTH_GRID_CELLS: usize = 42;

/// Number of days in a week row.
pub const DAYS_PER_WEEK: usize = 7;

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a week row in month and week grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// US/Canada convention (Sunday = day 0 of the week).
    #[default]
    Sunday,
    /// ISO 8601 standard (Monday = day 0 of the week).
    Monday,
}

impl WeekStartDay {
    /// The weekday that opens a row.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStartDay::Sunday => Weekday::Sun,
            WeekStartDay::Monday => Weekday::Mon,
        }
    }
}

impl fmt::Display for WeekStartDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStartDay::Sunday => f.write_str("sunday"),
            WeekStartDay::Monday => f.write_str("monday"),
        }
    }
}

impl FromStr for WeekStartDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStartDay::Sunday),
            "monday" | "mon" => Ok(WeekStartDay::Monday),
            other => Err(CalendarError::InvalidConfig(format!(
                "unknown week start day '{other}' (expected 'sunday' or 'monday')"
            ))),
        }
    }
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> u64 {
    match week_start {
        WeekStartDay::Monday => u64::from(weekday.num_days_from_monday()),
        WeekStartDay::Sunday => u64::from(weekday.num_days_from_sunday()),
    }
}

// ── Grid builders ───────────────────────────────────────────────────────────

/// Build the 42-cell grid for the month containing `reference`.
///
/// The grid starts on the `week_start`-aligned first day of the week holding
/// the 1st of the month and runs through the end of the week holding the last
/// day of the month. Shorter ranges are padded with the following days so
/// every month renders as exactly six rows.
///
/// # Examples
///
/// ```
/// use calendar_grid::grid::{build_month_grid, WeekStartDay};
/// use chrono::NaiveDate;
///
/// let october = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
/// let grid = build_month_grid(october, WeekStartDay::Sunday);
/// assert_eq!(grid.len(), 42);
/// // Oct 1 2025 is a Wednesday, so the grid opens on Sunday Sep 28.
/// assert_eq!(grid[0], NaiveDate::from_ymd_opt(2025, 9, 28).unwrap());
/// ```
pub fn build_month_grid(reference: NaiveDate, week_start: WeekStartDay) -> Vec<NaiveDate> {
    let grid_start = start_of_week(start_of_month(reference), week_start);
    let grid_end = end_of_week(end_of_month(reference), week_start);

    let natural_len = usize::try_from(days_between(grid_start, grid_end) + 1).unwrap_or(0);
    let len = natural_len.max(MONTH_GRID_CELLS);

    grid_start.iter_days().take(len).collect()
}

/// Build the 7 dates of the `week_start`-aligned week containing `reference`.
pub fn build_week_days(reference: NaiveDate, week_start: WeekStartDay) -> Vec<NaiveDate> {
    start_of_week(reference, week_start)
        .iter_days()
        .take(DAYS_PER_WEEK)
        .collect()
}

/// True when `date` falls in the same month and year as `reference`.
pub fn is_in_current_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// True when `date` is the caller's observed `today`.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// True when two timestamps fall on the same calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

// ── Month and week boundaries ───────────────────────────────────────────────

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Every day of the month containing `date`, in order.
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let end = end_of_month(date);
    start_of_month(date)
        .iter_days()
        .take_while(|day| *day <= end)
        .collect()
}

/// Same day one month later, clamped to the month's last day (Jan 31 → Feb 28).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Same day one month earlier, clamped to the month's last day.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// First day of the `week_start`-aligned week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> NaiveDate {
    let offset = days_from_week_start(date.weekday(), week_start);
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Last day of the `week_start`-aligned week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: WeekStartDay) -> NaiveDate {
    let offset = 6 - days_from_week_start(date.weekday(), week_start);
    date.checked_add_days(Days::new(offset)).unwrap_or(date)
}

/// Whole calendar days from `start` to `end` (negative when `end` is earlier).
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// `date` at `hour:minute:00`. Out-of-range clock values fall back to midnight.
pub fn set_time_on_date(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    date.and_time(time)
}

/// The 24 hourly slot starts of `date`, from 00:00 to 23:00.
pub fn generate_time_slots(date: NaiveDate) -> Vec<NaiveDateTime> {
    (0..24).map(|hour| set_time_on_date(date, hour, 0)).collect()
}

/// True when `end` is strictly after `start`.
pub fn is_valid_date_range(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    end > start
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_consecutive(days: &[NaiveDate]) {
        for pair in days.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap(), "gap after {}", pair[0]);
        }
    }

    // ── build_month_grid tests ──────────────────────────────────────────

    #[test]
    fn test_month_grid_october_2025() {
        let grid = build_month_grid(date(2025, 10, 15), WeekStartDay::Sunday);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0], date(2025, 9, 28));
        assert_eq!(grid[41], date(2025, 11, 8));
        assert_consecutive(&grid);
    }

    #[test]
    fn test_month_grid_pads_four_week_february() {
        // Feb 2026 starts on a Sunday and has 28 days: natural range is 4 rows.
        let grid = build_month_grid(date(2026, 2, 10), WeekStartDay::Sunday);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0], date(2026, 2, 1));
        assert_eq!(grid[27], date(2026, 2, 28));
        assert_eq!(grid[41], date(2026, 3, 14));
    }

    #[test]
    fn test_month_grid_leap_february() {
        let grid = build_month_grid(date(2024, 2, 1), WeekStartDay::Sunday);
        assert_eq!(grid.len(), 42);
        assert!(grid.contains(&date(2024, 2, 29)));
        assert_consecutive(&grid);
    }

    #[test]
    fn test_month_grid_crosses_year_boundary() {
        let grid = build_month_grid(date(2025, 12, 25), WeekStartDay::Sunday);
        assert_eq!(grid[0], date(2025, 11, 30));
        assert!(grid.contains(&date(2025, 12, 31)));
        assert!(grid.contains(&date(2026, 1, 1)));
        assert_consecutive(&grid);

        let january = build_month_grid(date(2026, 1, 5), WeekStartDay::Sunday);
        assert_eq!(january[0], date(2025, 12, 28));
        assert_consecutive(&january);
    }

    #[test]
    fn test_month_grid_six_row_month() {
        // Aug 2026 starts on Saturday and has 31 days: needs all six rows.
        let grid = build_month_grid(date(2026, 8, 1), WeekStartDay::Sunday);
        assert_eq!(grid[0], date(2026, 7, 26));
        assert_eq!(grid[41], date(2026, 9, 5));
    }

    #[test]
    fn test_month_grid_monday_start() {
        let grid = build_month_grid(date(2025, 10, 15), WeekStartDay::Monday);
        assert_eq!(grid[0], date(2025, 9, 29));
        assert_eq!(grid[0].weekday(), Weekday::Mon);
        assert_eq!(grid.len(), 42);
    }

    #[test]
    fn test_month_grid_is_idempotent() {
        let reference = date(2026, 3, 17);
        assert_eq!(
            build_month_grid(reference, WeekStartDay::Sunday),
            build_month_grid(reference, WeekStartDay::Sunday)
        );
    }

    // ── build_week_days tests ───────────────────────────────────────────

    #[test]
    fn test_week_days_sunday_start() {
        // Wed Feb 18 2026 → Sun Feb 15 .. Sat Feb 21
        let week = build_week_days(date(2026, 2, 18), WeekStartDay::Sunday);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2026, 2, 15));
        assert_eq!(week[6], date(2026, 2, 21));
    }

    #[test]
    fn test_week_days_monday_start() {
        let week = build_week_days(date(2026, 2, 18), WeekStartDay::Monday);
        assert_eq!(week[0], date(2026, 2, 16));
        assert_eq!(week[6], date(2026, 2, 22));
    }

    #[test]
    fn test_week_days_reference_is_week_start() {
        let week = build_week_days(date(2026, 2, 15), WeekStartDay::Sunday);
        assert_eq!(week[0], date(2026, 2, 15));
    }

    #[test]
    fn test_week_days_straddle_new_year() {
        let week = build_week_days(date(2026, 1, 1), WeekStartDay::Sunday);
        assert_eq!(week[0], date(2025, 12, 28));
        assert_eq!(week[6], date(2026, 1, 3));
        assert_consecutive(&week);
    }

    // ── predicate and helper tests ──────────────────────────────────────

    #[test]
    fn test_is_in_current_month_checks_year() {
        assert!(is_in_current_month(date(2025, 10, 1), date(2025, 10, 31)));
        assert!(!is_in_current_month(date(2024, 10, 1), date(2025, 10, 31)));
        assert!(!is_in_current_month(date(2025, 11, 1), date(2025, 10, 31)));
    }

    #[test]
    fn test_is_today_compares_calendar_day() {
        assert!(is_today(date(2026, 10, 18), date(2026, 10, 18)));
        assert!(!is_today(date(2026, 10, 17), date(2026, 10, 18)));
    }

    #[test]
    fn test_is_same_day_ignores_time() {
        let morning = set_time_on_date(date(2026, 3, 8), 1, 30);
        let night = set_time_on_date(date(2026, 3, 8), 23, 59);
        assert!(is_same_day(morning, night));
        assert!(!is_same_day(morning, set_time_on_date(date(2026, 3, 9), 0, 0)));
    }

    #[test]
    fn test_end_of_month_handles_december() {
        assert_eq!(end_of_month(date(2025, 12, 3)), date(2025, 12, 31));
        assert_eq!(end_of_month(date(2024, 2, 3)), date(2024, 2, 29));
    }

    #[test]
    fn test_days_in_month_lengths() {
        assert_eq!(days_in_month(date(2025, 2, 14)).len(), 28);
        assert_eq!(days_in_month(date(2024, 2, 14)).len(), 29);
        assert_eq!(days_in_month(date(2025, 10, 14)).len(), 31);
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        assert_eq!(next_month(date(2026, 1, 31)), date(2026, 2, 28));
        assert_eq!(previous_month(date(2026, 3, 31)), date(2026, 2, 28));
        assert_eq!(next_month(date(2025, 12, 15)), date(2026, 1, 15));
    }

    #[test]
    fn test_days_between_signed() {
        assert_eq!(days_between(date(2025, 12, 30), date(2026, 1, 2)), 3);
        assert_eq!(days_between(date(2026, 1, 2), date(2025, 12, 30)), -3);
    }

    #[test]
    fn test_time_slots_cover_day() {
        let slots = generate_time_slots(date(2026, 3, 8));
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], set_time_on_date(date(2026, 3, 8), 0, 0));
        assert_eq!(slots[23], set_time_on_date(date(2026, 3, 8), 23, 0));
    }

    #[test]
    fn test_set_time_invalid_falls_back_to_midnight() {
        assert_eq!(
            set_time_on_date(date(2026, 3, 8), 25, 0),
            date(2026, 3, 8).and_time(NaiveTime::MIN)
        );
    }

    #[test]
    fn test_valid_date_range_is_strict() {
        let start = set_time_on_date(date(2026, 3, 8), 9, 0);
        assert!(is_valid_date_range(start, set_time_on_date(date(2026, 3, 8), 9, 1)));
        assert!(!is_valid_date_range(start, start));
    }

    #[test]
    fn test_week_start_parse() {
        assert_eq!("Monday".parse::<WeekStartDay>().unwrap(), WeekStartDay::Monday);
        assert_eq!(" sun ".parse::<WeekStartDay>().unwrap(), WeekStartDay::Sunday);
        let err = "friday".parse::<WeekStartDay>().unwrap_err().to_string();
        assert!(err.contains("Invalid config"), "got: {err}");
    }

    // ── properties ──────────────────────────────────────────────────────

    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2200, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
    }

    fn any_week_start() -> impl Strategy<Value = WeekStartDay> {
        prop_oneof![Just(WeekStartDay::Sunday), Just(WeekStartDay::Monday)]
    }

    proptest! {
        #[test]
        fn prop_month_grid_is_42_consecutive(reference in any_date(), ws in any_week_start()) {
            let grid = build_month_grid(reference, ws);
            prop_assert_eq!(grid.len(), MONTH_GRID_CELLS);
            prop_assert_eq!(grid[0].weekday(), ws.weekday());
            for pair in grid.windows(2) {
                prop_assert_eq!(Some(pair[1]), pair[0].succ_opt());
            }
            prop_assert!(grid.contains(&start_of_month(reference)));
            prop_assert!(grid.contains(&end_of_month(reference)));
        }

        #[test]
        fn prop_month_membership_matches_month_and_year(reference in any_date(), ws in any_week_start()) {
            for day in build_month_grid(reference, ws) {
                let same = day.month() == reference.month() && day.year() == reference.year();
                prop_assert_eq!(is_in_current_month(day, reference), same);
            }
        }

        #[test]
        fn prop_week_days_start_on_week_start(reference in any_date(), ws in any_week_start()) {
            let week = build_week_days(reference, ws);
            prop_assert_eq!(week.len(), DAYS_PER_WEEK);
            prop_assert_eq!(week[0].weekday(), ws.weekday());
            prop_assert!(week.contains(&reference));
            for pair in week.windows(2) {
                prop_assert_eq!(Some(pair[1]), pair[0].succ_opt());
            }
        }
    }
}
