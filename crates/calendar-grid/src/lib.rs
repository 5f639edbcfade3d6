//! # calendar-grid
//!
//! Deterministic calendar grid computation for calendar widgets.
//!
//! Builds the fixed-size date grids behind month and week views, decides which
//! events land on which dates and time slots, computes block geometry for
//! time-ruled views, and validates event drafts. Every grid and placement
//! function is a pure transform over its inputs: nothing reads the system
//! clock and nothing is cached, so results are recomputed on every render.
//!
//! ## Modules
//!
//! - [`grid`] — 42-cell month grids, 7-day week rows, month/week boundaries
//! - [`placement`] — events on a date, in a range, in a time slot; block geometry; durations
//! - [`validation`] — draft validation messages and per-field form errors
//! - [`event`] — event, draft and patch values
//! - [`id`] — session-scoped event ids
//! - [`store`] — owning controller applying add/update/delete as whole-collection swaps
//! - [`navigation`] — current period, selection and form state
//! - [`view`] — render-ready month cells and week columns
//! - [`config`] — week start, vertical scale, minimum block height
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod id;
pub mod navigation;
pub mod placement;
pub mod store;
pub mod validation;
pub mod view;

pub use config::{CalendarConfig, LayoutConfig};
pub use error::CalendarError;
pub use event::{create_default_event, CalendarEvent, EventDraft, EventPatch};
pub use grid::{
    build_month_grid, build_week_days, is_in_current_month, is_today, WeekStartDay,
};
pub use id::generate_event_id;
pub use navigation::{CalendarState, CalendarView, ModalMode};
pub use placement::{
    compute_time_slot_position, event_duration_minutes, events_in_date_range, events_on_date,
    events_overlapping_time_slot, format_duration, group_events_by_date, is_multi_day_event,
    TimeSlotPosition,
};
pub use store::EventStore;
pub use validation::{validate_event, EventField, FormErrors, ValidationError};
pub use view::{build_month_view, build_week_view, EventBlock, MonthCell, WeekColumn};
