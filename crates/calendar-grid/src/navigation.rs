//! Navigation and selection state for a calendar widget.
//!
//! [`CalendarState`] tracks which period is shown, which date or event is
//! selected, and whether the event form is open. Transitions are plain
//! methods; "today" always comes from the caller.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;
use crate::grid::{next_month, previous_month};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}

/// Which flavor of the event form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    pub current_date: NaiveDate,
    pub view: CalendarView,
    pub selected_date: Option<NaiveDate>,
    pub selected_event: Option<CalendarEvent>,
    pub modal: Option<ModalMode>,
}

impl CalendarState {
    pub fn new(initial_date: NaiveDate, view: CalendarView) -> Self {
        Self {
            current_date: initial_date,
            view,
            selected_date: None,
            selected_event: None,
            modal: None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn next_month(&mut self) {
        self.current_date = next_month(self.current_date);
    }

    pub fn previous_month(&mut self) {
        self.current_date = previous_month(self.current_date);
    }

    /// Step forward one visible period: a month in month view, a week in week view.
    pub fn next_period(&mut self) {
        match self.view {
            CalendarView::Month => self.next_month(),
            CalendarView::Week => {
                self.current_date = self
                    .current_date
                    .checked_add_days(Days::new(7))
                    .unwrap_or(self.current_date);
            }
        }
    }

    /// Step back one visible period.
    pub fn previous_period(&mut self) {
        match self.view {
            CalendarView::Month => self.previous_month(),
            CalendarView::Week => {
                self.current_date = self
                    .current_date
                    .checked_sub_days(Days::new(7))
                    .unwrap_or(self.current_date);
            }
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn select_event(&mut self, event: Option<CalendarEvent>) {
        self.selected_event = event;
    }

    /// Open the form to create an event on `date`.
    pub fn open_create_modal(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.selected_event = None;
        self.modal = Some(ModalMode::Create);
    }

    /// Open the form to edit `event`.
    pub fn open_edit_modal(&mut self, event: CalendarEvent) {
        self.selected_event = Some(event);
        self.modal = Some(ModalMode::Edit);
    }

    /// Close the form. Selections are kept.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}
