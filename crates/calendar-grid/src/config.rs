//! Caller-adjustable settings for grids and time-slot geometry.
//!
//! All fields have serde defaults, so a partial TOML or JSON document
//! deserializes into a complete config. Call [`CalendarConfig::sanitize`]
//! after loading untrusted input.

use serde::{Deserialize, Serialize};

use crate::grid::WeekStartDay;

pub const DEFAULT_UNITS_PER_HOUR: f64 = 60.0;
pub const DEFAULT_MIN_EVENT_HEIGHT: f64 = 30.0;
pub const DEFAULT_MAX_BLOCK_HEIGHT: f64 = 180.0;
pub const DEFAULT_MAX_VISIBLE_EVENTS: usize = 3;

/// Vertical scale of a time-ruled (week) view, in abstract units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one hour row.
    pub units_per_hour: f64,
    /// Floor for event heights so short events stay visible and clickable.
    pub min_event_height: f64,
    /// Ceiling for a rendered block in the week view.
    pub max_block_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            units_per_hour: DEFAULT_UNITS_PER_HOUR,
            min_event_height: DEFAULT_MIN_EVENT_HEIGHT,
            max_block_height: DEFAULT_MAX_BLOCK_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Replace unusable values with defaults. Returns true if anything changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;

        if !self.units_per_hour.is_finite() || self.units_per_hour <= 0.0 {
            tracing::warn!(
                value = self.units_per_hour,
                "invalid units_per_hour; using default"
            );
            self.units_per_hour = DEFAULT_UNITS_PER_HOUR;
            changed = true;
        }
        if !self.min_event_height.is_finite() || self.min_event_height < 0.0 {
            tracing::warn!(
                value = self.min_event_height,
                "invalid min_event_height; using default"
            );
            self.min_event_height = DEFAULT_MIN_EVENT_HEIGHT;
            changed = true;
        }
        if !self.max_block_height.is_finite() || self.max_block_height <= 0.0 {
            tracing::warn!(
                value = self.max_block_height,
                "invalid max_block_height; using default"
            );
            self.max_block_height = DEFAULT_MAX_BLOCK_HEIGHT;
            changed = true;
        }
        if self.max_block_height < self.min_event_height {
            tracing::warn!(
                max = self.max_block_height,
                min = self.min_event_height,
                "max_block_height below min_event_height; raising it"
            );
            self.max_block_height = self.min_event_height;
            changed = true;
        }

        changed
    }
}

/// Top-level settings shared by the grid builder and the view models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub week_start: WeekStartDay,
    pub layout: LayoutConfig,
    /// Events listed in a month cell before collapsing into "+N more".
    pub max_visible_events: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStartDay::default(),
            layout: LayoutConfig::default(),
            max_visible_events: DEFAULT_MAX_VISIBLE_EVENTS,
        }
    }
}

impl CalendarConfig {
    /// Replace unusable values with defaults. Returns true if anything changed.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = self.layout.sanitize();
        if self.max_visible_events == 0 {
            tracing::warn!("max_visible_events is 0; using default");
            self.max_visible_events = DEFAULT_MAX_VISIBLE_EVENTS;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.week_start, WeekStartDay::Sunday);
        assert_eq!(config.layout.units_per_hour, 60.0);
        assert_eq!(config.layout.min_event_height, 30.0);
        assert_eq!(config.layout.max_block_height, 180.0);
        assert_eq!(config.max_visible_events, 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"week_start":"monday","layout":{"units_per_hour":48}}"#)
                .unwrap();
        assert_eq!(config.week_start, WeekStartDay::Monday);
        assert_eq!(config.layout.units_per_hour, 48.0);
        assert_eq!(config.layout.min_event_height, 30.0);
        assert_eq!(config.max_visible_events, 3);
    }

    #[test]
    fn test_sanitize_replaces_bad_values() {
        let mut config = CalendarConfig {
            week_start: WeekStartDay::Sunday,
            layout: LayoutConfig {
                units_per_hour: 0.0,
                min_event_height: f64::NAN,
                max_block_height: -1.0,
            },
            max_visible_events: 0,
        };
        assert!(config.sanitize());
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_sanitize_raises_max_below_min() {
        let mut layout = LayoutConfig {
            units_per_hour: 60.0,
            min_event_height: 40.0,
            max_block_height: 20.0,
        };
        assert!(layout.sanitize());
        assert_eq!(layout.max_block_height, 40.0);
    }

    #[test]
    fn test_sanitize_leaves_valid_config() {
        let mut config = CalendarConfig::default();
        assert!(!config.sanitize());
    }
}
