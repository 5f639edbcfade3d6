//! Calendar settings: optional TOML file, then command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::Context;
use calendar_grid::CalendarConfig;

use crate::cli::GlobalArgs;

/// Parse a TOML settings document. Missing keys take their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<CalendarConfig> {
    let config: CalendarConfig = toml::from_str(text).context("failed parsing calendar config")?;
    Ok(config)
}

/// Build the effective settings for this run.
pub fn resolve_config(args: &GlobalArgs) -> anyhow::Result<CalendarConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => CalendarConfig::default(),
    };

    if let Some(week_start) = args.week_start {
        config.week_start = week_start;
    }
    if let Some(units) = args.units_per_hour {
        config.layout.units_per_hour = units;
    }
    if let Some(min_height) = args.min_height {
        config.layout.min_event_height = min_height;
    }

    config.sanitize();
    tracing::info!(
        week_start = %config.week_start,
        units_per_hour = config.layout.units_per_hour,
        min_event_height = config.layout.min_event_height,
        "resolved calendar config"
    );
    Ok(config)
}

fn load_config_file(path: &Path) -> anyhow::Result<CalendarConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}
