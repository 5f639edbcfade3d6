use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use calendar_grid::event::{color_label, is_known_category, parse_events_json};
use calendar_grid::{
    build_month_view, build_week_view, create_default_event, generate_event_id, validate_event,
    CalendarEvent, EventDraft, FormErrors,
};
use chrono::Local;
use clap::Parser;

mod cli;
mod render;
mod settings;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cli::init_tracing(cli.global.verbose, cli.global.quiet) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = settings::resolve_config(&cli.global)?;
    let today = Local::now().date_naive();

    match cli.command {
        Command::Month {
            date,
            events,
            selected,
        } => {
            let reference = date.unwrap_or(today);
            let events = load_events(events.as_deref())?;
            let cells = build_month_view(reference, today, selected, &events, &config);
            print!("{}", render::render_month(reference, &cells, &config));
        }
        Command::Week { date, events } => {
            let reference = date.unwrap_or(today);
            let events = load_events(events.as_deref())?;
            let columns = build_week_view(reference, &events, &config);
            print!("{}", render::render_week(&columns));
        }
        Command::Day { date, events } => {
            let events = load_events(events.as_deref())?;
            print!("{}", render::render_day(date, &events));
        }
        Command::Validate { file, json } => {
            let draft = load_draft(&file)?;
            warn_unlisted_choices(&draft);
            let errors = validate_event(&draft);

            if json {
                let form = FormErrors::from_errors(&errors);
                println!("{}", serde_json::to_string_pretty(&form)?);
            } else if errors.is_empty() {
                println!("valid");
            } else {
                for error in &errors {
                    println!("{error}");
                }
            }

            if !errors.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Template { date } => {
            let draft = create_default_event(date.unwrap_or(today));
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        Command::NewId => {
            println!("{}", generate_event_id());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_events(path: Option<&Path>) -> anyhow::Result<Vec<CalendarEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed reading events file {}", path.display()))?;
    let events = parse_events_json(&text)
        .with_context(|| format!("failed parsing events file {}", path.display()))?;

    for event in &events {
        let problems = validate_event(&event.to_draft());
        if !problems.is_empty() {
            let messages: Vec<String> = problems.iter().map(ToString::to_string).collect();
            tracing::warn!(id = %event.id, problems = ?messages, "event fails validation; showing anyway");
        }
    }
    tracing::info!(count = events.len(), path = %path.display(), "loaded events");
    Ok(events)
}

fn load_draft(path: &Path) -> anyhow::Result<EventDraft> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed reading draft file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed parsing draft file {}", path.display()))
}

/// Colors and categories outside the form's lists are accepted but flagged.
fn warn_unlisted_choices(draft: &EventDraft) {
    if let Some(color) = draft.color.as_deref() {
        if color_label(color).is_none() {
            tracing::warn!(%color, "color is not in the event palette");
        }
    }
    if let Some(category) = draft.category.as_deref() {
        if !is_known_category(category) {
            tracing::warn!(%category, "category is not a known event category");
        }
    }
}
