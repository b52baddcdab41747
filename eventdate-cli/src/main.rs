mod render;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use eventdate_core::{Config, MeaningfulEvent, enrich_event_with_date, parse_relative_date};
use log::debug;
use render::{ColorMode, RenderOptions, Renderer};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

/// eventdate — find relative dates like "in two weeks" or "next weekend" in text
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Use this date as today (e.g., `--today 2025-08-15`). Overrides `reference_date` in the config.
    #[arg(long, env = "EVENTDATE_TODAY", value_parser = parse_today)]
    today: Option<NaiveDate>,
    /// Print results as JSON, one object per input.
    #[arg(long)]
    json: bool,
    /// Print a meaningful-event record of this type (e.g., `birthday`). Implies `--json`.
    #[arg(long, value_name = "TYPE")]
    event_type: Option<String>,
    /// Agent note stored with the event record.
    #[arg(long, value_name = "TEXT", requires = "event_type")]
    note: Option<String>,
    /// JSON value stored as the event's `metadata` (e.g., `'{"channel":"chat"}'`).
    #[arg(long, value_name = "JSON", requires = "event_type", value_parser = parse_metadata)]
    metadata: Option<serde_json::Value>,
    /// Read one description per line from a file, or from stdin with `-`.
    #[arg(long, short, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,
    /// One line per result: ISO date, urgency and matched phrase.
    #[arg(long, short)]
    short: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Free text to scan (e.g., `eventdate her birthday is next weekend`).
    #[arg()]
    text: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("eventdate: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let mut options = config.parse_options();
    if let Some(today) = cli.today {
        options.reference_date = Some(today);
    }
    debug!("reference date: {:?}", options.reference_date);

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        use_color: cli.color.use_color(),
        short_mode: cli.short,
    }));

    let inputs = match &cli.file {
        Some(path) => read_inputs(path)?,
        None if !cli.text.is_empty() => vec![cli.text.join(" ")],
        None => {
            renderer.print_info("Nothing to parse. Pass some text or `--file <PATH>`.");
            return Ok(());
        }
    };

    for input in &inputs {
        if let Some(event_type) = &cli.event_type {
            let mut event = MeaningfulEvent::new(event_type.as_str(), input.as_str(), Some(options))
                .captured_at(Local::now().naive_local());
            if let Some(note) = &cli.note {
                event = event.agent_note(note.as_str());
            }
            if let Some(metadata) = &cli.metadata {
                event = event.metadata(metadata.clone());
            }
            renderer.print_json(&event)?;
        } else if cli.json {
            renderer.print_json(&enrich_event_with_date(input, Some(options)))?;
        } else {
            renderer.print_result(input, &parse_relative_date(input, Some(options)));
        }
    }

    Ok(())
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}', expected YYYY-MM-DD: {e}"))
}

fn parse_metadata(s: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid metadata JSON: {e}"))
}

/// Non-blank lines of `path`, or of stdin when `path` is `-`.
fn read_inputs(path: &Path) -> Result<Vec<String>> {
    let lines: Vec<String> = if path == Path::new("-") {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("reading stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .with_context(|| format!("reading {}", path.display()))?
    };

    Ok(lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect())
}
