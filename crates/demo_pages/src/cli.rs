//! Command-line interface for the demo pages.
//!
//! The binary is the "external event loop" in its simplest batch form:
//! pick a page, optionally script interactions on the command line, and
//! print the final view as plain text.
//!
//! # Examples
//!
//! ```bash
//! # Initial load of the overview page
//! demo_pages --page overview
//!
//! # Widgets page after a few interactions
//! demo_pages --page widgets name=Ada age=42 color=Red
//!
//! # Upload a CSV and preview it
//! demo_pages --page widgets upload=points.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rivulet::{Event, FsEffects, PageScript, Snapshot, UploadedFile, step};
use thiserror::Error;
use tracing::info;

use crate::pages::{OverviewPage, WidgetsPage};

/// Which demo page to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PageChoice {
    /// Title, static text, literal table, random line chart.
    #[default]
    Overview,
    /// Text input, slider, dropdown, artifact table, CSV upload.
    Widgets,
}

/// Demo pages for the rivulet page-script core.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "demo_pages",
    author,
    version,
    about = "Run a demo page script and print its view"
)]
pub struct Cli {
    /// Page to run
    #[arg(long, short = 'p', value_enum, default_value = "overview")]
    pub page: PageChoice,

    /// Where the widgets page writes its CSV artifact
    #[arg(long, default_value = "sampledata.csv", env = "DEMO_ARTIFACT_PATH")]
    pub artifact_path: PathBuf,

    /// Scripted interactions, applied in order before printing
    ///
    /// Forms: `name=TEXT`, `age=N`, `color=LABEL`, `upload=PATH`,
    /// `clear-upload`
    #[arg(value_name = "EVENT")]
    pub events: Vec<String>,
}

/// Errors raised while parsing a scripted interaction.
#[derive(Debug, Error)]
pub enum EventParseError {
    /// The argument had no `key=value` shape and is not a known keyword.
    #[error("unrecognized event '{0}' (expected key=value)")]
    Unrecognized(String),
    /// The key names no widget on any demo page.
    #[error("unknown widget '{0}'")]
    UnknownWidget(String),
    /// An `age=` value was not an integer.
    #[error("age '{0}' is not an integer")]
    BadAge(String),
}

/// Parse one scripted interaction into an [`Event`].
///
/// `upload=PATH` produces an event carrying only the path as its file
/// name; the caller loads the bytes (see [`load_upload`]) so parsing
/// stays IO-free.
pub fn parse_event(arg: &str) -> Result<Event, EventParseError> {
    if arg == "clear-upload" {
        return Ok(Event::UploadCleared {
            id: "upload".into(),
        });
    }
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| EventParseError::Unrecognized(arg.to_string()))?;
    match key {
        "name" => Ok(Event::text_changed("name", value)),
        "age" => value.parse().map_or_else(
            |_| Err(EventParseError::BadAge(value.to_string())),
            |age| Ok(Event::slider_changed("age", age)),
        ),
        "color" => Ok(Event::select_changed("color", value)),
        "upload" => Ok(Event::file_uploaded(
            "upload",
            UploadedFile::new(value, Vec::new()),
        )),
        other => Err(EventParseError::UnknownWidget(other.to_string())),
    }
}

/// Replace an upload event's placeholder bytes with the file's content.
fn load_upload(event: Event) -> anyhow::Result<Event> {
    match event {
        Event::FileUploaded { id, file } => {
            let path = Path::new(&file.name);
            let bytes = fs::read(path)
                .with_context(|| format!("cannot read upload '{}'", path.display()))?;
            let name = path
                .file_name()
                .map_or_else(|| file.name.clone(), |n| n.to_string_lossy().into_owned());
            Ok(Event::FileUploaded {
                id,
                file: UploadedFile::new(name, bytes),
            })
        }
        other => Ok(other),
    }
}

/// Run the chosen page against the scripted events and render the
/// final view as plain text.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match cli.page {
        PageChoice::Overview => run_page(&OverviewPage::new(), &cli.events),
        PageChoice::Widgets => run_page(
            &WidgetsPage::new().with_artifact_path(&cli.artifact_path),
            &cli.events,
        ),
    }
}

fn run_page<P: PageScript>(page: &P, events: &[String]) -> anyhow::Result<String> {
    let mut fx = FsEffects::new();

    // Initial load, then one full re-run per scripted interaction.
    let (mut snap, mut view) = step(page, Snapshot::new(), None, &mut fx)?;
    for arg in events {
        let event = load_upload(parse_event(arg)?)?;
        (snap, view) = step(page, snap, Some(event), &mut fx)?;
    }
    info!(page = page.id(), events = events.len(), "final view rendered");
    Ok(view.render_plain())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_page_and_events() {
        let cli = Cli::parse_from(["demo_pages", "--page", "widgets", "name=Ada", "age=42"]);
        assert_eq!(cli.page, PageChoice::Widgets);
        assert_eq!(cli.events, vec!["name=Ada", "age=42"]);
        assert_eq!(cli.artifact_path, PathBuf::from("sampledata.csv"));
    }

    #[test]
    fn event_grammar_round_trips() {
        assert_eq!(
            parse_event("name=Ada").unwrap(),
            Event::text_changed("name", "Ada")
        );
        assert_eq!(
            parse_event("age=42").unwrap(),
            Event::slider_changed("age", 42)
        );
        assert_eq!(
            parse_event("color=Red").unwrap(),
            Event::select_changed("color", "Red")
        );
        assert!(matches!(
            parse_event("upload=points.csv").unwrap(),
            Event::FileUploaded { .. }
        ));
        assert!(matches!(
            parse_event("clear-upload").unwrap(),
            Event::UploadCleared { .. }
        ));
    }

    #[test]
    fn bad_events_are_rejected() {
        assert!(matches!(
            parse_event("age=old").unwrap_err(),
            EventParseError::BadAge(_)
        ));
        assert!(matches!(
            parse_event("volume=11").unwrap_err(),
            EventParseError::UnknownWidget(_)
        ));
        assert!(matches!(
            parse_event("gibberish").unwrap_err(),
            EventParseError::Unrecognized(_)
        ));
    }

    #[test]
    fn run_widgets_page_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("out.csv");
        let cli = Cli::parse_from([
            "demo_pages",
            "--page",
            "widgets",
            "--artifact-path",
            artifact.to_str().unwrap(),
            "name=Ada",
            "age=42",
            "color=Red",
        ]);

        let out = run(&cli).unwrap();
        assert!(out.contains("hello, Ada"));
        assert!(out.contains("Your age is, 42."));
        assert!(out.contains("Your favorite color is Red."));

        let written = fs::read_to_string(&artifact).unwrap();
        assert!(written.starts_with("Name,Age,City\n"));
    }

    #[test]
    fn run_overview_page_prints_chart_shape() {
        let cli = Cli::parse_from(["demo_pages", "--page", "overview"]);
        let out = run(&cli).unwrap();
        assert!(out.contains("# Overview"));
        assert!(out.contains("[line chart: 20 rows x 3 series (a, b, c)]"));
    }
}
