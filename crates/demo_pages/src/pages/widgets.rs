//! Widget-input page: collect input, echo it back, persist one table,
//! preview an uploaded CSV.
//!
//! Script order is the contract: title, text input, slider, age line,
//! color dropdown, color line, conditional greeting, people table
//! (written to the artifact, then displayed), upload control,
//! conditional uploaded-table display.

use std::path::{Path, PathBuf};

use rivulet::widget::{FileUpload, Select, Slider, TextInput};
use rivulet::{Effects, PageScript, RunError, Snapshot, View};
use tabular::Table;

use crate::data;

/// The closed color option set, in display order; `Green` is default.
pub const COLOR_OPTIONS: [&str; 4] = ["Green", "Yellow", "Red", "Blue"];

/// Default artifact path, relative to the working directory.
const DEFAULT_ARTIFACT: &str = "sampledata.csv";

/// Page B: interactive controls plus two data displays.
#[derive(Debug, Clone)]
pub struct WidgetsPage {
    artifact_path: PathBuf,
}

impl WidgetsPage {
    /// Create the page with the default artifact path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT),
        }
    }

    /// Override where the people table is written.
    #[must_use]
    pub fn with_artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact_path = path.into();
        self
    }

    /// The artifact path in use.
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}

impl Default for WidgetsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScript for WidgetsPage {
    fn id(&self) -> &'static str {
        "widgets"
    }

    fn run(&self, snap: &Snapshot, fx: &mut dyn Effects) -> Result<View, RunError> {
        let name = TextInput::new("name", "Enter your name").placeholder("Type here...");
        let age = Slider::new("age", "Select your age", 18, 100);
        let color = Select::new("color", "What is your favorite color?", COLOR_OPTIONS);
        let upload = FileUpload::new("upload", "Choose a file", "csv");

        let mut view = View::new();
        view.title("Widget Input");

        view.push(name.node(snap));
        view.push(age.node(snap));
        view.text(format!("Your age is, {}.", age.value(snap)));

        view.push(color.node(snap));
        view.text(format!("Your favorite color is {}.", color.value(snap)));

        if !name.value(snap).is_empty() {
            view.text(format!("hello, {}", name.value(snap)));
        }

        let people = data::people_table();
        fx.write_table_csv(&self.artifact_path, &people)?;
        view.table(people);

        view.push(upload.node(snap));
        if let Some(file) = upload.file(snap) {
            let table = Table::from_csv_bytes(&file.bytes)?;
            view.table(table);
        }

        Ok(view)
    }
}
