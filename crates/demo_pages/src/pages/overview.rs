//! Overview page: title, static text, a literal table, a random chart.
//!
//! The page takes no input and persists nothing; the chart data is
//! resampled on every run, unseeded, so no two runs show the same
//! lines.

use rivulet::{Effects, PageScript, RunError, Snapshot, View};

use crate::data;

/// Page A: a fixed display with one random element.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverviewPage;

impl OverviewPage {
    /// Create the overview page.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PageScript for OverviewPage {
    fn id(&self) -> &'static str {
        "overview"
    }

    fn run(&self, _snap: &Snapshot, _fx: &mut dyn Effects) -> Result<View, RunError> {
        let mut view = View::new();
        view.title("Overview");
        view.text("Simple word");
        view.text("Here's our first attempt at using data to create a table:");
        view.table(data::overview_table());
        view.line_chart(data::chart_table(&mut rand::rng()));
        Ok(view)
    }
}
