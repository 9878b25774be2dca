//! Demo pages for the rivulet page-script core.
//!
//! Two independent, stateless pages:
//!
//! - [`pages::OverviewPage`]: title, static text, a small literal table,
//!   and a line chart over freshly sampled random data.
//! - [`pages::WidgetsPage`]: text input, slider, dropdown, conditional
//!   greeting, a fixed table written to a CSV artifact and displayed,
//!   and a CSV upload with parse-and-display.
//!
//! Each run is a full top-to-bottom re-execution; the only thing that
//! outlives a run is the CSV artifact, overwritten every time.

pub mod cli;
pub mod data;
pub mod pages;

pub use pages::{OverviewPage, WidgetsPage};
