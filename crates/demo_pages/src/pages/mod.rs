//! The two demo page scripts.
//!
//! Each page implements [`rivulet::PageScript`]; the external loop (the
//! CLI, the simulator, or a host of your own) owns snapshots and events
//! and re-runs the page per interaction.

mod overview;
mod widgets;

pub use overview::OverviewPage;
pub use widgets::{COLOR_OPTIONS, WidgetsPage};
