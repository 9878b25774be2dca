//! The page-script contract and the step function.
//!
//! A page is a pure-ish script: given the current [`Snapshot`] it
//! produces a [`View`], requesting side effects only through the
//! [`Effects`] seam. [`step`] is the external loop's entry point: fold
//! one event into the previous snapshot, re-run the whole page, return
//! the new snapshot with the view.
//!
//! Errors are fatal to the run. There is no retry and no partial
//! recovery; the external loop decides what to show and when to run
//! again.

use thiserror::Error;
use tracing::{debug, error};

use crate::effects::{ArtifactError, Effects};
use crate::event::Event;
use crate::snapshot::Snapshot;
use crate::view::View;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The artifact write failed.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    /// An uploaded file could not be parsed as tabular data.
    #[error("uploaded file is not valid csv: {0}")]
    Upload(#[from] tabular::ParseError),
}

/// A page script, re-run top to bottom on every interaction.
pub trait PageScript {
    /// Stable identifier for the page, used in logs.
    fn id(&self) -> &'static str;

    /// Run the script once against `snap`, producing the view.
    fn run(&self, snap: &Snapshot, fx: &mut dyn Effects) -> Result<View, RunError>;
}

/// Advance a page by one interaction.
///
/// Folds `event` (if any; `None` models the initial load) into `prev`,
/// re-runs the page, and returns the new snapshot together with the
/// view it produced. On error the snapshot is dropped with the run, as
/// the host framework would drop it.
pub fn step<P: PageScript + ?Sized>(
    page: &P,
    prev: Snapshot,
    event: Option<Event>,
    fx: &mut dyn Effects,
) -> Result<(Snapshot, View), RunError> {
    let mut snap = prev;
    if let Some(event) = event {
        debug!(page = page.id(), widget = %event.target(), "event applied");
        snap.apply(event);
    }

    debug!(page = page.id(), widgets = snap.len(), "run started");
    match page.run(&snap, fx) {
        Ok(view) => {
            debug!(page = page.id(), nodes = view.nodes().len(), "run finished");
            Ok((snap, view))
        }
        Err(err) => {
            error!(page = page.id(), %err, "run aborted");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tabular::{Column, Table};

    use crate::effects::MemoryEffects;
    use crate::widget::TextInput;

    use super::*;

    /// A page that greets and writes one artifact per run.
    struct Greeter;

    impl PageScript for Greeter {
        fn id(&self) -> &'static str {
            "greeter"
        }

        fn run(&self, snap: &Snapshot, fx: &mut dyn Effects) -> Result<View, RunError> {
            let name = TextInput::new("name", "Name");
            let table = Table::from_columns(vec![Column::ints("n", [1])]).unwrap();
            fx.write_table_csv(Path::new("greeter.csv"), &table)?;

            let mut view = View::new();
            view.push(name.node(snap));
            if !name.value(snap).is_empty() {
                view.text(format!("hello, {}", name.value(snap)));
            }
            Ok(view)
        }
    }

    #[test]
    fn step_folds_event_then_reruns() {
        let mut fx = MemoryEffects::new();
        let (snap, view) = step(&Greeter, Snapshot::new(), None, &mut fx).unwrap();
        assert!(!view.render_plain().contains("hello,"));

        let (snap, view) = step(
            &Greeter,
            snap,
            Some(Event::text_changed("name", "Ada")),
            &mut fx,
        )
        .unwrap();
        assert!(view.render_plain().contains("hello, Ada"));
        assert_eq!(snap.text("name"), Some("Ada"));
    }

    #[test]
    fn every_step_reruns_the_whole_script() {
        let mut fx = MemoryEffects::new();
        let (snap, _) = step(&Greeter, Snapshot::new(), None, &mut fx).unwrap();
        let _ = step(
            &Greeter,
            snap,
            Some(Event::text_changed("name", "Ada")),
            &mut fx,
        )
        .unwrap();

        // One artifact write per run, not per change.
        assert_eq!(fx.writes(), 2);
    }
}
