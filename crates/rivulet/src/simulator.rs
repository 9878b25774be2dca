//! Page simulator for testing scripts without a host framework.
//!
//! The simulator plays the external event loop: it owns the snapshot,
//! queues events, steps the page one interaction at a time, and records
//! every produced view together with run statistics.

use std::collections::VecDeque;

use crate::effects::MemoryEffects;
use crate::event::Event;
use crate::page::{PageScript, RunError, step};
use crate::snapshot::Snapshot;
use crate::view::View;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Number of completed runs.
    pub runs: usize,
    /// Number of events folded into the snapshot.
    pub events_applied: usize,
    /// Number of runs that aborted with an error.
    pub failed_runs: usize,
}

/// Drives a [`PageScript`] through interactions with in-memory effects.
///
/// # Example
///
/// ```rust
/// use rivulet::{Event, PageSimulator, PageScript, RunError, Snapshot, View, Effects};
///
/// struct Echo;
///
/// impl PageScript for Echo {
///     fn id(&self) -> &'static str {
///         "echo"
///     }
///     fn run(&self, snap: &Snapshot, _fx: &mut dyn Effects) -> Result<View, RunError> {
///         let mut view = View::new();
///         view.text(snap.text("input").unwrap_or("silence"));
///         Ok(view)
///     }
/// }
///
/// let mut sim = PageSimulator::new(Echo);
/// sim.load().unwrap();
/// sim.send(Event::text_changed("input", "hi"));
/// sim.drain().unwrap();
///
/// assert_eq!(sim.stats().runs, 2);
/// assert!(sim.last_view().unwrap().render_plain().contains("hi"));
/// ```
pub struct PageSimulator<P: PageScript> {
    page: P,
    snapshot: Snapshot,
    effects: MemoryEffects,
    queue: VecDeque<Event>,
    views: Vec<View>,
    stats: RunStats,
}

impl<P: PageScript> PageSimulator<P> {
    /// Create a simulator around `page` with an empty snapshot.
    pub fn new(page: P) -> Self {
        Self {
            page,
            snapshot: Snapshot::new(),
            effects: MemoryEffects::new(),
            queue: VecDeque::new(),
            views: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Run the initial load (no event).
    pub fn load(&mut self) -> Result<&View, RunError> {
        self.run_once(None)
    }

    /// Queue an event for a later [`Self::step`] or [`Self::drain`].
    pub fn send(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Apply the next queued event and re-run the page.
    ///
    /// Returns `Ok(None)` when the queue is empty.
    pub fn step(&mut self) -> Result<Option<&View>, RunError> {
        match self.queue.pop_front() {
            Some(event) => self.run_once(Some(event)).map(Some),
            None => Ok(None),
        }
    }

    /// Apply all queued events, re-running the page once per event.
    pub fn drain(&mut self) -> Result<(), RunError> {
        while self.step()?.is_some() {}
        Ok(())
    }

    fn run_once(&mut self, event: Option<Event>) -> Result<&View, RunError> {
        if event.is_some() {
            self.stats.events_applied += 1;
        }
        match step(&self.page, self.snapshot.clone(), event, &mut self.effects) {
            Ok((snapshot, view)) => {
                self.snapshot = snapshot;
                self.views.push(view);
                self.stats.runs += 1;
                Ok(self.views.last().unwrap_or_else(|| unreachable!()))
            }
            Err(err) => {
                self.stats.failed_runs += 1;
                Err(err)
            }
        }
    }

    /// The current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The in-memory effects, for artifact assertions.
    #[must_use]
    pub const fn effects(&self) -> &MemoryEffects {
        &self.effects
    }

    /// All views produced so far, in run order.
    #[must_use]
    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// The most recently produced view.
    #[must_use]
    pub fn last_view(&self) -> Option<&View> {
        self.views.last()
    }

    /// Simulation statistics.
    #[must_use]
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use crate::effects::Effects;
    use crate::widget::Slider;

    use super::*;

    struct AgeLine;

    impl PageScript for AgeLine {
        fn id(&self) -> &'static str {
            "age_line"
        }

        fn run(&self, snap: &Snapshot, _fx: &mut dyn Effects) -> Result<View, RunError> {
            let age = Slider::new("age", "Select your age", 18, 100);
            let mut view = View::new();
            view.push(age.node(snap));
            view.text(format!("Your age is, {}.", age.value(snap)));
            Ok(view)
        }
    }

    #[test]
    fn simulator_runs_once_per_event() {
        let mut sim = PageSimulator::new(AgeLine);
        sim.load().unwrap();
        sim.send(Event::slider_changed("age", 30));
        sim.send(Event::slider_changed("age", 65));
        sim.drain().unwrap();

        assert_eq!(sim.stats().runs, 3);
        assert_eq!(sim.stats().events_applied, 2);
        assert_eq!(sim.views().len(), 3);
        assert!(
            sim.last_view()
                .unwrap()
                .render_plain()
                .contains("Your age is, 65.")
        );
    }

    #[test]
    fn step_on_empty_queue_is_a_noop() {
        let mut sim = PageSimulator::new(AgeLine);
        sim.load().unwrap();
        assert!(sim.step().unwrap().is_none());
        assert_eq!(sim.stats().runs, 1);
    }
}
