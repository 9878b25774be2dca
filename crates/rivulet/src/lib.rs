//! # Rivulet
//!
//! A minimal core for "page scripts": stateless scripts that are re-run
//! top to bottom on every user interaction, in the manner of reactive
//! web UI-scripting frameworks.
//!
//! The host framework's implicit machinery is made explicit here:
//!
//! - widget state lives in a per-run [`Snapshot`] keyed by stable string
//!   ids, not in a registry keyed by call-site position;
//! - one interaction is an [`Event`], folded into the snapshot by
//!   [`step`], which then re-runs the whole page;
//! - a run produces a [`View`] — an ordered description of what to
//!   display — rather than driving a renderer directly;
//! - the only side effects (the CSV artifact write) go through the
//!   injectable [`Effects`] seam so tests can use fakes.
//!
//! # Example
//!
//! ```rust
//! use rivulet::{Effects, Event, PageScript, RunError, Snapshot, View, step};
//! use rivulet::widget::TextInput;
//!
//! struct Hello;
//!
//! impl PageScript for Hello {
//!     fn id(&self) -> &'static str {
//!         "hello"
//!     }
//!
//!     fn run(&self, snap: &Snapshot, _fx: &mut dyn Effects) -> Result<View, RunError> {
//!         let name = TextInput::new("name", "Enter your name");
//!         let mut view = View::new();
//!         view.push(name.node(snap));
//!         if !name.value(snap).is_empty() {
//!             view.text(format!("hello, {}", name.value(snap)));
//!         }
//!         Ok(view)
//!     }
//! }
//!
//! let mut fx = rivulet::effects::MemoryEffects::new();
//! let (snap, view) = step(
//!     &Hello,
//!     Snapshot::new(),
//!     Some(Event::text_changed("name", "Ada")),
//!     &mut fx,
//! )
//! .unwrap();
//! assert!(view.render_plain().contains("hello, Ada"));
//! assert_eq!(snap.text("name"), Some("Ada"));
//! ```

pub mod effects;
pub mod event;
pub mod page;
pub mod simulator;
pub mod snapshot;
pub mod view;
pub mod widget;

pub use effects::{ArtifactError, Effects, FsEffects, MemoryEffects};
pub use event::{Event, UploadedFile};
pub use page::{PageScript, RunError, step};
pub use simulator::{PageSimulator, RunStats};
pub use snapshot::{Snapshot, WidgetId, WidgetValue};
pub use view::{View, ViewNode};
