//! Typed widget declarations.
//!
//! A widget is declared inside a page's `run` with a stable id, a label,
//! and its structural constraints. It never holds state of its own:
//! [`value`](Slider::value)-style accessors resolve the current value
//! from the run's [`Snapshot`], applying the widget's constraints on the
//! way out (clamping, closed option sets, extension filters), and
//! `node` emits the matching [`ViewNode`].
//!
//! Constraints live here, not in validation code: a slider cannot yield
//! an out-of-range value and a select cannot yield an option outside its
//! set, no matter what the snapshot holds.

use crate::event::UploadedFile;
use crate::snapshot::{Snapshot, WidgetId};
use crate::view::ViewNode;

/// A single-line text input with a placeholder default.
#[derive(Debug, Clone)]
pub struct TextInput {
    id: WidgetId,
    label: String,
    placeholder: String,
}

impl TextInput {
    /// Declare a text input.
    pub fn new(id: impl Into<WidgetId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            placeholder: String::new(),
        }
    }

    /// Set the placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current field content; empty until the user types.
    ///
    /// The text is intentionally unvalidated and unsanitized.
    #[must_use]
    pub fn value<'a>(&self, snap: &'a Snapshot) -> &'a str {
        snap.text(self.id.clone()).unwrap_or("")
    }

    /// Emit the view node for this widget.
    #[must_use]
    pub fn node(&self, snap: &Snapshot) -> ViewNode {
        ViewNode::TextInput {
            id: self.id.clone(),
            label: self.label.clone(),
            placeholder: self.placeholder.clone(),
            value: self.value(snap).to_string(),
        }
    }
}

/// An integer slider over an inclusive range.
#[derive(Debug, Clone)]
pub struct Slider {
    id: WidgetId,
    label: String,
    min: i64,
    max: i64,
}

impl Slider {
    /// Declare a slider over `[min, max]`.
    ///
    /// An inverted range is normalized by swapping the bounds.
    pub fn new(id: impl Into<WidgetId>, label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// The slider's default position: the midpoint of its range.
    #[must_use]
    pub const fn default_value(&self) -> i64 {
        self.min + (self.max - self.min) / 2
    }

    /// Current position, clamped to the range; midpoint until moved.
    #[must_use]
    pub fn value(&self, snap: &Snapshot) -> i64 {
        snap.integer(self.id.clone())
            .map_or_else(|| self.default_value(), |v| v.clamp(self.min, self.max))
    }

    /// Emit the view node for this widget.
    #[must_use]
    pub fn node(&self, snap: &Snapshot) -> ViewNode {
        ViewNode::Slider {
            id: self.id.clone(),
            label: self.label.clone(),
            min: self.min,
            max: self.max,
            value: self.value(snap),
        }
    }
}

/// A single-choice dropdown over a closed option set.
#[derive(Debug, Clone)]
pub struct Select {
    id: WidgetId,
    label: String,
    options: Vec<String>,
}

impl Select {
    /// Declare a dropdown; the first option is the default selection.
    ///
    /// An empty option set is a page-authoring bug; accessors then
    /// resolve to the empty string.
    pub fn new<S: Into<String>>(
        id: impl Into<WidgetId>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Currently selected option.
    ///
    /// A stored choice outside the option set falls back to the default
    /// rather than erroring; the set is closed by construction.
    #[must_use]
    pub fn value<'a>(&'a self, snap: &'a Snapshot) -> &'a str {
        let default = self.options.first().map_or("", String::as_str);
        snap.choice(self.id.clone()).map_or(default, |choice| {
            if self.options.iter().any(|o| o == choice) {
                choice
            } else {
                default
            }
        })
    }

    /// Emit the view node for this widget.
    #[must_use]
    pub fn node(&self, snap: &Snapshot) -> ViewNode {
        ViewNode::Select {
            id: self.id.clone(),
            label: self.label.clone(),
            options: self.options.clone(),
            selected: self.value(snap).to_string(),
        }
    }
}

/// A file-upload control restricted to one file extension.
#[derive(Debug, Clone)]
pub struct FileUpload {
    id: WidgetId,
    label: String,
    accept: String,
}

impl FileUpload {
    /// Declare an upload control accepting files ending in `.{accept}`.
    pub fn new(
        id: impl Into<WidgetId>,
        label: impl Into<String>,
        accept: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accept: accept.into(),
        }
    }

    /// The currently uploaded file, only when it passes the extension
    /// filter. Rejection happens here, before any content is read.
    #[must_use]
    pub fn file<'a>(&self, snap: &'a Snapshot) -> Option<&'a UploadedFile> {
        snap.file(self.id.clone())
            .filter(|f| f.has_extension(&self.accept))
    }

    /// A file that was offered but failed the extension filter, if any.
    #[must_use]
    pub fn rejected<'a>(&self, snap: &'a Snapshot) -> Option<&'a UploadedFile> {
        snap.file(self.id.clone())
            .filter(|f| !f.has_extension(&self.accept))
    }

    /// Emit the view node for this widget.
    #[must_use]
    pub fn node(&self, snap: &Snapshot) -> ViewNode {
        ViewNode::FileUpload {
            id: self.id.clone(),
            label: self.label.clone(),
            accept: self.accept.clone(),
            file_name: self.file(snap).map(|f| f.name.clone()),
            rejected: self.rejected(snap).map(|f| f.name.clone()),
        }
    }
}
