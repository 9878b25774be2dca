//! Per-run widget-value snapshot.
//!
//! The snapshot is the whole input state of a run: a map from stable
//! string widget ids to last-seen values. It replaces the host
//! framework's hidden widget registry. Values are stored raw; widgets
//! apply their own constraints (clamping, closed option sets, extension
//! filters) when they read from the snapshot.

use std::collections::BTreeMap;
use std::fmt;

use crate::event::{Event, UploadedFile};

/// Stable identifier for a widget, chosen by the page author.
///
/// Identity is explicit, never derived from call-site position, so a
/// page can be refactored without dropping user state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raw stored widget value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetValue {
    /// Text field content.
    Text(String),
    /// Slider position.
    Integer(i64),
    /// Dropdown choice label.
    Choice(String),
    /// Uploaded file.
    File(UploadedFile),
}

/// The complete input state for one run.
///
/// Snapshots are cheap to clone and are threaded through [`crate::step`]
/// functionally: the previous snapshot plus one event yields the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    values: BTreeMap<WidgetId, WidgetValue>,
}

impl Snapshot {
    /// An empty snapshot: every widget reports its default value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the snapshot.
    ///
    /// Unknown ids are stored like any other; pages only read the ids
    /// they declare.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::TextChanged { id, value } => {
                self.values.insert(id, WidgetValue::Text(value));
            }
            Event::SliderChanged { id, value } => {
                self.values.insert(id, WidgetValue::Integer(value));
            }
            Event::SelectChanged { id, choice } => {
                self.values.insert(id, WidgetValue::Choice(choice));
            }
            Event::FileUploaded { id, file } => {
                self.values.insert(id, WidgetValue::File(file));
            }
            Event::UploadCleared { id } => {
                self.values.remove(&id);
            }
        }
    }

    /// Functional form of [`Self::apply`].
    #[must_use]
    pub fn with(mut self, event: Event) -> Self {
        self.apply(event);
        self
    }

    /// Raw value stored for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &WidgetId) -> Option<&WidgetValue> {
        self.values.get(id)
    }

    /// Stored text for `id`, when the stored value is text.
    #[must_use]
    pub fn text(&self, id: impl Into<WidgetId>) -> Option<&str> {
        match self.values.get(&id.into()) {
            Some(WidgetValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Stored integer for `id`, when the stored value is an integer.
    #[must_use]
    pub fn integer(&self, id: impl Into<WidgetId>) -> Option<i64> {
        match self.values.get(&id.into()) {
            Some(WidgetValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    /// Stored choice for `id`, when the stored value is a choice.
    #[must_use]
    pub fn choice(&self, id: impl Into<WidgetId>) -> Option<&str> {
        match self.values.get(&id.into()) {
            Some(WidgetValue::Choice(s)) => Some(s),
            _ => None,
        }
    }

    /// Stored file for `id`, when the stored value is a file.
    #[must_use]
    pub fn file(&self, id: impl Into<WidgetId>) -> Option<&UploadedFile> {
        match self.values.get(&id.into()) {
            Some(WidgetValue::File(f)) => Some(f),
            _ => None,
        }
    }

    /// Number of stored widget values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no widget values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_stores_and_overwrites_by_id() {
        let mut snap = Snapshot::new();
        snap.apply(Event::text_changed("name", "Ada"));
        snap.apply(Event::text_changed("name", "Grace"));
        assert_eq!(snap.text("name"), Some("Grace"));
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn typed_getters_reject_mismatched_kinds() {
        let snap = Snapshot::new().with(Event::slider_changed("age", 42));
        assert_eq!(snap.integer("age"), Some(42));
        assert_eq!(snap.text("age"), None);
        assert_eq!(snap.choice("age"), None);
    }

    #[test]
    fn upload_cleared_removes_the_file() {
        let file = UploadedFile::new("data.csv", b"X\n1\n".to_vec());
        let mut snap = Snapshot::new().with(Event::file_uploaded("upload", file));
        assert!(snap.file("upload").is_some());

        snap.apply(Event::UploadCleared {
            id: WidgetId::new("upload"),
        });
        assert!(snap.file("upload").is_none());
        assert!(snap.is_empty());
    }

    #[test]
    fn with_is_functional() {
        let base = Snapshot::new();
        let next = base.clone().with(Event::text_changed("name", "Ada"));
        assert!(base.is_empty());
        assert_eq!(next.text("name"), Some("Ada"));
    }
}
