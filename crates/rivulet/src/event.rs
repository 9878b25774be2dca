//! Event taxonomy for page interactions.
//!
//! Every user interaction that can change a widget's value is one of
//! these events. Events carry the stable widget id they target; the
//! snapshot folds them in without knowing which page owns the widget.

use crate::snapshot::WidgetId;

/// A file handed to an upload widget: the client-side file name plus
/// the raw bytes. Content is not inspected until a page parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as presented by the uploader (used for the extension
    /// filter).
    pub name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file from a name and its content.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether the file name ends with `.{ext}`, case-insensitively.
    #[must_use]
    pub fn has_extension(&self, ext: &str) -> bool {
        let suffix = format!(".{}", ext.to_ascii_lowercase());
        self.name.to_ascii_lowercase().ends_with(&suffix)
    }
}

/// One user interaction, targeted at a widget by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A text field's content changed.
    TextChanged {
        /// Target widget id.
        id: WidgetId,
        /// New field content (possibly empty).
        value: String,
    },
    /// A slider moved.
    SliderChanged {
        /// Target widget id.
        id: WidgetId,
        /// New raw position; widgets clamp to their own bounds on read.
        value: i64,
    },
    /// A dropdown selection changed.
    SelectChanged {
        /// Target widget id.
        id: WidgetId,
        /// Chosen option label; widgets fall back to their default when
        /// the label is outside their option set.
        choice: String,
    },
    /// A file was provided to an upload widget.
    FileUploaded {
        /// Target widget id.
        id: WidgetId,
        /// The provided file.
        file: UploadedFile,
    },
    /// An upload widget's file was cleared.
    UploadCleared {
        /// Target widget id.
        id: WidgetId,
    },
}

impl Event {
    /// Convenience constructor for [`Event::TextChanged`].
    pub fn text_changed(id: impl Into<WidgetId>, value: impl Into<String>) -> Self {
        Self::TextChanged {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Convenience constructor for [`Event::SliderChanged`].
    pub fn slider_changed(id: impl Into<WidgetId>, value: i64) -> Self {
        Self::SliderChanged {
            id: id.into(),
            value,
        }
    }

    /// Convenience constructor for [`Event::SelectChanged`].
    pub fn select_changed(id: impl Into<WidgetId>, choice: impl Into<String>) -> Self {
        Self::SelectChanged {
            id: id.into(),
            choice: choice.into(),
        }
    }

    /// Convenience constructor for [`Event::FileUploaded`].
    pub fn file_uploaded(id: impl Into<WidgetId>, file: UploadedFile) -> Self {
        Self::FileUploaded {
            id: id.into(),
            file,
        }
    }

    /// The widget id this event targets.
    #[must_use]
    pub const fn target(&self) -> &WidgetId {
        match self {
            Self::TextChanged { id, .. }
            | Self::SliderChanged { id, .. }
            | Self::SelectChanged { id, .. }
            | Self::FileUploaded { id, .. }
            | Self::UploadCleared { id } => id,
        }
    }
}
