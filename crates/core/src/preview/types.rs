//! Attachment types.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

/// Media classification derived from a declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Any `image/*` type.
    Image,
    /// `application/pdf`.
    Pdf,
    /// Anything else; kept as an attachment but never previewed.
    Unsupported,
}

impl MediaKind {
    /// Classifies a declared content type.
    ///
    /// Matching is ASCII case-insensitive and ignores MIME parameters.
    /// A bare `image/` with no subtype is `Unsupported`, not `Image`.
    #[must_use]
    pub fn classify(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.strip_prefix("image/") {
            Some(subtype) if !subtype.is_empty() => Self::Image,
            _ if essence == "application/pdf" => Self::Pdf,
            _ => Self::Unsupported,
        }
    }

    /// Returns true if a preview can be produced for this kind.
    #[must_use]
    pub fn is_previewable(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file handed over by the file picker.
///
/// Content and size are never inspected; only the declared type is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name.
    pub file_name: String,
    /// Declared MIME type.
    pub content_type: String,
    /// Raw content.
    pub bytes: Bytes,
}

impl SelectedFile {
    /// Creates a selected file.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// The document currently selected for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    content_type: String,
    kind: MediaKind,
    bytes: Bytes,
}

impl Attachment {
    /// Classifies a selected file into an attachment.
    #[must_use]
    pub fn from_file(file: SelectedFile) -> Self {
        Self {
            kind: MediaKind::classify(&file.content_type),
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        }
    }

    /// Original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared MIME type, as supplied.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Media classification.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Raw content.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Content length in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
