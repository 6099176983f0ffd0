//! Attachment and preview state for one wizard.

use tracing::{debug, info};

use super::handle::PreviewHandle;
use super::store::PreviewStore;
use super::types::{Attachment, MediaKind, SelectedFile};

/// Single owner of the current attachment and its preview.
///
/// Every change to the attachment goes through this type, which is what
/// keeps the number of live previews at zero or one.
#[derive(Debug)]
pub struct FilePreviewManager {
    store: PreviewStore,
    attachment: Option<Attachment>,
    preview: Option<PreviewHandle>,
}

impl FilePreviewManager {
    /// Creates a manager registering previews in `store`.
    #[must_use]
    pub fn new(store: PreviewStore) -> Self {
        Self {
            store,
            attachment: None,
            preview: None,
        }
    }

    /// Replaces the current attachment.
    ///
    /// The previous preview, if any, is released before a new one is
    /// allocated. Unsupported types are recorded with no preview.
    pub fn set_attachment(&mut self, file: SelectedFile) -> MediaKind {
        // release first: never two live handles
        if let Some(old) = self.preview.take() {
            debug!(preview_id = %old.id(), "releasing replaced preview");
            old.release();
        }

        let attachment = Attachment::from_file(file);
        let kind = attachment.kind();
        if kind.is_previewable() {
            self.preview = Some(self.store.allocate(attachment.bytes().clone(), kind));
        }

        info!(
            file_name = attachment.file_name(),
            content_type = attachment.content_type(),
            %kind,
            size = attachment.size(),
            "attachment selected"
        );
        self.attachment = Some(attachment);
        kind
    }

    /// Drops the attachment and releases its preview. Idempotent.
    pub fn clear(&mut self) {
        if self.attachment.is_none() && self.preview.is_none() {
            return;
        }
        if let Some(old) = self.preview.take() {
            old.release();
        }
        if let Some(old) = self.attachment.take() {
            info!(file_name = old.file_name(), "attachment cleared");
        }
    }

    /// Applies a file picker result: `None` clears, `Some` replaces.
    pub fn select(&mut self, file: Option<SelectedFile>) -> Option<MediaKind> {
        match file {
            Some(file) => Some(self.set_attachment(file)),
            None => {
                self.clear();
                None
            }
        }
    }

    /// The live preview, if the attachment is previewable.
    #[must_use]
    pub fn current_preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    /// The current attachment, previewable or not.
    #[must_use]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    /// Returns true if an attachment is selected.
    #[must_use]
    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    /// The registry this manager allocates from.
    #[must_use]
    pub fn store(&self) -> &PreviewStore {
        &self.store
    }
}
