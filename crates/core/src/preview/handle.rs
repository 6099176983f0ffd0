//! Owning preview handle.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use docflow_shared::types::PreviewId;
use serde::Serialize;

use super::store::PreviewStore;
use super::types::MediaKind;

/// An ephemeral reference to a registered preview resource.
///
/// The handle owns its registration: dropping it, or calling
/// [`release`](Self::release), unregisters the bytes. It cannot be cloned, so
/// a registration is released exactly once.
#[derive(Debug)]
pub struct PreviewHandle {
    id: PreviewId,
    kind: MediaKind,
    size: usize,
    created_at: DateTime<Utc>,
    store: PreviewStore,
}

impl PreviewHandle {
    pub(super) fn new(
        id: PreviewId,
        kind: MediaKind,
        size: usize,
        created_at: DateTime<Utc>,
        store: PreviewStore,
    ) -> Self {
        Self {
            id,
            kind,
            size,
            created_at,
            store,
        }
    }

    /// Registry identifier.
    #[must_use]
    pub fn id(&self) -> PreviewId {
        self.id
    }

    /// Object-URL style locator (`blob:<uuid>`) for renderers.
    #[must_use]
    pub fn locator(&self) -> String {
        self.id.locator()
    }

    /// Media kind of the previewed attachment.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Size of the registered bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The registered bytes.
    #[must_use]
    pub fn bytes(&self) -> Option<Bytes> {
        self.store.resolve(self.id)
    }

    /// Serializable snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> PreviewView {
        PreviewView {
            locator: self.locator(),
            kind: self.kind,
            size: self.size,
            created_at: self.created_at,
        }
    }

    /// Releases the registration now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.store.revoke(self.id);
    }
}

/// Plain description of a live preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    /// Object-URL style locator.
    pub locator: String,
    /// Media kind.
    pub kind: MediaKind,
    /// Size in bytes.
    pub size: usize,
    /// When the preview was registered.
    pub created_at: DateTime<Utc>,
}
