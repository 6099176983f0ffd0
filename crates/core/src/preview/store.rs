//! Registry of live preview resources.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use chrono::Utc;
use dashmap::DashMap;
use docflow_shared::types::PreviewId;
use tracing::{debug, trace};

use super::handle::PreviewHandle;
use super::types::MediaKind;

/// Process-local registry of preview resources.
///
/// Cloning is cheap and every clone refers to the same registry. Entries are
/// only added by [`allocate`](Self::allocate) and only removed when the owning
/// [`PreviewHandle`] is released.
#[derive(Debug, Clone, Default)]
pub struct PreviewStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    entries: DashMap<PreviewId, Bytes>,
    allocated: AtomicU64,
    released: AtomicU64,
}

impl PreviewStore {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` and returns the owning handle.
    pub(crate) fn allocate(&self, bytes: Bytes, kind: MediaKind) -> PreviewHandle {
        let id = PreviewId::new();
        let size = bytes.len();
        self.inner.entries.insert(id, bytes);
        self.inner.allocated.fetch_add(1, Ordering::Relaxed);
        debug!(preview_id = %id, %kind, size, "preview allocated");
        PreviewHandle::new(id, kind, size, Utc::now(), self.clone())
    }

    /// Removes a registration. Called from `PreviewHandle::drop` only.
    pub(super) fn revoke(&self, id: PreviewId) {
        let removed = self.inner.entries.remove(&id).is_some();
        debug_assert!(removed, "preview {id} released twice");
        if removed {
            self.inner.released.fetch_add(1, Ordering::Relaxed);
            trace!(preview_id = %id, "preview released");
        }
    }

    /// Returns the bytes behind a live preview.
    #[must_use]
    pub fn resolve(&self, id: PreviewId) -> Option<Bytes> {
        self.inner.entries.get(&id).map(|entry| entry.value().clone())
    }

    /// Returns true if the preview is still registered.
    #[must_use]
    pub fn is_live(&self, id: PreviewId) -> bool {
        self.inner.entries.contains_key(&id)
    }

    /// Number of registered (unreleased) previews.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.inner.entries.len()
    }

    /// Total previews ever allocated by this registry.
    #[must_use]
    pub fn allocated_total(&self) -> u64 {
        self.inner.allocated.load(Ordering::Relaxed)
    }

    /// Total previews released so far.
    #[must_use]
    pub fn released_total(&self) -> u64 {
        self.inner.released.load(Ordering::Relaxed)
    }
}
