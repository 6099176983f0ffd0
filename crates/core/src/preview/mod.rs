//! Attachment preview lifecycle.
//!
//! A selected file becomes an [`Attachment`]; if it is an image or a PDF the
//! [`FilePreviewManager`] also registers its bytes in a [`PreviewStore`] and
//! publishes the resulting [`PreviewHandle`], the equivalent of a browser
//! object URL.
//!
//! # Invariants
//!
//! - A manager holds at most one live handle. The old handle is released
//!   before a replacement is allocated.
//! - Every handle is released exactly once. [`PreviewHandle`] is not `Clone`,
//!   release consumes it, and `Drop` performs the release, so teardown of the
//!   manager (including unwinding) frees the resource as well.
//! - Unsupported media types are recorded without a preview; they are not an
//!   error.
//!
//! # Modules
//!
//! - `types` - MediaKind, SelectedFile, Attachment
//! - `store` - Registry of live preview resources
//! - `handle` - Owning preview handle
//! - `manager` - Attachment/preview state for one wizard

mod handle;
mod manager;
mod store;
mod types;

#[cfg(test)]
mod manager_props;

pub use handle::{PreviewHandle, PreviewView};
pub use manager::FilePreviewManager;
pub use store::PreviewStore;
pub use types::{Attachment, MediaKind, SelectedFile};
