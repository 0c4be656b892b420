//! Record storage seam.
//!
//! The batch driver is generic over [`RecordStore`], a thin abstraction of
//! whatever system owns the content records. [`JsonRecordStore`] is the
//! bundled implementation backed by a directory of JSON documents, used by
//! the CLI and the integration tests.

pub mod json_store;
pub mod types;

pub use json_store::JsonRecordStore;
pub use types::{ContentType, Record};

use crate::error::MirrorResult;
use async_trait::async_trait;

/// Read/write access to the content records being migrated.
///
/// Listing and loading failures are fatal for the run; the driver treats a
/// broken store as unrecoverable. `update_content` failures are surfaced
/// per record instead.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Public content-type descriptors available in the store.
    async fn content_types(&self) -> MirrorResult<Vec<ContentType>>;

    /// IDs of published records of `content_type`, in storage-defined order.
    async fn published_ids(&self, content_type: &str) -> MirrorResult<Vec<String>>;

    /// Load one record by ID; `None` if it no longer exists.
    async fn load(&self, id: &str) -> MirrorResult<Option<Record>>;

    /// Replace the content field of one record.
    async fn update_content(&self, id: &str, content: &str) -> MirrorResult<()>;
}
