//! imgmirror localizes externally-hosted images referenced by content records.
//!
//! A batch run scans the published records of the selected content types,
//! extracts remote `<img>` sources, downloads each image into a local
//! directory (substituting a preconfigured default image when the fetch
//! fails), rewrites the content to reference the local copies, and persists
//! the updated records. It runs to completion and reports one
//! [`RecordOutcome`] per processed record.

pub mod batch;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod rewriter;
pub mod storage;
pub mod store;
pub mod utils;

pub use batch::{BatchDriver, RecordOutcome};
pub use config::MirrorConfig;
pub use error::{MirrorError, MirrorResult};
pub use extractor::extract_image_urls;
pub use fetcher::{FetchOutcome, ImageFetcher};
pub use rewriter::ContentRewriter;
pub use storage::{ContentType, JsonRecordStore, Record, RecordStore};
pub use store::LocalStore;

/// Run the full batch over `content_types` against `store`.
///
/// # Errors
///
/// Propagates record-store listing and loading failures.
pub async fn mirror<S>(
    config: &MirrorConfig,
    store: &S,
    content_types: &[String],
) -> MirrorResult<Vec<RecordOutcome>>
where
    S: RecordStore + ?Sized,
{
    BatchDriver::new(config, store).run(content_types).await
}
