//! Sequential batch driver for the localization pipeline.
//!
//! Fully sequential end to end: one content type, one record, one image at a
//! time. A crash mid-run leaves already-processed records updated and later
//! ones untouched; there is no atomicity across the batch and no resume.

use crate::config::MirrorConfig;
use crate::error::MirrorResult;
use crate::extractor::extract_image_urls;
use crate::fetcher::ImageFetcher;
use crate::rewriter::ContentRewriter;
use crate::storage::{Record, RecordStore};
use crate::store::LocalStore;
use serde::{Deserialize, Serialize};

/// Per-record processing summary.
///
/// `count` is the number of references substituted, including those pointed
/// at the default image: "success" means the substitution happened, not that
/// a real image was downloaded. `error` carries a persist failure, surfaced
/// here rather than aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordOutcome {
    pub title: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Drives the extract → fetch → save → rewrite → persist pipeline over a
/// set of content types.
pub struct BatchDriver<'a, S: RecordStore + ?Sized> {
    config: &'a MirrorConfig,
    store: &'a S,
    fetcher: ImageFetcher,
    assets: LocalStore,
}

impl<'a, S: RecordStore + ?Sized> BatchDriver<'a, S> {
    pub fn new(config: &'a MirrorConfig, store: &'a S) -> Self {
        let assets = LocalStore::new(config.image_dir(), config.default_image());
        Self {
            config,
            store,
            fetcher: ImageFetcher::new(),
            assets,
        }
    }

    /// Process every published record of the selected content types.
    ///
    /// Records with empty content are skipped entirely: no update, no
    /// outcome, no progress toward the record cap. The global record cap is
    /// checked after each appended outcome and terminates the whole run,
    /// regardless of remaining types.
    ///
    /// # Errors
    ///
    /// Propagates record-store listing and loading failures; everything
    /// else is handled per image or per record.
    pub async fn run(&self, content_types: &[String]) -> MirrorResult<Vec<RecordOutcome>> {
        let mut outcomes = Vec::new();
        'types: for content_type in content_types {
            let ids = self.store.published_ids(content_type).await?;
            log::info!(
                "Processing {} published record(s) of type '{content_type}'",
                ids.len()
            );
            for id in &ids {
                let Some(record) = self.store.load(id).await? else {
                    log::warn!("Record {id} disappeared from the store, skipping");
                    continue;
                };
                if record.content.is_empty() {
                    log::debug!("Record {id} has no content, skipping");
                    continue;
                }

                outcomes.push(self.process_record(&record).await);

                if self
                    .config
                    .max_records()
                    .is_some_and(|max| outcomes.len() >= max)
                {
                    log::info!(
                        "Global record cap reached after {} record(s), stopping",
                        outcomes.len()
                    );
                    break 'types;
                }
            }
        }
        Ok(outcomes)
    }

    /// Run the per-record pipeline and persist the rewritten content.
    async fn process_record(&self, record: &Record) -> RecordOutcome {
        let urls = extract_image_urls(&record.content, self.config.trusted_prefixes());
        let mut rewriter =
            ContentRewriter::new(record.content.clone(), self.config.max_images_per_record());

        for url in &urls {
            if rewriter.at_capacity() {
                log::debug!(
                    "Image cap reached for record {}, leaving remaining references untouched",
                    record.id
                );
                break;
            }
            let fetched = self.fetcher.fetch(url).await;
            let Some(local_path) = self.assets.save(fetched, url).await else {
                continue;
            };
            rewriter.substitute(url, &local_path.display().to_string());
            log::debug!(
                "Record {}: replaced {url} with {}",
                record.id,
                local_path.display()
            );
        }

        let (content, count) = rewriter.finish();
        let error = match self.store.update_content(&record.id, &content).await {
            Ok(()) => None,
            Err(e) => {
                log::error!("Failed to persist record {}: {e}", record.id);
                Some(e.to_string())
            }
        };
        log::info!("{}: {count} image(s) localized", record.title);

        RecordOutcome {
            title: record.title.clone(),
            count,
            error,
        }
    }
}
