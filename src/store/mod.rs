//! Local persistence of fetched image bytes.
//!
//! Destination names are keyed by URL basename only, so two sources ending
//! in the same filename overwrite each other. Accepted limitation of the
//! migration: the last write wins, exactly as a re-run would behave.

use crate::fetcher::FetchOutcome;
use crate::utils::filename_from_url;
use std::path::PathBuf;

/// Writes downloaded images under a single local directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    image_dir: PathBuf,
    default_image: PathBuf,
}

impl LocalStore {
    pub fn new(image_dir: impl Into<PathBuf>, default_image: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            default_image: default_image.into(),
        }
    }

    /// Resolve one fetched image to its local path.
    ///
    /// - `Fallback` resolves to the preconfigured default image, which is
    ///   assumed to already exist; nothing is written.
    /// - `Bytes` lands at `<image_dir>/<basename-of-source-url>`, silently
    ///   overwriting any previous file of that name.
    ///
    /// Returns `None` when no filename can be derived from the URL or the
    /// write fails; the caller skips that one image and continues.
    pub async fn save(&self, outcome: FetchOutcome, source_url: &str) -> Option<PathBuf> {
        let data = match outcome {
            FetchOutcome::Fallback => return Some(self.default_image.clone()),
            FetchOutcome::Bytes(data) => data,
        };

        let Some(filename) = filename_from_url(source_url) else {
            log::warn!("No usable filename in {source_url}, skipping image");
            return None;
        };
        let destination = self.image_dir.join(filename);

        if let Err(e) = tokio::fs::create_dir_all(&self.image_dir).await {
            log::warn!(
                "Failed to create image directory {}: {e}, skipping image",
                self.image_dir.display()
            );
            return None;
        }

        match tokio::fs::write(&destination, &data).await {
            Ok(()) => {
                log::debug!(
                    "Saved {} bytes from {source_url} to {}",
                    data.len(),
                    destination.display()
                );
                Some(destination)
            }
            Err(e) => {
                log::warn!(
                    "Failed to write {}: {e}, skipping image",
                    destination.display()
                );
                None
            }
        }
    }
}
