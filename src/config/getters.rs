//! Read accessors for `MirrorConfig`.

use super::types::MirrorConfig;
use std::path::Path;

impl MirrorConfig {
    #[must_use]
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    #[must_use]
    pub fn default_image(&self) -> &Path {
        &self.default_image
    }

    #[must_use]
    pub fn trusted_prefixes(&self) -> &[String] {
        &self.trusted_prefixes
    }

    #[must_use]
    pub fn max_images_per_record(&self) -> Option<usize> {
        self.max_images_per_record
    }

    #[must_use]
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }
}
