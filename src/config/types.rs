//! Core configuration for a mirror run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide configuration for one batch run.
///
/// Built once via [`MirrorConfig::builder`] and passed by reference to the
/// components that need it; nothing here is ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Destination directory for downloaded images.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder), so
    /// rewritten references start with `/` and are excluded from extraction
    /// on a later run.
    pub(crate) image_dir: PathBuf,

    /// Pre-existing image substituted when a fetch fails. Never written.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) default_image: PathBuf,

    /// URL prefixes exempt from localization (plain string-prefix match).
    pub(crate) trusted_prefixes: Vec<String>,

    /// Cap on references substituted within one record. `None` = unlimited.
    pub(crate) max_images_per_record: Option<usize>,

    /// Cap on records processed across the whole run. `None` = unlimited.
    pub(crate) max_records: Option<usize>,
}
