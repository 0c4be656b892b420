//! Type-safe builder for `MirrorConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time
//! validation ensuring that the two required paths are set before a
//! `MirrorConfig` can be built.

use anyhow::{Context, Result};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::MirrorConfig;

/// Resolve a possibly-relative path against the current directory.
///
/// Rewritten content carries these paths verbatim, so they must be absolute
/// for the root-relative extraction exclusion to hold on later runs.
fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}

// Type states for the builder
pub struct WithImageDir;
pub struct Complete;

pub struct MirrorConfigBuilder<State = ()> {
    pub(crate) image_dir: Option<PathBuf>,
    pub(crate) default_image: Option<PathBuf>,
    pub(crate) trusted_prefixes: Vec<String>,
    pub(crate) max_images_per_record: Option<usize>,
    pub(crate) max_records: Option<usize>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for MirrorConfigBuilder<()> {
    fn default() -> Self {
        Self {
            image_dir: None,
            default_image: None,
            trusted_prefixes: Vec::new(),
            max_images_per_record: None,
            max_records: None,
            _phantom: PhantomData,
        }
    }
}

impl MirrorConfig {
    /// Create a builder for configuring a `MirrorConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> MirrorConfigBuilder<()> {
        MirrorConfigBuilder::default()
    }
}

impl<State> MirrorConfigBuilder<State> {
    fn transition<Next>(self) -> MirrorConfigBuilder<Next> {
        MirrorConfigBuilder {
            image_dir: self.image_dir,
            default_image: self.default_image,
            trusted_prefixes: self.trusted_prefixes,
            max_images_per_record: self.max_images_per_record,
            max_records: self.max_records,
            _phantom: PhantomData,
        }
    }

    /// Add one URL prefix exempt from localization.
    #[must_use]
    pub fn trusted_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.trusted_prefixes.push(prefix.into());
        self
    }

    /// Replace the full set of exempt URL prefixes.
    #[must_use]
    pub fn trusted_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.trusted_prefixes = prefixes;
        self
    }

    /// Cap the number of references substituted within one record.
    #[must_use]
    pub fn max_images_per_record(mut self, max: Option<usize>) -> Self {
        self.max_images_per_record = max;
        self
    }

    /// Cap the total number of records processed across the run.
    #[must_use]
    pub fn max_records(mut self, max: Option<usize>) -> Self {
        self.max_records = max;
        self
    }
}

impl MirrorConfigBuilder<()> {
    /// Set the destination directory for downloaded images (required).
    #[must_use]
    pub fn image_dir(mut self, dir: impl Into<PathBuf>) -> MirrorConfigBuilder<WithImageDir> {
        self.image_dir = Some(dir.into());
        self.transition()
    }
}

impl MirrorConfigBuilder<WithImageDir> {
    /// Set the pre-existing fallback image path (required).
    #[must_use]
    pub fn default_image(mut self, path: impl Into<PathBuf>) -> MirrorConfigBuilder<Complete> {
        self.default_image = Some(path.into());
        self.transition()
    }
}

impl MirrorConfigBuilder<Complete> {
    /// Validate and build the configuration.
    ///
    /// Both paths are normalized to absolute. Caps of zero normalize to
    /// `None`: an unset or zeroed form field means unlimited.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved while
    /// normalizing a relative path.
    pub fn build(self) -> Result<MirrorConfig> {
        let image_dir = self
            .image_dir
            .context("image_dir is required (enforced by typestate)")?;
        let default_image = self
            .default_image
            .context("default_image is required (enforced by typestate)")?;

        Ok(MirrorConfig {
            image_dir: absolutize(image_dir)?,
            default_image: absolutize(default_image)?,
            trusted_prefixes: self.trusted_prefixes,
            max_images_per_record: self.max_images_per_record.filter(|max| *max > 0),
            max_records: self.max_records.filter(|max| *max > 0),
        })
    }
}
