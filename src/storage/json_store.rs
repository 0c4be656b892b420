//! Directory-of-JSON-documents record store.
//!
//! Each record lives in `<records_dir>/<id>.json`. Listing order is sorted
//! filename order, which stands in for the storage-defined ordering of a
//! real backend.

use super::types::{ContentType, Record};
use super::RecordStore;
use crate::error::{MirrorError, MirrorResult};
use crate::utils::constants::STATUS_PUBLISHED;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk shape of one record document.
#[derive(Debug, Serialize, Deserialize)]
struct RecordDocument {
    id: String,
    title: String,
    content_type: String,
    status: String,
    content: String,
}

/// Record store backed by a directory of JSON documents.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    records_dir: PathBuf,
}

impl JsonRecordStore {
    pub fn new(records_dir: impl Into<PathBuf>) -> Self {
        Self {
            records_dir: records_dir.into(),
        }
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.records_dir.join(format!("{id}.json"))
    }

    async fn read_document(&self, path: &Path) -> MirrorResult<RecordDocument> {
        let raw = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&raw).map_err(|e| {
            MirrorError::Storage(format!("Malformed record document {}: {e}", path.display()))
        })
    }

    async fn document_paths(&self) -> MirrorResult<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.records_dir).await?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

#[async_trait]
impl RecordStore for JsonRecordStore {
    async fn content_types(&self) -> MirrorResult<Vec<ContentType>> {
        let mut slugs = BTreeSet::new();
        for path in self.document_paths().await? {
            slugs.insert(self.read_document(&path).await?.content_type);
        }
        Ok(slugs
            .into_iter()
            .map(|slug| ContentType {
                label: slug.clone(),
                slug,
            })
            .collect())
    }

    async fn published_ids(&self, content_type: &str) -> MirrorResult<Vec<String>> {
        let mut ids = Vec::new();
        for path in self.document_paths().await? {
            let document = self.read_document(&path).await?;
            if document.status == STATUS_PUBLISHED && document.content_type == content_type {
                ids.push(document.id);
            }
        }
        Ok(ids)
    }

    async fn load(&self, id: &str) -> MirrorResult<Option<Record>> {
        let path = self.record_path(id);
        match self.read_document(&path).await {
            Ok(document) => Ok(Some(Record {
                id: document.id,
                title: document.title,
                content: document.content,
            })),
            Err(MirrorError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_content(&self, id: &str, content: &str) -> MirrorResult<()> {
        let path = self.record_path(id);
        let mut document = self.read_document(&path).await?;
        document.content = content.to_string();
        let raw = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&path, raw).await?;
        Ok(())
    }
}
