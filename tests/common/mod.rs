//! Test utilities and helper functions for the imgmirror test suite

use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes one record document into a JSON record store directory
#[allow(dead_code)]
pub async fn seed_record(
    records_dir: &Path,
    id: &str,
    title: &str,
    content_type: &str,
    status: &str,
    content: &str,
) {
    let document = json!({
        "id": id,
        "title": title,
        "content_type": content_type,
        "status": status,
        "content": content,
    });
    let raw = serde_json::to_string_pretty(&document).expect("Failed to serialize record");
    tokio::fs::write(records_dir.join(format!("{id}.json")), raw)
        .await
        .expect("Failed to seed record");
}

/// Reads the content field of a stored record back out
#[allow(dead_code)]
pub async fn stored_content(records_dir: &Path, id: &str) -> String {
    let raw = tokio::fs::read_to_string(records_dir.join(format!("{id}.json")))
        .await
        .expect("Failed to read record");
    let document: serde_json::Value = serde_json::from_str(&raw).expect("Malformed record");
    document["content"]
        .as_str()
        .expect("content is a string")
        .to_string()
}

/// Creates the pre-existing default image a run falls back to
#[allow(dead_code)]
pub async fn write_default_image(dir: &Path) -> PathBuf {
    let path = dir.join("default_image.jpg");
    tokio::fs::write(&path, b"default image bytes")
        .await
        .expect("Failed to write default image");
    path
}
