//! Record and descriptor types shared across storage implementations.

use serde::{Deserialize, Serialize};

/// A public content-type descriptor: machine tag plus human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub slug: String,
    pub label: String,
}

/// One content record as seen by the pipeline.
///
/// Records pre-exist in the store; this system only rewrites the content
/// field, never creates or deletes records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub content: String,
}
