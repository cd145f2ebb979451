//! Batch and file lifecycle responses
//!
//! Each lifecycle family is a closed set of operations. The operation is
//! chosen by the caller, so the enums are built by hand rather than decoded
//! from a tag on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ExtraFields;

// ── Batches ──────────────────────────────────────────────────────────

/// A batch job as returned by create, retrieve and cancel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchObject {
    /// Batch identifier
    pub id: String,
    /// Target endpoint of the batched requests
    pub endpoint: String,
    /// Job status ("validating", "in_progress", "completed", ...)
    pub status: String,
    /// Per-request progress
    pub request_counts: BatchRequestCounts,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Per-request progress of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchRequestCounts {
    /// Requests in the batch
    pub total: u64,
    /// Requests finished successfully
    pub completed: u64,
    /// Requests that failed
    pub failed: u64,
}

/// Batch listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchList {
    /// Listed batches
    pub data: Vec<BatchObject>,
    /// More pages available
    pub has_more: bool,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Downloaded batch results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResults {
    /// Batch the results belong to
    pub batch_id: String,
    /// One entry per batched request
    pub results: Vec<Value>,
    /// More pages available
    pub has_more: bool,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Outcome of one batch operation
#[derive(Debug, Clone, PartialEq)]
pub enum BatchResponse {
    /// Batch created
    Create(BatchObject),
    /// Batches listed
    List(BatchList),
    /// Batch retrieved
    Retrieve(BatchObject),
    /// Batch cancelled
    Cancel(BatchObject),
    /// Batch results downloaded
    Results(BatchResults),
}

impl BatchResponse {
    /// Gateway metadata of the wrapped response
    #[must_use]
    pub fn extra_fields(&self) -> &ExtraFields {
        match self {
            Self::Create(b) | Self::Retrieve(b) | Self::Cancel(b) => &b.extra_fields,
            Self::List(l) => &l.extra_fields,
            Self::Results(r) => &r.extra_fields,
        }
    }
}

// ── Files ────────────────────────────────────────────────────────────

/// A stored file as returned by upload and retrieve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileObject {
    /// File identifier
    pub id: String,
    /// Original file name
    pub filename: String,
    /// Size in bytes
    pub bytes: u64,
    /// Declared purpose ("batch", "fine-tune", ...)
    pub purpose: String,
    /// Processing status
    pub status: String,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// File listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileList {
    /// Listed files
    pub data: Vec<FileObject>,
    /// More pages available
    pub has_more: bool,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// File deletion acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeleted {
    /// Deleted file identifier
    pub id: String,
    /// Whether the provider confirmed the deletion
    pub deleted: bool,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Downloaded file content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContent {
    /// File identifier
    pub file_id: String,
    /// Raw content (base64 on the wire)
    #[serde(with = "crate::bytes")]
    pub content: Vec<u8>,
    /// MIME type
    pub content_type: String,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Outcome of one file operation
#[derive(Debug, Clone, PartialEq)]
pub enum FileResponse {
    /// File uploaded
    Upload(FileObject),
    /// Files listed
    List(FileList),
    /// File metadata retrieved
    Retrieve(FileObject),
    /// File deleted
    Delete(FileDeleted),
    /// File content downloaded
    Content(FileContent),
}

impl FileResponse {
    /// Gateway metadata of the wrapped response
    #[must_use]
    pub fn extra_fields(&self) -> &ExtraFields {
        match self {
            Self::Upload(f) | Self::Retrieve(f) => &f.extra_fields,
            Self::List(l) => &l.extra_fields,
            Self::Delete(d) => &d.extra_fields,
            Self::Content(c) => &c.extra_fields,
        }
    }
}
