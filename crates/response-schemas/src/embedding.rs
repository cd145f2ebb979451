//! Embedding responses

use serde::{Deserialize, Serialize};

use crate::{ExtraFields, Usage};

/// Embedding response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingResponse {
    /// Model that produced the embeddings
    pub model: String,
    /// One entry per input
    pub data: Vec<EmbeddingData>,
    /// Token accounting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// One embedding entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingData {
    /// Input position
    #[serde(default)]
    pub index: u32,
    /// The vector
    pub embedding: EmbeddingVector,
}

/// Embedding vector shapes seen across providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingVector {
    /// Flat vector
    Flat(Vec<f32>),
    /// Vector of vectors; the first row is the embedding
    Nested(Vec<Vec<f32>>),
    /// Base64-encoded vector
    Encoded(String),
}

impl EmbeddingVector {
    /// Dimensionality of the vector, 0 for encoded or empty nested vectors
    #[must_use]
    pub fn dimensions(&self) -> usize {
        match self {
            Self::Flat(values) => values.len(),
            Self::Nested(rows) => rows.first().map_or(0, Vec::len),
            Self::Encoded(_) => 0,
        }
    }
}
