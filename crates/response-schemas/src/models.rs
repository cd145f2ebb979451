//! Model listing and token counting responses

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Model listing response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListModelsResponse {
    /// Listed models
    pub data: Vec<ModelEntry>,
    /// Paging cursor, empty on the last page
    pub next_page_token: String,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// One listed model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelEntry {
    /// Model identifier
    pub id: String,
    /// Owning organisation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

/// Token counting response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountTokensResponse {
    /// Model the count was computed for
    pub model: String,
    /// Tokens in the input
    pub input_tokens: i64,
    /// Tokens in the output, when the provider reports them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<i64>,
    /// Total tokens, when the provider reports them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<i64>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}
