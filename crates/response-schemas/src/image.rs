//! Image generation responses

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Image generation response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageGenerationResponse {
    /// Creation time (unix seconds)
    pub created: u64,
    /// Generated images
    pub data: Vec<ImageData>,
    /// Token accounting (providers that bill image tokens)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ImageUsage>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// One generated image; carries inline data, a URL, or both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageData {
    /// Base64-encoded image
    pub b64_json: String,
    /// Hosted image URL
    pub url: String,
    /// Prompt after provider-side rewriting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// Image token accounting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUsage {
    /// Input tokens
    pub input_tokens: u64,
    /// Output tokens
    pub output_tokens: u64,
    /// Total tokens
    pub total_tokens: u64,
}
