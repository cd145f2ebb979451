//! Gateway-supplied metadata attached to every response

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operation discriminator set by the gateway on each response
///
/// Tags this model does not know (streaming variants, newer operations) are
/// kept verbatim in [`RequestType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestType {
    /// Chat completion
    ChatCompletion,
    /// Legacy text completion
    TextCompletion,
    /// Item-stream responses API
    Responses,
    /// Speech synthesis
    Speech,
    /// Audio transcription
    Transcription,
    /// Image generation
    ImageGeneration,
    /// Embeddings
    Embedding,
    /// Model listing
    ListModels,
    /// Token counting
    CountTokens,
    /// Batch creation
    BatchCreate,
    /// Batch listing
    BatchList,
    /// Batch retrieval
    BatchRetrieve,
    /// Batch cancellation
    BatchCancel,
    /// Batch results download
    BatchResults,
    /// File upload
    FileUpload,
    /// File listing
    FileList,
    /// File retrieval
    FileRetrieve,
    /// File deletion
    FileDelete,
    /// File content download
    FileContent,
    /// Any other tag, as received
    Other(String),
}

const KNOWN: [RequestType; 19] = [
    RequestType::ChatCompletion,
    RequestType::TextCompletion,
    RequestType::Responses,
    RequestType::Speech,
    RequestType::Transcription,
    RequestType::ImageGeneration,
    RequestType::Embedding,
    RequestType::ListModels,
    RequestType::CountTokens,
    RequestType::BatchCreate,
    RequestType::BatchList,
    RequestType::BatchRetrieve,
    RequestType::BatchCancel,
    RequestType::BatchResults,
    RequestType::FileUpload,
    RequestType::FileList,
    RequestType::FileRetrieve,
    RequestType::FileDelete,
    RequestType::FileContent,
];

impl RequestType {
    /// Wire name of the discriminator
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ChatCompletion => "chat_completion",
            Self::TextCompletion => "text_completion",
            Self::Responses => "responses",
            Self::Speech => "speech",
            Self::Transcription => "transcription",
            Self::ImageGeneration => "image_generation",
            Self::Embedding => "embedding",
            Self::ListModels => "list_models",
            Self::CountTokens => "count_tokens",
            Self::BatchCreate => "batch_create",
            Self::BatchList => "batch_list",
            Self::BatchRetrieve => "batch_retrieve",
            Self::BatchCancel => "batch_cancel",
            Self::BatchResults => "batch_results",
            Self::FileUpload => "file_upload",
            Self::FileList => "file_list",
            Self::FileRetrieve => "file_retrieve",
            Self::FileDelete => "file_delete",
            Self::FileContent => "file_content",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for RequestType {
    fn from(tag: String) -> Self {
        KNOWN
            .into_iter()
            .find(|known| known.as_str() == tag)
            .unwrap_or(Self::Other(tag))
    }
}

impl From<RequestType> for String {
    fn from(request_type: RequestType) -> Self {
        match request_type {
            RequestType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata the gateway attaches to a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraFields {
    /// Provider that served the request (e.g. "openai")
    pub provider: String,
    /// Model or deployment name the request was routed to
    pub model_deployment: String,
    /// Operation discriminator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    /// Measured latency in milliseconds
    #[serde(rename = "latency")]
    pub latency_ms: i64,
}

impl ExtraFields {
    /// Request type rendered for diagnostics, empty when unset
    #[must_use]
    pub fn request_type_name(&self) -> &str {
        self.request_type.as_ref().map_or("", RequestType::as_str)
    }
}
