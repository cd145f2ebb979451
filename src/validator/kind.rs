//! Response kinds and kind-generic views
//!
//! [`ResponseRef`] lets one entry point accept any kind without copying the
//! response. [`AnyResponse`] owns a response decoded from JSON and lends a
//! [`ResponseRef`] out of it.

use std::fmt;

use response_schemas::{
    BatchList, BatchObject, BatchResponse, BatchResults, ChatResponse, CountTokensResponse,
    EmbeddingResponse, FileContent, FileDeleted, FileList, FileObject, FileResponse,
    ImageGenerationResponse, ListModelsResponse, ResponsesResponse, SpeechResponse,
    TextCompletionResponse, TranscriptionResponse,
};
use serde::Serialize;

/// Every operation whose outcome can be validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    /// Chat completion
    Chat,
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
    /// File metadata retrieval
    FileRetrieve,
    /// File deletion
    FileDelete,
    /// File content download
    FileContent,
}

impl ResponseKind {
    /// Kebab-case name, as accepted on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::TextCompletion => "text-completion",
            Self::Responses => "responses",
            Self::Speech => "speech",
            Self::Transcription => "transcription",
            Self::ImageGeneration => "image-generation",
            Self::Embedding => "embedding",
            Self::ListModels => "list-models",
            Self::CountTokens => "count-tokens",
            Self::BatchCreate => "batch-create",
            Self::BatchList => "batch-list",
            Self::BatchRetrieve => "batch-retrieve",
            Self::BatchCancel => "batch-cancel",
            Self::BatchResults => "batch-results",
            Self::FileUpload => "file-upload",
            Self::FileList => "file-list",
            Self::FileRetrieve => "file-retrieve",
            Self::FileDelete => "file-delete",
            Self::FileContent => "file-content",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed response of any kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseRef<'a> {
    /// Chat completion
    Chat(&'a ChatResponse),
    /// Legacy text completion
    TextCompletion(&'a TextCompletionResponse),
    /// Item-stream responses API
    Responses(&'a ResponsesResponse),
    /// Speech synthesis
    Speech(&'a SpeechResponse),
    /// Audio transcription
    Transcription(&'a TranscriptionResponse),
    /// Image generation
    ImageGeneration(&'a ImageGenerationResponse),
    /// Embeddings
    Embedding(&'a EmbeddingResponse),
    /// Model listing
    ListModels(&'a ListModelsResponse),
    /// Token counting
    CountTokens(&'a CountTokensResponse),
    /// Any batch operation
    Batch(&'a BatchResponse),
    /// Any file operation
    File(&'a FileResponse),
}

impl ResponseRef<'_> {
    /// Kind of the referenced response
    #[must_use]
    pub fn kind(&self) -> ResponseKind {
        match self {
            Self::Chat(_) => ResponseKind::Chat,
            Self::TextCompletion(_) => ResponseKind::TextCompletion,
            Self::Responses(_) => ResponseKind::Responses,
            Self::Speech(_) => ResponseKind::Speech,
            Self::Transcription(_) => ResponseKind::Transcription,
            Self::ImageGeneration(_) => ResponseKind::ImageGeneration,
            Self::Embedding(_) => ResponseKind::Embedding,
            Self::ListModels(_) => ResponseKind::ListModels,
            Self::CountTokens(_) => ResponseKind::CountTokens,
            Self::Batch(batch) => match batch {
                BatchResponse::Create(_) => ResponseKind::BatchCreate,
                BatchResponse::List(_) => ResponseKind::BatchList,
                BatchResponse::Retrieve(_) => ResponseKind::BatchRetrieve,
                BatchResponse::Cancel(_) => ResponseKind::BatchCancel,
                BatchResponse::Results(_) => ResponseKind::BatchResults,
            },
            Self::File(file) => match file {
                FileResponse::Upload(_) => ResponseKind::FileUpload,
                FileResponse::List(_) => ResponseKind::FileList,
                FileResponse::Retrieve(_) => ResponseKind::FileRetrieve,
                FileResponse::Delete(_) => ResponseKind::FileDelete,
                FileResponse::Content(_) => ResponseKind::FileContent,
            },
        }
    }
}

/// An owned response of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum AnyResponse {
    /// Chat completion
    Chat(ChatResponse),
    /// Legacy text completion
    TextCompletion(TextCompletionResponse),
    /// Item-stream responses API
    Responses(ResponsesResponse),
    /// Speech synthesis
    Speech(SpeechResponse),
    /// Audio transcription
    Transcription(TranscriptionResponse),
    /// Image generation
    ImageGeneration(ImageGenerationResponse),
    /// Embeddings
    Embedding(EmbeddingResponse),
    /// Model listing
    ListModels(ListModelsResponse),
    /// Token counting
    CountTokens(CountTokensResponse),
    /// Any batch operation
    Batch(BatchResponse),
    /// Any file operation
    File(FileResponse),
}

impl AnyResponse {
    /// Decode `json` as a response of `kind`
    ///
    /// # Errors
    ///
    /// Returns the decoder error when `json` does not have the shape of `kind`.
    pub fn from_json(kind: ResponseKind, json: &str) -> serde_json::Result<Self> {
        use ResponseKind as K;

        Ok(match kind {
            K::Chat => Self::Chat(serde_json::from_str(json)?),
            K::TextCompletion => Self::TextCompletion(serde_json::from_str(json)?),
            K::Responses => Self::Responses(serde_json::from_str(json)?),
            K::Speech => Self::Speech(serde_json::from_str(json)?),
            K::Transcription => Self::Transcription(serde_json::from_str(json)?),
            K::ImageGeneration => Self::ImageGeneration(serde_json::from_str(json)?),
            K::Embedding => Self::Embedding(serde_json::from_str(json)?),
            K::ListModels => Self::ListModels(serde_json::from_str(json)?),
            K::CountTokens => Self::CountTokens(serde_json::from_str(json)?),
            K::BatchCreate => {
                Self::Batch(BatchResponse::Create(serde_json::from_str::<BatchObject>(json)?))
            }
            K::BatchList => {
                Self::Batch(BatchResponse::List(serde_json::from_str::<BatchList>(json)?))
            }
            K::BatchRetrieve => Self::Batch(BatchResponse::Retrieve(serde_json::from_str(json)?)),
            K::BatchCancel => Self::Batch(BatchResponse::Cancel(serde_json::from_str(json)?)),
            K::BatchResults => {
                Self::Batch(BatchResponse::Results(serde_json::from_str::<BatchResults>(json)?))
            }
            K::FileUpload => {
                Self::File(FileResponse::Upload(serde_json::from_str::<FileObject>(json)?))
            }
            K::FileList => {
                Self::File(FileResponse::List(serde_json::from_str::<FileList>(json)?))
            }
            K::FileRetrieve => Self::File(FileResponse::Retrieve(serde_json::from_str(json)?)),
            K::FileDelete => {
                Self::File(FileResponse::Delete(serde_json::from_str::<FileDeleted>(json)?))
            }
            K::FileContent => {
                Self::File(FileResponse::Content(serde_json::from_str::<FileContent>(json)?))
            }
        })
    }

    /// Borrow as a [`ResponseRef`]
    #[must_use]
    pub fn as_response_ref(&self) -> ResponseRef<'_> {
        match self {
            Self::Chat(r) => ResponseRef::Chat(r),
            Self::TextCompletion(r) => ResponseRef::TextCompletion(r),
            Self::Responses(r) => ResponseRef::Responses(r),
            Self::Speech(r) => ResponseRef::Speech(r),
            Self::Transcription(r) => ResponseRef::Transcription(r),
            Self::ImageGeneration(r) => ResponseRef::ImageGeneration(r),
            Self::Embedding(r) => ResponseRef::Embedding(r),
            Self::ListModels(r) => ResponseRef::ListModels(r),
            Self::CountTokens(r) => ResponseRef::CountTokens(r),
            Self::Batch(r) => ResponseRef::Batch(r),
            Self::File(r) => ResponseRef::File(r),
        }
    }
}
