//! Response data model for AI-service operations.
//!
//! One module per response family. Every type deserializes from the JSON a
//! provider gateway returns and carries an [`ExtraFields`] block with the
//! provider identity, request discriminator and measured latency.
//!
//! Two collaborator contracts live here as well:
//!
//! - [`TextContent`] flattens a text-bearing response into plain text and
//!   never fails.
//! - [`ProviderError::describe`] renders an upstream failure as one line.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod arguments;
pub mod audio;
pub mod bytes;
pub mod chat;
pub mod content;
pub mod embedding;
pub mod error;
pub mod extra;
pub mod image;
pub mod lifecycle;
pub mod models;
pub mod responses;

pub use arguments::ArgumentPayload;
pub use audio::{SpeechResponse, TranscriptionResponse};
pub use chat::{
    ChatChoice, ChatMessage, ChatResponse, ContentBlock, FunctionCall, MessageContent,
    PromptTokensDetails, TextChoice, TextCompletionResponse, ToolCall, Usage,
};
pub use content::TextContent;
pub use embedding::{EmbeddingData, EmbeddingResponse, EmbeddingVector};
pub use error::{ErrorBody, ProviderError};
pub use extra::{ExtraFields, RequestType};
pub use image::{ImageData, ImageGenerationResponse, ImageUsage};
pub use lifecycle::{
    BatchList, BatchObject, BatchRequestCounts, BatchResponse, BatchResults, FileContent,
    FileDeleted, FileList, FileObject, FileResponse,
};
pub use models::{CountTokensResponse, ListModelsResponse, ModelEntry};
pub use responses::{ItemType, OutputItem, ResponsesResponse, ResponsesUsage, SummaryBlock};

/// Provider identifier for OpenAI.
pub const PROVIDER_OPENAI: &str = "openai";
/// Provider identifier for Azure OpenAI.
pub const PROVIDER_AZURE: &str = "azure";
