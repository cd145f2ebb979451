//! Chat completion and legacy text completion responses

use serde::{Deserialize, Serialize};

use crate::{ArgumentPayload, ExtraFields};

/// Chat completion response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    /// Response identifier
    pub id: String,
    /// Model that produced the response
    pub model: String,
    /// Creation time (unix seconds, 0 when absent)
    pub created: u64,
    /// Generated choices
    pub choices: Vec<ChatChoice>,
    /// Token accounting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

impl ChatResponse {
    /// All tool calls across every choice, in order
    pub fn tool_calls(&self) -> impl Iterator<Item = &ToolCall> {
        self.choices.iter().flat_map(|c| c.message.tool_calls.iter())
    }
}

/// One generated choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatChoice {
    /// Position of the choice
    pub index: u32,
    /// Assistant message
    pub message: ChatMessage,
    /// Why generation stopped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Assistant message inside a choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    /// Message role
    pub role: String,
    /// Message content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
    /// Tool calls requested by the assistant
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

/// Message content: plain text or typed blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Content blocks
    Blocks(Vec<ContentBlock>),
}

impl MessageContent {
    /// Concatenated text of this content, empty when there is none
    #[must_use]
    pub fn joined_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Blocks(blocks) => blocks
                .iter()
                .filter_map(|b| b.text.as_deref())
                .collect(),
        }
    }
}

/// A typed content block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentBlock {
    /// Block type ("text", "input_text", "output_text", ...)
    #[serde(rename = "type")]
    pub block_type: String,
    /// Text carried by the block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A tool call emitted by the assistant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCall {
    /// Call identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Call type (usually "function")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    /// Function invocation
    pub function: FunctionCall,
}

/// Function name and raw arguments of a tool call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionCall {
    /// Function name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw arguments in whatever encoding the provider used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<ArgumentPayload>,
}

/// Token accounting for chat and text completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u64,
    /// Tokens generated
    pub completion_tokens: u64,
    /// Prompt plus completion
    pub total_tokens: u64,
    /// Prompt breakdown (cache hits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
}

/// Prompt token breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTokensDetails {
    /// Prompt tokens served from the provider's prompt cache
    pub cached_tokens: u64,
}

/// Legacy text completion response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextCompletionResponse {
    /// Response identifier
    pub id: String,
    /// Model that produced the response
    pub model: String,
    /// Generated choices
    pub choices: Vec<TextChoice>,
    /// Token accounting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// One text completion choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextChoice {
    /// Position of the choice
    pub index: u32,
    /// Generated text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Why generation stopped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}
