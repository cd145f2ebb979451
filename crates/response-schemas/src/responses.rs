//! Item-stream "responses" API
//!
//! A response is an ordered list of typed output items. One logical answer
//! may span several items: a message, any number of function calls, and
//! optional reasoning or refusal items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ArgumentPayload, ExtraFields, MessageContent};

/// Responses API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsesResponse {
    /// Response identifier
    pub id: String,
    /// Model that produced the response
    pub model: String,
    /// Creation time (unix seconds, 0 when absent)
    pub created_at: u64,
    /// Top-level status ("completed", "incomplete", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Output items
    pub output: Vec<OutputItem>,
    /// Token accounting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ResponsesUsage>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

impl ResponsesResponse {
    /// Output items that carry tool data: calls, call outputs, and untyped
    /// items with tool fields
    pub fn tool_messages(&self) -> impl Iterator<Item = &OutputItem> {
        self.output.iter().filter(|item| item.carries_tool_message())
    }
}

/// Output item type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Assistant text message
    Message,
    /// Function call
    FunctionCall,
    /// Result of a function call
    FunctionCallOutput,
    /// Reasoning trace
    Reasoning,
    /// Refusal
    Refusal,
    /// Built-in web search call
    WebSearchCall,
    /// Built-in file search call
    FileSearchCall,
    /// Computer-use call
    ComputerCall,
    /// Code interpreter call
    CodeInterpreterCall,
    /// Remote MCP tool call
    McpCall,
    /// Output of a computer-use call
    ComputerCallOutput,
    /// Local shell call
    LocalShellCall,
    /// Output of a local shell call
    LocalShellCallOutput,
    /// Free-form custom tool call
    CustomToolCall,
    /// Output of a custom tool call
    CustomToolCallOutput,
    /// Built-in image generation call
    ImageGenerationCall,
    /// Remote MCP tool listing
    McpListTools,
    /// Remote MCP approval request
    McpApprovalRequest,
    /// Remote MCP approval responses
    McpApprovalResponses,
    /// Reference to an earlier item
    ItemReference,
    /// Any type this model does not know about
    #[serde(other)]
    Other,
}

impl ItemType {
    /// Whether items of this type are tool calls or tool outputs
    #[must_use]
    pub fn is_tool_message(self) -> bool {
        !matches!(
            self,
            Self::Message | Self::Reasoning | Self::Refusal | Self::ItemReference | Self::Other
        )
    }
}

/// One output item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputItem {
    /// Item identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Item type tag
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    /// Message role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Message content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
    /// Tool name (tool-call items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Call identifier (tool-call items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_id: Option<String>,
    /// Raw arguments (tool-call items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<ArgumentPayload>,
    /// Tool result (tool-output items)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    /// Reasoning summary (reasoning items)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summary: Vec<SummaryBlock>,
}

impl OutputItem {
    /// Whether this item carries tool data
    ///
    /// Typed tool items always do. Items of any other type, or none, do when
    /// a tool field (name, call id, arguments, output) is present.
    #[must_use]
    pub fn carries_tool_message(&self) -> bool {
        self.item_type.is_some_and(ItemType::is_tool_message)
            || self.name.is_some()
            || self.call_id.is_some()
            || self.arguments.is_some()
            || self.output.is_some()
    }
}

/// Reasoning summary fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryBlock {
    /// Summary text
    pub text: String,
}

/// Responses API token accounting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsesUsage {
    /// Input tokens
    pub input_tokens: u64,
    /// Output tokens
    pub output_tokens: u64,
    /// Total tokens
    pub total_tokens: u64,
}
