//! Plain-text view of text-bearing responses

use crate::{
    ChatResponse, ItemType, MessageContent, OutputItem, ResponsesResponse, TextCompletionResponse,
    TranscriptionResponse,
};

/// Flattens a response into the text a reader would see
///
/// Never fails: a response without usable text yields `""`.
pub trait TextContent {
    /// Extracted text
    fn text_content(&self) -> String;
}

impl TextContent for ChatResponse {
    /// First choice with non-empty content; blocks are concatenated
    fn text_content(&self) -> String {
        self.choices
            .iter()
            .filter_map(|c| c.message.content.as_ref())
            .map(MessageContent::joined_text)
            .find(|text| !text.is_empty())
            .unwrap_or_default()
    }
}

impl TextContent for TextCompletionResponse {
    fn text_content(&self) -> String {
        self.choices
            .iter()
            .filter_map(|c| c.text.as_deref())
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_default()
    }
}

impl TextContent for ResponsesResponse {
    /// First item with message text, falling back per item to its reasoning
    /// summary (fragments joined by a blank line)
    fn text_content(&self) -> String {
        self.output
            .iter()
            .find_map(item_text)
            .unwrap_or_default()
    }
}

impl TextContent for TranscriptionResponse {
    fn text_content(&self) -> String {
        self.text.clone()
    }
}

fn item_text(item: &OutputItem) -> Option<String> {
    if let Some(text) = item
        .content
        .as_ref()
        .map(MessageContent::joined_text)
        .filter(|text| !text.is_empty())
    {
        return Some(text);
    }

    if item.item_type == Some(ItemType::Reasoning) {
        let summary = item
            .summary
            .iter()
            .map(|block| block.text.as_str())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        if !summary.is_empty() {
            return Some(summary);
        }
    }

    None
}
