//! Logical choice count for item-stream responses
//!
//! A chat response carries one choice per answer. A responses output spreads
//! a single answer over several typed items (a message, its tool calls, an
//! optional reasoning trace), so counting items overstates the number of
//! answers.

use response_schemas::{ItemType, OutputItem};

/// Number of answers represented by `items`
///
/// Only function-call items group with text; built-in tool items count as
/// items of their own.
///
/// - text and a call: one answer, plus one when a reasoning or refusal item
///   is also present
/// - calls only: one answer
/// - otherwise: one per item (untyped items included)
pub fn logical_choice_count(items: &[OutputItem]) -> usize {
    let mut has_text = false;
    let mut has_call = false;
    let mut has_reasoning = false;

    for item_type in items.iter().filter_map(|item| item.item_type) {
        match item_type {
            ItemType::Message => has_text = true,
            ItemType::FunctionCall => has_call = true,
            ItemType::Reasoning | ItemType::Refusal => has_reasoning = true,
            _ => {}
        }
    }

    match (has_text, has_call) {
        (true, true) => 1 + usize::from(has_reasoning),
        (false, true) => 1,
        _ => items.len(),
    }
}
