//! Free-text content checks
//!
//! Language models are non-deterministic, so wording mismatches are warnings.
//! The only hard failure is missing text when text is required.

use crate::config::ValidationSettings;
use crate::expectations::ExpectationSet;

use super::ValidationOutcome;

/// Check extracted `content` against the keyword, forbidden-word and
/// pattern expectations
///
/// Does nothing unless `should_have_content` is set.
pub fn validate_content(
    content: &str,
    expectations: &ExpectationSet,
    settings: &ValidationSettings,
    outcome: &mut ValidationOutcome,
) {
    if !expectations.should_have_content {
        return;
    }

    if content.trim().is_empty() {
        outcome.fail("Expected content but got empty response");
        return;
    }

    let lower = content.to_lowercase();
    let quoted = || preview(content, settings.content_preview_chars);

    for keyword in &expectations.should_contain_keywords {
        if !lower.contains(&keyword.to_lowercase()) {
            outcome.warn(format!(
                "Content expected to contain keyword '{keyword}' but doesn't (LLMs are non-deterministic). Actual content: {}",
                quoted()
            ));
        }
    }

    let any_of = &expectations.should_contain_any_of;
    if !any_of.is_empty() && !any_of.iter().any(|k| lower.contains(&k.to_lowercase())) {
        outcome.warn(format!(
            "Content expected to contain at least one of these keywords: [{}], but doesn't (LLMs are non-deterministic). Actual content: {}",
            any_of.join(" "),
            quoted()
        ));
    }

    for word in &expectations.should_not_contain_words {
        if lower.contains(&word.to_lowercase()) {
            outcome.warn(format!(
                "Content contains word '{word}' which was not expected (may be false positive with LLMs). Actual content: {}",
                quoted()
            ));
        }
    }

    if let Some(pattern) = &expectations.content_pattern
        && !pattern.is_match(content)
    {
        outcome.warn(format!(
            "Content doesn't match expected pattern: {} (LLMs are non-deterministic). Actual content: {}",
            pattern.as_str(),
            quoted()
        ));
    }

    outcome.record("content_word_count", content.split_whitespace().count());
}

/// Quote trimmed content, cut to `max_chars` characters
pub fn preview(content: &str, max_chars: usize) -> String {
    let content = content.trim();
    let total = content.chars().count();
    if total <= max_chars {
        return format!("'{content}'");
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("'{cut}...' (truncated from {total} chars)")
}
