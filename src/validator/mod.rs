//! Response validation engine
//!
//! Decides whether the outcome of an AI-service operation is acceptable
//! and explains why. Every kind goes through the same protocol:
//!
//! 1. An upstream error is the only finding; nothing else is checked.
//! 2. An absent response is the only finding.
//! 3. Structural checks, content checks (text-bearing kinds), tool-call
//!    checks (chat and responses) and metric collection all run, without
//!    aborting one another.
//!
//! Structural violations are hard errors. Content mismatches are warnings,
//! since model output is non-deterministic.

pub mod arguments;
pub mod choices;
pub mod cli_handler;
pub mod content;
pub mod kind;
pub mod metrics;
pub mod report;
pub mod structural;
pub mod tool_calls;

use response_schemas::{
    BatchResponse, ChatResponse, CountTokensResponse, EmbeddingResponse, FileResponse,
    ImageGenerationResponse, ListModelsResponse, ProviderError, ResponsesResponse,
    SpeechResponse, TextCompletionResponse, TextContent, TranscriptionResponse,
};
use tracing::{debug, error};

use crate::config::ValidationSettings;
use crate::expectations::ExpectationSet;

pub use kind::{AnyResponse, ResponseKind, ResponseRef};
pub use report::{MetricValue, ValidationOutcome};

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

/// Validator for AI-service responses against expectation sets
#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    settings: ValidationSettings,
}

impl ResponseValidator {
    /// Create a validator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom settings
    #[must_use]
    pub fn with_settings(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    /// Settings in effect
    #[must_use]
    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Judge a response without reporting
    pub fn evaluate(
        &self,
        response: Option<ResponseRef<'_>>,
        error: Option<&ProviderError>,
        expectations: &ExpectationSet,
    ) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();

        if let Some(err) = error {
            outcome.fail(format!(
                "Got error when expecting success: {}",
                err.describe()
            ));
            return outcome;
        }

        let Some(response) = response else {
            outcome.fail("Response is nil");
            return outcome;
        };

        debug!(kind = %response.kind(), "Evaluating response");
        self.check(response, expectations, &mut outcome);
        outcome
    }

    /// Judge a response and report the outcome through `tracing`
    pub fn validate(
        &self,
        response: Option<ResponseRef<'_>>,
        error: Option<&ProviderError>,
        expectations: &ExpectationSet,
        label: &str,
    ) -> ValidationOutcome {
        if let Some(err) = error {
            error!(label = %label, error = %err.describe(), "Provider returned an error");
        }

        let outcome = self.evaluate(response, error, expectations);
        outcome.log(label, &self.settings);
        outcome
    }

    fn check(
        &self,
        response: ResponseRef<'_>,
        expectations: &ExpectationSet,
        outcome: &mut ValidationOutcome,
    ) {
        match response {
            ResponseRef::Chat(r) => {
                structural::chat::validate(r, expectations, outcome);
                self.check_content(r, expectations, outcome);
                tool_calls::validate_tool_calls(&tool_calls::chat_calls(r), expectations, outcome);
                metrics::chat(r, outcome);
            }
            ResponseRef::TextCompletion(r) => {
                structural::chat::validate_text(r, expectations, outcome);
                self.check_content(r, expectations, outcome);
                metrics::text_completion(r, outcome);
            }
            ResponseRef::Responses(r) => {
                structural::responses::validate(r, expectations, outcome);
                self.check_content(r, expectations, outcome);
                tool_calls::validate_tool_calls(
                    &tool_calls::responses_calls(r),
                    expectations,
                    outcome,
                );
                metrics::responses(r, outcome);
            }
            ResponseRef::Speech(r) => {
                structural::audio::validate_speech(r, expectations, outcome);
                metrics::speech(r, outcome);
            }
            ResponseRef::Transcription(r) => {
                structural::audio::validate_transcription(r, expectations, outcome);
                metrics::transcription(r, outcome);
            }
            ResponseRef::ImageGeneration(r) => {
                structural::image::validate(r, expectations, outcome);
                metrics::image_generation(r, outcome);
            }
            ResponseRef::Embedding(r) => {
                structural::embedding::validate(r, expectations, outcome);
                metrics::embedding(r, outcome);
            }
            ResponseRef::ListModels(r) => {
                structural::models::validate_list_models(r, expectations, outcome);
                metrics::list_models(r, outcome);
            }
            ResponseRef::CountTokens(r) => {
                structural::models::validate_count_tokens(r, expectations, outcome);
                metrics::count_tokens(r, outcome);
            }
            ResponseRef::Batch(r) => {
                structural::lifecycle::validate_batch(r, expectations, outcome);
                metrics::batch(r, outcome);
            }
            ResponseRef::File(r) => {
                structural::lifecycle::validate_file(r, expectations, outcome);
                metrics::file(r, outcome);
            }
        }
    }

    fn check_content(
        &self,
        response: &impl TextContent,
        expectations: &ExpectationSet,
        outcome: &mut ValidationOutcome,
    ) {
        if expectations.should_have_content {
            content::validate_content(
                &response.text_content(),
                expectations,
                &self.settings,
                outcome,
            );
        }
    }
}

// ── Per-kind entry points ────────────────────────────────────────────

macro_rules! entry_point {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $variant:ident) => {
        $(#[$doc])*
        pub fn $name(
            response: Option<&$ty>,
            error: Option<&ProviderError>,
            expectations: &ExpectationSet,
            label: &str,
        ) -> ValidationOutcome {
            ResponseValidator::new().validate(
                response.map(ResponseRef::$variant),
                error,
                expectations,
                label,
            )
        }
    };
}

entry_point!(
    /// Validate a chat completion
    validate_chat_response, ChatResponse, Chat
);
entry_point!(
    /// Validate a legacy text completion
    validate_text_completion_response, TextCompletionResponse, TextCompletion
);
entry_point!(
    /// Validate an item-stream responses output
    validate_responses_response, ResponsesResponse, Responses
);
entry_point!(
    /// Validate a speech synthesis result
    validate_speech_response, SpeechResponse, Speech
);
entry_point!(
    /// Validate a transcription
    validate_transcription_response, TranscriptionResponse, Transcription
);
entry_point!(
    /// Validate an image generation result
    validate_image_generation_response, ImageGenerationResponse, ImageGeneration
);
entry_point!(
    /// Validate an embedding result
    validate_embedding_response, EmbeddingResponse, Embedding
);
entry_point!(
    /// Validate a model listing
    validate_list_models_response, ListModelsResponse, ListModels
);
entry_point!(
    /// Validate a token count
    validate_count_tokens_response, CountTokensResponse, CountTokens
);
entry_point!(
    /// Validate any batch operation result
    validate_batch_response, BatchResponse, Batch
);
entry_point!(
    /// Validate any file operation result
    validate_file_response, FileResponse, File
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectations::{ToolCallExpectation, presets};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn chat(value: serde_json::Value) -> ChatResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn validator_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<ResponseValidator>();
    }

    #[test]
    fn error_short_circuits() {
        let err: ProviderError = serde_json::from_value(json!({
            "status_code": 429,
            "error": {"type": "rate_limit", "message": "slow down"}
        }))
        .unwrap();
        let response = chat(json!({"choices": []}));
        let outcome = ResponseValidator::new().evaluate(
            Some(ResponseRef::Chat(&response)),
            Some(&err),
            &presets::basic_chat(),
        );
        assert_eq!(outcome.errors().len(), 1);
        assert!(outcome.errors()[0].starts_with("Got error when expecting success: [429]"));
        assert!(outcome.metrics().is_empty());
    }

    #[test]
    fn absent_response() {
        let outcome = validate_chat_response(None, None, &presets::basic_chat(), "absent");
        assert_eq!(outcome.errors(), ["Response is nil"]);
    }

    #[test]
    fn all_steps_run_without_aborting() {
        let response = chat(json!({
            "choices": [],
            "extra_fields": {"latency": 0}
        }));
        let expectations = ExpectationSet {
            should_have_latency: true,
            expected_tool_calls: vec![ToolCallExpectation::new("lookup", ["q"])],
            ..presets::basic_chat()
        };
        let outcome = validate_chat_response(Some(&response), None, &expectations, "steps");
        assert_eq!(
            outcome.errors(),
            [
                "Expected 1 choices, got 0",
                "Expected latency information but not present or invalid",
                "Expected content but got empty response",
                "Expected tool call 'lookup' not found (no tool calls present)",
            ]
        );
        assert_eq!(outcome.metric("choice_count"), Some(&MetricValue::Int(0)));
    }

    #[test]
    fn passing_chat_collects_metrics() {
        let response = chat(json!({
            "model": "gpt-4o",
            "created": 1,
            "choices": [{
                "message": {"content": "Paris is the capital of France."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 7, "total_tokens": 17},
            "extra_fields": {"latency": 250}
        }));
        let expectations = ExpectationSet {
            should_contain_any_of: vec!["paris".into()],
            ..presets::basic_chat()
        };
        let outcome = validate_chat_response(Some(&response), None, &expectations, "capital");
        assert!(outcome.passed(), "{:?}", outcome.errors());
        assert!(outcome.warnings().is_empty());
        assert_eq!(outcome.metric("content_word_count"), Some(&MetricValue::Int(6)));
        assert_eq!(outcome.metric("tool_call_count"), Some(&MetricValue::Int(0)));
    }

    #[test]
    fn content_skipped_for_non_text_kinds() {
        let response = SpeechResponse {
            audio: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        let expectations = ExpectationSet {
            should_have_content: true,
            ..Default::default()
        };
        let outcome = validate_speech_response(Some(&response), None, &expectations, "speech");
        assert!(outcome.passed());
        assert!(outcome.metric("content_word_count").is_none());
    }

    #[test]
    fn settings_shape_content_previews() {
        let validator = ResponseValidator::with_settings(ValidationSettings {
            content_preview_chars: 4,
            ..ValidationSettings::default()
        });
        let response = chat(json!({"choices": [{"message": {"content": "abcdefgh"}}]}));
        let expectations = ExpectationSet {
            should_have_content: true,
            should_contain_keywords: vec!["zz".into()],
            ..Default::default()
        };
        let outcome = validator.evaluate(Some(ResponseRef::Chat(&response)), None, &expectations);
        assert!(outcome.warnings()[0].ends_with("'abcd...' (truncated from 8 chars)"));
    }
}
