//! Item-stream responses structure

use response_schemas::{PROVIDER_AZURE, PROVIDER_OPENAI, ResponsesResponse};

use crate::expectations::ExpectationSet;
use crate::validator::ValidationOutcome;
use crate::validator::choices::logical_choice_count;

use super::chat::check_choice_count;
use super::check_latency;

/// Logical choice count, status and reported metadata
pub fn validate(
    response: &ResponsesResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    check_choice_count(logical_choice_count(&response.output), expectations, outcome);

    if requires_status(response) && response.status.is_none() {
        outcome.fail("Expected status but not present");
    }

    if expectations.should_have_usage_stats && response.usage.is_none() {
        outcome.warn("Expected usage statistics but not present");
    }
    if expectations.should_have_timestamps && response.created_at == 0 {
        outcome.warn("Expected created timestamp but not present");
    }
    check_latency(&response.extra_fields, expectations, outcome);
}

/// OpenAI-compatible providers report a status except when routing to
/// Claude deployments
fn requires_status(response: &ResponsesResponse) -> bool {
    let extra = &response.extra_fields;
    matches!(extra.provider.as_str(), PROVIDER_OPENAI | PROVIDER_AZURE)
        && !extra.model_deployment.to_lowercase().contains("claude")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn run(value: Value, expectations: &ExpectationSet) -> ValidationOutcome {
        let response: ResponsesResponse = serde_json::from_value(value).unwrap();
        let mut outcome = ValidationOutcome::new();
        validate(&response, expectations, &mut outcome);
        outcome
    }

    fn one_choice() -> ExpectationSet {
        ExpectationSet {
            expected_choice_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn text_plus_call_is_one_choice() {
        let outcome = run(
            json!({"output": [
                {"type": "message", "content": "checking"},
                {"type": "function_call", "name": "lookup"}
            ]}),
            &one_choice(),
        );
        assert!(outcome.passed(), "{:?}", outcome.errors());
    }

    #[test]
    fn two_messages_are_two_choices() {
        let outcome = run(
            json!({"output": [{"type": "message"}, {"type": "message"}]}),
            &one_choice(),
        );
        assert_eq!(outcome.errors(), ["Expected 1 choices, got 2"]);
    }

    #[test]
    fn status_required_for_openai_non_claude() {
        let outcome = run(
            json!({"extra_fields": {"provider": "openai", "model_deployment": "gpt-4o"}}),
            &ExpectationSet::default(),
        );
        assert_eq!(outcome.errors(), ["Expected status but not present"]);

        let claude = run(
            json!({"extra_fields": {"provider": "azure", "model_deployment": "Claude-Sonnet"}}),
            &ExpectationSet::default(),
        );
        assert!(claude.passed());

        let other = run(
            json!({"extra_fields": {"provider": "anthropic"}}),
            &ExpectationSet::default(),
        );
        assert!(other.passed());
    }

    #[test]
    fn missing_usage_and_timestamp_warn() {
        let expectations = ExpectationSet {
            should_have_usage_stats: true,
            should_have_timestamps: true,
            ..Default::default()
        };
        let outcome = run(json!({"status": "completed"}), &expectations);
        assert!(outcome.passed());
        assert_eq!(outcome.warnings().len(), 2);
    }
}
