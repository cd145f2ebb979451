//! Chat and legacy text completion structure

use response_schemas::{ChatResponse, TextCompletionResponse, Usage};

use crate::expectations::{ExpectationSet, keys};
use crate::validator::ValidationOutcome;

use super::{check_latency, record_coercion};

/// Choice count, finish reasons and reported metadata of a chat response
pub fn validate(
    response: &ChatResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    check_choice_count(response.choices.len(), expectations, outcome);
    check_finish_reasons(
        response.choices.iter().map(|c| c.finish_reason.as_deref()),
        expectations,
        outcome,
    );

    check_usage(response.usage.as_ref(), expectations, outcome);
    if expectations.should_have_timestamps && response.created == 0 {
        outcome.warn("Expected created timestamp but not present");
    }
    check_model(&response.model, expectations, outcome);
    check_latency(&response.extra_fields, expectations, outcome);
    check_cached_tokens(response.usage.as_ref(), expectations, outcome);
}

/// As [`validate`]; a requested timestamp is only a warning since text
/// completions never carry one
pub fn validate_text(
    response: &TextCompletionResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    check_choice_count(response.choices.len(), expectations, outcome);
    check_finish_reasons(
        response.choices.iter().map(|c| c.finish_reason.as_deref()),
        expectations,
        outcome,
    );

    check_usage(response.usage.as_ref(), expectations, outcome);
    if expectations.should_have_timestamps {
        outcome.warn("Text completion responses don't support timestamp validation");
    }
    check_model(&response.model, expectations, outcome);
    check_latency(&response.extra_fields, expectations, outcome);
    check_cached_tokens(response.usage.as_ref(), expectations, outcome);
}

pub(crate) fn check_choice_count(
    actual: usize,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let expected = expectations.expected_choice_count;
    if expected > 0 && actual != expected {
        outcome.fail(format!("Expected {expected} choices, got {actual}"));
    }
}

fn check_finish_reasons<'a>(
    reasons: impl Iterator<Item = Option<&'a str>>,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let Some(expected) = expectations.expected_finish_reason.as_deref() else {
        return;
    };
    for (i, reason) in reasons.enumerate() {
        match reason {
            None => outcome.warn(format!("Choice {i} has no finish reason")),
            Some(actual) if actual != expected => outcome.warn(format!(
                "Choice {i} has finish reason '{actual}', expected '{expected}'"
            )),
            Some(_) => {}
        }
    }
}

fn check_usage(
    usage: Option<&Usage>,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if !expectations.should_have_usage_stats {
        return;
    }
    let Some(usage) = usage else {
        outcome.warn("Expected usage statistics but not present");
        return;
    };
    if usage.total_tokens < usage.prompt_tokens {
        outcome.warn("Total tokens less than prompt tokens");
    }
    if usage.total_tokens < usage.completion_tokens {
        outcome.warn("Total tokens less than completion tokens");
    }
}

fn check_model(model: &str, expectations: &ExpectationSet, outcome: &mut ValidationOutcome) {
    if expectations.should_have_model && model.trim().is_empty() {
        outcome.warn("Expected model field but not present or empty");
    }
}

/// Prompt-cache hit ratio against `min_cached_tokens_percentage`
#[allow(clippy::cast_precision_loss)]
fn check_cached_tokens(
    usage: Option<&Usage>,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let minimum = match expectations.fraction(keys::MIN_CACHED_TOKENS_PERCENTAGE) {
        None => return,
        Some(Err(e)) => return record_coercion(&e, outcome),
        Some(Ok(minimum)) => minimum,
    };

    let Some(usage) = usage else {
        outcome.fail("Expected usage statistics for cached tokens validation but not present");
        return;
    };
    let Some(details) = &usage.prompt_tokens_details else {
        outcome.fail("Expected prompt tokens details for cached tokens validation but not present");
        return;
    };
    if usage.prompt_tokens == 0 {
        outcome.fail("Prompt tokens is 0, cannot validate cached tokens percentage");
        return;
    }

    let cached = details.cached_tokens;
    let prompt = usage.prompt_tokens;
    let ratio = cached as f64 / prompt as f64;
    outcome.record("cached_tokens", cached);
    outcome.record("prompt_tokens", prompt);
    outcome.record("cached_percentage", ratio);

    if ratio < minimum {
        outcome.fail(format!(
            "Cached tokens percentage {:.2}% is below required minimum {:.2}% (cached: {cached}, prompt: {prompt})",
            ratio * 100.0,
            minimum * 100.0
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::MetricValue;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn chat(value: Value) -> ChatResponse {
        serde_json::from_value(value).unwrap()
    }

    fn run(response: &ChatResponse, expectations: &ExpectationSet) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        validate(response, expectations, &mut outcome);
        outcome
    }

    #[test]
    fn zero_choices_against_one() {
        let expectations = ExpectationSet {
            expected_choice_count: 1,
            ..Default::default()
        };
        let outcome = run(&ChatResponse::default(), &expectations);
        assert!(!outcome.passed());
        assert_eq!(outcome.errors(), ["Expected 1 choices, got 0"]);
    }

    #[test]
    fn finish_reasons_are_warnings() {
        let response = chat(json!({"choices": [
            {"finish_reason": "stop"},
            {"finish_reason": "length"},
            {}
        ]}));
        let expectations = ExpectationSet {
            expected_finish_reason: Some("stop".into()),
            ..Default::default()
        };
        let outcome = run(&response, &expectations);
        assert!(outcome.passed());
        assert_eq!(
            outcome.warnings(),
            [
                "Choice 1 has finish reason 'length', expected 'stop'",
                "Choice 2 has no finish reason",
            ]
        );
    }

    #[test]
    fn metadata_gaps_are_warnings() {
        let response = chat(json!({
            "model": "  ",
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 8}
        }));
        let expectations = ExpectationSet {
            should_have_usage_stats: true,
            should_have_timestamps: true,
            should_have_model: true,
            ..Default::default()
        };
        let outcome = run(&response, &expectations);
        assert!(outcome.passed());
        assert_eq!(
            outcome.warnings(),
            [
                "Total tokens less than prompt tokens",
                "Expected created timestamp but not present",
                "Expected model field but not present or empty",
            ]
        );
    }

    #[test]
    fn non_positive_latency_fails() {
        let response = chat(json!({"extra_fields": {"latency": 0}}));
        let expectations = ExpectationSet {
            should_have_latency: true,
            ..Default::default()
        };
        assert!(!run(&response, &expectations).passed());

        let response = chat(json!({"extra_fields": {"latency": 120}}));
        let outcome = run(&response, &expectations);
        assert!(outcome.passed());
        assert_eq!(outcome.metric("latency_ms"), Some(&MetricValue::Int(120)));
    }

    #[test]
    fn cached_tokens_below_minimum() {
        let response = chat(json!({"usage": {
            "prompt_tokens": 1000,
            "total_tokens": 1000,
            "prompt_tokens_details": {"cached_tokens": 250}
        }}));
        let expectations = ExpectationSet::default()
            .with_provider_value(keys::MIN_CACHED_TOKENS_PERCENTAGE, 0.5);
        let outcome = run(&response, &expectations);
        assert_eq!(
            outcome.errors(),
            ["Cached tokens percentage 25.00% is below required minimum 50.00% (cached: 250, prompt: 1000)"]
        );
        assert_eq!(outcome.metric("cached_percentage"), Some(&MetricValue::Float(0.25)));
    }

    #[test]
    fn cached_tokens_guards() {
        let expectations = ExpectationSet::default()
            .with_provider_value(keys::MIN_CACHED_TOKENS_PERCENTAGE, 0.5);

        let outcome = run(&ChatResponse::default(), &expectations);
        assert_eq!(
            outcome.errors(),
            ["Expected usage statistics for cached tokens validation but not present"]
        );

        let no_details = chat(json!({"usage": {"prompt_tokens": 10}}));
        assert_eq!(
            run(&no_details, &expectations).errors(),
            ["Expected prompt tokens details for cached tokens validation but not present"]
        );

        let zero_prompt = chat(json!({"usage": {"prompt_tokens_details": {"cached_tokens": 0}}}));
        assert_eq!(
            run(&zero_prompt, &expectations).errors(),
            ["Prompt tokens is 0, cannot validate cached tokens percentage"]
        );
    }

    #[test]
    fn text_completion_timestamp_is_unsupported() {
        let response: TextCompletionResponse =
            serde_json::from_value(json!({"model": "davinci", "choices": [{"text": "hi"}]}))
                .unwrap();
        let expectations = ExpectationSet {
            expected_choice_count: 1,
            should_have_timestamps: true,
            ..Default::default()
        };
        let mut outcome = ValidationOutcome::new();
        validate_text(&response, &expectations, &mut outcome);
        assert!(outcome.passed());
        assert_eq!(
            outcome.warnings(),
            ["Text completion responses don't support timestamp validation"]
        );
    }
}
