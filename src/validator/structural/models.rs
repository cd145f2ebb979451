//! Model listing and token counting structure
//!
//! Both are metadata operations answered by the gateway, so the request
//! discriminator and serving provider are part of the contract and a zero
//! latency is acceptable.

use response_schemas::{CountTokensResponse, ListModelsResponse, RequestType};

use crate::expectations::{ExpectationSet, keys};
use crate::validator::ValidationOutcome;

use super::{
    check_expected_provider, check_latency_non_negative, check_request_type, record_coercion,
};

/// Non-empty listing of identified models
pub fn validate_list_models(
    response: &ListModelsResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if response.data.is_empty() {
        outcome.fail("List models response contains no models");
        return;
    }

    let mut valid = 0_usize;
    for (i, model) in response.data.iter().enumerate() {
        if model.id.is_empty() {
            outcome.fail(format!("Model at index {i} has empty ID"));
        } else {
            valid += 1;
        }
    }
    if valid == 0 {
        outcome.fail("No valid models found in response");
    }

    let extra = &response.extra_fields;
    check_expected_provider(extra, expectations, outcome);
    check_request_type(extra, RequestType::ListModels, outcome);
    check_latency_non_negative(extra, expectations, outcome);

    match expectations.count(keys::MIN_MODEL_COUNT) {
        Some(Ok(min)) if (response.data.len() as u64) < min => outcome.fail(format!(
            "Expected at least {min} models, got {}",
            response.data.len()
        )),
        Some(Err(e)) => record_coercion(&e, outcome),
        _ => {}
    }

    outcome.record("list_models_validation", "completed");
}

/// Token figures must be consistent with each other
pub fn validate_count_tokens(
    response: &CountTokensResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if expectations.should_have_model && response.model.trim().is_empty() {
        outcome.fail("Expected model field but got empty");
    }

    let input = response.input_tokens;
    if input <= 0 {
        outcome.fail(format!("input_tokens should be > 0, got {input}"));
    }
    if let Some(output) = response.output_tokens
        && output < 0
    {
        outcome.fail(format!("output_tokens should be >= 0, got {output}"));
    }
    if let Some(total) = response.total_tokens
        && total < input
    {
        outcome.fail(format!(
            "total_tokens ({total}) should be >= input_tokens ({input})"
        ));
    }

    let extra = &response.extra_fields;
    check_request_type(extra, RequestType::CountTokens, outcome);
    check_expected_provider(extra, expectations, outcome);
    check_latency_non_negative(extra, expectations, outcome);

    outcome.record("count_tokens_validation", "completed");
}
