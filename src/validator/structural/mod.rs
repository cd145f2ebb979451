//! Per-kind structural checks
//!
//! One submodule per response family. Structural violations are hard
//! errors except where a provider legitimately omits metadata (usage,
//! timestamps, model names), which is reported as a warning.

pub mod audio;
pub mod chat;
pub mod embedding;
pub mod image;
pub mod lifecycle;
pub mod models;
pub mod responses;

use response_schemas::{ExtraFields, RequestType};

use crate::expectations::{CoercionError, ExpectationSet, keys};

use super::ValidationOutcome;

/// Require a positive latency when latency is expected
pub(crate) fn check_latency(
    extra: &ExtraFields,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if !expectations.should_have_latency {
        return;
    }
    if extra.latency_ms <= 0 {
        outcome.fail("Expected latency information but not present or invalid");
    } else {
        outcome.record("latency_ms", extra.latency_ms);
    }
}

/// Require a non-negative latency when latency is expected
///
/// Metadata-only operations can complete within the clock resolution, so
/// zero is accepted.
pub(crate) fn check_latency_non_negative(
    extra: &ExtraFields,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if !expectations.should_have_latency {
        return;
    }
    if extra.latency_ms < 0 {
        outcome.fail(format!(
            "Invalid latency: {} ms (should be non-negative)",
            extra.latency_ms
        ));
    } else {
        outcome.record("latency_ms", extra.latency_ms);
    }
}

/// Require the gateway to tag the response with `expected`
pub(crate) fn check_request_type(
    extra: &ExtraFields,
    expected: RequestType,
    outcome: &mut ValidationOutcome,
) {
    if extra.request_type != Some(expected.clone()) {
        outcome.fail(format!(
            "Request type mismatch: expected {expected}, got {}",
            extra.request_type_name()
        ));
    }
}

/// Require the serving provider named by `expected_provider`, if set
pub(crate) fn check_expected_provider(
    extra: &ExtraFields,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    match expectations.text(keys::EXPECTED_PROVIDER) {
        Some(Ok(expected)) if extra.provider != expected => outcome.fail(format!(
            "Provider mismatch: expected {expected}, got {}",
            extra.provider
        )),
        Some(Err(e)) => record_coercion(&e, outcome),
        _ => {}
    }
}

/// A bag value of the wrong shape skips its check but still fails
pub(crate) fn record_coercion(error: &CoercionError, outcome: &mut ValidationOutcome) {
    outcome.fail(error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::MetricValue;
    use pretty_assertions::assert_eq;

    fn extra(latency_ms: i64) -> ExtraFields {
        ExtraFields {
            provider: "openai".into(),
            latency_ms,
            ..Default::default()
        }
    }

    fn expecting_latency() -> ExpectationSet {
        ExpectationSet {
            should_have_latency: true,
            ..Default::default()
        }
    }

    #[test]
    fn zero_latency_fails_strict_check() {
        let mut outcome = ValidationOutcome::new();
        check_latency(&extra(0), &expecting_latency(), &mut outcome);
        assert_eq!(
            outcome.errors(),
            ["Expected latency information but not present or invalid"]
        );
    }

    #[test]
    fn zero_latency_passes_non_negative_check() {
        let mut outcome = ValidationOutcome::new();
        check_latency_non_negative(&extra(0), &expecting_latency(), &mut outcome);
        assert!(outcome.passed());
        assert_eq!(outcome.metric("latency_ms"), Some(&MetricValue::Int(0)));

        let mut outcome = ValidationOutcome::new();
        check_latency_non_negative(&extra(-5), &expecting_latency(), &mut outcome);
        assert_eq!(outcome.errors(), ["Invalid latency: -5 ms (should be non-negative)"]);
    }

    #[test]
    fn latency_ignored_unless_expected() {
        let mut outcome = ValidationOutcome::new();
        check_latency(&extra(-1), &ExpectationSet::default(), &mut outcome);
        assert!(outcome.passed());
        assert!(outcome.metrics().is_empty());
    }

    #[test]
    fn request_type_mismatch_names_both() {
        let mut outcome = ValidationOutcome::new();
        check_request_type(&extra(1), RequestType::ListModels, &mut outcome);
        assert_eq!(outcome.errors(), ["Request type mismatch: expected list_models, got "]);
    }

    #[test]
    fn provider_expectation() {
        let expectations =
            ExpectationSet::default().with_provider_value(keys::EXPECTED_PROVIDER, "anthropic");
        let mut outcome = ValidationOutcome::new();
        check_expected_provider(&extra(1), &expectations, &mut outcome);
        assert_eq!(outcome.errors(), ["Provider mismatch: expected anthropic, got openai"]);

        let wrong_shape =
            ExpectationSet::default().with_provider_value(keys::EXPECTED_PROVIDER, 3_i64);
        let mut outcome = ValidationOutcome::new();
        check_expected_provider(&extra(1), &wrong_shape, &mut outcome);
        assert!(outcome.errors()[0].starts_with("Failed to parse expected_provider"));
    }
}
