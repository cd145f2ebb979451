//! Embedding structure

use response_schemas::EmbeddingResponse;

use crate::expectations::{ExpectationSet, keys};
use crate::validator::ValidationOutcome;

use super::{check_latency, record_coercion};

/// At least one vector, each of the expected dimensionality
pub fn validate(
    response: &EmbeddingResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if response.data.is_empty() {
        outcome.fail("Embedding response missing data");
        return;
    }

    match expectations.count(keys::EXPECTED_DIMENSIONS) {
        Some(Ok(expected)) => {
            for (i, item) in response.data.iter().enumerate() {
                let actual = item.embedding.dimensions();
                if actual as u64 != expected {
                    outcome.fail(format!(
                        "Embedding {i} has {actual} dimensions, expected {expected}"
                    ));
                }
            }
        }
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    check_latency(&response.extra_fields, expectations, outcome);
    outcome.record("embedding_validation", "completed");
}
