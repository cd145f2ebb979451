//! Image generation structure

use response_schemas::ImageGenerationResponse;

use crate::expectations::{ExpectationSet, keys};
use crate::validator::ValidationOutcome;

use super::{check_latency, record_coercion};

/// Every image must be inline or hosted; enough images must be returned
pub fn validate(
    response: &ImageGenerationResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    if response.data.is_empty() {
        outcome.fail("Image generation response missing image data");
        return;
    }

    for (i, image) in response.data.iter().enumerate() {
        if image.b64_json.is_empty() && image.url.is_empty() {
            outcome.fail(format!("Image {i} has no B64JSON or URL"));
        }
    }

    match expectations.count(keys::MIN_IMAGES) {
        Some(Ok(min)) => {
            let actual = response.data.len();
            outcome.record("image_count", actual);
            if (actual as u64) < min {
                outcome.fail(format!(
                    "Too few images: got {actual}, expected at least {min}"
                ));
            }
        }
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    match expectations.text(keys::EXPECTED_SIZE) {
        Some(Ok(size)) => outcome.record("expected_size", size),
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    check_latency(&response.extra_fields, expectations, outcome);
    outcome.record("image_generation_validation", "completed");
}
