//! Per-kind observations
//!
//! Collection never affects the verdict. Keys recorded here are stable and
//! appear verbatim in JSON reports.

use response_schemas::{
    BatchResponse, ChatResponse, CountTokensResponse, EmbeddingResponse, FileResponse,
    ImageGenerationResponse, ListModelsResponse, ResponsesResponse, SpeechResponse,
    TextCompletionResponse, TranscriptionResponse, Usage,
};

use super::ValidationOutcome;

fn record_usage(usage: &Usage, outcome: &mut ValidationOutcome) {
    outcome.record("total_tokens", usage.total_tokens);
    outcome.record("prompt_tokens", usage.prompt_tokens);
    outcome.record("completion_tokens", usage.completion_tokens);
}

/// Choice count, usage, model and timestamp presence
pub fn chat(response: &ChatResponse, outcome: &mut ValidationOutcome) {
    outcome.record("choice_count", response.choices.len());
    outcome.record("has_usage", response.usage.is_some());
    outcome.record("has_timestamp", response.created > 0);
    outcome.record("has_model", !response.model.is_empty());
    if let Some(usage) = &response.usage {
        record_usage(usage, outcome);
    }
}

/// Like [`chat`]; text completions never carry a timestamp
pub fn text_completion(response: &TextCompletionResponse, outcome: &mut ValidationOutcome) {
    outcome.record("choice_count", response.choices.len());
    outcome.record("has_usage", response.usage.is_some());
    outcome.record("has_timestamp", false);
    outcome.record("has_model", !response.model.is_empty());
    if let Some(usage) = &response.usage {
        record_usage(usage, outcome);
    }
}

/// Raw item count plus usage and timestamp presence
pub fn responses(response: &ResponsesResponse, outcome: &mut ValidationOutcome) {
    outcome.record("choice_count", response.output.len());
    outcome.record("has_usage", response.usage.is_some());
    outcome.record("has_timestamp", response.created_at > 0);
    if let Some(usage) = &response.usage {
        outcome.record("usage_present", true);
        outcome.record("total_tokens", usage.total_tokens);
        outcome.record("input_tokens", usage.input_tokens);
        outcome.record("output_tokens", usage.output_tokens);
    }
}

/// Audio presence and size
pub fn speech(response: &SpeechResponse, outcome: &mut ValidationOutcome) {
    outcome.record("has_audio", response.audio.is_some());
    if let Some(audio) = &response.audio {
        outcome.record("audio_size", audio.len());
    }
}

/// Text length and language/duration presence
pub fn transcription(response: &TranscriptionResponse, outcome: &mut ValidationOutcome) {
    outcome.record("has_text", !response.text.is_empty());
    outcome.record("text_length", response.text.chars().count());
    outcome.record("has_language", response.language.is_some());
    outcome.record("has_duration", response.duration.is_some());
}

/// Image count and how many images came inline or hosted
pub fn image_generation(response: &ImageGenerationResponse, outcome: &mut ValidationOutcome) {
    let with_url = response.data.iter().filter(|img| !img.url.is_empty()).count();
    let with_b64 = response
        .data
        .iter()
        .filter(|img| !img.b64_json.is_empty())
        .count();

    outcome.record("image_count", response.data.len());
    outcome.record("has_images", !response.data.is_empty());
    outcome.record("images_with_url", with_url);
    outcome.record("images_with_b64", with_b64);

    if let Some(usage) = &response.usage {
        outcome.record("input_tokens", usage.input_tokens);
        outcome.record("output_tokens", usage.output_tokens);
        outcome.record("total_tokens", usage.total_tokens);
    }
}

/// Vector count; dimensionality is taken from the first vector
pub fn embedding(response: &EmbeddingResponse, outcome: &mut ValidationOutcome) {
    outcome.record("has_data", !response.data.is_empty());
    outcome.record("embedding_count", response.data.len());
    outcome.record("has_usage", response.usage.is_some());
    if let Some(first) = response.data.first() {
        outcome.record("embedding_dimensions", first.embedding.dimensions());
    }
}

/// Model count, paging and gateway metadata presence
pub fn list_models(response: &ListModelsResponse, outcome: &mut ValidationOutcome) {
    let extra = &response.extra_fields;
    outcome.record("model_count", response.data.len());
    outcome.record("has_next_page_token", !response.next_page_token.is_empty());
    outcome.record("has_provider", !extra.provider.is_empty());
    outcome.record("has_request_type", extra.request_type.is_some());
    outcome.record("has_latency", extra.latency_ms >= 0);
}

/// Token figures and request discriminator
pub fn count_tokens(response: &CountTokensResponse, outcome: &mut ValidationOutcome) {
    outcome.record("input_tokens", response.input_tokens);
    outcome.record("has_total_tokens", response.total_tokens.is_some());
    if let Some(total) = response.total_tokens {
        outcome.record("total_tokens", total);
    }
    outcome.record("has_model", !response.model.is_empty());
    outcome.record("request_type", response.extra_fields.request_type_name());
}

/// Identity and progress of the batch the operation touched
pub fn batch(response: &BatchResponse, outcome: &mut ValidationOutcome) {
    match response {
        BatchResponse::Create(batch) => {
            outcome.record("batch_id", batch.id.as_str());
            outcome.record("status", batch.status.as_str());
            outcome.record("has_endpoint", !batch.endpoint.is_empty());
        }
        BatchResponse::Retrieve(batch) => {
            outcome.record("batch_id", batch.id.as_str());
            outcome.record("status", batch.status.as_str());
            outcome.record("has_request_counts", batch.request_counts.total > 0);
        }
        BatchResponse::Cancel(batch) => {
            outcome.record("batch_id", batch.id.as_str());
            outcome.record("status", batch.status.as_str());
        }
        BatchResponse::List(list) => {
            outcome.record("batch_count", list.data.len());
            outcome.record("has_more", list.has_more);
        }
        BatchResponse::Results(results) => {
            outcome.record("batch_id", results.batch_id.as_str());
            outcome.record("results_count", results.results.len());
            outcome.record("has_more", results.has_more);
        }
    }
}

/// Identity and size of the file the operation touched
pub fn file(response: &FileResponse, outcome: &mut ValidationOutcome) {
    match response {
        FileResponse::Upload(file) => {
            outcome.record("file_id", file.id.as_str());
            outcome.record("filename", file.filename.as_str());
            outcome.record("bytes", file.bytes);
            outcome.record("purpose", file.purpose.as_str());
        }
        FileResponse::Retrieve(file) => {
            outcome.record("file_id", file.id.as_str());
            outcome.record("filename", file.filename.as_str());
            outcome.record("bytes", file.bytes);
            outcome.record("status", file.status.as_str());
        }
        FileResponse::List(list) => {
            outcome.record("file_count", list.data.len());
            outcome.record("has_more", list.has_more);
        }
        FileResponse::Delete(deleted) => {
            outcome.record("file_id", deleted.id.as_str());
            outcome.record("deleted", deleted.deleted);
        }
        FileResponse::Content(content) => {
            outcome.record("file_id", content.file_id.as_str());
            outcome.record("content_length", content.content.len());
            outcome.record("content_type", content.content_type.as_str());
        }
    }
}
