//! Speech synthesis and transcription structure

use response_schemas::{SpeechResponse, TranscriptionResponse};

use crate::expectations::{ExpectationSet, keys};
use crate::validator::ValidationOutcome;

use super::{check_latency, record_coercion};

/// Audio payload presence and size
pub fn validate_speech(
    response: &SpeechResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let Some(audio) = &response.audio else {
        outcome.fail("Speech synthesis response missing Audio field");
        return;
    };

    match expectations.flag(keys::SHOULD_HAVE_AUDIO) {
        Some(Ok(true)) if audio.is_empty() => {
            outcome.fail("Speech synthesis response missing audio data");
            return;
        }
        Some(Err(e)) => record_coercion(&e, outcome),
        _ => {}
    }

    match expectations.count(keys::MIN_AUDIO_BYTES) {
        Some(Ok(min)) if (audio.len() as u64) < min => outcome.fail(format!(
            "Audio data too small: got {} bytes, expected at least {min}",
            audio.len()
        )),
        Some(Ok(_)) => outcome.record("audio_bytes", audio.len()),
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    match expectations.text(keys::EXPECTED_FORMAT) {
        Some(Ok(format)) => outcome.record("expected_audio_format", format),
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    check_latency(&response.extra_fields, expectations, outcome);
    outcome.record("speech_validation", "completed");
}

/// Transcribed text presence, length and failure phrases
///
/// Unlike chat content, a forbidden phrase here means the transcription
/// itself failed, so it is a hard error.
pub fn validate_transcription(
    response: &TranscriptionResponse,
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let text = &response.text;

    match expectations.flag(keys::SHOULD_HAVE_TRANSCRIPTION) {
        Some(Ok(true)) if text.is_empty() => {
            outcome.fail("Transcription response missing transcribed text");
            return;
        }
        Some(Err(e)) => record_coercion(&e, outcome),
        _ => {}
    }

    let length = text.chars().count();
    match expectations.count(keys::MIN_TRANSCRIPTION_LENGTH) {
        Some(Ok(min)) if (length as u64) < min => outcome.fail(format!(
            "Transcribed text too short: got {length} characters, expected at least {min}"
        )),
        Some(Ok(_)) => outcome.record("transcription_length", length),
        Some(Err(e)) => record_coercion(&e, outcome),
        None => {}
    }

    let lower = text.to_lowercase();
    for phrase in &expectations.should_not_contain_words {
        if lower.contains(&phrase.to_lowercase()) {
            outcome.fail(format!(
                "Transcribed text contains error indicator: '{phrase}'"
            ));
        }
    }

    if let Some(language) = &response.language {
        outcome.record("detected_language", language.as_str());
    }
    if let Some(duration) = response.duration {
        outcome.record("audio_duration", duration);
    }

    check_latency(&response.extra_fields, expectations, outcome);
    outcome.record("transcription_validation", "completed");
}
