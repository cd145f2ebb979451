//! Speech synthesis and transcription responses

use serde::{Deserialize, Serialize};

use crate::ExtraFields;

/// Speech synthesis response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechResponse {
    /// Synthesized audio (base64 on the wire)
    #[serde(with = "crate::bytes::option", skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<u8>>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}

/// Transcription response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
    /// Detected language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Audio duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Gateway metadata
    pub extra_fields: ExtraFields,
}
