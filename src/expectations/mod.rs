//! Declarative expectation sets
//!
//! An [`ExpectationSet`] describes what an acceptable response looks like.
//! Most fields apply to every kind; the open `provider_specific` bag carries
//! kind-specific knobs under the keys listed in [`keys`].
//!
//! Expectation sets load from YAML or JSON:
//!
//! ```yaml
//! should_have_content: true
//! expected_choice_count: 1
//! should_contain_any_of: [paris, france]
//! content_pattern: "^[A-Z]"
//! expected_tool_calls:
//!   - function_name: get_weather
//!     required_args: [location]
//! provider_specific:
//!   min_cached_tokens_percentage: 0.5
//! ```

pub mod presets;

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Documented `provider_specific` keys
pub mod keys {
    /// Minimum share of prompt tokens served from cache, as a fraction (chat, text completion)
    pub const MIN_CACHED_TOKENS_PERCENTAGE: &str = "min_cached_tokens_percentage";
    /// Audio payload required (speech)
    pub const SHOULD_HAVE_AUDIO: &str = "should_have_audio";
    /// Minimum audio payload size in bytes (speech)
    pub const MIN_AUDIO_BYTES: &str = "min_audio_bytes";
    /// Expected audio format, recorded only (speech)
    pub const EXPECTED_FORMAT: &str = "expected_format";
    /// Transcribed text required (transcription)
    pub const SHOULD_HAVE_TRANSCRIPTION: &str = "should_have_transcription";
    /// Minimum transcribed length in characters (transcription)
    pub const MIN_TRANSCRIPTION_LENGTH: &str = "min_transcription_length";
    /// Minimum number of images (image generation)
    pub const MIN_IMAGES: &str = "min_images";
    /// Expected image size, recorded only (image generation)
    pub const EXPECTED_SIZE: &str = "expected_size";
    /// Required dimensionality of every vector (embedding)
    pub const EXPECTED_DIMENSIONS: &str = "expected_dimensions";
    /// Provider that must have served the request (list models, count tokens)
    pub const EXPECTED_PROVIDER: &str = "expected_provider";
    /// Minimum number of listed models (list models)
    pub const MIN_MODEL_COUNT: &str = "min_model_count";
}

// ── Bag values ───────────────────────────────────────────────────────

/// A value in the `provider_specific` bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
}

impl ProviderValue {
    /// Non-negative count: integers, finite non-negative floats (truncated)
    /// and numeric text
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Int(n) => u64::try_from(*n).ok(),
            Self::Float(f) if f.is_finite() && *f >= 0.0 => Some(*f as u64),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Float(_) | Self::Bool(_) => None,
        }
    }

    /// Any number, or numeric text
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_fraction(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    /// Boolean, or `"true"` / `"false"` text
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Self::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Text only
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for ProviderValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ProviderValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<usize> for ProviderValue {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ProviderValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for ProviderValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ProviderValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A bag value that could not be read as the type its key requires
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to parse {key}: expected {expected}, got {found} (skipping check)")]
pub struct CoercionError {
    /// Bag key
    pub key: String,
    /// Required shape
    pub expected: &'static str,
    /// Offending value
    pub found: String,
}

impl CoercionError {
    fn new(key: &str, expected: &'static str, found: &ProviderValue) -> Self {
        Self {
            key: key.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}

// ── Tool calls ───────────────────────────────────────────────────────

/// JSON type tag used in argument type expectations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON boolean
    Boolean,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// JSON null
    Null,
}

impl JsonType {
    /// Type tag of a JSON value
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }

    /// Lowercase tag name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one expected tool call must look like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolCallExpectation {
    /// Function that must be called
    pub function_name: String,
    /// Arguments that must be present
    pub required_args: Vec<String>,
    /// Arguments that must be absent
    pub forbidden_args: Vec<String>,
    /// Required JSON type per argument
    pub argument_types: BTreeMap<String, JsonType>,
    /// Required literal value per argument
    pub argument_values: BTreeMap<String, Value>,
    /// Decode the raw arguments; when off, argument checks see no arguments
    pub validate_args_json: bool,
}

impl Default for ToolCallExpectation {
    fn default() -> Self {
        Self {
            function_name: String::new(),
            required_args: Vec::new(),
            forbidden_args: Vec::new(),
            argument_types: BTreeMap::new(),
            argument_values: BTreeMap::new(),
            validate_args_json: true,
        }
    }
}

impl ToolCallExpectation {
    /// Expect a call to `function_name` with the given required arguments
    pub fn new<I, S>(function_name: impl Into<String>, required_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function_name: function_name.into(),
            required_args: required_args.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

// ── Expectation set ──────────────────────────────────────────────────

/// Everything a response is checked against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectationSet {
    /// Text content required (chat, text completion, responses)
    pub should_have_content: bool,
    /// Exact number of choices, 0 for unconstrained
    pub expected_choice_count: usize,
    /// Finish reason every choice should report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_finish_reason: Option<String>,
    /// Keywords that should all appear (case-insensitive)
    pub should_contain_keywords: Vec<String>,
    /// Keywords of which at least one should appear (case-insensitive)
    pub should_contain_any_of: Vec<String>,
    /// Words that should not appear (case-insensitive)
    pub should_not_contain_words: Vec<String>,
    /// Pattern the content should match
    #[serde(with = "pattern", skip_serializing_if = "Option::is_none")]
    pub content_pattern: Option<Regex>,
    /// Tool calls that must be present
    pub expected_tool_calls: Vec<ToolCallExpectation>,
    /// No tool calls may be present
    pub should_not_have_function_calls: bool,
    /// Token usage should be reported
    pub should_have_usage_stats: bool,
    /// Creation timestamp should be reported
    pub should_have_timestamps: bool,
    /// Model name should be reported
    pub should_have_model: bool,
    /// Positive latency must be reported
    pub should_have_latency: bool,
    /// Kind-specific knobs, see [`keys`]
    pub provider_specific: BTreeMap<String, ProviderValue>,
}

impl ExpectationSet {
    /// Combine several sets in order; an empty input yields
    /// [`presets::basic_chat`]
    ///
    /// Later sets override flags they set, append their keyword, forbidden
    /// word and tool-call lists, and overwrite bag keys.
    pub fn combine<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = ExpectationSet>,
    {
        let mut sets = sets.into_iter();
        let Some(mut base) = sets.next() else {
            return presets::basic_chat();
        };
        for set in sets {
            base.merge(set);
        }
        base
    }

    /// Fold `other` into `self` with [`combine`](Self::combine) semantics
    pub fn merge(&mut self, other: ExpectationSet) {
        self.should_have_content |= other.should_have_content;
        if other.expected_choice_count > 0 {
            self.expected_choice_count = other.expected_choice_count;
        }
        if other.expected_finish_reason.is_some() {
            self.expected_finish_reason = other.expected_finish_reason;
        }

        self.should_contain_keywords.extend(other.should_contain_keywords);
        self.should_contain_any_of.extend(other.should_contain_any_of);
        self.should_not_contain_words.extend(other.should_not_contain_words);
        self.expected_tool_calls.extend(other.expected_tool_calls);

        if other.content_pattern.is_some() {
            self.content_pattern = other.content_pattern;
        }
        self.should_not_have_function_calls |= other.should_not_have_function_calls;
        self.should_have_usage_stats |= other.should_have_usage_stats;
        self.should_have_timestamps |= other.should_have_timestamps;
        self.should_have_model |= other.should_have_model;
        self.should_have_latency |= other.should_have_latency;

        self.provider_specific.extend(other.provider_specific);
    }

    /// Adjust metadata expectations to what a provider is known to report
    #[must_use]
    pub fn adjusted_for_provider(mut self, provider: &str) -> Self {
        match provider {
            "openai" | "azure" => {
                self.should_have_usage_stats = true;
                self.should_have_timestamps = true;
                self.should_have_model = true;
            }
            "anthropic" | "cohere" | "mistral" | "groq" | "gemini" => {
                self.should_have_usage_stats = true;
                self.should_have_model = true;
            }
            "bedrock" => {
                self.should_have_model = true;
                self.should_have_usage_stats = false;
            }
            "vertex" => self.should_have_model = true,
            "ollama" => {
                self.should_have_usage_stats = false;
                self.should_have_timestamps = false;
            }
            _ => {}
        }
        self
    }

    /// Set a bag value
    #[must_use]
    pub fn with_provider_value(mut self, key: &str, value: impl Into<ProviderValue>) -> Self {
        self.provider_specific.insert(key.to_string(), value.into());
        self
    }

    /// Bag value read as a non-negative count
    pub fn count(&self, key: &str) -> Option<Result<u64, CoercionError>> {
        self.provider_specific.get(key).map(|value| {
            value
                .as_count()
                .ok_or_else(|| CoercionError::new(key, "a non-negative integer", value))
        })
    }

    /// Bag value read as a number
    pub fn fraction(&self, key: &str) -> Option<Result<f64, CoercionError>> {
        self.provider_specific.get(key).map(|value| {
            value
                .as_fraction()
                .ok_or_else(|| CoercionError::new(key, "a number", value))
        })
    }

    /// Bag value read as a boolean
    pub fn flag(&self, key: &str) -> Option<Result<bool, CoercionError>> {
        self.provider_specific.get(key).map(|value| {
            value
                .as_flag()
                .ok_or_else(|| CoercionError::new(key, "a boolean", value))
        })
    }

    /// Bag value read as text
    pub fn text(&self, key: &str) -> Option<Result<&str, CoercionError>> {
        self.provider_specific.get(key).map(|value| {
            value
                .as_text()
                .ok_or_else(|| CoercionError::new(key, "text", value))
        })
    }
}

/// Serde adapter storing a regex as its source string
mod pattern {
    use regex::Regex;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(pattern: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match pattern {
            Some(re) => serializer.serialize_some(re.as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Regex>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|source| Regex::new(&source))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}
