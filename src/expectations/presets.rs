//! Built-in expectation presets for common scenarios

use super::{ExpectationSet, ToolCallExpectation, keys};
use crate::{Error, Result};

/// Refusal and uncertainty phrases no healthy chat answer should contain
const REFUSAL_PHRASES: &[&str] = &[
    "i can't",
    "i cannot",
    "i'm unable",
    "i am unable",
    "i don't know",
    "i'm not sure",
    "i am not sure",
];

/// Phrases a vision model uses when it did not get the image
const BLIND_PHRASES: &[&str] = &[
    "i can't see",
    "i cannot see",
    "unable to see",
    "can't view",
    "cannot view",
    "no image",
    "not able to see",
    "i don't see",
];

/// Phrases a transcription engine emits instead of a transcript
const TRANSCRIPTION_FAILURES: &[&str] = &[
    "could not transcribe",
    "failed to process",
    "invalid audio",
    "corrupted audio",
    "unsupported format",
    "transcription error",
    "no audio detected",
    "silence detected",
];

/// Preset names accepted by [`by_name`], with a one-line summary each
pub const NAMES: &[(&str, &str)] = &[
    ("basic_chat", "One choice with content, metadata and latency; no refusals"),
    ("tool_call", "A get_weather call with a location argument"),
    ("multiple_tool_calls", "get_weather(location) and calculate(expression) calls"),
    ("text_completion", "Same as basic_chat for legacy completions"),
    ("image_analysis", "basic_chat that must describe an image"),
    ("vision", "image_analysis with extra blind-model phrases forbidden"),
    ("file_input", "Content read back from an attached document"),
    ("conversation", "basic_chat that refers back to earlier turns"),
    ("streaming", "Same as basic_chat for streamed completions"),
    ("embedding", "Model and latency reported"),
    ("count_tokens", "Model, usage and latency reported"),
    ("speech", "At least 500 bytes of audio"),
    ("transcription", "At least 10 characters of transcript, no failure phrases"),
    ("image_generation", "At least one 1024x1024 image"),
    ("reasoning", "Content, usage, timestamp and model"),
    ("chat_audio", "One choice with metadata, no text required"),
];

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn words<I, S>(list: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list.into_iter().map(Into::into).collect()
}

/// Metadata flags every non-chat preset shares
fn with_metadata() -> ExpectationSet {
    ExpectationSet {
        should_have_usage_stats: true,
        should_have_timestamps: true,
        should_have_model: true,
        should_have_latency: true,
        ..ExpectationSet::default()
    }
}

/// One choice with non-empty content, full metadata, no refusals
#[must_use]
pub fn basic_chat() -> ExpectationSet {
    ExpectationSet {
        should_have_content: true,
        expected_choice_count: 1,
        should_not_contain_words: phrases(REFUSAL_PHRASES),
        ..with_metadata()
    }
}

/// A single call to `tool_name` carrying `required_args`; text is optional
#[must_use]
pub fn tool_call<I, S>(tool_name: &str, required_args: I) -> ExpectationSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExpectationSet {
        should_have_content: false,
        expected_tool_calls: vec![ToolCallExpectation::new(tool_name, required_args)],
        ..basic_chat()
    }
}

/// One call per tool; `required_args_per_tool[i]` belongs to `tools[i]`
#[must_use]
pub fn multiple_tool_calls(tools: &[&str], required_args_per_tool: &[&[&str]]) -> ExpectationSet {
    let expected_tool_calls = tools
        .iter()
        .enumerate()
        .map(|(i, tool)| {
            let args = required_args_per_tool.get(i).copied().unwrap_or_default();
            ToolCallExpectation::new(*tool, args.iter().copied())
        })
        .collect();

    ExpectationSet {
        should_have_content: false,
        expected_tool_calls,
        ..basic_chat()
    }
}

/// Image description that must not claim blindness
#[must_use]
pub fn image_analysis() -> ExpectationSet {
    let mut set = basic_chat();
    set.should_contain_keywords = words(["image", "picture", "photo", "see", "shows", "contains"]);
    set.should_not_contain_words.extend(phrases(BLIND_PHRASES));
    set
}

/// Legacy text completion
#[must_use]
pub fn text_completion() -> ExpectationSet {
    basic_chat()
}

/// Streamed chat completion
#[must_use]
pub fn streaming() -> ExpectationSet {
    basic_chat()
}

/// Follow-up turn that should mention at least one context keyword
#[must_use]
pub fn conversation<I, S>(context_keywords: I) -> ExpectationSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ExpectationSet {
        should_contain_any_of: words(context_keywords),
        ..basic_chat()
    }
}

/// Image understanding; non-empty `expected_keywords` replace the defaults
#[must_use]
pub fn vision<I, S>(expected_keywords: I) -> ExpectationSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut set = image_analysis();
    let keywords = words(expected_keywords);
    if !keywords.is_empty() {
        set.should_contain_keywords = keywords;
    }
    set.should_not_contain_words.extend(words([
        "cannot see",
        "unable to view",
        "no image",
        "can't see",
        "image not found",
        "invalid image",
        "corrupted image",
        "failed to load",
        "error processing",
    ]));
    set
}

/// Answer grounded in an attached document that says "hello world"
#[must_use]
pub fn file_input() -> ExpectationSet {
    ExpectationSet {
        should_have_content: true,
        expected_choice_count: 1,
        should_contain_keywords: words(["hello", "world"]),
        should_not_contain_words: words([
            "cannot",
            "unable",
            "error",
            "failed",
            "unsupported",
            "invalid",
            "corrupted",
            "can't read",
            "cannot read",
            "no file",
            "no document",
            "cannot process",
        ]),
        ..with_metadata()
    }
}

/// Embedding vectors with model and latency
#[must_use]
pub fn embedding() -> ExpectationSet {
    ExpectationSet {
        should_have_model: true,
        should_have_latency: true,
        ..ExpectationSet::default()
    }
}

/// Token counting
#[must_use]
pub fn count_tokens() -> ExpectationSet {
    ExpectationSet {
        should_have_usage_stats: true,
        should_have_model: true,
        should_have_latency: true,
        ..ExpectationSet::default()
    }
}

/// Speech synthesis producing at least `min_audio_bytes`
#[must_use]
pub fn speech(min_audio_bytes: usize) -> ExpectationSet {
    with_metadata()
        .with_provider_value(keys::MIN_AUDIO_BYTES, min_audio_bytes)
        .with_provider_value(keys::SHOULD_HAVE_AUDIO, true)
        .with_provider_value(keys::EXPECTED_FORMAT, "audio")
}

/// Transcription of at least `min_text_length` characters without failure phrases
#[must_use]
pub fn transcription(min_text_length: usize) -> ExpectationSet {
    ExpectationSet {
        should_not_contain_words: phrases(TRANSCRIPTION_FAILURES),
        ..with_metadata()
    }
    .with_provider_value(keys::MIN_TRANSCRIPTION_LENGTH, min_text_length)
    .with_provider_value(keys::SHOULD_HAVE_TRANSCRIPTION, true)
}

/// At least `min_images` images, recording the requested size
#[must_use]
pub fn image_generation(min_images: usize, expected_size: &str) -> ExpectationSet {
    with_metadata()
        .with_provider_value(keys::MIN_IMAGES, min_images)
        .with_provider_value(keys::EXPECTED_SIZE, expected_size)
}

/// Reasoning model answer
#[must_use]
pub fn reasoning() -> ExpectationSet {
    ExpectationSet {
        should_have_content: true,
        should_have_latency: false,
        ..with_metadata()
    }
}

/// Chat answer carried as audio; text is optional
#[must_use]
pub fn chat_audio() -> ExpectationSet {
    ExpectationSet {
        expected_choice_count: 1,
        ..with_metadata()
    }
}

/// Preset by CLI name, with default parameters
pub fn by_name(name: &str) -> Result<ExpectationSet> {
    let set = match name {
        "basic_chat" => basic_chat(),
        "tool_call" => tool_call("get_weather", ["location"]),
        "multiple_tool_calls" => {
            multiple_tool_calls(&["get_weather", "calculate"], &[&["location"], &["expression"]])
        }
        "text_completion" => text_completion(),
        "image_analysis" => image_analysis(),
        "vision" => vision(["image", "picture", "see"]),
        "file_input" => file_input(),
        "conversation" => conversation(["context", "previous", "mentioned"]),
        "streaming" => streaming(),
        "embedding" => embedding(),
        "count_tokens" => count_tokens(),
        "speech" => speech(500),
        "transcription" => transcription(10),
        "image_generation" => image_generation(1, "1024x1024"),
        "reasoning" => reasoning(),
        "chat_audio" => chat_audio(),
        other => return Err(Error::UnknownPreset(other.to_string())),
    };
    Ok(set)
}

/// Expectations for a named test scenario; unknown scenarios get
/// [`basic_chat`]
#[must_use]
pub fn for_scenario(scenario: &str) -> ExpectationSet {
    match scenario {
        "TextCompletion" => text_completion(),
        "ToolCalls" => tool_call("get_weather", ["location"]),
        "MultipleToolCalls" => {
            multiple_tool_calls(&["get_weather", "calculate"], &[&["location"], &["expression"]])
        }
        "End2EndToolCalling" => conversation(["weather", "temperature", "result"]),
        "AutomaticFunctionCalling" => ExpectationSet {
            should_have_content: true,
            ..tool_call("get_weather", ["location"])
        },
        "ImageURL" | "ImageBase64" => vision(["image", "picture", "see"]),
        "MultipleImages" => vision(["compare", "similar", "different", "images"]),
        "FileInput" => file_input(),
        "ChatCompletionStream" => streaming(),
        "MultiTurnConversation" => conversation(["context", "previous", "mentioned"]),
        "Embedding" => embedding(),
        "CountTokens" => count_tokens(),
        "CompleteEnd2End" => conversation(["complete", "comprehensive", "full"]),
        "SpeechSynthesis" => speech(500),
        "Transcription" => transcription(10),
        "Reasoning" => reasoning(),
        "ChatAudio" => chat_audio(),
        "ProviderSpecific" => ExpectationSet {
            should_contain_keywords: words(["unique", "specific", "capability"]),
            ..basic_chat()
        },
        "ImageGeneration" | "ImageEdit" | "ImageVariation" => image_generation(1, "1024x1024"),
        _ => basic_chat(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expectations::ProviderValue;

    #[test]
    fn basic_chat_forbids_refusals() {
        let set = basic_chat();
        assert!(set.should_have_content);
        assert!(set.should_have_latency);
        assert_eq!(set.expected_choice_count, 1);
        assert!(set.should_not_contain_words.iter().any(|w| w == "i cannot"));
    }

    #[test]
    fn tool_call_does_not_require_text() {
        let set = tool_call("lookup", ["query"]);
        assert!(!set.should_have_content);
        assert_eq!(set.expected_tool_calls[0].function_name, "lookup");
        assert_eq!(set.expected_tool_calls[0].required_args, vec!["query"]);
        assert!(set.expected_tool_calls[0].validate_args_json);
    }

    #[test]
    fn multiple_tool_calls_tolerates_missing_args() {
        let set = multiple_tool_calls(&["a", "b"], &[&["x"]]);
        assert_eq!(set.expected_tool_calls.len(), 2);
        assert!(set.expected_tool_calls[1].required_args.is_empty());
    }

    #[test]
    fn vision_replaces_keywords_only_when_given() {
        assert_eq!(vision(["cat"]).should_contain_keywords, vec!["cat"]);
        assert_eq!(vision(Vec::<String>::new()).should_contain_keywords.len(), 6);
    }

    #[test]
    fn speech_bag() {
        let set = speech(1024);
        assert_eq!(set.provider_specific[keys::MIN_AUDIO_BYTES], ProviderValue::Int(1024));
        assert_eq!(set.provider_specific[keys::SHOULD_HAVE_AUDIO], ProviderValue::Bool(true));
    }

    #[test]
    fn every_listed_name_resolves() {
        for (name, _) in NAMES {
            assert!(by_name(name).is_ok(), "{name} should resolve");
        }
        assert!(matches!(by_name("nope"), Err(Error::UnknownPreset(n)) if n == "nope"));
    }

    #[test]
    fn scenario_lookup_defaults_to_basic_chat() {
        let set = for_scenario("SomethingNew");
        assert!(set.should_have_content);
        assert!(for_scenario("AutomaticFunctionCalling").should_have_content);
        assert_eq!(
            for_scenario("ImageEdit").provider_specific[keys::MIN_IMAGES],
            ProviderValue::Int(1)
        );
    }
}
