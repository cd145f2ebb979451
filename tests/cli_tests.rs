//! CLI tests for the `response-validator` binary
//!
//! Runs the built binary against response files in a temporary directory and
//! checks the exit code contract: 0 pass, 1 fail, 2 input error.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_response-validator"))
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("RESPONSE_VALIDATOR_CONFIG")
        .output()
        .expect("Failed to execute response-validator")
}

/// A passing response exits 0 and prints the JSON report
#[test]
fn test_check_pass_json() {
    let dir = tempfile::tempdir().unwrap();
    let response = write(
        dir.path(),
        "chat.json",
        r#"{
            "model": "gpt-4o",
            "created": 1700000000,
            "choices": [{
                "message": {"content": "Oslo is the capital of Norway."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 7, "total_tokens": 16},
            "extra_fields": {"provider": "openai", "latency": 420}
        }"#,
    );

    let output = run(&[
        "check",
        "--kind",
        "chat",
        "--response",
        response.to_str().unwrap(),
        "--preset",
        "basic_chat",
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["passed"], Value::Bool(true));
    assert_eq!(report["metrics"]["choice_count"], Value::from(1));
}

/// A failing response exits 1 and lists its errors in the text report
#[test]
fn test_check_fail_text() {
    let dir = tempfile::tempdir().unwrap();
    let response = write(dir.path(), "images.json", r#"{"data": []}"#);
    let expectations = write(dir.path(), "expect.yaml", "should_have_latency: true\n");

    let output = run(&[
        "check",
        "--kind",
        "image-generation",
        "--response",
        response.to_str().unwrap(),
        "--expectations",
        expectations.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ FAILED"));
    assert!(stdout.contains("Image generation response missing image data"));
    assert!(stdout.contains("Response: images"));
}

/// An unrecognised request-type tag still parses and fails the discriminator check
#[test]
fn test_unknown_request_type_fails_check() {
    let dir = tempfile::tempdir().unwrap();
    let response = write(
        dir.path(),
        "models.json",
        r#"{"data": [{"id": "m"}], "extra_fields": {"request_type": "chat_completion_stream"}}"#,
    );
    let expectations = write(dir.path(), "expect.yaml", "should_have_model: false\n");

    let output = run(&[
        "check",
        "--kind",
        "list-models",
        "--response",
        response.to_str().unwrap(),
        "--expectations",
        expectations.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report["errors"],
        serde_json::json!([
            "Request type mismatch: expected list_models, got chat_completion_stream"
        ])
    );
}

/// Unknown presets and unreadable files exit 2
#[test]
fn test_check_input_errors() {
    let output = run(&["check", "--kind", "chat", "--preset", "does_not_exist"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown preset"));

    let output = run(&[
        "check",
        "--kind",
        "chat",
        "--response",
        "/nonexistent/chat.json",
        "--preset",
        "basic_chat",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

/// A missing config file exits 2
#[test]
fn test_missing_config() {
    let output = run(&["--config", "/nonexistent/validator.yaml", "presets"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config file not found"));
}

/// The presets command lists every preset name
#[test]
fn test_presets_listing() {
    let output = run(&["presets"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["basic_chat", "tool_call", "speech", "transcription", "image_generation"] {
        assert!(stdout.contains(name), "missing preset {name}");
    }
}

/// Config file settings shape content previews in the report
#[test]
fn test_config_preview_length() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        dir.path(),
        "validator.yaml",
        "logging:\n  level: error\nvalidation:\n  content_preview_chars: 5\n",
    );
    let response = write(
        dir.path(),
        "chat.json",
        r#"{"choices": [{"message": {"content": "Bergen is rainy"}}]}"#,
    );
    let expectations = write(
        dir.path(),
        "expect.json",
        r#"{"should_have_content": true, "should_contain_keywords": ["sunny"]}"#,
    );

    let output = run(&[
        "--config",
        config.to_str().unwrap(),
        "check",
        "--kind",
        "chat",
        "--response",
        response.to_str().unwrap(),
        "--expectations",
        expectations.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'Berge...' (truncated from 15 chars)"));
}
