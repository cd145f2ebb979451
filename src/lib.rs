//! Response Validator Library
//!
//! Judges the outcome of AI-service operations (chat, text completion,
//! responses, speech, transcription, image generation, embeddings, model
//! listing, token counting, batch and file lifecycle) against declarative
//! expectation sets.
//!
//! # Features
//!
//! - **One protocol for every kind**: pass/fail verdict, ordered errors and
//!   warnings, open metrics
//! - **Tool-call argument normalization**: mappings, foreign-keyed maps, JSON
//!   text and JSON bytes reduce to one canonical form before checks
//! - **Lenient content checks**: keyword and pattern mismatches are warnings
//! - **Presets**: ready-made expectation sets for common scenarios
//!
//! # Example
//!
//! ```
//! use response_validator::expectations::presets;
//! use response_validator::response_schemas::ChatResponse;
//! use response_validator::validator::validate_chat_response;
//!
//! let response: ChatResponse = serde_json::from_str(
//!     r#"{"choices": [{"message": {"content": "Paris"}}]}"#,
//! ).unwrap();
//! let outcome = validate_chat_response(Some(&response), None, &presets::basic_chat(), "capital");
//! assert!(!outcome.passed()); // no latency reported
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod expectations;
pub mod validator;

pub use error::{Error, Result};
pub use response_schemas;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing/logging
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // Reports go to stdout; logs stay on stderr
    let installed = match format {
        Some("json") => subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}
