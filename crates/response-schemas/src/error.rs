//! Upstream failure value

use serde::{Deserialize, Serialize};

/// A failure reported by the provider or the gateway in place of a response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderError {
    /// Event identifier, if the gateway assigned one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Top-level error type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Whether the failure originated at the provider
    pub is_provider_error: bool,
    /// HTTP status, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Error details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    /// Detail-level error type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Provider error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl ProviderError {
    /// One-line description: `"<type> <code>: <message>"`, prefixed with the
    /// HTTP status when known
    ///
    /// Falls back to the bare type, then to `"unknown error"`, when no
    /// details are attached.
    #[must_use]
    pub fn describe(&self) -> String {
        let top_type = non_empty(self.error_type.as_deref());

        let line = match &self.error {
            None => top_type.unwrap_or("unknown error").to_string(),
            Some(body) => {
                let error_type = top_type
                    .or_else(|| non_empty(body.error_type.as_deref()))
                    .unwrap_or_default();
                let code = non_empty(body.code.as_deref()).unwrap_or_default();
                format!("{error_type} {code}: {}", body.message)
            }
        };

        match self.status_code {
            Some(status) => format!("[{status}] {line}"),
            None => line,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(error_type: Option<&str>, code: Option<&str>, message: &str) -> ErrorBody {
        ErrorBody {
            error_type: error_type.map(String::from),
            code: code.map(String::from),
            message: message.to_string(),
        }
    }

    #[test]
    fn describe_uses_type_code_and_message() {
        let err = ProviderError {
            error: Some(body(Some("rate_limit_error"), Some("429"), "slow down")),
            ..Default::default()
        };
        assert_eq!(err.describe(), "rate_limit_error 429: slow down");
    }

    #[test]
    fn top_level_type_wins_over_detail_type() {
        let err = ProviderError {
            error_type: Some("gateway".into()),
            error: Some(body(Some("upstream"), None, "boom")),
            ..Default::default()
        };
        assert_eq!(err.describe(), "gateway : boom");
    }

    #[test]
    fn status_code_is_prefixed() {
        let err = ProviderError {
            status_code: Some(503),
            error: Some(body(Some("server_error"), Some("overloaded"), "try later")),
            ..Default::default()
        };
        assert_eq!(err.describe(), "[503] server_error overloaded: try later");
    }

    #[test]
    fn missing_details_fall_back() {
        let typed = ProviderError {
            error_type: Some("timeout".into()),
            ..Default::default()
        };
        assert_eq!(typed.describe(), "timeout");
        assert_eq!(ProviderError::default().describe(), "unknown error");
    }
}
