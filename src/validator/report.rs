//! Validation outcome, report formatting and logging

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::ValidationSettings;

/// Marker prefixed to logged errors
const FAIL_MARKER: &str = "❌";

/// A collected observation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.2}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for MetricValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for MetricValue {
    fn from(n: u64) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<usize> for MetricValue {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for MetricValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Verdict and diagnosis for one response
///
/// Starts passing. Every hard error flips the verdict for good, so
/// `passed() == errors().is_empty()` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    passed: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    metrics: BTreeMap<String, MetricValue>,
}

impl Default for ValidationOutcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationOutcome {
    /// A passing outcome with nothing recorded
    #[must_use]
    pub fn new() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            metrics: BTreeMap::new(),
        }
    }

    /// Record a hard error
    pub fn fail(&mut self, error: impl Into<String>) {
        self.passed = false;
        self.errors.push(error.into());
    }

    /// Record a soft warning
    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Record a metric, replacing any earlier value under the same key
    pub fn record(&mut self, key: &str, value: impl Into<MetricValue>) {
        self.metrics.insert(key.to_string(), value.into());
    }

    /// Whether no hard error was recorded
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Hard errors, in the order they were found
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings, in the order they were found
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Collected metrics
    pub fn metrics(&self) -> &BTreeMap<String, MetricValue> {
        &self.metrics
    }

    /// One metric by key
    pub fn metric(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }

    /// Emit the outcome through `tracing`
    ///
    /// Failures go out at `warn` so a retrying caller can keep going.
    pub fn log(&self, label: &str, settings: &ValidationSettings) {
        if self.passed {
            if settings.log_passing {
                info!(label = %label, "✅ Validation passed for {label}");
            }
        } else {
            warn!(
                label = %label,
                errors = self.errors.len(),
                "{FAIL_MARKER} Validation failed for {label} with {} errors",
                self.errors.len()
            );
            for error in &self.errors {
                if error.contains(FAIL_MARKER) {
                    warn!(label = %label, "{error}");
                } else {
                    warn!(label = %label, "{FAIL_MARKER} {error}");
                }
            }
        }

        if settings.log_warnings && !self.warnings.is_empty() {
            warn!(
                label = %label,
                warnings = self.warnings.len(),
                "⚠️  {} warnings for {label}",
                self.warnings.len()
            );
            for warning in &self.warnings {
                info!(label = %label, "   Warning: {warning}");
            }
        }
    }

    /// Format as human-readable text
    pub fn format_text(&self, label: &str) -> String {
        let mut output = String::new();
        let rule = "=".repeat(60);

        let _ = writeln!(output, "\n{rule}");
        let _ = writeln!(output, "  Response: {label}");
        let _ = writeln!(
            output,
            "  Status: {}",
            if self.passed { "✅ PASSED" } else { "❌ FAILED" }
        );
        let _ = writeln!(output, "{rule}");

        if !self.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", self.errors.len());
            for error in &self.errors {
                let _ = writeln!(output, "  ❌ {error}");
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(output, "\nWarnings ({}):", self.warnings.len());
            for warning in &self.warnings {
                let _ = writeln!(output, "  ⚠️  {warning}");
            }
        }

        if !self.metrics.is_empty() {
            output.push_str("\nMetrics:\n");
            for (key, value) in &self.metrics {
                let _ = writeln!(output, "  {key}: {value}");
            }
        }

        output.push('\n');
        output
    }

    /// Format as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
