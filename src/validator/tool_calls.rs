//! Tool-call expectations
//!
//! Chat choices and response items carry calls in different places; both
//! are flattened to [`CallRef`]s so one set of checks covers them.

use response_schemas::{ArgumentPayload, ChatResponse, ResponsesResponse};
use serde_json::{Map, Value};

use crate::expectations::{ExpectationSet, JsonType, ToolCallExpectation};

use super::ValidationOutcome;
use super::arguments::{ArgumentError, normalize_arguments};

/// A tool call as the checks see it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallRef<'a> {
    /// Called function, if the provider named it
    pub name: Option<&'a str>,
    /// Raw arguments
    pub arguments: Option<&'a ArgumentPayload>,
}

/// Every tool call across all chat choices, in order
pub fn chat_calls(response: &ChatResponse) -> Vec<CallRef<'_>> {
    response
        .tool_calls()
        .map(|call| CallRef {
            name: call.function.name.as_deref(),
            arguments: call.function.arguments.as_ref(),
        })
        .collect()
}

/// Every responses output item carrying tool data, in order
pub fn responses_calls(response: &ResponsesResponse) -> Vec<CallRef<'_>> {
    response
        .tool_messages()
        .map(|item| CallRef {
            name: item.name.as_deref(),
            arguments: item.arguments.as_ref(),
        })
        .collect()
}

/// Check `calls` against the no-calls constraint and each expected call
pub fn validate_tool_calls(
    calls: &[CallRef<'_>],
    expectations: &ExpectationSet,
    outcome: &mut ValidationOutcome,
) {
    let names: Vec<&str> = calls.iter().filter_map(|c| c.name).collect();

    if expectations.should_not_have_function_calls && !calls.is_empty() {
        outcome.fail(format!(
            "Expected no function calls but found {}: [{}]",
            calls.len(),
            names.join(" ")
        ));
    }

    for expected in &expectations.expected_tool_calls {
        let found = calls
            .iter()
            .find(|call| call.name == Some(expected.function_name.as_str()));

        match found {
            Some(call) => check_arguments(call, expected, outcome),
            None if names.is_empty() => outcome.fail(format!(
                "Expected tool call '{}' not found (no tool calls present)",
                expected.function_name
            )),
            None => outcome.fail(format!(
                "Expected tool call '{}' not found. Actual tool calls found: [{}]",
                expected.function_name,
                names.join(" ")
            )),
        }
    }

    outcome.record("tool_call_count", calls.len());
}

fn check_arguments(
    call: &CallRef<'_>,
    expected: &ToolCallExpectation,
    outcome: &mut ValidationOutcome,
) {
    let name = &expected.function_name;

    // Without decoding, the checks below see no arguments at all
    let args = match decoded_arguments(call, expected) {
        Ok(args) => args,
        Err(ArgumentError::InvalidJson(e)) => {
            outcome.fail(format!("Tool call {name} has invalid JSON arguments: {e}"));
            return;
        }
        Err(e @ ArgumentError::Unsupported(_)) => {
            outcome.fail(format!("Tool call {name} has {e}"));
            return;
        }
    };

    for arg in &expected.required_args {
        if !args.contains_key(arg) {
            outcome.fail(format!("Tool call {name} missing required argument '{arg}'"));
        }
    }

    for arg in &expected.forbidden_args {
        if args.contains_key(arg) {
            outcome.fail(format!("Tool call {name} has forbidden argument '{arg}'"));
        }
    }

    check_types(name, &args, expected, outcome);

    for (arg, want) in &expected.argument_values {
        if let Some(actual) = args.get(arg)
            && !values_match(actual, want)
        {
            outcome.fail(format!(
                "Tool call {name} argument '{arg}' is {actual}, expected {want}"
            ));
        }
    }
}

fn decoded_arguments(
    call: &CallRef<'_>,
    expected: &ToolCallExpectation,
) -> Result<Map<String, Value>, ArgumentError> {
    if expected.validate_args_json {
        normalize_arguments(call.arguments)
    } else {
        Ok(Map::new())
    }
}

fn check_types(
    name: &str,
    args: &Map<String, Value>,
    expected: &ToolCallExpectation,
    outcome: &mut ValidationOutcome,
) {
    for (arg, want) in &expected.argument_types {
        if let Some(value) = args.get(arg) {
            let actual = JsonType::of(value);
            if actual != *want {
                outcome.fail(format!(
                    "Tool call {name} argument '{arg}' is {actual}, expected {want}"
                ));
            }
        }
    }
}

/// Numbers compare by value (`1` equals `1.0`); everything else structurally
#[allow(clippy::float_cmp)]
fn values_match(actual: &Value, expected: &Value) -> bool {
    match (actual.as_f64(), expected.as_f64()) {
        (Some(a), Some(b)) if actual.is_number() && expected.is_number() => a == b,
        _ => actual == expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::MetricValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn chat(calls: Value) -> ChatResponse {
        serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "tool_calls": calls}}]
        }))
        .unwrap()
    }

    fn run(response: &ChatResponse, expectations: &ExpectationSet) -> ValidationOutcome {
        let mut outcome = ValidationOutcome::new();
        validate_tool_calls(&chat_calls(response), expectations, &mut outcome);
        outcome
    }

    fn expecting(call: ToolCallExpectation) -> ExpectationSet {
        ExpectationSet {
            expected_tool_calls: vec![call],
            ..Default::default()
        }
    }

    #[test]
    fn no_calls_violation_names_every_call() {
        let response = chat(json!([
            {"function": {"name": "lookup", "arguments": "{}"}},
            {"function": {"name": "book", "arguments": "{}"}}
        ]));
        let expectations = ExpectationSet {
            should_not_have_function_calls: true,
            ..Default::default()
        };
        let outcome = run(&response, &expectations);
        assert!(!outcome.passed());
        assert_eq!(outcome.errors(), ["Expected no function calls but found 2: [lookup book]"]);
        assert_eq!(outcome.metric("tool_call_count"), Some(&MetricValue::Int(2)));
    }

    #[test]
    fn text_arguments_satisfy_required() {
        let response = chat(json!([{"function": {"name": "f", "arguments": "{\"x\":1}"}}]));
        let outcome = run(&response, &expecting(ToolCallExpectation::new("f", ["x"])));
        assert!(outcome.passed(), "{:?}", outcome.errors());
    }

    #[test]
    fn unparseable_arguments_fail() {
        let response = chat(json!([{"function": {"name": "f", "arguments": "not-json"}}]));
        let outcome = run(&response, &expecting(ToolCallExpectation::new("f", ["x"])));
        assert!(!outcome.passed());
        assert_eq!(outcome.errors().len(), 1);
        assert!(outcome.errors()[0].starts_with("Tool call f has invalid JSON arguments:"));
    }

    #[test]
    fn unsupported_arguments_fail() {
        let response = chat(json!([{"function": {"name": "f", "arguments": [1, 2]}}]));
        let outcome = run(&response, &expecting(ToolCallExpectation::new("f", ["x"])));
        assert_eq!(outcome.errors(), ["Tool call f has unsupported argument type (array)"]);
    }

    #[test]
    fn missing_call_lists_observed_names() {
        let response = chat(json!([{"function": {"name": "other", "arguments": "{}"}}]));
        let outcome = run(&response, &expecting(ToolCallExpectation::new("wanted", ["x"])));
        assert_eq!(
            outcome.errors(),
            ["Expected tool call 'wanted' not found. Actual tool calls found: [other]"]
        );
    }

    #[test]
    fn missing_call_without_any_calls() {
        let outcome = run(
            &ChatResponse::default(),
            &expecting(ToolCallExpectation::new("wanted", ["x"])),
        );
        assert_eq!(
            outcome.errors(),
            ["Expected tool call 'wanted' not found (no tool calls present)"]
        );
        assert_eq!(outcome.metric("tool_call_count"), Some(&MetricValue::Int(0)));
    }

    #[test]
    fn forbidden_types_and_values() {
        let response = chat(json!([{"function": {
            "name": "f",
            "arguments": {"unit": "kelvin", "days": "3", "limit": 5.0, "debug": true}
        }}]));
        let mut call = ToolCallExpectation::new("f", ["unit"]);
        call.forbidden_args = vec!["debug".into()];
        call.argument_types.insert("days".into(), JsonType::Number);
        call.argument_values.insert("unit".into(), json!("celsius"));
        call.argument_values.insert("limit".into(), json!(5));

        let outcome = run(&response, &expecting(call));
        assert_eq!(
            outcome.errors(),
            [
                "Tool call f has forbidden argument 'debug'",
                "Tool call f argument 'days' is string, expected number",
                "Tool call f argument 'unit' is \"kelvin\", expected \"celsius\"",
            ]
        );
    }

    #[test]
    fn only_first_matching_call_is_checked() {
        let response = chat(json!([
            {"function": {"name": "f", "arguments": "{\"x\":1}"}},
            {"function": {"name": "f", "arguments": "{}"}}
        ]));
        let outcome = run(&response, &expecting(ToolCallExpectation::new("f", ["x"])));
        assert!(outcome.passed());
    }

    #[test]
    fn undecoded_arguments_still_fail_required_checks() {
        let response = chat(json!([{"function": {"name": "f", "arguments": "{\"x\":1}"}}]));
        let mut call = ToolCallExpectation::new("f", ["x"]);
        call.validate_args_json = false;
        let outcome = run(&response, &expecting(call));
        assert!(!outcome.passed());
        assert_eq!(outcome.errors(), ["Tool call f missing required argument 'x'"]);
        assert!(outcome.warnings().is_empty());
    }

    #[test]
    fn undecoded_arguments_skip_parsing() {
        let response = chat(json!([{"function": {"name": "f", "arguments": "not-json"}}]));
        let mut call = ToolCallExpectation::new("f", Vec::<String>::new());
        call.validate_args_json = false;
        call.forbidden_args = vec!["debug".into()];
        let outcome = run(&response, &expecting(call));
        assert!(outcome.passed(), "{:?}", outcome.errors());
    }

    #[test]
    fn responses_items_are_counted_by_tool_data() {
        let response: ResponsesResponse = serde_json::from_value(json!({
            "output": [
                {"type": "message", "content": "hi"},
                {"type": "function_call", "name": "lookup", "call_id": "c1"},
                {"type": "function_call_output", "call_id": "c1", "output": "sunny"},
                {"type": "web_search_call"}
            ]
        }))
        .unwrap();
        let calls = responses_calls(&response);
        assert_eq!(calls.len(), 3);

        let mut outcome = ValidationOutcome::new();
        let expectations = expecting(ToolCallExpectation::new("lookup", Vec::<String>::new()));
        validate_tool_calls(&calls, &expectations, &mut outcome);
        assert!(outcome.passed());
        assert_eq!(outcome.metric("tool_call_count"), Some(&MetricValue::Int(3)));
    }

    #[test]
    fn call_outputs_violate_the_no_calls_constraint() {
        let response: ResponsesResponse = serde_json::from_value(json!({
            "output": [
                {"type": "message", "content": "done"},
                {"type": "function_call_output", "call_id": "c1", "output": "42"}
            ]
        }))
        .unwrap();
        let expectations = ExpectationSet {
            should_not_have_function_calls: true,
            ..Default::default()
        };
        let mut outcome = ValidationOutcome::new();
        validate_tool_calls(&responses_calls(&response), &expectations, &mut outcome);
        assert_eq!(outcome.errors(), ["Expected no function calls but found 1: []"]);
    }

    #[test]
    fn numeric_values_compare_by_value() {
        assert!(values_match(&json!(1), &json!(1.0)));
        assert!(!values_match(&json!(1), &json!("1")));
        assert!(values_match(&json!({"a": [1]}), &json!({"a": [1]})));
    }
}
