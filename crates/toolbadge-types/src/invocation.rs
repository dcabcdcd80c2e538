use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::is_truthy;
use crate::{Error, Result};

/// Lifecycle tag value meaning the invocation has finished
pub const STATE_RESULT: &str = "result";

/// One tool call made by the assistant, as emitted by the chat transport
///
/// Records are owned by the producer and updated in place as the call
/// progresses. Decoding is lenient: missing fields take empty defaults and
/// wrong-typed fields are treated as absent, so any JSON object decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct ToolInvocation {
    pub tool_call_id: String,
    pub tool_name: String,
    pub args: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Lifecycle of an invocation as far as the record's `state` tag says
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationState {
    /// No state, or any state other than `"result"`
    InProgress,
    /// `state == "result"`; the result payload may still be empty
    Result,
}

impl ToolInvocation {
    pub fn new(tool_call_id: impl Into<String>, tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            args,
            state: None,
            result: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Mark the invocation finished with the given result payload
    pub fn finish(mut self, result: Value) -> Self {
        self.state = Some(STATE_RESULT.to_string());
        self.result = Some(result);
        self
    }

    pub fn lifecycle(&self) -> InvocationState {
        match self.state.as_deref() {
            Some(STATE_RESULT) => InvocationState::Result,
            _ => InvocationState::InProgress,
        }
    }

    /// True when a result payload is present and truthy
    pub fn has_result(&self) -> bool {
        self.result.as_ref().is_some_and(is_truthy)
    }
}

impl TryFrom<Value> for ToolInvocation {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut obj) = value else {
            return Err(Error::Parse(format!(
                "expected a JSON object, found {}",
                json_type_name(&value)
            )));
        };

        let args = match obj.remove("args") {
            Some(Value::Object(map)) => Value::Object(map),
            _ => Value::Object(Map::new()),
        };

        Ok(Self {
            tool_call_id: take_string(&mut obj, "toolCallId").unwrap_or_default(),
            tool_name: take_string(&mut obj, "toolName").unwrap_or_default(),
            args,
            state: take_string(&mut obj, "state"),
            result: obj.remove("result").filter(|v| !v.is_null()),
        })
    }
}

/// Decode invocation records from text
///
/// Accepts a JSON array of records, a single record, or a sequence of
/// records separated by whitespace (JSON Lines).
pub fn parse_records(input: &str) -> Result<Vec<ToolInvocation>> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)?;
        return values.into_iter().map(ToolInvocation::try_from).collect();
    }

    serde_json::Deserializer::from_str(trimmed)
        .into_iter::<Value>()
        .map(|value| ToolInvocation::try_from(value?))
        .collect()
}

/// Decode a single record (one JSON Lines entry)
pub fn parse_record(line: &str) -> Result<ToolInvocation> {
    let value: Value = serde_json::from_str(line)?;
    ToolInvocation::try_from(value)
}

fn take_string(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    match obj.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let invocation: ToolInvocation = serde_json::from_value(json!({
            "toolCallId": "call_1",
            "toolName": "str_replace_editor",
            "args": {"command": "create", "path": "/App.jsx"},
            "state": "result",
            "result": "Success"
        }))
        .unwrap();

        assert_eq!(invocation.tool_call_id, "call_1");
        assert_eq!(invocation.tool_name, "str_replace_editor");
        assert_eq!(invocation.args["command"], "create");
        assert_eq!(invocation.lifecycle(), InvocationState::Result);
        assert!(invocation.has_result());
    }

    #[test]
    fn test_decode_is_lenient() {
        let invocation: ToolInvocation = serde_json::from_value(json!({
            "toolName": 7,
            "args": "not an object",
            "state": null,
            "result": null
        }))
        .unwrap();

        assert_eq!(invocation.tool_call_id, "");
        assert_eq!(invocation.tool_name, "");
        assert_eq!(invocation.args, json!({}));
        assert_eq!(invocation.state, None);
        assert_eq!(invocation.result, None);
        assert_eq!(invocation.lifecycle(), InvocationState::InProgress);
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let err = ToolInvocation::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: expected a JSON object, found array");
    }

    #[test]
    fn test_result_state_without_payload_has_no_result() {
        let invocation = ToolInvocation::new("1", "file_manager", json!({})).with_state("result");
        assert_eq!(invocation.lifecycle(), InvocationState::Result);
        assert!(!invocation.has_result());
    }

    #[test]
    fn test_other_states_are_in_progress() {
        for state in ["call", "partial-call", "in-progress", "Result", ""] {
            let invocation = ToolInvocation::new("1", "x", json!({})).with_state(state);
            assert_eq!(invocation.lifecycle(), InvocationState::InProgress, "{state}");
        }
    }

    #[test]
    fn test_parse_records_array_single_and_lines() {
        let array = r#"[{"toolCallId":"a","toolName":"x"},{"toolCallId":"b","toolName":"y"}]"#;
        assert_eq!(parse_records(array).unwrap().len(), 2);

        let single = r#"{"toolCallId":"a","toolName":"x"}"#;
        assert_eq!(parse_records(single).unwrap().len(), 1);

        let lines = "{\"toolCallId\":\"a\"}\n\n{\"toolCallId\":\"b\"}\n";
        let records = parse_records(lines).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tool_call_id, "b");

        assert!(parse_records("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_reports_invalid_json() {
        let err = parse_records("{\"toolCallId\":").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_empty_fields() {
        let invocation = ToolInvocation::new("1", "str_replace_editor", json!({"command": "view"}));
        let value = serde_json::to_value(&invocation).unwrap();
        assert_eq!(
            value,
            json!({
                "toolCallId": "1",
                "toolName": "str_replace_editor",
                "args": {"command": "view"}
            })
        );
    }
}
