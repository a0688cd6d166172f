//! Turn response parsing.
//!
//! Normalizes the service's raw JSON into a [`TurnResult`]:
//! - `output.text` lines joined with `\n` (required)
//! - `output.action` passed through in insertion order (optional)
//! - top-level `intents` / `entities`, read leniently for diagnostics

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ParseError;

/// An intent the service recognized in the user text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Intent {
    pub intent: String,
    pub confidence: f64,
}

/// An entity the service extracted from the user text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub entity: String,
    pub value: String,
}

/// Normalized result of one turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResult {
    /// Reply lines joined by newlines. Empty when the service sent none.
    pub text: String,
    /// Action name → argument, in the order the service sent them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<Intent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
}

/// Parse a raw turn response.
pub fn parse_turn(response: &Value) -> Result<TurnResult, ParseError> {
    let output = response
        .get("output")
        .ok_or_else(|| ParseError::MissingField("output".to_string()))?;

    let lines = output
        .get("text")
        .ok_or_else(|| ParseError::MissingField("output.text".to_string()))?
        .as_array()
        .ok_or_else(|| invalid("output.text", "an array of strings"))?;

    let text = lines
        .iter()
        .map(|line| line.as_str().ok_or_else(|| invalid("output.text", "an array of strings")))
        .collect::<Result<Vec<_>, _>>()?
        .join("\n");

    let action = match output.get("action") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => return Err(invalid("output.action", "an object")),
    };

    let result = TurnResult {
        text,
        action,
        intents: parse_intents(response),
        entities: parse_entities(response),
    };

    if !result.intents.is_empty() || !result.entities.is_empty() {
        tracing::debug!(
            intents = ?result.intents,
            entities = ?result.entities,
            "Turn classified"
        );
    }

    Ok(result)
}

/// Extract the context token to echo back on the next turn.
pub fn extract_context(response: &Value) -> Result<Value, ParseError> {
    response
        .get("context")
        .cloned()
        .ok_or_else(|| ParseError::MissingField("context".to_string()))
}

fn invalid(field: &str, expected: &str) -> ParseError {
    ParseError::InvalidField {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

fn parse_intents(response: &Value) -> Vec<Intent> {
    response
        .get("intents")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(Intent {
                        intent: item.get("intent")?.as_str()?.to_string(),
                        confidence: item.get("confidence").and_then(Value::as_f64).unwrap_or(0.0),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn parse_entities(response: &Value) -> Vec<Entity> {
    response
        .get("entities")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    Some(Entity {
                        entity: item.get("entity")?.as_str()?.to_string(),
                        value: item.get("value")?.as_str()?.to_string(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_joins_lines_with_newline() {
        let result = parse_turn(&json!({"output": {"text": ["A", "B"]}})).unwrap();
        assert_eq!(result.text, "A\nB");
        assert!(result.action.is_none());
    }

    #[test]
    fn test_empty_text_yields_empty_string() {
        let result = parse_turn(&json!({"output": {"text": []}})).unwrap();
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_single_line_unchanged() {
        let result = parse_turn(&json!({"output": {"text": ["Hi there"]}})).unwrap();
        assert_eq!(result.text, "Hi there");
    }

    #[test]
    fn test_action_passed_through_in_order() {
        let response = json!({
            "output": {
                "text": ["Hi there"],
                "action": {"search_document": "install", "another": {"nested": [1, 2]}}
            }
        });
        let result = parse_turn(&response).unwrap();
        let action = result.action.as_ref().unwrap();

        assert_eq!(Value::Object(action.clone()), response["output"]["action"]);
        let keys: Vec<&str> = action.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["search_document", "another"]);
    }

    #[test]
    fn test_null_action_is_absent() {
        let result = parse_turn(&json!({"output": {"text": ["x"], "action": null}})).unwrap();
        assert!(result.action.is_none());
    }

    #[test]
    fn test_serialized_shape_omits_absent_action() {
        let result = parse_turn(&json!({"output": {"text": ["A", "B"]}})).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"text": "A\nB"}));
    }

    #[test]
    fn test_missing_output_text() {
        let err = parse_turn(&json!({"output": {}})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "output.text"));

        let err = parse_turn(&json!({"context": {}})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "output"));
    }

    #[test]
    fn test_non_string_line_rejected() {
        let err = parse_turn(&json!({"output": {"text": ["ok", 3]}})).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { .. }));
    }

    #[test]
    fn test_non_object_action_rejected() {
        let err = parse_turn(&json!({"output": {"text": [], "action": "nope"}})).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { ref field, .. } if field == "output.action"));
    }

    #[test]
    fn test_intents_and_entities_read_leniently() {
        let response = json!({
            "output": {"text": ["ok"]},
            "intents": [{"intent": "docs", "confidence": 0.93}, {"bogus": true}],
            "entities": [{"entity": "topic", "value": "install", "location": [0, 7]}]
        });
        let result = parse_turn(&response).unwrap();
        assert_eq!(
            result.intents,
            vec![Intent {
                intent: "docs".to_string(),
                confidence: 0.93
            }]
        );
        assert_eq!(result.entities[0].value, "install");
    }

    #[test]
    fn test_extract_context() {
        let ctx = extract_context(&json!({"context": {"conversation_id": "c1"}})).unwrap();
        assert_eq!(ctx, json!({"conversation_id": "c1"}));

        let err = extract_context(&json!({"output": {"text": []}})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(ref f) if f == "context"));
    }
}
