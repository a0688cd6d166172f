//! Documentation links table.
//!
//! A flat JSON object mapping topic names to links, loaded once at startup
//! and read-only afterwards.

use std::path::Path;

use serde_json::{Map, Value};
use tokio::fs;

use crate::error::DocumentError;

/// Immutable topic → link table.
#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    entries: Map<String, Value>,
}

impl DocumentTable {
    /// Build a table from an in-memory map.
    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Load the table from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, DocumentError> {
        let path_str = path.display().to_string();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|source| DocumentError::Io {
                path: path_str.clone(),
                source,
            })?;

        let value: Value = serde_json::from_str(&raw).map_err(|e| DocumentError::Parse {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(entries) => {
                tracing::info!(path = %path_str, topics = entries.len(), "Loaded documentation links");
                Ok(Self { entries })
            }
            other => Err(DocumentError::Parse {
                path: path_str,
                reason: format!("expected a JSON object, found {}", type_name(&other)),
            }),
        }
    }

    /// Look up the links for `topic`.
    pub fn lookup(&self, topic: &str) -> Result<&Value, DocumentError> {
        self.entries
            .get(topic)
            .ok_or_else(|| DocumentError::TopicNotFound(topic.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a JSON value for display: strings verbatim, anything else as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_and_lookup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(
            &path,
            r#"{"install": "https://docs.example/install", "api": ["a", "b"]}"#,
        )
        .unwrap();

        let table = DocumentTable::load(&path).await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.lookup("install").unwrap(),
            &json!("https://docs.example/install")
        );
        assert_eq!(table.lookup("api").unwrap(), &json!(["a", "b"]));
    }

    #[tokio::test]
    async fn test_lookup_is_stable() {
        let mut map = Map::new();
        map.insert("install".to_string(), json!("https://docs.example/install"));
        let table = DocumentTable::from_map(map);

        let first = table.lookup("install").unwrap().clone();
        let second = table.lookup("install").unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_topic() {
        let table = DocumentTable::default();
        assert!(table.is_empty());
        let err = table.lookup("nope").unwrap_err();
        assert!(matches!(err, DocumentError::TopicNotFound(ref t) if t == "nope"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DocumentTable::load(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }

    #[tokio::test]
    async fn test_non_object_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = DocumentTable::load(&path).await.unwrap_err();
        match err {
            DocumentError::Parse { reason, .. } => assert!(reason.contains("an array")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = DocumentTable::load(&path).await.unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("https://x")), "https://x");
        assert_eq!(render_value(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(render_value(&json!(7)), "7");
    }
}
