//! Chat history records.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// One stored chat message as delivered by the backend.
///
/// Backends disagree on whether the author lives in `role` or `sender`,
/// so both are accepted. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Some("assistant".to_string()),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Returns true when either `role` or `sender` is `"user"`.
    pub fn is_user(&self) -> bool {
        self.role.as_deref() == Some("user") || self.sender.as_deref() == Some("user")
    }
}

/// Parses a JSON chat history.
///
/// # Arguments
///
/// * `json`: JSON document expected to hold an array of message objects
///
/// # Returns
///
/// Parsed entries in document order. A well formed document whose top
/// level value is not an array yields no entries.
///
/// # Errors
///
/// Returns error if the document is not valid JSON or an array element is
/// not a message object.
pub fn parse_history(json: &str) -> Result<Vec<HistoryEntry>> {
    let value: Value = serde_json::from_str(json).context("Failed to parse history JSON")?;

    let Value::Array(items) = value else {
        tracing::warn!("history is not a JSON array, ignoring");
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .with_context(|| format!("Invalid history entry at index {}", index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_roles() {
        // Arrange
        let json = r#"[
            {"role": "user", "content": "hi"},
            {"role": "assistant", "content": "**hello**"}
        ]"#;

        // Act
        let entries = parse_history(json).expect("Should parse history");

        // Assert
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_user());
        assert!(!entries[1].is_user());
        assert_eq!(entries[1].content, "**hello**");
    }

    #[test]
    fn test_parse_history_sender_field() {
        // Arrange
        let json = r#"[{"sender": "user", "content": "from sender"}]"#;

        // Act
        let entries = parse_history(json).expect("Should parse history");

        // Assert
        assert!(entries[0].is_user(), "sender=user should mark user entry");
        assert_eq!(entries[0].role, None);
    }

    #[test]
    fn test_parse_history_missing_content_defaults_empty() {
        let entries = parse_history(r#"[{"role": "assistant"}]"#).expect("Should parse");
        assert_eq!(entries[0].content, "");
    }

    #[test]
    fn test_parse_history_ignores_unknown_fields() {
        let entries =
            parse_history(r#"[{"role": "user", "content": "x", "id": 7, "meta": {}}]"#)
                .expect("Should ignore unknown fields");
        assert_eq!(entries[0], HistoryEntry::user("x"));
    }

    #[test]
    fn test_parse_history_timestamp() {
        let entries = parse_history(r#"[{"role": "user", "content": "x", "timestamp": "09:30"}]"#)
            .expect("Should parse");
        assert_eq!(entries[0].timestamp.as_deref(), Some("09:30"));
    }

    #[test]
    fn test_parse_history_non_array_is_empty() {
        // Arrange
        let json = r#"{"role": "user", "content": "not a list"}"#;

        // Act
        let entries = parse_history(json).expect("Non-array should not fail");

        // Assert
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_history_invalid_json() {
        // Arrange
        let json = "[{";

        // Act
        let result = parse_history(json);

        // Assert
        assert!(result.is_err());
        assert!(
            format!("{:#}", result.unwrap_err()).contains("Failed to parse history JSON"),
            "Error should carry context"
        );
    }

    #[test]
    fn test_parse_history_bad_entry_reports_index() {
        // Arrange
        let json = r#"[{"role": "user", "content": "ok"}, 42]"#;

        // Act
        let result = parse_history(json);

        // Assert
        let message = format!("{:#}", result.expect_err("Number is not an entry"));
        assert!(message.contains("index 1"), "Got: {}", message);
    }
}
