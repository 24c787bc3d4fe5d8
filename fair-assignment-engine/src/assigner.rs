use serde::Deserialize;

use crate::error::AssignmentError;
use crate::rotate::Direction;

/// A saved rotating assigner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatingAssigner {
    pub id: String,
    pub class_id: String,
    /// JSON array of item names, exactly as stored.
    #[serde(default)]
    pub items: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub balance_gender: bool,
}

/// A saved random assigner. Only the items matter for a random run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomAssigner {
    pub id: String,
    pub class_id: String,
    #[serde(default)]
    pub items: String,
}

/// Strict parse of a stored item list.
pub fn parse_items(items: &str) -> Result<Vec<String>, AssignmentError> {
    Ok(serde_json::from_str(items)?)
}

/// Lenient parse: blank text is an empty list, anything malformed is logged
/// and also yields an empty list.
#[must_use]
pub fn parse_items_or_empty(items: &str) -> Vec<String> {
    if items.trim().is_empty() {
        return Vec::new();
    }
    parse_items(items).unwrap_or_else(|error| {
        tracing::error!(%error, "failed to parse assigner items");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_rejects_garbage_and_blank() {
        assert!(matches!(parse_items("[\"a\","), Err(AssignmentError::Parse(_))));
        assert!(matches!(parse_items(""), Err(AssignmentError::Parse(_))));
        assert!(matches!(parse_items("{\"a\": 1}"), Err(AssignmentError::Parse(_))));
        assert_eq!(parse_items("[]").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn lenient_parse_swallows_errors() {
        assert!(parse_items_or_empty("   ").is_empty());
        assert!(parse_items_or_empty("not json").is_empty());
        assert!(parse_items_or_empty("42").is_empty());
        assert_eq!(parse_items_or_empty(r#"["Line Leader"]"#), ["Line Leader"]);
    }

    #[test]
    fn assigner_defaults() {
        let assigner: RotatingAssigner =
            serde_json::from_str(r#"{"id": "a1", "classId": "c1", "direction": "left"}"#).unwrap();
        assert_eq!(assigner.direction, Direction::BackToFront);
        assert!(!assigner.balance_gender);
        assert!(assigner.items.is_empty());
    }
}
