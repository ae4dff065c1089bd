use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ErrorObject;

/// Ordered collection of server-reported errors
///
/// Serializes as the bare array found under a document's `errors` member.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCollection {
    errors: Vec<ErrorObject>,
}

impl ErrorCollection {
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorObject> {
        self.errors.iter()
    }

    pub fn into_inner(self) -> Vec<ErrorObject> {
        self.errors
    }
}

impl From<Vec<ErrorObject>> for ErrorCollection {
    fn from(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }
}

/// Stock deserializer for the value under a document's `errors` member
///
/// # Errors
/// Fails when `node` is not an array of error objects.
pub fn parse_errors(node: &Value) -> serde_json::Result<ErrorCollection> {
    ErrorCollection::deserialize(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_errors_preserves_order() {
        let errors = parse_errors(&json!([
            {"status": "404", "title": "Not Found"},
            {"status": "409"}
        ]))
        .unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].title.as_deref(), Some("Not Found"));
        assert_eq!(errors.errors()[1].status.as_deref(), Some("409"));
    }

    #[test]
    fn test_parse_errors_rejects_non_array() {
        assert!(parse_errors(&json!({"status": "404"})).is_err());
        assert!(parse_errors(&json!("boom")).is_err());
    }

    #[test]
    fn test_parse_errors_rejects_mistyped_member() {
        assert!(parse_errors(&json!([{"status": 404}])).is_err());
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let input = json!([{"status": "404"}]);
        let errors = parse_errors(&input).unwrap();
        assert_eq!(serde_json::to_value(&errors).unwrap(), input);
    }
}
