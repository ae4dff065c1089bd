use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single server-reported error
///
/// Every member is optional; unknown members are ignored on input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ErrorLinks>,

    /// HTTP status code, carried as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Application-specific error code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Links relevant to a single error
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorLinks {
    /// Further details about this occurrence of the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<Value>,

    /// The type of error this occurrence belongs to
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
}

/// Reference to the part of the request that caused the error
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON Pointer into the request document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,

    /// Query parameter that caused the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,

    /// Request header that caused the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_error_object() {
        let err: ErrorObject = serde_json::from_value(json!({
            "id": "e1",
            "links": {"about": "https://example.com/errors/e1"},
            "status": "422",
            "code": "invalid-title",
            "title": "Invalid Attribute",
            "detail": "Title must contain at least three characters.",
            "source": {"pointer": "/data/attributes/title"},
            "meta": {"attempt": 2}
        }))
        .unwrap();

        assert_eq!(err.status.as_deref(), Some("422"));
        assert_eq!(
            err.source.as_ref().and_then(|s| s.pointer.as_deref()),
            Some("/data/attributes/title")
        );
        assert_eq!(err.meta, Some(json!({"attempt": 2})));
    }

    #[test]
    fn test_empty_object_is_a_valid_error() {
        let err: ErrorObject = serde_json::from_value(json!({})).unwrap();
        assert_eq!(err, ErrorObject::default());
    }

    #[test]
    fn test_serialize_skips_absent_members() {
        let err = ErrorObject {
            status: Some("404".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&err).unwrap(), json!({"status": "404"}));
    }

    #[test]
    fn test_links_type_member_is_renamed() {
        let links: ErrorLinks =
            serde_json::from_value(json!({"type": "https://example.com/kinds/x"})).unwrap();
        assert_eq!(links.kind, Some(json!("https://example.com/kinds/x")));
    }
}
