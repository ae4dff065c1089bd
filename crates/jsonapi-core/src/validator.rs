//! Envelope and reference guards
//!
//! These run before any code interprets `data` as primary content:
//!
//! 1. [`ensure_not_error`] - an `errors` section means the document is not a
//!    success document
//! 2. [`ensure_valid_resource`] - at least one of `data` / `meta` must exist
//!
//! [`is_relationship_parsable`] is a branch condition for relationship
//! resolution and never fails.

use jsonapi_core_types::members::{DATA, ERRORS, META};
use serde_json::Value;

use crate::errors::{BoxError, DocumentError, Result};
use crate::identity::ResourceKey;
use crate::model::ErrorCollection;
use crate::node::NodeExt;

/// Assert that a top-level envelope carries `data` or `meta`.
///
/// Presence is what counts: `{"data": null}` passes. Non-object nodes have no
/// members and are rejected.
///
/// # Errors
/// `DocumentError::InvalidResourceShape` when both members are absent.
pub fn ensure_valid_resource(resource: &Value) -> Result<()> {
    if !resource.has_member(DATA) && !resource.has_member(META) {
        tracing::debug!(
            is_object = resource.is_object(),
            "envelope has neither data nor meta"
        );
        return Err(DocumentError::InvalidResourceShape);
    }
    Ok(())
}

/// True when `node` is a resource identifier that can be looked up by identity.
///
/// Requires non-null scalar `id` and `type` members. Missing nodes, missing or
/// null members, and embedded objects/arrays in either member all yield `false`.
pub fn is_relationship_parsable(node: Option<&Value>) -> bool {
    node.and_then(ResourceKey::from_node).is_some()
}

/// Reject documents that carry a non-null `errors` member.
///
/// The value under `errors` is handed to `deserialize`; a successful parse is
/// reported as [`DocumentError::ResourceIsErrorDocument`] so callers can
/// surface server-reported errors distinctly from shape violations.
///
/// # Errors
/// - `ResourceIsErrorDocument` carrying the parsed collection
/// - `MalformedErrorPayload` when `deserialize` fails; its error is kept as
///   the `source()` of the returned error
pub fn ensure_not_error<F, E>(deserialize: F, node: Option<&Value>) -> Result<()>
where
    F: FnOnce(&Value) -> std::result::Result<ErrorCollection, E>,
    E: Into<BoxError>,
{
    let Some(errors_node) = node.and_then(|n| n.non_null_member(ERRORS)) else {
        return Ok(());
    };

    match deserialize(errors_node) {
        Ok(errors) => {
            tracing::debug!(errors_len = errors.len(), "document carries errors");
            Err(DocumentError::ResourceIsErrorDocument { errors })
        }
        Err(e) => {
            let source: BoxError = e.into();
            tracing::debug!(cause = %source, "errors payload could not be deserialized");
            Err(DocumentError::MalformedErrorPayload { source })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_errors;
    use serde_json::json;

    #[test]
    fn test_valid_resource_with_data() {
        assert!(ensure_valid_resource(&json!({"data": []})).is_ok());
    }

    #[test]
    fn test_valid_resource_with_meta_only() {
        assert!(ensure_valid_resource(&json!({"meta": {"count": 0}})).is_ok());
    }

    #[test]
    fn test_invalid_resource_without_either() {
        let err = ensure_valid_resource(&json!({"links": {}})).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidResourceShape));
    }

    #[test]
    fn test_relationship_parsable_requires_node() {
        assert!(!is_relationship_parsable(None));
        assert!(is_relationship_parsable(Some(&json!({"id": "1", "type": "tags"}))));
    }

    #[test]
    fn test_not_error_without_node() {
        assert!(ensure_not_error(parse_errors, None).is_ok());
    }

    #[test]
    fn test_null_errors_member_is_ignored() {
        let doc = json!({"data": null, "errors": null});
        assert!(ensure_not_error(parse_errors, Some(&doc)).is_ok());
    }

    #[test]
    fn test_deserializer_not_called_without_errors() {
        let doc = json!({"data": {"id": "1", "type": "a"}});
        let result = ensure_not_error(
            |_: &Value| -> std::result::Result<ErrorCollection, BoxError> {
                panic!("deserializer must not run")
            },
            Some(&doc),
        );
        assert!(result.is_ok());
    }
}
