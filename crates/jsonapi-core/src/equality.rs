//! Structural document equality that tolerates reordering of `included`.
//!
//! `included` is a set of side-loaded resources keyed by (id, type), so two
//! documents that list the same resources in a different order are the same
//! document. Everywhere else, including arrays nested under other members,
//! ordinary `serde_json::Value` equality applies: object member order is
//! irrelevant, array element order is significant.
//!
//! Both inputs are borrowed immutably. Comparison runs over views that skip
//! the `included` member rather than over modified copies.

use std::collections::BTreeMap;

use jsonapi_core_types::members::INCLUDED;
use serde_json::{Map, Value};

use crate::errors::{DocumentError, Result};
use crate::identity::ResourceKey;

/// `included` elements indexed by their resource key
pub type CanonicalIncluded<'a> = BTreeMap<ResourceKey, &'a Value>;

/// Index `included` elements by (id, type).
///
/// Later elements replace earlier ones sharing a key.
///
/// # Errors
/// `DocumentError::UnkeyableIncludedResource` for the first element whose
/// `id` or `type` is missing, null, or not a scalar.
pub fn canonicalize_included(included: &[Value]) -> Result<CanonicalIncluded<'_>> {
    let mut canonical = BTreeMap::new();
    for (index, element) in included.iter().enumerate() {
        let key = ResourceKey::try_from_node(element).map_err(|defect| {
            DocumentError::UnkeyableIncludedResource {
                index,
                member: defect.member(),
            }
        })?;
        if canonical.insert(key, element).is_some() {
            tracing::debug!(index, "duplicate included resource replaces earlier entry");
        }
    }
    Ok(canonical)
}

/// Compare two documents, ignoring the order of elements in `included`.
///
/// When both inputs are objects and both carry an `included` array, the
/// remaining members are compared structurally and the two `included` arrays
/// are compared as maps keyed by (id, type). In every other case this is plain
/// structural equality.
///
/// # Errors
/// `DocumentError::UnkeyableIncludedResource` when an `included` element
/// cannot be keyed.
pub fn equal_ignoring_included_order(a: &Value, b: &Value) -> Result<bool> {
    let (Some(obj_a), Some(obj_b)) = (a.as_object(), b.as_object()) else {
        return Ok(a == b);
    };

    let (Some(included_a), Some(included_b)) = (included_array(obj_a), included_array(obj_b))
    else {
        return Ok(a == b);
    };

    let canonical_a = canonicalize_included(included_a)?;
    let canonical_b = canonicalize_included(included_b)?;

    tracing::debug!(
        included_len = included_a.len(),
        other_included_len = included_b.len(),
        "comparing documents with included"
    );

    Ok(members_equal_except(obj_a, obj_b, INCLUDED) && canonical_a == canonical_b)
}

fn included_array(obj: &Map<String, Value>) -> Option<&Vec<Value>> {
    obj.get(INCLUDED).and_then(Value::as_array)
}

/// Member-wise equality of two objects that both hold `skip`
fn members_equal_except(a: &Map<String, Value>, b: &Map<String, Value>, skip: &str) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .filter(|(key, _)| key.as_str() != skip)
            .all(|(key, value)| b.get(key) == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonicalize_last_duplicate_wins() {
        let included = vec![
            json!({"id": "1", "type": "people", "attributes": {"name": "first"}}),
            json!({"id": "1", "type": "people", "attributes": {"name": "second"}}),
        ];
        let canonical = canonicalize_included(&included).unwrap();
        assert_eq!(canonical.len(), 1);
        assert_eq!(
            canonical[&ResourceKey::new("1", "people")]["attributes"]["name"],
            json!("second")
        );
    }

    #[test]
    fn test_canonicalize_reports_index_of_unkeyable_element() {
        let included = vec![
            json!({"id": "1", "type": "people"}),
            json!({"id": "2"}),
        ];
        let err = canonicalize_included(&included).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnkeyableIncludedResource {
                index: 1,
                member: "type"
            }
        ));
    }

    #[test]
    fn test_members_equal_except_ignores_skipped_member() {
        let a = json!({"data": 1, "included": [1]});
        let b = json!({"included": [2], "data": 1});
        assert!(members_equal_except(
            a.as_object().unwrap(),
            b.as_object().unwrap(),
            INCLUDED
        ));
    }

    #[test]
    fn test_members_equal_except_detects_extra_member() {
        let a = json!({"data": 1, "included": []});
        let b = json!({"data": 1, "meta": {}, "included": []});
        assert!(!members_equal_except(
            a.as_object().unwrap(),
            b.as_object().unwrap(),
            INCLUDED
        ));
    }

    #[test]
    fn test_scalars_fall_back_to_plain_equality() {
        assert!(equal_ignoring_included_order(&json!(1), &json!(1)).unwrap());
        assert!(!equal_ignoring_included_order(&json!(1), &json!("1")).unwrap());
    }
}
