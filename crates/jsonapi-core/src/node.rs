//! Guarded capability access over `serde_json::Value`.
//!
//! Every accessor answers "absent or wrong type" with `false` / `None`
//! instead of panicking, so callers never have to trust a node's shape.

use serde_json::Value;

/// Presence and type checks used by the document guards
pub trait NodeExt {
    /// True when this is an object holding `key`, whatever its value (null included)
    fn has_member(&self, key: &str) -> bool;

    /// The value under `key`, unless the key is absent or holds null
    fn non_null_member(&self, key: &str) -> Option<&Value>;

    /// True for objects and arrays
    fn is_container(&self) -> bool;

    /// Text form of a non-null scalar: strings verbatim, numbers and booleans
    /// through their JSON rendering. `None` for null and containers.
    fn scalar_text(&self) -> Option<String>;
}

impl NodeExt for Value {
    fn has_member(&self, key: &str) -> bool {
        self.as_object().is_some_and(|obj| obj.contains_key(key))
    }

    fn non_null_member(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    fn scalar_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}
