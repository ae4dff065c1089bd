//! Resource identity: the (id, type) pair that links relationship references
//! to side-loaded resources.

use jsonapi_core_types::members::{ID, TYPE};
use serde_json::Value;

use crate::node::NodeExt;

/// Composite identity of a resource or resource identifier
///
/// Held as a pair rather than concatenated text, so `("1", "ab")` and
/// `("1a", "b")` stay distinct. Ordered by id, then type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey {
    id: String,
    kind: String,
}

/// Reason a node could not yield a [`ResourceKey`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDefect {
    /// `id` is missing, null, or a container
    Id,
    /// `type` is missing, null, or a container
    Type,
}

impl KeyDefect {
    /// Member name that is at fault
    pub fn member(&self) -> &'static str {
        match self {
            KeyDefect::Id => ID,
            KeyDefect::Type => TYPE,
        }
    }
}

impl ResourceKey {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Extract the key from a resource or identifier object.
    ///
    /// Both `id` and `type` must be present, non-null and scalar.
    pub fn from_node(node: &Value) -> Option<Self> {
        Self::try_from_node(node).ok()
    }

    /// Like [`ResourceKey::from_node`], reporting which member is unusable.
    ///
    /// # Errors
    /// Returns the first defective member, `id` before `type`.
    pub fn try_from_node(node: &Value) -> std::result::Result<Self, KeyDefect> {
        let id = node
            .non_null_member(ID)
            .and_then(|v| v.scalar_text())
            .ok_or(KeyDefect::Id)?;
        let kind = node
            .non_null_member(TYPE)
            .and_then(|v| v.scalar_text())
            .ok_or(KeyDefect::Type)?;
        Ok(Self { id, kind })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resource type (`type` member)
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
