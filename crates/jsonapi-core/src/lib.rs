//! JSON:API Core - document envelope validation and comparison
//!
//! This crate validates and compares already-parsed JSON:API documents
//! (`serde_json::Value` trees), including:
//! - Envelope guards for primary data / metadata and error documents
//! - Relationship reference parsability checks
//! - Resource identity keys shared by relationship resolution
//! - Structural equality that tolerates reordering of `included`
//!
//! Everything here is synchronous and borrows its inputs immutably.

pub mod equality;
pub mod errors;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod node;
pub mod ops;
pub mod validator;

// Re-export commonly used types
pub use jsonapi_core_types::{members, schema};
pub use equality::{canonicalize_included, equal_ignoring_included_order};
pub use errors::{DocumentError, ExError, ExErrorKind, Result};
pub use identity::ResourceKey;
pub use model::{parse_errors, ErrorCollection, ErrorObject};
pub use node::NodeExt;
pub use ops::{check_document, compare_documents};
pub use validator::{ensure_not_error, ensure_valid_resource, is_relationship_parsable};
