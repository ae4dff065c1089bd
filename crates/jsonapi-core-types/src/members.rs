//! Member names fixed by the JSON:API document format.
//!
//! These are vocabulary, not configuration.

// Top-level document members
pub const DATA: &str = "data";
pub const META: &str = "meta";
pub const ERRORS: &str = "errors";
pub const INCLUDED: &str = "included";

// Resource identifier members
pub const ID: &str = "id";
pub const TYPE: &str = "type";
