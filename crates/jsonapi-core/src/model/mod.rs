pub mod error_collection;
pub mod error_object;

pub use error_collection::{parse_errors, ErrorCollection};
pub use error_object::{ErrorLinks, ErrorObject, ErrorSource};
