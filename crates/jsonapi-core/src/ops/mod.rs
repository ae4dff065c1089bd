pub mod document_ops;

pub use document_ops::{check_document, compare_documents};
