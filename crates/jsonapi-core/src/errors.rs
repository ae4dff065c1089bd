use std::sync::Arc;
use thiserror::Error;

use crate::model::ErrorCollection;

/// Result type alias using DocumentError
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Boxed cause produced by an injected deserializer
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and responses at the caller's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Envelope shape
    InvalidResourceShape,

    // Error documents
    ErrorDocument,
    MalformedErrorPayload,

    // Included resources
    UnkeyableResource,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidResourceShape => "ERR_INVALID_RESOURCE_SHAPE",
            ExErrorKind::ErrorDocument => "ERR_ERROR_DOCUMENT",
            ExErrorKind::MalformedErrorPayload => "ERR_MALFORMED_ERROR_PAYLOAD",
            ExErrorKind::UnkeyableResource => "ERR_UNKEYABLE_RESOURCE",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for debugging. The original cause, when there is one, is reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    index: Option<usize>,
    errors_len: Option<usize>,
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            index: None,
            errors_len: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add array index context (position inside `included`)
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add the number of server-reported errors
    pub fn with_errors_len(mut self, len: usize) -> Self {
        self.errors_len = Some(len);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the underlying cause
    pub fn with_source(
        mut self,
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the `included` index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the number of server-reported errors, if any
    pub fn errors_len(&self) -> Option<usize> {
        self.errors_len
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(len) = self.errors_len {
            write!(f, " (errors: {})", len)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Failures raised while validating or comparing a document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Envelope carries neither `data` nor `meta`
    #[error("Invalid resource: document must contain a 'data' or 'meta' member")]
    InvalidResourceShape,

    /// Envelope carries an `errors` section
    #[error("Document is an error document ({} error(s) reported)", .errors.len())]
    ResourceIsErrorDocument { errors: ErrorCollection },

    /// The `errors` section could not be deserialized
    #[error("Malformed 'errors' payload: {source}")]
    MalformedErrorPayload {
        #[source]
        source: BoxError,
    },

    /// An `included` element has no usable `id` or `type`
    #[error("Included resource at index {index} has no non-null scalar '{member}' member")]
    UnkeyableIncludedResource { index: usize, member: &'static str },
}

impl DocumentError {
    /// Canonical kind for this failure
    pub fn kind(&self) -> ExErrorKind {
        match self {
            DocumentError::InvalidResourceShape => ExErrorKind::InvalidResourceShape,
            DocumentError::ResourceIsErrorDocument { .. } => ExErrorKind::ErrorDocument,
            DocumentError::MalformedErrorPayload { .. } => ExErrorKind::MalformedErrorPayload,
            DocumentError::UnkeyableIncludedResource { .. } => ExErrorKind::UnkeyableResource,
        }
    }

    /// Server-reported errors, when this is an error document
    pub fn error_collection(&self) -> Option<&ErrorCollection> {
        match self {
            DocumentError::ResourceIsErrorDocument { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Conversion from DocumentError to ExError
impl From<DocumentError> for ExError {
    fn from(err: DocumentError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            DocumentError::InvalidResourceShape => ex.with_op("ensure_valid_resource"),

            DocumentError::ResourceIsErrorDocument { errors } => ex
                .with_op("ensure_not_error")
                .with_errors_len(errors.len()),

            DocumentError::MalformedErrorPayload { source } => ex
                .with_op("ensure_not_error")
                .with_source(Arc::from(source)),

            DocumentError::UnkeyableIncludedResource { index, .. } => ex
                .with_op("equal_ignoring_included_order")
                .with_index(index),
        }
    }
}
