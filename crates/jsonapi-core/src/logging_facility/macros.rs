//! Canonical logging macros
//!
//! Field names match the constants in `jsonapi_core_types::schema`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use jsonapi_core::log_op_start;
/// log_op_start!("check_document");
/// log_op_start!("check_document", source = "fixture");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use jsonapi_core::log_op_end;
/// log_op_end!("check_document", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is only borrowed, so the caller can still return it.
///
/// # Example
///
/// ```
/// # use jsonapi_core::{log_op_error, DocumentError};
/// let err = DocumentError::InvalidResourceShape;
/// log_op_error!("check_document", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let kind: $crate::errors::ExErrorKind = ($err).kind();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?kind,
            err.code = kind.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let kind: $crate::errors::ExErrorKind = ($err).kind();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?kind,
            err.code = kind.code(),
            $($field)*
        );
    }};
}
