//! Document-level operations
//!
//! These are the operation boundaries: each logs
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The guards and comparison they call use only `tracing::debug!()`.

use serde_json::Value;

use crate::equality::equal_ignoring_included_order;
use crate::errors::Result;
use crate::model::parse_errors;
use crate::validator::{ensure_not_error, ensure_valid_resource};
use crate::{log_op_end, log_op_error, log_op_start};

/// Run the envelope guards a reader applies before parsing primary data.
///
/// An error document is reported ahead of a shape violation, so
/// `{"errors": [...]}` yields `ResourceIsErrorDocument` even though it has
/// neither `data` nor `meta`.
///
/// # Errors
/// - `ResourceIsErrorDocument` / `MalformedErrorPayload` from the `errors` guard
/// - `InvalidResourceShape` when neither `data` nor `meta` is present
pub fn check_document(document: &Value) -> Result<()> {
    log_op_start!("check_document");
    let start = std::time::Instant::now();

    ensure_not_error(parse_errors, Some(document))
        .and_then(|()| ensure_valid_resource(document))
        .map_err(|e| {
            log_op_error!(
                "check_document",
                e,
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "check_document",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(())
}

/// [`equal_ignoring_included_order`] wrapped in operation boundary logging.
///
/// # Errors
/// `UnkeyableIncludedResource` when an `included` element cannot be keyed.
pub fn compare_documents(a: &Value, b: &Value) -> Result<bool> {
    log_op_start!("compare_documents");
    let start = std::time::Instant::now();

    let equal = equal_ignoring_included_order(a, b).map_err(|e| {
        log_op_error!(
            "compare_documents",
            e,
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "compare_documents",
        duration_ms = start.elapsed().as_millis() as u64,
        equal = equal
    );
    Ok(equal)
}
