//! Error types for drive correlation and assembly
//!
//! Every failure path in correlation, validation, and SMART assembly
//! surfaces a `CorrelationError` carrying enough context (device index,
//! serial number) to identify the offending drive. None of these are
//! retried: the underlying cause is always a data-shape problem, not a
//! transient fault.

use drive_models::DriveIdentity;
use thiserror::Error;

use crate::record::FieldError;

#[derive(Error, Debug)]
pub enum CorrelationError {
    #[error("physical-disk record carries no usable device index")]
    IdentityKeyMissing,

    /// Zero matches and multiple matches are the same failure: the system
    /// never guesses among candidates.
    #[error("expected exactly one disk-drive record with index {device_index}, found {matches}")]
    AmbiguousMatch {
        device_index: String,
        matches: usize,
    },

    #[error(
        "assembling drive {:?} (serial {:?}): {source}",
        .partial.device_index,
        .partial.serial_number
    )]
    FieldParse {
        #[source]
        source: FieldError,
        /// Identity as built up to the failing field, for diagnostics.
        partial: Box<DriveIdentity>,
    },

    #[error("cross-source mismatch on {field} for drive {device_index} (serial {serial_number:?})")]
    DataInconsistency {
        field: &'static str,
        device_index: String,
        serial_number: String,
    },

    #[error("SMART data not found for drive {device_index} (serial {serial_number:?})")]
    SmartDataUnavailable {
        device_index: String,
        serial_number: String,
    },
}

/// Wrap a per-field extraction result with the identity built so far.
pub(crate) fn require<T>(
    partial: &DriveIdentity,
    field: Result<T, FieldError>,
) -> Result<T, CorrelationError> {
    field.map_err(|source| CorrelationError::FieldParse {
        source,
        partial: Box::new(partial.clone()),
    })
}
