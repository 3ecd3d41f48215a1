// SPDX-License-Identifier: GPL-3.0-only

//! Cross-source drive correlation and SMART attribute decoding
//!
//! Physical-drive health is reported by joining identity data from two
//! independent hardware-enumeration sources and decoding the vendor binary
//! attribute tables from the failure-prediction sources. This crate holds
//! the core of that pipeline:
//!
//! - [`RawRecord`] — dynamically typed property bags with per-field typed
//!   access
//! - [`smart::decode_attributes`] — the infallible vendor table decoder
//! - [`drives::correlate_identity`] / [`drives::validate_consistency`] —
//!   the cross-source join and consistency check
//! - [`drives::DriveInfoAssembler`] — orchestration over a
//!   [`HardwareEnumerator`] backend
//!
//! The actual enumeration backend and all presentation are external; the
//! core is synchronous, holds no global state, and is safe to run from
//! concurrent callers on independent inputs.

pub mod drives;
pub mod enumerate;
pub mod error;
pub mod record;
pub mod smart;

// Re-export drive-models (canonical domain models)
pub use drive_models;
pub use drive_models::{
    AttributeReading, BusType, DriveIdentity, MediaType, SmartData, attribute_name,
};

pub use drives::{DriveInfoAssembler, correlate_identity, validate_consistency};
pub use enumerate::HardwareEnumerator;
pub use error::CorrelationError;
pub use record::{FieldError, RawRecord};
pub use smart::{correlate_failure_prediction, decode_attributes};
