// SPDX-License-Identifier: GPL-3.0-only

//! SMART failure-prediction operations
//!
//! This module provides the second correlation pass and the vendor
//! attribute-table decoder:
//! - joining a drive against the three failure-prediction sources
//! - decoding raw readings/threshold buffers into attribute readings

mod correlate;
mod decode;

pub use correlate::correlate_failure_prediction;
pub use decode::decode_attributes;
