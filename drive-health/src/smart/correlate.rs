// SPDX-License-Identifier: GPL-3.0-only

//! Failure-prediction correlation
//!
//! Joins an assembled drive against the three failure-prediction sources
//! (status, data, thresholds) by instance key. Partial SMART data is never
//! surfaced as success: a drive missing any of the three sub-records fails
//! with `SmartDataUnavailable`.

use drive_models::{DriveIdentity, SmartData};
use tracing::debug;

use crate::error::{CorrelationError, require};
use crate::record::RawRecord;

use super::decode::decode_attributes;

/// The failure-prediction sources key rows by the drive's plug-and-play id,
/// uppercased, with a fixed instance suffix.
const INSTANCE_SUFFIX: &str = "_0";

fn instance_key(identity: &DriveIdentity) -> String {
    format!("{}{INSTANCE_SUFFIX}", identity.pnp_device_id.to_uppercase())
}

fn find_instance<'a>(records: &'a [RawRecord], key: &str) -> Option<&'a RawRecord> {
    records
        .iter()
        .find(|record| record.get_str("InstanceName").is_ok_and(|name| name == key))
}

/// Correlate one drive against the failure-prediction sources and decode
/// its attribute tables.
pub fn correlate_failure_prediction(
    identity: &DriveIdentity,
    status: &[RawRecord],
    data: &[RawRecord],
    thresholds: &[RawRecord],
) -> Result<SmartData, CorrelationError> {
    let key = instance_key(identity);

    let (Some(status), Some(data), Some(thresholds)) = (
        find_instance(status, &key),
        find_instance(data, &key),
        find_instance(thresholds, &key),
    ) else {
        return Err(CorrelationError::SmartDataUnavailable {
            device_index: identity.device_index.clone(),
            serial_number: identity.serial_number.clone(),
        });
    };

    let predicted_failure = require(identity, status.get_bool("PredictFailure"))?;
    let readings = require(identity, data.get_bytes("VendorSpecific"))?;
    let threshold_bytes = require(identity, thresholds.get_bytes("VendorSpecific"))?;

    let attributes = decode_attributes(&readings, &threshold_bytes);
    debug!(
        device_index = %identity.device_index,
        attributes = attributes.len(),
        predicted_failure,
        "decoded failure-prediction data"
    );

    Ok(SmartData {
        predicted_failure,
        attributes,
    })
}
