//! Cross-source consistency validation
//!
//! Both identity sources report a handful of redundant fields. After
//! correlation these are re-derived from the disk-drive record and checked
//! against the assembled identity. The policy is all-or-nothing: a single
//! mismatch means the whole record is untrustworthy, not that one field is
//! defective.

use drive_models::DriveIdentity;

use crate::error::{CorrelationError, require};
use crate::record::RawRecord;

/// Check the disk-drive record's redundant fields against the identity.
pub fn validate_consistency(
    identity: &DriveIdentity,
    secondary: &RawRecord,
) -> Result<(), CorrelationError> {
    let name = require(identity, secondary.get_str("Name"))?;
    if name != identity.device_name {
        return Err(mismatch("Name", identity));
    }

    // The model shows up twice on the drive record; both copies must agree
    // with the identity.
    let model = require(identity, secondary.get_str("Model"))?;
    if model != identity.model {
        return Err(mismatch("Model", identity));
    }
    let caption = require(identity, secondary.get_str("Caption"))?;
    if caption != identity.model {
        return Err(mismatch("Caption", identity));
    }

    // Vendors pad serials with whitespace on this source.
    let serial = require(identity, secondary.get_str("SerialNumber"))?;
    if serial.trim() != identity.serial_number {
        return Err(mismatch("SerialNumber", identity));
    }

    let firmware = require(identity, secondary.get_str("FirmwareRevision"))?;
    if firmware != identity.firmware_version {
        return Err(mismatch("FirmwareRevision", identity));
    }

    // The drive-level size excludes reserved/spare areas, so it may come in
    // under the physical-disk size, never over it.
    let size = require(identity, secondary.get_u64("Size"))?;
    if size > identity.size {
        return Err(mismatch("Size", identity));
    }

    let bytes_per_sector = require(identity, secondary.get_u64("BytesPerSector"))?;
    if bytes_per_sector != identity.logical_sector_size {
        return Err(mismatch("BytesPerSector", identity));
    }

    Ok(())
}

fn mismatch(field: &'static str, identity: &DriveIdentity) -> CorrelationError {
    CorrelationError::DataInconsistency {
        field,
        device_index: identity.device_index.clone(),
        serial_number: identity.serial_number.clone(),
    }
}
