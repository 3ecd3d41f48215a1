//! Cross-source identity correlation
//!
//! The physical-disk source supplies the canonical identity key; the
//! disk-drive source is searched for exactly one record describing the same
//! device. Ambiguous correlation is treated identically to absent
//! correlation: the system never guesses among multiple candidates.

use drive_models::{BusType, DriveIdentity, MediaType};
use tracing::debug;

use crate::error::{CorrelationError, require};
use crate::record::RawRecord;

/// Join one physical-disk record against the disk-drive records and build
/// the drive's identity.
pub fn correlate_identity(
    primary: &RawRecord,
    secondary: &[RawRecord],
) -> Result<DriveIdentity, CorrelationError> {
    correlate(primary, secondary).map(|(identity, _)| identity)
}

/// Like [`correlate_identity`], but also hands back the matched disk-drive
/// record so the caller can run consistency validation against it.
pub(crate) fn correlate<'a>(
    primary: &RawRecord,
    secondary: &'a [RawRecord],
) -> Result<(DriveIdentity, &'a RawRecord), CorrelationError> {
    let key = match primary.get_str("DeviceId") {
        Ok(key) if !key.trim().is_empty() => key.to_owned(),
        _ => return Err(CorrelationError::IdentityKeyMissing),
    };

    // The disk-drive source reports its index as an unsigned integer;
    // compare in decimal against the primary's string key.
    let matches: Vec<&RawRecord> = secondary
        .iter()
        .filter(|record| {
            record
                .get_u64("Index")
                .is_ok_and(|index| index.to_string() == key)
        })
        .collect();

    let [drive] = matches.as_slice() else {
        return Err(CorrelationError::AmbiguousMatch {
            device_index: key,
            matches: matches.len(),
        });
    };
    let drive = *drive;

    debug!(device_index = %key, "correlated physical-disk and disk-drive records");
    Ok((build_identity(&key, primary, drive)?, drive))
}

/// Cast every identity field out of the two records. The first absent or
/// mistyped field aborts with the identity as built so far.
fn build_identity(
    key: &str,
    primary: &RawRecord,
    drive: &RawRecord,
) -> Result<DriveIdentity, CorrelationError> {
    let mut identity = DriveIdentity {
        device_index: key.to_owned(),
        ..DriveIdentity::default()
    };

    identity.pnp_device_id = require(&identity, drive.get_str("PNPDeviceID"))?.to_owned();
    identity.device_name = require(&identity, drive.get_str("DeviceID"))?.to_owned();
    identity.unique_id = require(&identity, primary.get_str("UniqueId"))?.to_owned();
    identity.unique_id_format = require(&identity, primary.get_u16("UniqueIdFormat"))?;
    identity.model = require(&identity, primary.get_str("Model"))?.to_owned();
    identity.serial_number = require(&identity, primary.get_str("SerialNumber"))?.to_owned();
    identity.firmware_version = require(&identity, primary.get_str("FirmwareVersion"))?.to_owned();
    identity.bus_type = BusType::from_raw(require(&identity, primary.get_u16("BusType"))?);
    identity.media_type = MediaType::from_raw(require(&identity, primary.get_u16("MediaType"))?);
    identity.size = require(&identity, primary.get_u64("Size"))?;
    identity.logical_sector_size = require(&identity, primary.get_u64("LogicalSectorSize"))?;
    identity.physical_sector_size = require(&identity, primary.get_u64("PhysicalSectorSize"))?;
    identity.physical_location = require(&identity, primary.get_str("PhysicalLocation"))?.to_owned();

    Ok(identity)
}
