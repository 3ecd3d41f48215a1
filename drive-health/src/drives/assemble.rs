//! Snapshot assembly
//!
//! Orchestrates one enumeration pass: enumerate both identity sources,
//! correlate and validate every drive, and (when requested) run the
//! failure-prediction pass on the assembled list. Errors abort the entire
//! snapshot; there is no partial-success list.

use anyhow::Result;
use drive_models::DriveIdentity;
use tracing::{debug, warn};

use crate::enumerate::HardwareEnumerator;
use crate::smart::correlate_failure_prediction;

use super::{correlate, validate_consistency};

/// Builds drive snapshots out of the raw enumeration sources.
///
/// Holds no state across calls; every invocation enumerates fresh and
/// builds a fresh result set.
pub struct DriveInfoAssembler<E> {
    enumerator: E,
}

impl<E: HardwareEnumerator> DriveInfoAssembler<E> {
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// Correlate and validate every enumerated drive.
    pub fn drives(&self) -> Result<Vec<DriveIdentity>> {
        let primaries = self.enumerator.physical_disks()?;
        let secondaries = self.enumerator.disk_drives()?;
        if primaries.is_empty() {
            warn!("physical-disk enumeration returned no records");
        }
        debug!(
            physical_disks = primaries.len(),
            disk_drives = secondaries.len(),
            "enumerated identity sources"
        );

        let mut drives = Vec::with_capacity(primaries.len());
        for primary in &primaries {
            let (identity, drive_record) = correlate(primary, &secondaries)?;
            validate_consistency(&identity, drive_record)?;
            drives.push(identity);
        }

        Ok(drives)
    }

    /// Like [`drives`](Self::drives), then a second correlation pass over
    /// the failure-prediction sources, filling each drive's SMART slot in
    /// place. A drive missing any of the three sub-records fails the whole
    /// call.
    pub fn drives_with_smart(&self) -> Result<Vec<DriveIdentity>> {
        let mut drives = self.drives()?;

        let status = self.enumerator.failure_predict_status()?;
        let data = self.enumerator.failure_predict_data()?;
        let thresholds = self.enumerator.failure_predict_thresholds()?;

        for drive in &mut drives {
            let smart = correlate_failure_prediction(drive, &status, &data, &thresholds)?;
            drive.smart = Some(smart);
        }

        Ok(drives)
    }
}
