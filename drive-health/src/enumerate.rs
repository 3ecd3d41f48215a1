//! Enumeration seam
//!
//! The operating system's hardware-management subsystem is queried through
//! this trait. The core never issues enumeration calls itself; it only
//! consumes the property bags a backend returns. Backends are ordinary
//! blocking calls with no timeout of their own.

use anyhow::Result;

use crate::record::RawRecord;

pub trait HardwareEnumerator {
    /// Physical-disk records; the canonical identity source.
    fn physical_disks(&self) -> Result<Vec<RawRecord>>;

    /// Disk-drive records, joined against physical disks by device index.
    fn disk_drives(&self) -> Result<Vec<RawRecord>>;

    /// Failure-prediction status records (predicted-failure flag).
    fn failure_predict_status(&self) -> Result<Vec<RawRecord>>;

    /// Failure-prediction data records (raw attribute readings).
    fn failure_predict_data(&self) -> Result<Vec<RawRecord>>;

    /// Failure-prediction threshold records (raw attribute thresholds).
    fn failure_predict_thresholds(&self) -> Result<Vec<RawRecord>>;
}
