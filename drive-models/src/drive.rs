// SPDX-License-Identifier: GPL-3.0-only

//! Drive identity model
//!
//! One `DriveIdentity` describes one physical drive, assembled from the two
//! identity enumeration sources. Every field is populated from exactly one
//! source and never synthesized.

use serde::{Deserialize, Serialize};

use crate::smart::SmartData;

/// Connection bus reported by the physical-disk source (raw u16 code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusType {
    #[default]
    Unknown,
    Scsi,
    Atapi,
    Ata,
    Ieee1394,
    Ssa,
    FibreChannel,
    Usb,
    Raid,
    Iscsi,
    Sas,
    Sata,
    SecureDigital,
    Mmc,
    Virtual,
    FileBackedVirtual,
    StorageSpaces,
    Nvme,
}

impl BusType {
    /// Map the source's numeric bus code; unrecognized codes are `Unknown`.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            1 => Self::Scsi,
            2 => Self::Atapi,
            3 => Self::Ata,
            4 => Self::Ieee1394,
            5 => Self::Ssa,
            6 => Self::FibreChannel,
            7 => Self::Usb,
            8 => Self::Raid,
            9 => Self::Iscsi,
            10 => Self::Sas,
            11 => Self::Sata,
            12 => Self::SecureDigital,
            13 => Self::Mmc,
            14 => Self::Virtual,
            15 => Self::FileBackedVirtual,
            16 => Self::StorageSpaces,
            17 => Self::Nvme,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Scsi => "scsi",
            Self::Atapi => "atapi",
            Self::Ata => "ata",
            Self::Ieee1394 => "ieee1394",
            Self::Ssa => "ssa",
            Self::FibreChannel => "fibre-channel",
            Self::Usb => "usb",
            Self::Raid => "raid",
            Self::Iscsi => "iscsi",
            Self::Sas => "sas",
            Self::Sata => "sata",
            Self::SecureDigital => "sd",
            Self::Mmc => "mmc",
            Self::Virtual => "virtual",
            Self::FileBackedVirtual => "file-backed-virtual",
            Self::StorageSpaces => "storage-spaces",
            Self::Nvme => "nvme",
        }
    }
}

impl std::fmt::Display for BusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media kind reported by the physical-disk source (raw u16 code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MediaType {
    #[default]
    Unspecified,
    Hdd,
    Ssd,
    Scm,
}

impl MediaType {
    /// Map the source's numeric media code; unrecognized codes are
    /// `Unspecified`.
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            3 => Self::Hdd,
            4 => Self::Ssd,
            5 => Self::Scm,
            _ => Self::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Hdd => "hdd",
            Self::Ssd => "ssd",
            Self::Scm => "scm",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete identity of one physical drive (single source of truth)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveIdentity {
    // === Correlation keys ===
    /// Device index from the physical-disk source; the primary join key.
    pub device_index: String,

    /// Plug-and-play identifier from the disk-drive source; basis of the
    /// failure-prediction join key.
    pub pnp_device_id: String,

    // === Identity ===
    /// OS device name from the disk-drive source (e.g. `\\.\PHYSICALDRIVE0`).
    pub device_name: String,

    /// Vendor-defined unique identifier.
    pub unique_id: String,

    /// Format tag qualifying `unique_id` (vendor-specific numeric code).
    pub unique_id_format: u16,

    /// Drive model name
    pub model: String,

    /// Serial number
    pub serial_number: String,

    /// Firmware revision
    pub firmware_version: String,

    // === Physical properties ===
    /// Connection bus type
    pub bus_type: BusType,

    /// Media kind (rotational, solid-state, ...)
    pub media_type: MediaType,

    /// Total size in bytes
    pub size: u64,

    /// Logical sector size in bytes
    pub logical_sector_size: u64,

    /// Physical sector size in bytes
    pub physical_sector_size: u64,

    /// Physical location string as reported by the enumeration source
    pub physical_location: String,

    // === Health ===
    /// Failure-prediction data; only present after the SMART pass.
    pub smart: Option<SmartData>,
}

impl DriveIdentity {
    /// Get a human-readable display name for the drive
    pub fn display_name(&self) -> String {
        if !self.model.is_empty() {
            self.model.clone()
        } else {
            self.device_name
                .split('\\')
                .next_back()
                .unwrap_or(&self.device_name)
                .to_string()
        }
    }

    /// Whether the drive reports spinning media.
    pub fn is_rotational(&self) -> bool {
        self.media_type == MediaType::Hdd
    }
}
