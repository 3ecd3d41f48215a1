// SPDX-License-Identifier: GPL-3.0-only

//! SMART (Self-Monitoring, Analysis and Reporting Technology) types
//!
//! Types for device health readings decoded from the vendor attribute
//! tables, plus the static attribute-name catalog.

use serde::{Deserialize, Serialize};

/// One decoded SMART attribute slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeReading {
    /// Attribute id (1-255; 0 is reserved as the end-of-table sentinel)
    pub id: u8,

    /// Status flags as reported by the vendor table
    pub flags: u8,

    /// Current normalized value
    pub current: u8,

    /// Worst value seen over the drive's lifetime
    pub worst: u8,

    /// Failure threshold; only present when the threshold table carried a
    /// matching id.
    pub threshold: Option<u8>,

    /// Raw counter, first 4 of the 6 vendor raw bytes (little-endian)
    pub raw_value: i32,
}

impl AttributeReading {
    /// Well-known name for this attribute's id (`"?"` when unknown).
    pub fn name(&self) -> &'static str {
        attribute_name(self.id)
    }
}

/// Failure-prediction data for one drive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartData {
    /// Whether the drive firmware predicts imminent failure
    pub predicted_failure: bool,

    /// Decoded attribute readings, sorted ascending by id
    pub attributes: Vec<AttributeReading>,
}

// Well-known ATA attribute names, sorted by id. Vendors reuse ids with
// different meanings; these are the common interpretations, used for
// display only.
static ATTRIBUTE_NAMES: &[(u8, &str)] = &[
    (1, "Raw_Read_Error_Rate"),
    (2, "Throughput_Performance"),
    (3, "Spin_Up_Time"),
    (4, "Start_Stop_Count"),
    (5, "Reallocated_Sector_Ct"),
    (7, "Seek_Error_Rate"),
    (8, "Seek_Time_Performance"),
    (9, "Power_On_Hours"),
    (10, "Spin_Retry_Count"),
    (11, "Calibration_Retry_Count"),
    (12, "Power_Cycle_Count"),
    (13, "Read_Soft_Error_Rate"),
    (170, "Available_Reservd_Space"),
    (171, "Program_Fail_Count"),
    (172, "Erase_Fail_Count"),
    (173, "Ave_Block-Erase_Count"),
    (174, "Unexpect_Power_Loss_Ct"),
    (175, "Program_Fail_Count_Chip"),
    (176, "Erase_Fail_Count_Chip"),
    (177, "Wear_Leveling_Count"),
    (179, "Used_Rsvd_Blk_Cnt_Tot"),
    (180, "Unused_Rsvd_Blk_Cnt_Tot"),
    (181, "Program_Fail_Cnt_Total"),
    (182, "Erase_Fail_Count_Total"),
    (183, "Runtime_Bad_Block"),
    (184, "End-to-End_Error"),
    (187, "Reported_Uncorrect"),
    (188, "Command_Timeout"),
    (189, "High_Fly_Writes"),
    (190, "Airflow_Temperature_Cel"),
    (191, "G-Sense_Error_Rate"),
    (192, "Power-Off_Retract_Count"),
    (193, "Load_Cycle_Count"),
    (194, "Temperature_Celsius"),
    (195, "Hardware_ECC_Recovered"),
    (196, "Reallocated_Event_Count"),
    (197, "Current_Pending_Sector"),
    (198, "Offline_Uncorrectable"),
    (199, "UDMA_CRC_Error_Count"),
    (200, "Multi_Zone_Error_Rate"),
    (201, "Soft_Read_Error_Rate"),
    (220, "Disk_Shift"),
    (222, "Loaded_Hours"),
    (223, "Load_Retry_Count"),
    (224, "Load_Friction"),
    (226, "Load-in_Time"),
    (240, "Head_Flying_Hours"),
    (241, "Total_LBAs_Written"),
    (242, "Total_LBAs_Read"),
    (254, "Free_Fall_Sensor"),
];

/// Look up the well-known name for an attribute id.
///
/// Unknown ids resolve to `"?"`.
pub fn attribute_name(id: u8) -> &'static str {
    ATTRIBUTE_NAMES
        .binary_search_by_key(&id, |(id, _)| *id)
        .map(|i| ATTRIBUTE_NAMES[i].1)
        .unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_name_resolves_known_ids() {
        assert_eq!(attribute_name(5), "Reallocated_Sector_Ct");
        assert_eq!(attribute_name(9), "Power_On_Hours");
        assert_eq!(attribute_name(194), "Temperature_Celsius");
    }

    #[test]
    fn attribute_name_falls_back_to_placeholder() {
        assert_eq!(attribute_name(0), "?");
        assert_eq!(attribute_name(6), "?");
        assert_eq!(attribute_name(255), "?");
    }

    #[test]
    fn name_table_is_sorted_by_id() {
        // binary_search_by_key relies on this
        assert!(ATTRIBUTE_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn smart_data_serialization_roundtrip() {
        let data = SmartData {
            predicted_failure: false,
            attributes: vec![AttributeReading {
                id: 5,
                flags: 0x32,
                current: 100,
                worst: 100,
                threshold: Some(10),
                raw_value: 0,
            }],
        };

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: SmartData = serde_json::from_str(&json).unwrap();

        assert_eq!(data, deserialized);
        assert_eq!(deserialized.attributes[0].name(), "Reallocated_Sector_Ct");
    }
}
