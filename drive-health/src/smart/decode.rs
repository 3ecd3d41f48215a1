// SPDX-License-Identifier: GPL-3.0-only

//! Vendor attribute-table decoder
//!
//! The readings and threshold buffers are vendor firmware tables with no
//! reliable length prefix or terminator guarantee. The decoder is therefore
//! deliberately infallible: it keeps whatever decodes cleanly and truncates
//! on detected garbage, because "malformed" cannot be distinguished from
//! "unusual but valid" across vendors.

use drive_models::AttributeReading;

/// Leading bytes of both tables; sometimes a count, sometimes not.
/// Not self-describing across vendors, so discarded rather than interpreted.
const TABLE_HEADER_LEN: usize = 2;

/// Fixed stride of both tables.
const ENTRY_LEN: usize = 12;

/// Decode a readings buffer and merge thresholds into it.
///
/// Reading entries: byte 0 id, byte 2 flags, byte 3 current, byte 4 worst,
/// bytes 5-8 raw value (little-endian i32). Bytes 9-11 are vendor-specific
/// and discarded. Threshold entries: byte 0 id, byte 1 threshold.
///
/// The result is sorted ascending by id. Short or garbage buffers yield a
/// short (possibly empty) result, never an error.
pub fn decode_attributes(readings: &[u8], thresholds: &[u8]) -> Vec<AttributeReading> {
    let mut attributes: Vec<AttributeReading> = Vec::new();

    for entry in entries(readings) {
        let id = entry[0];
        // Id 0 is the end-of-table sentinel; a repeated id means the scan
        // has run past valid data into padding.
        if id == 0 || attributes.iter().any(|a| a.id == id) {
            break;
        }
        attributes.push(AttributeReading {
            id,
            flags: entry[2],
            current: entry[3],
            worst: entry[4],
            threshold: None,
            raw_value: i32::from_le_bytes([entry[5], entry[6], entry[7], entry[8]]),
        });
    }

    // Thresholds have no defined sentinel, so this scan runs to buffer
    // exhaustion. Ids with no matching reading are dropped; duplicate ids
    // overwrite in scan order.
    for entry in entries(thresholds) {
        if let Some(attribute) = attributes.iter_mut().find(|a| a.id == entry[0]) {
            attribute.threshold = Some(entry[1]);
        }
    }

    attributes.sort_by_key(|a| a.id);
    attributes
}

fn entries(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.get(TABLE_HEADER_LEN..)
        .unwrap_or_default()
        .chunks_exact(ENTRY_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_entry(id: u8, flags: u8, current: u8, worst: u8, raw: i32) -> [u8; ENTRY_LEN] {
        let mut entry = [0u8; ENTRY_LEN];
        entry[0] = id;
        entry[2] = flags;
        entry[3] = current;
        entry[4] = worst;
        entry[5..9].copy_from_slice(&raw.to_le_bytes());
        entry
    }

    fn threshold_entry(id: u8, threshold: u8) -> [u8; ENTRY_LEN] {
        let mut entry = [0u8; ENTRY_LEN];
        entry[0] = id;
        entry[1] = threshold;
        entry
    }

    fn table(entries: &[[u8; ENTRY_LEN]]) -> Vec<u8> {
        let mut buf = vec![0u8; TABLE_HEADER_LEN];
        for entry in entries {
            buf.extend_from_slice(entry);
        }
        buf
    }

    #[test]
    fn decodes_every_field_and_leaves_threshold_unset() {
        let readings = table(&[
            reading_entry(1, 0x0f, 200, 195, 1432),
            reading_entry(5, 0x33, 100, 100, 0),
            reading_entry(9, 0x32, 98, 98, 11_423),
        ]);

        let decoded = decode_attributes(&readings, &[]);

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].id, 1);
        assert_eq!(decoded[0].flags, 0x0f);
        assert_eq!(decoded[0].current, 200);
        assert_eq!(decoded[0].worst, 195);
        assert_eq!(decoded[0].raw_value, 1432);
        assert!(decoded.iter().all(|a| a.threshold.is_none()));
    }

    #[test]
    fn single_entry_table_decodes() {
        let readings = table(&[reading_entry(1, 0, 10, 90, 80)]);
        assert_eq!(readings.len(), 14);

        let decoded = decode_attributes(&readings, &[]);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 1);
        assert_eq!(decoded[0].flags, 0);
        assert_eq!(decoded[0].current, 10);
        assert_eq!(decoded[0].worst, 90);
        assert_eq!(decoded[0].raw_value, 80);
        assert_eq!(decoded[0].threshold, None);
    }

    #[test]
    fn stops_at_repeated_id() {
        let readings = table(&[
            reading_entry(5, 0, 100, 100, 0),
            reading_entry(9, 0, 97, 97, 0),
            reading_entry(5, 0, 100, 100, 0),
            reading_entry(12, 0, 99, 99, 0),
        ]);

        let decoded = decode_attributes(&readings, &[]);

        let ids: Vec<u8> = decoded.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 9]);
    }

    #[test]
    fn stops_at_sentinel_id() {
        let readings = table(&[
            reading_entry(7, 0, 100, 100, 0),
            reading_entry(0, 0, 50, 50, 7),
            reading_entry(3, 0, 100, 100, 0),
        ]);

        let decoded = decode_attributes(&readings, &[]);

        let ids: Vec<u8> = decoded.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn threshold_merge_is_keyed_by_id() {
        let readings = table(&[
            reading_entry(5, 0, 100, 100, 0),
            reading_entry(9, 0, 97, 97, 0),
        ]);
        // Id 12 has no matching reading and contributes nothing.
        let thresholds = table(&[threshold_entry(9, 30), threshold_entry(12, 99)]);

        let decoded = decode_attributes(&readings, &thresholds);

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].threshold, None);
        assert_eq!(decoded[1].threshold, Some(30));
    }

    #[test]
    fn duplicate_threshold_id_overwrites_with_last_seen() {
        let readings = table(&[reading_entry(5, 0, 100, 100, 0)]);
        let thresholds = table(&[threshold_entry(5, 10), threshold_entry(5, 36)]);

        let decoded = decode_attributes(&readings, &thresholds);

        assert_eq!(decoded[0].threshold, Some(36));
    }

    #[test]
    fn output_is_sorted_ascending_by_id() {
        let readings = table(&[
            reading_entry(194, 0, 64, 45, 36),
            reading_entry(1, 0, 200, 200, 0),
            reading_entry(9, 0, 97, 97, 0),
        ]);

        let decoded = decode_attributes(&readings, &[]);

        let ids: Vec<u8> = decoded.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 9, 194]);
    }

    #[test]
    fn raw_value_is_signed_little_endian() {
        let readings = table(&[reading_entry(1, 0, 100, 100, -1)]);

        let decoded = decode_attributes(&readings, &[]);

        assert_eq!(decoded[0].raw_value, -1);
    }

    #[test]
    fn short_buffers_yield_empty_output() {
        assert!(decode_attributes(&[], &[]).is_empty());
        assert!(decode_attributes(&[0x01], &[]).is_empty());
        // Header plus 11 bytes: one byte short of a full entry.
        assert!(decode_attributes(&[1u8; TABLE_HEADER_LEN + 11], &[]).is_empty());
    }

    #[test]
    fn trailing_partial_entry_is_ignored() {
        let mut readings = table(&[reading_entry(5, 0, 100, 100, 0)]);
        readings.extend_from_slice(&[9, 0, 0]);

        let decoded = decode_attributes(&readings, &[]);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 5);
    }
}
