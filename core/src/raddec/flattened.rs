use crate::raddec::detection::RssiSignatureEntry;
use serde::{Deserialize, Serialize};

/// Signal-strength entry reduced to the recognized properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssiSignature {
    pub receiver_id: String,
    pub receiver_id_type: u8,
    pub rssi: i32,
    pub number_of_decodings: u32,
}

impl From<&RssiSignatureEntry> for RssiSignature {
    fn from(entry: &RssiSignatureEntry) -> Self {
        Self {
            receiver_id: entry.receiver_id.clone(),
            receiver_id_type: entry.receiver_id_type,
            rssi: entry.rssi,
            number_of_decodings: entry.number_of_decodings,
        }
    }
}

/// Size-bounded copy of a detection record.
///
/// Every optional field is `Some` only when its input field was present and
/// the flattener's policy retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedRecord {
    pub transmitter_id: String,
    pub transmitter_id_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_distinct_packets: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_id_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_decodings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_receivers: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi_signature: Option<Vec<RssiSignature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u8>>,
}

impl FlattenedRecord {
    pub fn new(transmitter_id: impl Into<String>, transmitter_id_type: u8) -> Self {
        Self {
            transmitter_id: transmitter_id.into(),
            transmitter_id_type,
            number_of_distinct_packets: None,
            packets: None,
            receiver_id: None,
            receiver_id_type: None,
            rssi: None,
            number_of_decodings: None,
            number_of_receivers: None,
            rssi_signature: None,
            timestamp: None,
            events: None,
        }
    }

    /// True when any of the strongest-receiver fields were populated.
    pub fn has_single_signature(&self) -> bool {
        self.receiver_id.is_some() || self.number_of_receivers.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trimming_drops_extra_properties() {
        let entry = RssiSignatureEntry::new("R1", 2, -40, 3).with_extra("aoa", json!([12]));
        let trimmed = RssiSignature::from(&entry);
        assert_eq!(
            serde_json::to_value(&trimmed).unwrap(),
            json!({"receiverId": "R1", "receiverIdType": 2, "rssi": -40, "numberOfDecodings": 3})
        );
    }

    #[test]
    fn bare_record_serializes_identity_only() {
        let record = FlattenedRecord::new("A", 1);
        assert!(!record.has_single_signature());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"transmitterId": "A", "transmitterIdType": 1})
        );
    }
}
