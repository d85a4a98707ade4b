use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One receiver's report within a detection record.
///
/// Properties beyond the four recognized ones are kept in `extra` so that
/// records survive a round trip through this type unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssiSignatureEntry {
    pub receiver_id: String,
    pub receiver_id_type: u8,
    pub rssi: i32,
    pub number_of_decodings: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RssiSignatureEntry {
    pub fn new(
        receiver_id: impl Into<String>,
        receiver_id_type: u8,
        rssi: i32,
        number_of_decodings: u32,
    ) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            receiver_id_type,
            rssi,
            number_of_decodings,
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Radio decoding record: a transmitter observed by one or more receivers.
///
/// `rssi_signature` is expected strongest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    pub transmitter_id: String,
    pub transmitter_id_type: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rssi_signature: Option<Vec<RssiSignatureEntry>>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<u8>>,
}

impl DetectionRecord {
    pub fn new(transmitter_id: impl Into<String>, transmitter_id_type: u8) -> Self {
        Self {
            transmitter_id: transmitter_id.into(),
            transmitter_id_type,
            packets: None,
            rssi_signature: None,
            timestamp: None,
            events: None,
        }
    }

    pub fn with_packets(mut self, packets: Vec<String>) -> Self {
        self.packets = Some(packets);
        self
    }

    pub fn with_rssi_signature(mut self, entries: Vec<RssiSignatureEntry>) -> Self {
        self.rssi_signature = Some(entries);
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_events(mut self, events: Vec<u8>) -> Self {
        self.events = Some(events);
        self
    }
}
