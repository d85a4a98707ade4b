use crate::telemetry::log::ConfigWarning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use crate::processing::Flattener;
pub use crate::raddec::{DetectionRecord, FlattenedRecord, RssiSignature, RssiSignatureEntry};

pub const DEFAULT_INCLUDE_PACKETS: bool = true;
pub const DEFAULT_INCLUDE_RSSI_SIGNATURE: bool = false;
pub const DEFAULT_EXTRACT_ONE_RSSI_SIGNATURE: bool = true;
pub const DEFAULT_MAX_NUMBER_OF_RECEIVERS: i32 = 15;

/// Minimum possible signal strength, in dBm.
pub const MIN_RSSI_DBM: i32 = -127;

/// Options selecting which fields a [`Flattener`] retains.
///
/// Absent keys take their defaults and unknown keys are ignored, so a config
/// shared with other tools can be loaded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlattenerConfig {
    pub include_packets: bool,
    pub include_rssi_signature: bool,
    pub extract_one_rssi_signature: bool,
    /// Values of zero or below leave the array uncapped.
    pub max_number_of_receivers: i32,
    pub rssi_threshold: i32,
    /// When absent, filtering follows whether `rssi_threshold` is above
    /// [`MIN_RSSI_DBM`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by_rssi: Option<bool>,
}

impl Default for FlattenerConfig {
    fn default() -> Self {
        Self {
            include_packets: DEFAULT_INCLUDE_PACKETS,
            include_rssi_signature: DEFAULT_INCLUDE_RSSI_SIGNATURE,
            extract_one_rssi_signature: DEFAULT_EXTRACT_ONE_RSSI_SIGNATURE,
            max_number_of_receivers: DEFAULT_MAX_NUMBER_OF_RECEIVERS,
            rssi_threshold: MIN_RSSI_DBM,
            filter_by_rssi: None,
        }
    }
}

impl FlattenerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> FlattenResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parses YAML, which also covers plain JSON documents.
    pub fn from_yaml_str(contents: &str) -> FlattenResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn with_packets(mut self, include: bool) -> Self {
        self.include_packets = include;
        self
    }

    pub fn with_rssi_signature(mut self, include: bool) -> Self {
        self.include_rssi_signature = include;
        self
    }

    pub fn with_one_rssi_signature(mut self, extract: bool) -> Self {
        self.extract_one_rssi_signature = extract;
        self
    }

    pub fn with_max_receivers(mut self, max: i32) -> Self {
        self.max_number_of_receivers = max;
        self
    }

    pub fn with_rssi_threshold(mut self, threshold: i32) -> Self {
        self.rssi_threshold = threshold;
        self
    }

    pub fn with_rssi_filter(mut self, enabled: bool) -> Self {
        self.filter_by_rssi = Some(enabled);
        self
    }

    pub fn filtering_enabled(&self) -> bool {
        self.filter_by_rssi
            .unwrap_or(self.rssi_threshold > MIN_RSSI_DBM)
    }

    /// Cap on the trimmed array, `None` when uncapped.
    pub fn receiver_cap(&self) -> Option<usize> {
        usize::try_from(self.max_number_of_receivers)
            .ok()
            .filter(|&max| max > 0)
    }

    /// Advisory conditions raised when a flattener is built from this config.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        match (self.include_rssi_signature, self.extract_one_rssi_signature) {
            (false, false) => vec![ConfigWarning::NoRssiRetained],
            (true, true) => vec![ConfigWarning::RssiDuplicated],
            _ => Vec::new(),
        }
    }
}

/// Common error type for configuration loading and flattening.
#[derive(thiserror::Error, Debug)]
pub enum FlattenError {
    #[error("empty rssi signature for transmitter {0}")]
    EmptyRssiSignature(String),
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("config io failure: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("config parse failure: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type FlattenResult<T> = Result<T, FlattenError>;
