use crate::prelude::{FlattenError, FlattenResult, FlattenerConfig};
use crate::raddec::{FlattenedRecord, RssiSignature, RssiSignatureEntry};

/// Handling of the raw `packets` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketsStrategy {
    Copy,
    Skip,
}

impl PacketsStrategy {
    pub fn from_config(config: &FlattenerConfig) -> Self {
        if config.include_packets {
            PacketsStrategy::Copy
        } else {
            PacketsStrategy::Skip
        }
    }

    pub fn apply(self, out: &mut FlattenedRecord, packets: &[String]) {
        match self {
            PacketsStrategy::Copy => out.packets = Some(packets.to_vec()),
            PacketsStrategy::Skip => {}
        }
    }
}

/// Promotion of the strongest receiver onto the flattened record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStrategy {
    Strongest,
    Skip,
}

impl ExtractStrategy {
    pub fn from_config(config: &FlattenerConfig) -> Self {
        if config.extract_one_rssi_signature {
            ExtractStrategy::Strongest
        } else {
            ExtractStrategy::Skip
        }
    }

    /// Entries are taken as sorted strongest-first, so the first one wins.
    pub fn apply(
        self,
        out: &mut FlattenedRecord,
        entries: &[RssiSignatureEntry],
    ) -> FlattenResult<()> {
        match self {
            ExtractStrategy::Strongest => {
                let strongest = entries
                    .first()
                    .ok_or_else(|| FlattenError::EmptyRssiSignature(out.transmitter_id.clone()))?;
                out.receiver_id = Some(strongest.receiver_id.clone());
                out.receiver_id_type = Some(strongest.receiver_id_type);
                out.rssi = Some(strongest.rssi);
                out.number_of_decodings = Some(strongest.number_of_decodings);
                out.number_of_receivers = Some(entries.len());
                Ok(())
            }
            ExtractStrategy::Skip => Ok(()),
        }
    }
}

/// Shape of the trimmed `rssi_signature` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureStrategy {
    Skip,
    CopyAll,
    CopyFiltered { min_rssi: i32 },
    Trim { max: usize },
    TrimFiltered { max: usize, min_rssi: i32 },
}

impl SignatureStrategy {
    pub fn from_config(config: &FlattenerConfig) -> Self {
        if !config.include_rssi_signature {
            return SignatureStrategy::Skip;
        }

        let min_rssi = config.rssi_threshold;
        match (config.receiver_cap(), config.filtering_enabled()) {
            (Some(max), true) => SignatureStrategy::TrimFiltered { max, min_rssi },
            (Some(max), false) => SignatureStrategy::Trim { max },
            (None, true) => SignatureStrategy::CopyFiltered { min_rssi },
            (None, false) => SignatureStrategy::CopyAll,
        }
    }

    /// The cap is applied before the threshold, so a filtered array may come
    /// out shorter than `max` even when later entries would have passed.
    pub fn apply(self, out: &mut FlattenedRecord, entries: &[RssiSignatureEntry]) {
        let trimmed = match self {
            SignatureStrategy::Skip => return,
            SignatureStrategy::CopyAll => trim(entries.iter()),
            SignatureStrategy::CopyFiltered { min_rssi } => {
                trim(entries.iter().filter(|entry| entry.rssi >= min_rssi))
            }
            SignatureStrategy::Trim { max } => trim(entries.iter().take(max)),
            SignatureStrategy::TrimFiltered { max, min_rssi } => trim(
                entries
                    .iter()
                    .take(max)
                    .filter(|entry| entry.rssi >= min_rssi),
            ),
        };
        out.rssi_signature = Some(trimmed);
    }
}

fn trim<'a>(entries: impl Iterator<Item = &'a RssiSignatureEntry>) -> Vec<RssiSignature> {
    entries.map(RssiSignature::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RssiSignatureEntry> {
        vec![
            RssiSignatureEntry::new("R1", 2, -40, 3),
            RssiSignatureEntry::new("R2", 2, -85, 1),
            RssiSignatureEntry::new("R3", 2, -60, 2),
        ]
    }

    fn receivers(out: &FlattenedRecord) -> Vec<&str> {
        out.rssi_signature
            .as_ref()
            .unwrap()
            .iter()
            .map(|sig| sig.receiver_id.as_str())
            .collect()
    }

    #[test]
    fn signature_strategy_resolves_every_combination() {
        let base = FlattenerConfig::default().with_rssi_signature(true);
        assert_eq!(
            SignatureStrategy::from_config(&base),
            SignatureStrategy::Trim { max: 15 }
        );
        assert_eq!(
            SignatureStrategy::from_config(&base.clone().with_rssi_threshold(-70)),
            SignatureStrategy::TrimFiltered {
                max: 15,
                min_rssi: -70
            }
        );
        assert_eq!(
            SignatureStrategy::from_config(&base.clone().with_max_receivers(0)),
            SignatureStrategy::CopyAll
        );
        assert_eq!(
            SignatureStrategy::from_config(
                &base.clone().with_max_receivers(-1).with_rssi_threshold(-70)
            ),
            SignatureStrategy::CopyFiltered { min_rssi: -70 }
        );
        assert_eq!(
            SignatureStrategy::from_config(&FlattenerConfig::default()),
            SignatureStrategy::Skip
        );
    }

    #[test]
    fn uncapped_filter_compares_rssi_values() {
        let mut out = FlattenedRecord::new("A", 1);
        SignatureStrategy::CopyFiltered { min_rssi: -60 }.apply(&mut out, &entries());
        assert_eq!(receivers(&out), vec!["R1", "R3"]);
    }

    #[test]
    fn capped_filter_applies_cap_before_threshold() {
        let mut out = FlattenedRecord::new("A", 1);
        SignatureStrategy::TrimFiltered {
            max: 2,
            min_rssi: -60,
        }
        .apply(&mut out, &entries());
        assert_eq!(receivers(&out), vec!["R1"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut out = FlattenedRecord::new("A", 1);
        SignatureStrategy::CopyFiltered { min_rssi: -85 }.apply(&mut out, &entries());
        assert_eq!(receivers(&out), vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn skip_leaves_array_absent() {
        let mut out = FlattenedRecord::new("A", 1);
        SignatureStrategy::Skip.apply(&mut out, &entries());
        PacketsStrategy::Skip.apply(&mut out, &["p1".to_string()]);
        ExtractStrategy::Skip.apply(&mut out, &[]).unwrap();
        assert_eq!(out, FlattenedRecord::new("A", 1));
    }

    #[test]
    fn strongest_extraction_rejects_empty_sequence() {
        let mut out = FlattenedRecord::new("A", 1);
        let err = ExtractStrategy::Strongest.apply(&mut out, &[]).unwrap_err();
        assert!(matches!(err, FlattenError::EmptyRssiSignature(ref id) if id == "A"));
        assert!(!out.has_single_signature());
    }
}
