use crate::prelude::{FlattenError, FlattenResult, FlattenerConfig};
use crate::processing::strategy::{ExtractStrategy, PacketsStrategy, SignatureStrategy};
use crate::raddec::{DetectionRecord, FlattenedRecord};
use crate::telemetry::log::{DiagnosticSink, LogManager};
use serde_json::Value;

/// Reduces detection records according to a policy fixed at construction.
///
/// The configuration is resolved into one strategy per concern up front;
/// `flatten` only dispatches on those, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Flattener {
    config: FlattenerConfig,
    packets: PacketsStrategy,
    extract: ExtractStrategy,
    signatures: SignatureStrategy,
}

impl Flattener {
    /// Builds a flattener reporting configuration warnings through `log`.
    pub fn new(config: FlattenerConfig) -> Self {
        Self::with_sink(config, &LogManager::new())
    }

    pub fn with_sink(config: FlattenerConfig, sink: &dyn DiagnosticSink) -> Self {
        let packets = PacketsStrategy::from_config(&config);
        let extract = ExtractStrategy::from_config(&config);
        let signatures = SignatureStrategy::from_config(&config);

        for warning in config.warnings() {
            sink.warn(warning);
        }
        sink.record(&format!(
            "Flattener strategy packets={:?} extract={:?} signatures={:?}",
            packets, extract, signatures
        ));

        Self {
            config,
            packets,
            extract,
            signatures,
        }
    }

    pub fn config(&self) -> &FlattenerConfig {
        &self.config
    }

    pub fn flatten(&self, record: &DetectionRecord) -> FlattenResult<FlattenedRecord> {
        let mut out =
            FlattenedRecord::new(record.transmitter_id.clone(), record.transmitter_id_type);

        if let Some(packets) = record.packets.as_deref() {
            out.number_of_distinct_packets = Some(packets.len());
            self.packets.apply(&mut out, packets);
        }
        if let Some(entries) = record.rssi_signature.as_deref() {
            self.extract.apply(&mut out, entries)?;
            self.signatures.apply(&mut out, entries);
        }
        if let Some(timestamp) = record.timestamp {
            out.timestamp = Some(timestamp);
        }
        if let Some(events) = record.events.as_ref() {
            out.events = Some(events.clone());
        }

        Ok(out)
    }

    /// Flattens a record held as untyped JSON.
    pub fn flatten_json(&self, value: &Value) -> FlattenResult<Value> {
        let record: DetectionRecord = serde_json::from_value(value.clone())
            .map_err(|err| FlattenError::InvalidRecord(err.to_string()))?;
        let flattened = self.flatten(&record)?;
        serde_json::to_value(&flattened)
            .map_err(|err| FlattenError::InvalidRecord(err.to_string()))
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(FlattenerConfig::default())
    }
}
