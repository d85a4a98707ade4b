use log::{debug, warn};
use std::fmt;

/// Advisory condition detected while resolving a flattener configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// Neither the rssi array nor the strongest entry is retained.
    NoRssiRetained,
    /// The rssi array and the strongest entry are both retained.
    RssiDuplicated,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NoRssiRetained => write!(f, "No RSSI information is being flattened!"),
            ConfigWarning::RssiDuplicated => write!(
                f,
                "Both a single RSSI signature and the RSSI signature array are saved!"
            ),
        }
    }
}

/// Receives diagnostics emitted while a flattener is being built.
pub trait DiagnosticSink {
    fn warn(&self, warning: ConfigWarning);

    fn record(&self, _message: &str) {}
}

/// Sink forwarding diagnostics to the `log` facade.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for LogManager {
    fn warn(&self, warning: ConfigWarning) {
        warn!("{}", warning);
    }

    fn record(&self, message: &str) {
        debug!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_render_readable_messages() {
        assert!(ConfigWarning::NoRssiRetained.to_string().contains("No RSSI"));
        assert!(ConfigWarning::RssiDuplicated.to_string().contains("Both"));
    }

    #[test]
    fn log_manager_accepts_diagnostics_without_logger() {
        let sink = LogManager::default();
        sink.warn(ConfigWarning::RssiDuplicated);
        sink.record("strategy resolved");
    }
}
