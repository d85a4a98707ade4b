use crate::telemetry::log::{ConfigWarning, DiagnosticSink};
use std::sync::Mutex;

/// In-memory sink keeping every warning it receives, in arrival order.
pub struct WarningCollector {
    inner: Mutex<Vec<ConfigWarning>>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<ConfigWarning> {
        if let Ok(warnings) = self.inner.lock() {
            warnings.clone()
        } else {
            Vec::new()
        }
    }

    pub fn contains(&self, warning: ConfigWarning) -> bool {
        self.snapshot().contains(&warning)
    }

    pub fn clear(&self) {
        if let Ok(mut warnings) = self.inner.lock() {
            warnings.clear();
        }
    }
}

impl Default for WarningCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for WarningCollector {
    fn warn(&self, warning: ConfigWarning) {
        if let Ok(mut warnings) = self.inner.lock() {
            warnings.push(warning);
        }
    }
}
