pub mod capture;
pub mod log;

pub use self::capture::WarningCollector;
pub use self::log::{ConfigWarning, DiagnosticSink, LogManager};
