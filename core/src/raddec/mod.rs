pub mod detection;
pub mod flattened;

pub use detection::{DetectionRecord, RssiSignatureEntry};
pub use flattened::{FlattenedRecord, RssiSignature};
