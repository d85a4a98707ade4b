//! Flattening of radio decoding (raddec) detection records.
//!
//! A [`Flattener`] resolves its configuration once into fixed strategies and
//! then reduces each record to the fields that policy retains, bounding the
//! size of the per-receiver signal data along the way.

pub mod prelude;
pub mod processing;
pub mod raddec;
pub mod telemetry;

pub use prelude::{FlattenError, FlattenResult, FlattenerConfig};
pub use processing::Flattener;
pub use raddec::{DetectionRecord, FlattenedRecord, RssiSignature, RssiSignatureEntry};
