pub mod flattener;
pub mod strategy;

pub use flattener::Flattener;
pub use strategy::{ExtractStrategy, PacketsStrategy, SignatureStrategy};
