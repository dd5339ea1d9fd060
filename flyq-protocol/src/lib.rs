pub mod acks;
pub mod compression;
pub mod errors;
pub mod limits;

// Public re-exports for easy access
pub use acks::RequiredAcks;
pub use compression::CompressionCodec;
pub use errors::ProtocolError;
pub use limits::{force_flush_threshold, MAX_REQUEST_SIZE};
