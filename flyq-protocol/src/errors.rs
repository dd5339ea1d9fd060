use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown compression codec: {0}")]
    UnknownCompressionCodec(i8),
}
