use thiserror::Error;

/// The supplied settings are out of range or contradict each other.
///
/// Never retryable: the message names the field and the requirement it
/// failed, and the caller is expected to stop before opening any connection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid configuration: {0}")]
pub struct ConfigurationError(String);

impl ConfigurationError {
    pub fn new(message: impl Into<String>) -> Self {
        ConfigurationError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}
