use std::fmt;

use tracing::warn;

use super::DEFAULT_CLIENT_ID;

/// A setting that is accepted but probably not what the caller wants.
///
/// Advisories never fail validation. They are reported to an
/// [`AdvisorySink`] before any fatal check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    DeprecatedRequiredAcks,
    MaxMessageBytesAboveFlushThreshold,
    FlushBytesAboveFlushThreshold,
    ProducerTimeoutSubMillisecond,
    ConsumerMaxWaitTimeVeryLow,
    ConsumerMaxWaitTimeSubMillisecond,
    DefaultClientId,
}

impl Advisory {
    /// Stable identifier, used as a structured field when logging.
    pub fn code(self) -> &'static str {
        match self {
            Advisory::DeprecatedRequiredAcks => "deprecated_required_acks",
            Advisory::MaxMessageBytesAboveFlushThreshold => "max_message_bytes_above_threshold",
            Advisory::FlushBytesAboveFlushThreshold => "flush_bytes_above_threshold",
            Advisory::ProducerTimeoutSubMillisecond => "producer_timeout_sub_ms",
            Advisory::ConsumerMaxWaitTimeVeryLow => "consumer_max_wait_low",
            Advisory::ConsumerMaxWaitTimeSubMillisecond => "consumer_max_wait_sub_ms",
            Advisory::DefaultClientId => "default_client_id",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Advisory::DeprecatedRequiredAcks => {
                "Producer.RequiredAcks > 1 is deprecated and will be rejected by newer brokers."
            }
            Advisory::MaxMessageBytesAboveFlushThreshold => {
                "Producer.MaxMessageBytes is too close to MaxRequestSize; it will be ignored."
            }
            Advisory::FlushBytesAboveFlushThreshold => {
                "Producer.Flush.Bytes is too close to MaxRequestSize; it will be ignored."
            }
            Advisory::ProducerTimeoutSubMillisecond => {
                "Producer.Timeout only supports millisecond resolution; nanoseconds will be truncated."
            }
            Advisory::ConsumerMaxWaitTimeVeryLow => {
                "Consumer.MaxWaitTime is very low, which can cause high CPU and network usage."
            }
            Advisory::ConsumerMaxWaitTimeSubMillisecond => {
                "Consumer.MaxWaitTime only supports millisecond precision; nanoseconds will be truncated."
            }
            Advisory::DefaultClientId => {
                return write!(
                    f,
                    "ClientID is the default of '{}', you should consider setting it to something application-specific.",
                    DEFAULT_CLIENT_ID
                );
            }
        };
        f.write_str(text)
    }
}

/// Receives advisories raised while validating a [`Config`](super::Config).
pub trait AdvisorySink {
    fn advise(&mut self, advisory: Advisory);
}

/// Emits every advisory as a `warn` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn advise(&mut self, advisory: Advisory) {
        warn!(advisory = advisory.code(), "{}", advisory);
    }
}

/// Collects advisories in the order they were raised.
impl AdvisorySink for Vec<Advisory> {
    fn advise(&mut self, advisory: Advisory) {
        self.push(advisory);
    }
}

/// Hands every advisory to a closure.
pub struct FnSink<F>(pub F);

impl<F: FnMut(Advisory)> AdvisorySink for FnSink<F> {
    fn advise(&mut self, advisory: Advisory) {
        (self.0)(advisory)
    }
}
