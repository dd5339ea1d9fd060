use std::time::Duration;

use flyq_protocol::{CompressionCodec, RequiredAcks};
use serde::{Deserialize, Serialize};

use super::humantime_serde;
use crate::partitioner::PartitionerStrategy;

/// Settings consumed by the producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerConfig {
    /// Largest message the producer accepts. Keep it at or below the
    /// broker's own message size limit.
    pub max_message_bytes: i32,

    pub required_acks: RequiredAcks,

    /// How long the broker may wait to gather `required_acks`. Only
    /// meaningful for `WAIT_FOR_ALL` or counts above one. The broker
    /// works in whole milliseconds, see [`ProducerConfig::timeout_millis`].
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    pub compression: CompressionCodec,

    /// Strategy used to build one partitioner per topic.
    ///
    /// `None` is only reachable in code. Files cannot express it: the key is
    /// left out when serializing and a missing key loads as the hash
    /// strategy, so an unset partitioner does not survive a save and reload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitioner: Option<PartitionerStrategy>,

    /// Which result channels get populated. An enabled channel has to be
    /// drained by the caller or the producer stalls.
    #[serde(rename = "return")]
    pub returns: ProducerReturn,

    pub flush: ProducerFlush,

    pub retry: ProducerRetry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerReturn {
    /// Delivered messages are reported back.
    pub successes: bool,
    /// Messages that failed to deliver are reported back with their error.
    pub errors: bool,
}

/// Batching thresholds. All zero means send as fast as possible, with
/// everything that arrives during an in-flight request going into the next
/// batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerFlush {
    /// Best-effort byte count that triggers a flush.
    pub bytes: i32,
    /// Best-effort message count that triggers a flush.
    pub messages: i32,
    /// Best-effort flush period.
    #[serde(with = "humantime_serde")]
    pub frequency: Duration,
    /// Hard cap on messages in one request. Zero is unlimited.
    pub max_messages: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProducerRetry {
    pub max: i32,
    /// Pause between attempts so the cluster can settle.
    #[serde(with = "humantime_serde")]
    pub backoff: Duration,
}

impl ProducerConfig {
    /// Timeout as sent on the wire. Any sub-millisecond remainder is
    /// dropped and values past `i32::MAX` saturate.
    pub fn timeout_millis(&self) -> i32 {
        i32::try_from(self.timeout.as_millis()).unwrap_or(i32::MAX)
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: 1_000_000,
            required_acks: RequiredAcks::WAIT_FOR_LOCAL,
            timeout: Duration::from_secs(10),
            compression: CompressionCodec::None,
            partitioner: Some(PartitionerStrategy::Hash),
            returns: ProducerReturn::default(),
            flush: ProducerFlush::default(),
            retry: ProducerRetry::default(),
        }
    }
}

impl Default for ProducerReturn {
    fn default() -> Self {
        Self {
            successes: false,
            errors: true,
        }
    }
}

impl Default for ProducerRetry {
    fn default() -> Self {
        Self {
            max: 3,
            backoff: Duration::from_millis(100),
        }
    }
}
