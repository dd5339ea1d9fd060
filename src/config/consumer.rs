use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::humantime_serde;

/// Settings consumed by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerConfig {
    /// How long the broker may hold a fetch while waiting for `fetch.min`
    /// bytes. Zero makes the consumer spin when a partition is idle;
    /// 100-500ms suits most workloads. Only whole milliseconds reach the
    /// broker, see [`ConsumerConfig::max_wait_millis`].
    #[serde(with = "humantime_serde")]
    pub max_wait_time: Duration,

    pub retry: ConsumerRetry,

    pub fetch: ConsumerFetch,

    #[serde(rename = "return")]
    pub returns: ConsumerReturn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerRetry {
    /// Pause after a failed partition read before trying again.
    #[serde(with = "humantime_serde")]
    pub backoff: Duration,
}

/// Byte sizes requested per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerFetch {
    /// Minimum the broker should gather before answering.
    pub min: i32,
    /// Size asked for on a typical request. Should exceed most messages,
    /// otherwise the consumer keeps growing the request.
    pub default: i32,
    /// Upper bound; larger messages are reported as errors. Zero is
    /// unbounded.
    pub max: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerReturn {
    /// Consume errors are reported on a channel that must be drained.
    pub errors: bool,
}

impl ConsumerConfig {
    /// Max wait as sent on the wire, truncated to whole milliseconds and
    /// saturating at `i32::MAX`.
    pub fn max_wait_millis(&self) -> i32 {
        i32::try_from(self.max_wait_time.as_millis()).unwrap_or(i32::MAX)
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            max_wait_time: Duration::from_millis(250),
            retry: ConsumerRetry::default(),
            fetch: ConsumerFetch::default(),
            returns: ConsumerReturn::default(),
        }
    }
}

impl Default for ConsumerRetry {
    fn default() -> Self {
        Self {
            backoff: Duration::from_secs(2),
        }
    }
}

impl Default for ConsumerFetch {
    fn default() -> Self {
        Self {
            min: 1,
            default: 32768,
            max: 0,
        }
    }
}
