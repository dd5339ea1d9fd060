use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::humantime_serde;

/// Cluster metadata management, used by the client and inherited by the
/// producer and consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Background refresh period. Zero disables the refresh.
    #[serde(with = "humantime_serde")]
    pub refresh_frequency: Duration,

    pub retry: MetadataRetry,
}

/// Retries of a metadata request while the cluster is electing a leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataRetry {
    pub max: i32,

    /// Time given to the election before the next attempt.
    #[serde(with = "humantime_serde")]
    pub backoff: Duration,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            refresh_frequency: Duration::from_secs(10 * 60),
            retry: MetadataRetry::default(),
        }
    }
}

impl Default for MetadataRetry {
    fn default() -> Self {
        Self {
            max: 3,
            backoff: Duration::from_millis(250),
        }
    }
}
