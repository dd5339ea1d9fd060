use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::humantime_serde;

/// Connection level settings shared by every broker connection the client
/// opens, whether it serves metadata, producing or consuming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Requests allowed in flight on one connection before sending blocks.
    pub max_open_requests: i32,

    /// How long the initial connect may take.
    #[serde(with = "humantime_serde")]
    pub dial_timeout: Duration,

    /// How long to wait for a response.
    #[serde(with = "humantime_serde")]
    pub read_timeout: Duration,

    /// How long a transmit may take.
    #[serde(with = "humantime_serde")]
    pub write_timeout: Duration,

    /// TCP keep-alive period. Zero disables keep-alives.
    #[serde(with = "humantime_serde")]
    pub keep_alive: Duration,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            max_open_requests: 5,
            dial_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
            keep_alive: Duration::ZERO, // disabled
        }
    }
}
