use std::fmt;

use serde::{Deserialize, Serialize};

/// Acknowledgement level a producer asks the broker for.
///
/// Carried on the wire as a signed 16 bit integer. `-1` waits for every
/// in-sync replica, `0` waits for nothing and `1` waits for the leader's
/// local write. Larger counts are legacy semantics that brokers are phasing
/// out, so they are representable but flagged as deprecated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredAcks(pub i16);

impl RequiredAcks {
    /// Fire and forget.
    pub const NO_RESPONSE: RequiredAcks = RequiredAcks(0);
    /// Leader has written the record to its local log.
    pub const WAIT_FOR_LOCAL: RequiredAcks = RequiredAcks(1);
    /// Every in-sync replica has the record.
    pub const WAIT_FOR_ALL: RequiredAcks = RequiredAcks(-1);

    pub fn as_i16(self) -> i16 {
        self.0
    }

    pub fn is_deprecated(self) -> bool {
        self.0 > 1
    }
}

impl Default for RequiredAcks {
    fn default() -> Self {
        RequiredAcks::WAIT_FOR_LOCAL
    }
}

impl From<i16> for RequiredAcks {
    fn from(value: i16) -> Self {
        RequiredAcks(value)
    }
}

impl fmt::Display for RequiredAcks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RequiredAcks::NO_RESPONSE => write!(f, "none"),
            RequiredAcks::WAIT_FOR_LOCAL => write!(f, "local"),
            RequiredAcks::WAIT_FOR_ALL => write!(f, "all"),
            RequiredAcks(n) => write!(f, "{}", n),
        }
    }
}
