/// Largest request a broker will accept from a single client frame.
pub const MAX_REQUEST_SIZE: i32 = 100 * 1024 * 1024;

// headroom for request headers and per-batch framing
const FLUSH_OVERHEAD: i32 = 10 * 1024;

/// Byte count at which a producer batch has to be flushed no matter what
/// the configured flush thresholds say.
pub fn force_flush_threshold() -> i32 {
    MAX_REQUEST_SIZE - FLUSH_OVERHEAD
}
