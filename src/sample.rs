//! Decoded sample type shared by every feed.

use serde::{Deserialize, Serialize};

use crate::constants::SENTINEL;

/// A decoded occupancy sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix timestamp in milliseconds
    pub ts_ms: i64,
    /// Occupancy percentage, `None` when the sampler had no reading
    pub value: Option<u8>,
}

/// Map a raw feed byte to its measured value
///
/// The sentinel byte (255) marks a missing reading and never surfaces as a
/// number; every other byte is the measurement itself.
#[inline]
#[must_use]
pub fn occupancy_from_byte(raw: u8) -> Option<u8> {
    (raw != SENTINEL).then_some(raw)
}
