//! Shared constants for the occupancy wire format.

/// Reserved byte meaning "no reading available"
pub const SENTINEL: u8 = 0xFF;

/// Largest value the single-byte encoding can carry as a measurement
pub const MAX_OCCUPANCY: u8 = 254;

/// Entries in a yearly feed, one byte per tracked day
pub const YEAR_DAYS: usize = 365;

/// Days per grid column in the yearly view
pub(crate) const WEEK_DAYS: usize = 7;

/// Headers carry seconds, chart timestamps are milliseconds
pub(crate) const MS_PER_SEC: i64 = 1000;
