//! Error types for feed decoding, grid mapping, and classification.

use std::fmt;

/// Error returned when decoding a history feed fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Sample interval must be a positive number of seconds
    InvalidInterval { interval_seconds: u32 },
    /// A required metadata header was absent (distinct from zero)
    MissingMetadata { field: &'static str },
    /// A text payload line did not parse as `<timestamp> <value>`
    MalformedLine { line: usize },
    /// A text payload value does not fit the single-byte encoding
    ValueOutOfRange { line: usize, value: i64 },
    /// Text payload timestamps must strictly decrease, most recent first
    OutOfOrder { line: usize, ts: i64, prev_ts: i64 },
    /// Timestamp arithmetic overflowed at the given buffer index or line
    TimestampOverflow { at: usize },
}

/// Error returned when a series is too short for the yearly grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Fewer samples than the grid has cells
    InsufficientData { expected: usize, actual: usize },
}

/// Error returned when a classifier input violates the value contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    /// The offending value, outside `[0, 254]`
    pub value: u8,
}

/// Error returned when configuration validation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Busy threshold must be a measurable occupancy value
    ThresholdOutOfRange { threshold: u8 },
    /// At least one cut point is required
    NoCutPoints,
    /// Cut points must be strictly increasing
    CutPointsNotIncreasing { index: usize },
    /// Cut points must be measurable occupancy values
    CutPointOutOfRange { index: usize, value: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { interval_seconds } => {
                write!(f, "sample interval {interval_seconds} is not a positive number of seconds")
            }
            Self::MissingMetadata { field } => {
                write!(f, "required metadata header `{field}` is absent")
            }
            Self::MalformedLine { line } => {
                write!(f, "line {line} does not parse as `<timestamp> <value>`")
            }
            Self::ValueOutOfRange { line, value } => {
                write!(f, "value {value} on line {line} does not fit a single byte")
            }
            Self::OutOfOrder { line, ts, prev_ts } => {
                write!(
                    f,
                    "timestamp {ts} on line {line} is not older than previous timestamp {prev_ts}"
                )
            }
            Self::TimestampOverflow { at } => {
                write!(f, "timestamp arithmetic overflowed at entry {at}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { expected, actual } => {
                write!(f, "yearly grid needs {expected} samples, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "occupancy value {} is outside the measurable range [0, 254]", self.value)
    }
}

impl std::error::Error for RangeError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOutOfRange { threshold } => {
                write!(f, "busy threshold {threshold} is outside the measurable range [0, 254]")
            }
            Self::NoCutPoints => write!(f, "cut point list is empty"),
            Self::CutPointsNotIncreasing { index } => {
                write!(f, "cut point at index {index} is not greater than its predecessor")
            }
            Self::CutPointOutOfRange { index, value } => {
                write!(
                    f,
                    "cut point {value} at index {index} is outside the measurable range [0, 254]"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
