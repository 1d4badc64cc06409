//! Decoding functionality for occupancy history feeds.
//!
//! A history feed reaches the page in one of two shapes: a packed binary body
//! (one byte per sample, most recent first) with two out-of-band scalar
//! headers, or a text body with one `<timestamp> <value>` pair per line.
//! Both decode into the same ordered sample sequence.

use crate::constants::{MS_PER_SEC, SENTINEL};
use crate::error::DecodeError;
use crate::sample::{occupancy_from_byte, Sample};

/// Projection of buffer indices onto wall-clock time
///
/// Must accompany every packed history body. Both fields travel as response
/// headers; a producer that omits either yields
/// [`DecodeError::MissingMetadata`], never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryMetadata {
    /// Unix timestamp of the most recent sample, in seconds
    pub end_timestamp: u64,
    /// Spacing between consecutive samples, in seconds
    pub interval_seconds: u32,
}

/// Decode a packed history body into ordered samples
///
/// Index 0 is the most recent sample; each subsequent index is one interval
/// further into the past, so decoded timestamps strictly decrease. The output
/// preserves input order; callers that want chronological rendering reverse
/// it themselves.
///
/// # Arguments
/// * `buf` - One byte per sample, 255 = no reading
/// * `meta` - Index-to-time projection from the feed headers
///
/// # Errors
/// Returns an error if:
/// - The interval is zero
/// - Timestamp arithmetic overflows
///
/// An empty buffer decodes to an empty series and is not an error.
///
/// # Example
/// ```
/// use busyfeed::{decode, HistoryMetadata};
///
/// let meta = HistoryMetadata { end_timestamp: 1000, interval_seconds: 100 };
/// let series = decode(&[10, 20, 255, 40], &meta).unwrap();
///
/// assert_eq!(series.len(), 4);
/// assert_eq!(series[0].ts_ms, 1_000_000);
/// assert_eq!(series[1].ts_ms, 900_000);
/// assert_eq!(series[2].value, None);
/// assert_eq!(series[3].value, Some(40));
/// ```
#[must_use = "decoding returns samples that should be used"]
pub fn decode(buf: &[u8], meta: &HistoryMetadata) -> Result<Vec<Sample>, DecodeError> {
    if meta.interval_seconds == 0 {
        return Err(DecodeError::InvalidInterval {
            interval_seconds: meta.interval_seconds,
        });
    }

    let end = i64::try_from(meta.end_timestamp).map_err(|_| DecodeError::TimestampOverflow { at: 0 })?;
    let interval = i64::from(meta.interval_seconds);

    let mut samples = Vec::with_capacity(buf.len());
    for (i, &raw) in buf.iter().enumerate() {
        samples.push(Sample {
            ts_ms: sample_ts_ms(end, i, interval)?,
            value: occupancy_from_byte(raw),
        });
    }

    Ok(samples)
}

/// Decode a text history body into ordered samples
///
/// Each non-empty line carries a whitespace-separated `<timestamp> <value>`
/// pair, timestamps in seconds and most recent first. The value column uses
/// the same single-byte encoding as the packed shape, so 255 decodes to a
/// missing reading.
///
/// # Errors
/// Returns an error if:
/// - A line has the wrong field count or a field fails to parse
/// - A value does not fit in `[0, 255]`
/// - Timestamps do not strictly decrease line-to-line
///
/// # Example
/// ```
/// use busyfeed::decode_lines;
///
/// let series = decode_lines("1000 42\n900 255\n800 17\n").unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[1].value, None);
/// assert_eq!(series[2].ts_ms, 800_000);
/// ```
#[must_use = "decoding returns samples that should be used"]
pub fn decode_lines(text: &str) -> Result<Vec<Sample>, DecodeError> {
    let mut samples = Vec::new();
    let mut prev_ts: Option<i64> = None;

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        if raw_line.trim().is_empty() {
            continue;
        }

        let mut fields = raw_line.split_whitespace();
        let (Some(ts), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(DecodeError::MalformedLine { line });
        };
        let ts: i64 = ts.parse().map_err(|_| DecodeError::MalformedLine { line })?;
        let value: i64 = value.parse().map_err(|_| DecodeError::MalformedLine { line })?;

        if !(0..=i64::from(SENTINEL)).contains(&value) {
            return Err(DecodeError::ValueOutOfRange { line, value });
        }
        if let Some(prev) = prev_ts {
            if ts >= prev {
                return Err(DecodeError::OutOfOrder { line, ts, prev_ts: prev });
            }
        }
        prev_ts = Some(ts);

        let ts_ms = ts
            .checked_mul(MS_PER_SEC)
            .ok_or(DecodeError::TimestampOverflow { at: line })?;
        samples.push(Sample {
            ts_ms,
            value: occupancy_from_byte(value as u8),
        });
    }

    Ok(samples)
}

/// A history feed as it arrived off the wire
///
/// The retrieval layer hands the body over untouched; [`HistoryPayload::decode`]
/// routes it to the matching codec so both shapes yield the same series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryPayload {
    /// Packed binary body plus the two scalar headers, when present
    Packed {
        body: Vec<u8>,
        latest_timestamp: Option<u64>,
        interval_seconds: Option<u32>,
    },
    /// Text body with one `<timestamp> <value>` pair per line
    Lines(String),
}

impl HistoryPayload {
    /// Decode the payload into ordered samples
    ///
    /// # Errors
    /// Returns an error if a packed payload is missing either metadata header,
    /// or if the underlying codec rejects the body.
    pub fn decode(&self) -> Result<Vec<Sample>, DecodeError> {
        match self {
            Self::Packed {
                body,
                latest_timestamp,
                interval_seconds,
            } => {
                let meta = HistoryMetadata {
                    end_timestamp: latest_timestamp.ok_or(DecodeError::MissingMetadata {
                        field: "latest-timestamp",
                    })?,
                    interval_seconds: interval_seconds.ok_or(DecodeError::MissingMetadata {
                        field: "sample-interval",
                    })?,
                };
                decode(body, &meta)
            }
            Self::Lines(text) => decode_lines(text),
        }
    }
}

/// Project a buffer index onto its sample timestamp, with overflow checking
#[inline]
fn sample_ts_ms(end: i64, index: usize, interval: i64) -> Result<i64, DecodeError> {
    let offset = i64::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(interval))
        .ok_or(DecodeError::TimestampOverflow { at: index })?;
    end.checked_sub(offset)
        .and_then(|ts| ts.checked_mul(MS_PER_SEC))
        .ok_or(DecodeError::TimestampOverflow { at: index })
}
