//! `busyfeed` - Decoding and busy classification for gym occupancy feeds
//!
//! Client-side core for "is the gym busy?" pages. Takes the compact binary
//! feeds an occupancy tracker serves and turns them into chronologically
//! ordered samples for a line view, calendar cells for a yearly grid, and a
//! yes/no/no-data verdict for the headline, leaving every presentation
//! decision (colors, charts, layout) to the caller.
//!
//! # Feed shapes
//!
//! | Feed | Body | Out-of-band metadata |
//! |------|------|----------------------|
//! | status | 1 byte: occupancy percent, 255 = no reading | none |
//! | history (packed) | 1 byte per sample, index 0 most recent | `latest-timestamp` (s), `sample-interval` (s) |
//! | history (text) | one `<timestamp> <value>` line per sample | none |
//! | yearly | 365 bytes, one per tracked day | same as packed history |
//!
//! The byte value 255 is a sentinel everywhere: it decodes to a missing
//! reading and never to the number 255. Measured values occupy `[0, 254]`.
//!
//! Timestamps are reconstructed from the headers: sample `i` of a packed body
//! sits at `(latest_timestamp - i * sample_interval) * 1000` milliseconds, so
//! a decoded series is strictly newest-to-oldest and exactly as long as its
//! buffer. The decoder never reorders; reverse for chronological rendering.
//!
//! # Example
//! ```
//! use busyfeed::{classify, decode, is_busy, BusyVerdict, HistoryMetadata, Tier};
//!
//! let meta = HistoryMetadata { end_timestamp: 1000, interval_seconds: 100 };
//! let series = decode(&[82, 75, 255, 40], &meta).unwrap();
//!
//! // Most recent sample drives the headline
//! let now = series[0].value;
//! assert_eq!(is_busy(now, 75), BusyVerdict::Busy);
//! assert_eq!(classify(now, &[20, 40, 60, 80]).unwrap(), Tier::Band(4));
//! ```
//!
//! # Fetching
//!
//! [`render_page`] fans out the four feeds concurrently through a caller-owned
//! [`Transport`] and routes each decoded result to a caller-owned
//! [`Renderer`], isolating failures per feed. Everything below that
//! entrypoint is a pure function.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod config;
mod constants;
mod decoder;
mod error;
mod fetch;
mod grid;
mod sample;
mod status;
mod tier;

#[cfg(test)]
mod tests;

// Re-export public API
pub use config::{Config, DEFAULT_BUSY_THRESHOLD, DEFAULT_CUT_POINTS};
pub use constants::{MAX_OCCUPANCY, SENTINEL, YEAR_DAYS};
pub use decoder::{decode, decode_lines, HistoryMetadata, HistoryPayload};
pub use error::{ConfigError, DecodeError, GridError, RangeError};
pub use fetch::{render_page, Feed, Renderer, Transport};
pub use grid::{to_grid, GridCell};
pub use sample::{occupancy_from_byte, Sample};
pub use status::{is_busy, BusyVerdict};
pub use tier::{classify, Tier};
