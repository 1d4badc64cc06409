//! Concurrent fan-out of the page's four feeds.
//!
//! One call per page load retrieves the current status, the two line-view
//! histories, and the yearly history concurrently, decodes each, and hands
//! each result to the rendering collaborator. Feeds share nothing: a
//! transport or decode failure in one is logged and rendered as a placeholder
//! without touching its siblings, and feeds may finish in any order. Dropping
//! the returned future abandons whatever is still in flight; nothing here
//! writes partial state.

use std::fmt;

use tracing::warn;

use crate::config::Config;
use crate::decoder::HistoryPayload;
use crate::error::ConfigError;
use crate::grid::{to_grid, GridCell};
use crate::sample::{occupancy_from_byte, Sample};
use crate::status::{is_busy, BusyVerdict};
use crate::tier::{classify, Tier};

/// The four independent feeds a page retrieves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Single current-status byte
    Status,
    /// Today's history for the line view
    Today,
    /// Historical-average history for the line view
    Average,
    /// Day-per-byte history for the calendar grid
    Yearly,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Today => write!(f, "today"),
            Self::Average => write!(f, "average"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// Retrieval collaborator
///
/// Implementations own the actual wire protocol; the core only needs the
/// status byte and the raw history payloads. Failures stay opaque and are
/// contained per feed by [`render_page`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Opaque upstream failure
    type Error: fmt::Display;

    /// Retrieve the single current-status byte (255 = no current reading)
    async fn fetch_status(&self) -> Result<u8, Self::Error>;

    /// Retrieve a history feed body, untouched
    async fn fetch_history(&self, feed: Feed) -> Result<HistoryPayload, Self::Error>;
}

/// Rendering collaborator
///
/// Receives each feed's decoded result as it completes. Mapping tiers to
/// colors, drawing charts, and all other presentation policy live behind this
/// trait.
pub trait Renderer {
    /// Render the current-status verdict with the sample it was derived from
    fn status(&self, verdict: BusyVerdict, value: Option<u8>, tier: Tier);

    /// Render a line-view history feed, most recent sample first
    fn series(&self, feed: Feed, series: &[Sample]);

    /// Render the yearly calendar grid
    fn yearly(&self, cells: &[GridCell]);

    /// Render an empty placeholder for a feed that failed to arrive or decode
    fn unavailable(&self, feed: Feed);
}

/// Fetch, decode, and route every feed for one page load
///
/// The four feeds are issued concurrently and joined independently; each
/// suspends only while awaiting its own response. This is the only place in
/// the crate that logs or tolerates failure.
///
/// # Errors
/// Returns an error only when `config` itself is invalid; feed failures never
/// surface here.
pub async fn render_page<T: Transport, R: Renderer>(
    transport: &T,
    renderer: &R,
    config: &Config,
) -> Result<(), ConfigError> {
    config.validate()?;

    tokio::join!(
        status_feed(transport, renderer, config),
        history_feed(transport, renderer, Feed::Today),
        history_feed(transport, renderer, Feed::Average),
        yearly_feed(transport, renderer),
    );

    Ok(())
}

async fn status_feed<T: Transport, R: Renderer>(transport: &T, renderer: &R, config: &Config) {
    let raw = match transport.fetch_status().await {
        Ok(raw) => raw,
        Err(err) => {
            warn!(feed = %Feed::Status, error = %err, "status fetch failed");
            renderer.unavailable(Feed::Status);
            return;
        }
    };

    let value = occupancy_from_byte(raw);
    match classify(value, &config.cut_points) {
        Ok(tier) => renderer.status(is_busy(value, config.busy_threshold), value, tier),
        Err(err) => {
            warn!(feed = %Feed::Status, error = %err, "status classification failed");
            renderer.unavailable(Feed::Status);
        }
    }
}

async fn history_feed<T: Transport, R: Renderer>(transport: &T, renderer: &R, feed: Feed) {
    let payload = match transport.fetch_history(feed).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!(feed = %feed, error = %err, "history fetch failed");
            renderer.unavailable(feed);
            return;
        }
    };

    match payload.decode() {
        Ok(series) => renderer.series(feed, &series),
        Err(err) => {
            warn!(feed = %feed, error = %err, "history decode failed");
            renderer.unavailable(feed);
        }
    }
}

async fn yearly_feed<T: Transport, R: Renderer>(transport: &T, renderer: &R) {
    let feed = Feed::Yearly;
    let payload = match transport.fetch_history(feed).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!(feed = %feed, error = %err, "history fetch failed");
            renderer.unavailable(feed);
            return;
        }
    };

    let series = match payload.decode() {
        Ok(series) => series,
        Err(err) => {
            warn!(feed = %feed, error = %err, "history decode failed");
            renderer.unavailable(feed);
            return;
        }
    };

    // A short year is reportable, not fatal: the rest of the page still renders.
    match to_grid(&series) {
        Ok(cells) => renderer.yearly(&cells),
        Err(err) => {
            warn!(feed = %feed, error = %err, "yearly grid unavailable");
            renderer.unavailable(feed);
        }
    }
}
