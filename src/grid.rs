//! Calendar grid mapping for the yearly view.

use serde::{Deserialize, Serialize};

use crate::constants::{WEEK_DAYS, YEAR_DAYS};
use crate::error::GridError;
use crate::sample::Sample;

/// One cell of the yearly calendar grid
///
/// `week` counts grid columns from 0; the 365th sample lands in a partial
/// 53rd column, so `week` ranges over `0..=52` while `day` ranges over `0..7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub week: u8,
    pub day: u8,
    /// Occupancy for the day, copied verbatim from the source sample
    pub value: Option<u8>,
}

/// Map a year of samples onto calendar grid coordinates
///
/// Sample `i` lands at `(week i / 7, day i % 7)`; which calendar day index 0
/// represents is asserted by the feed producer, not verified here. Only the
/// first 365 entries are mapped; trailing entries are deliberately ignored.
///
/// # Errors
/// Returns [`GridError::InsufficientData`] when fewer than 365 samples are
/// supplied. Callers treat this as a reportable condition and render a
/// placeholder grid rather than failing the page.
///
/// # Example
/// ```
/// use busyfeed::{decode, to_grid, HistoryMetadata};
///
/// let meta = HistoryMetadata { end_timestamp: 40_000_000, interval_seconds: 86_400 };
/// let series = decode(&[50; 365], &meta).unwrap();
/// let cells = to_grid(&series).unwrap();
///
/// assert_eq!((cells[0].week, cells[0].day), (0, 0));
/// assert_eq!((cells[7].week, cells[7].day), (1, 0));
/// assert_eq!((cells[364].week, cells[364].day), (52, 0));
/// ```
#[must_use = "mapping returns cells that should be used"]
pub fn to_grid(series: &[Sample]) -> Result<Vec<GridCell>, GridError> {
    if series.len() < YEAR_DAYS {
        return Err(GridError::InsufficientData {
            expected: YEAR_DAYS,
            actual: series.len(),
        });
    }

    Ok(series[..YEAR_DAYS]
        .iter()
        .enumerate()
        .map(|(i, sample)| GridCell {
            week: (i / WEEK_DAYS) as u8,
            day: (i % WEEK_DAYS) as u8,
            value: sample.value,
        })
        .collect())
}
