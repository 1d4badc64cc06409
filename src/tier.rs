//! Ordinal bucket classification for coloring and status text.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_OCCUPANCY;
use crate::error::RangeError;

/// Ordinal classification bucket for an occupancy value
///
/// Renderers own the tier-to-color mapping; the core only says which bucket a
/// value falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Missing reading, independent of the cut points
    NoData,
    /// Populated bucket, 0 = least busy
    Band(u8),
}

/// Classify a value-or-missing input against ordered cut points
///
/// Returns the index of the first cut point strictly greater than the value,
/// or `cut_points.len()` when the value clears them all. A value equal to a
/// cut point falls in the lower band. Cut points must be strictly increasing;
/// [`crate::Config::validate`] enforces that for configured lists.
///
/// # Errors
/// Returns [`RangeError`] for a measured value above 254. Decoded samples can
/// never trigger this, since the codec maps the sentinel byte to missing.
///
/// # Example
/// ```
/// use busyfeed::{classify, Tier};
///
/// let cuts = [20, 40, 60, 80];
/// assert_eq!(classify(Some(19), &cuts).unwrap(), Tier::Band(0));
/// assert_eq!(classify(Some(20), &cuts).unwrap(), Tier::Band(1));
/// assert_eq!(classify(Some(81), &cuts).unwrap(), Tier::Band(4));
/// assert_eq!(classify(None, &cuts).unwrap(), Tier::NoData);
/// ```
pub fn classify(value: Option<u8>, cut_points: &[u8]) -> Result<Tier, RangeError> {
    let Some(value) = value else {
        return Ok(Tier::NoData);
    };
    if value > MAX_OCCUPANCY {
        return Err(RangeError { value });
    }

    let band = cut_points
        .iter()
        .position(|&cut| value < cut)
        .unwrap_or(cut_points.len());

    Ok(Tier::Band(band as u8))
}
