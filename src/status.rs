//! Busy verdict for the current-status sample.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Answer to "is the facility busy right now?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusyVerdict {
    Busy,
    NotBusy,
    /// No current reading; renders as an explicit "no data" state
    Unknown,
}

/// Evaluate a single current sample against the busy threshold
///
/// A missing reading yields [`BusyVerdict::Unknown`], never a false "not
/// busy". The boundary is inclusive: a value equal to the threshold counts as
/// busy. The threshold always comes from the caller's configuration, since
/// deployments disagree on where busy starts.
///
/// # Example
/// ```
/// use busyfeed::{is_busy, BusyVerdict};
///
/// assert_eq!(is_busy(Some(75), 75), BusyVerdict::Busy);
/// assert_eq!(is_busy(Some(74), 75), BusyVerdict::NotBusy);
/// assert_eq!(is_busy(None, 75), BusyVerdict::Unknown);
/// ```
#[must_use]
pub fn is_busy(value: Option<u8>, threshold: u8) -> BusyVerdict {
    match value {
        Some(v) if v >= threshold => BusyVerdict::Busy,
        Some(_) => BusyVerdict::NotBusy,
        None => BusyVerdict::Unknown,
    }
}

impl fmt::Display for BusyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "yes"),
            Self::NotBusy => write!(f, "no"),
            Self::Unknown => write!(f, "no data"),
        }
    }
}
