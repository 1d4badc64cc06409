//! Presentation thresholds, the only configuration surface.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_OCCUPANCY;
use crate::error::ConfigError;

/// Cut points observed across deployments: five populated bands
pub const DEFAULT_CUT_POINTS: [u8; 4] = [20, 40, 60, 80];

/// Busy threshold of the stricter observed deployment
pub const DEFAULT_BUSY_THRESHOLD: u8 = 75;

/// Classification thresholds for a page
///
/// Deployments are known to disagree on both fields (busy at 50 vs. 75), so
/// neither is compiled in anywhere; every consumer receives them through this
/// struct. Deserializes from partial documents, filling absent fields from the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Occupancy at or above which the status reads busy
    pub busy_threshold: u8,
    /// Strictly increasing bucket boundaries for tier classification
    pub cut_points: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            busy_threshold: DEFAULT_BUSY_THRESHOLD,
            cut_points: DEFAULT_CUT_POINTS.to_vec(),
        }
    }
}

impl Config {
    /// Check the thresholds against the value contract
    ///
    /// # Errors
    /// Returns an error if:
    /// - The busy threshold is not a measurable occupancy value
    /// - The cut point list is empty
    /// - Any cut point is out of range or not greater than its predecessor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.busy_threshold > MAX_OCCUPANCY {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold: self.busy_threshold,
            });
        }
        if self.cut_points.is_empty() {
            return Err(ConfigError::NoCutPoints);
        }
        for (index, &value) in self.cut_points.iter().enumerate() {
            if value > MAX_OCCUPANCY {
                return Err(ConfigError::CutPointOutOfRange { index, value });
            }
            if index > 0 && value <= self.cut_points[index - 1] {
                return Err(ConfigError::CutPointsNotIncreasing { index });
            }
        }
        Ok(())
    }
}
