//! Types for solar-term search.

use chrono::NaiveDate;
use saju_base::SolarTerm;

/// Default bound on day-by-day term scans. A node month spans 29–32 days.
pub const DEFAULT_MAX_SCAN_DAYS: u32 = 40;

/// Configuration for node-term boundary scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolarTermConfig {
    /// Maximum number of days a scan may step before giving up.
    pub max_scan_days: u32,
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            max_scan_days: DEFAULT_MAX_SCAN_DAYS,
        }
    }
}

/// A node-term boundary found by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTermEvent {
    /// Node term in force from `date`.
    pub term: SolarTerm,
    /// First civil date (local noon) inside the term.
    pub date: NaiveDate,
    /// Whole days between noon of the query date and the instant the Sun
    /// crosses into `term` (never negative).
    pub days: i64,
}
