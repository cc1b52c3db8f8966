//! Error types for sexagenary calendar lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from stem/branch/GanJi lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Unknown Korean name (stem, branch, GanJi, term, time unit) or
    /// catalog code outside 1..=60.
    NotFound(String),
    /// Stem and branch never co-occur in the 60-cycle (parity mismatch).
    InvalidCombination {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::InvalidCombination { stem, branch } => write!(
                f,
                "invalid combination: {}{} does not occur in the sexagenary cycle",
                stem.name(),
                branch.name()
            ),
        }
    }
}

impl Error for SajuError {}
