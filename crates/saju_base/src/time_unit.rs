//! The 12 traditional two-hour time units (십이시).
//!
//! Units follow Korean standard time, offset half an hour from the
//! classical whole-hour boundaries: 자시 spans 23:30–01:30 across midnight,
//! 축시 01:30–03:30, and so on. Each unit is a half-open interval
//! `[start, start + 2h)`.

use chrono::{NaiveTime, Timelike};

use crate::branch::{ALL_BRANCHES, EarthlyBranch};
use crate::error::SajuError;

/// Minutes past midnight at which 자시 begins.
pub const NIGHT_UNIT_START_MIN: u32 = 23 * 60 + 30;

const UNIT_SPAN_MIN: u32 = 120;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// One of the 12 two-hour units, identified by its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeUnit(EarthlyBranch);

impl TimeUnit {
    /// Unit at ordinal 0..=11 (자시 = 0), wrapping modulo 12.
    pub const fn from_ordinal(ordinal: i64) -> Self {
        Self(EarthlyBranch::from_index(ordinal))
    }

    pub const fn from_branch(branch: EarthlyBranch) -> Self {
        Self(branch)
    }

    /// Unit containing a local wall-clock time.
    pub fn from_time(time: NaiveTime) -> Self {
        let minutes = time.hour() * 60 + time.minute();
        let shifted = (minutes + MINUTES_PER_DAY - NIGHT_UNIT_START_MIN) % MINUTES_PER_DAY;
        Self::from_ordinal(i64::from(shifted / UNIT_SPAN_MIN))
    }

    /// Parse a stored unit name such as "진시".
    pub fn find(name: &str) -> Result<Self, SajuError> {
        ALL_BRANCHES
            .iter()
            .copied()
            .map(Self)
            .find(|u| u.name() == name)
            .ok_or_else(|| SajuError::NotFound(format!("time unit {name:?}")))
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.0
    }

    /// Position in the day starting from 자시 (0..=11).
    pub const fn ordinal(self) -> u8 {
        self.0.index()
    }

    /// Korean name, e.g. "자시".
    pub const fn name(self) -> &'static str {
        match self.0 {
            EarthlyBranch::Ja => "자시",
            EarthlyBranch::Chuk => "축시",
            EarthlyBranch::In => "인시",
            EarthlyBranch::Myo => "묘시",
            EarthlyBranch::Jin => "진시",
            EarthlyBranch::Sa => "사시",
            EarthlyBranch::O => "오시",
            EarthlyBranch::Mi => "미시",
            EarthlyBranch::Sin => "신시",
            EarthlyBranch::Yu => "유시",
            EarthlyBranch::Sul => "술시",
            EarthlyBranch::Hae => "해시",
        }
    }

    /// Start of the unit as (hour, minute).
    pub const fn start_hm(self) -> (u32, u32) {
        let m = (NIGHT_UNIT_START_MIN + self.ordinal() as u32 * UNIT_SPAN_MIN) % MINUTES_PER_DAY;
        (m / 60, m % 60)
    }

    /// A representative wall-clock time inside the unit (its midpoint).
    pub fn midpoint(self) -> NaiveTime {
        let m = (NIGHT_UNIT_START_MIN + self.ordinal() as u32 * UNIT_SPAN_MIN + UNIT_SPAN_MIN / 2)
            % MINUTES_PER_DAY;
        NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn all() -> impl Iterator<Item = TimeUnit> {
        ALL_BRANCHES.iter().copied().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn night_unit_wraps_midnight() {
        assert_eq!(TimeUnit::from_time(t(23, 30)).name(), "자시");
        assert_eq!(TimeUnit::from_time(t(0, 0)).name(), "자시");
        assert_eq!(TimeUnit::from_time(t(1, 29)).name(), "자시");
        assert_eq!(TimeUnit::from_time(t(1, 30)).name(), "축시");
        assert_eq!(TimeUnit::from_time(t(23, 29)).name(), "해시");
    }

    #[test]
    fn fixture_times() {
        assert_eq!(TimeUnit::from_time(t(10, 25)).branch(), EarthlyBranch::Sa);
        assert_eq!(TimeUnit::from_time(t(19, 55)).branch(), EarthlyBranch::Sul);
        assert_eq!(TimeUnit::from_time(t(14, 0)).branch(), EarthlyBranch::Mi);
    }

    #[test]
    fn start_and_midpoint_inside_unit() {
        for u in TimeUnit::all() {
            let (h, m) = u.start_hm();
            assert_eq!(TimeUnit::from_time(t(h, m)), u);
            assert_eq!(TimeUnit::from_time(u.midpoint()), u);
        }
    }

    #[test]
    fn find_names() {
        assert_eq!(TimeUnit::find("진시").unwrap().branch(), EarthlyBranch::Jin);
        assert!(matches!(TimeUnit::find("모름"), Err(SajuError::NotFound(_))));
    }
}
