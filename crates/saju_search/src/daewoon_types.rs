//! Types for Daewoon (대운, decade fortune) calculation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_base::{GanJi, SajuError};

use crate::solar_term_types::SolarTermConfig;

/// Years covered by one Daewoon period.
pub const DAEWOON_SPAN_YEARS: u32 = 10;

/// Days of term distance that count as one year of starting age.
pub const DAYS_PER_START_YEAR: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Stored one-letter code ("M" / "F").
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "남" | "남자" => Ok(Self::Male),
            "f" | "female" | "여" | "여자" => Ok(Self::Female),
            _ => Err(SajuError::NotFound(format!("gender {s:?}"))),
        }
    }
}

/// Direction in which Daewoon pillars advance from the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DaewoonDirection {
    Forward,
    Backward,
}

impl DaewoonDirection {
    /// +1 for forward, −1 for backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// Korean term (순행/역행).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Forward => "순행",
            Self::Backward => "역행",
        }
    }
}

/// How the starting age is counted from the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StartingAgeRule {
    /// Days to the next node term, whatever the direction.
    #[default]
    NextTerm,
    /// Forward counts to the next node term; backward counts from the
    /// start of the current node term.
    DirectionDependent,
}

/// Configuration for [`crate::DaewoonCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DaewoonConfig {
    pub starting_age_rule: StartingAgeRule,
    pub term_search: SolarTermConfig,
}

/// One decade of the Daewoon sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaewoonPeriod {
    /// 1-based position in the sequence.
    pub order: u32,
    pub ganji: GanJi,
    /// First Korean age of the period.
    pub start_age: u32,
    /// Last Korean age of the period (inclusive).
    pub end_age: u32,
}

impl DaewoonPeriod {
    pub fn contains_age(&self, age: i64) -> bool {
        age >= i64::from(self.start_age) && age <= i64::from(self.end_age)
    }
}

impl Display for DaewoonPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>2}. {} ({}-{})",
            self.order, self.ganji, self.start_age, self.end_age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parsing() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("여".parse::<Gender>().unwrap(), Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }

    #[test]
    fn default_rule_is_next_term() {
        let cfg = DaewoonConfig::default();
        assert_eq!(cfg.starting_age_rule, StartingAgeRule::NextTerm);
        assert_eq!(cfg.term_search.max_scan_days, 40);
    }

    #[test]
    fn period_contains_bounds() {
        let p = DaewoonPeriod {
            order: 1,
            ganji: GanJi::at(0),
            start_age: 3,
            end_age: 12,
        };
        assert!(p.contains_age(3));
        assert!(p.contains_age(12));
        assert!(!p.contains_age(13));
        assert_eq!(p.to_string(), " 1. 갑자 (3-12)");
    }
}
