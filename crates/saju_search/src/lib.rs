//! Provider-driven Saju calculations.
//!
//! This crate provides:
//! - Narrow traits for the external solar ephemeris and lunar calendar
//! - A low-precision Sun so everything runs without an ephemeris
//! - Solar-term lookup and node-term boundary scans
//! - The Four Pillars calculator
//! - Daewoon direction, starting age, sequence and current period

pub mod bridge;
pub mod daewoon;
pub mod daewoon_types;
pub mod error;
pub mod pillars;
pub mod solar_term;
pub mod solar_term_types;
pub mod sun;

pub use bridge::{LunarCalendar, LunarDate, SolarLongitude};
pub use daewoon::{DaewoonCalculator, DaewoonSequence, direction, korean_age};
pub use daewoon_types::{
    DAEWOON_SPAN_YEARS, DaewoonConfig, DaewoonDirection, DaewoonPeriod, Gender, StartingAgeRule,
};
pub use error::SearchError;
pub use pillars::SajuCalculator;
pub use solar_term::SolarTermCalculator;
pub use solar_term_types::{DEFAULT_MAX_SCAN_DAYS, SolarTermConfig, SolarTermEvent};
pub use sun::{KST_OFFSET_MINUTES, LowPrecisionSun, apparent_solar_longitude};
