//! Convenience layer over `saju_base` and `saju_search`.
//!
//! Resolves raw birth input (solar or lunar date, exact time or time unit)
//! into a chart, and assembles the luck pillars in force on a given date.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let input = BirthInput::solar(date, BirthTime::Exact(time), Gender::Female);
//! let chart = birth_chart(LowPrecisionSun::default(), &my_lunar_calendar, &input)?;
//! println!("{}", chart.saju);
//! let luck = luck_pillars(LowPrecisionSun::default(), DaewoonConfig::default(), &chart, today)?;
//! ```

pub mod birth;
pub mod luck;

pub use birth::{BirthChart, BirthInput, BirthTime, CalendarType, birth_chart};
pub use luck::{LuckPillars, luck_pillars};

// Re-export the types callers need so a single dependency suffices.
pub use saju_base::{
    ALL_ELEMENTS, BalanceLevel, CompatibilityLevel, DayCompatibility, EarthlyBranch,
    ElementBalance, ElementRelation, FiveElement, GanJi, GapjaEntry, HeavenlyStem, Saju,
    SajuError, SolarTerm, TimeUnit, YinYang, all_gapja, compatibility, compatibility_score,
    day_compatibility, gapja_by_code,
};
pub use saju_search::{
    DaewoonCalculator, DaewoonConfig, DaewoonDirection, DaewoonPeriod, Gender, LowPrecisionSun,
    LunarCalendar, LunarDate, SajuCalculator, SearchError, SolarLongitude, SolarTermCalculator,
    SolarTermConfig, SolarTermEvent, StartingAgeRule,
};
