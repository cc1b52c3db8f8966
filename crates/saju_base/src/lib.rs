//! Pure sexagenary-calendar calculations for Korean Four Pillars (사주).
//!
//! This crate provides:
//! - Heavenly Stems, Earthly Branches and the shared 60-entry GanJi table
//! - The Five Elements relation engine and pillar compatibility scoring
//! - The 24 solar terms and the ecliptic-longitude partition into months
//! - The 12 two-hour time units
//! - Pillar rules (year/day epochs, five tigers, five rats)
//!
//! Nothing here touches an ephemeris; the date → solar term step lives in
//! `saju_search`.

pub mod balance;
pub mod branch;
pub mod compatibility;
pub mod element;
pub mod error;
pub mod ganji;
pub mod gapja;
pub mod rules;
pub mod saju;
pub mod solar_term;
pub mod stem;
pub mod time_unit;
pub mod util;

pub use balance::{BalanceLevel, ElementBalance, entropy_score};
pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use compatibility::{
    CompatibilityLevel, DayCompatibility, compatibility_score, day_compatibility,
};
pub use element::{
    ALL_ELEMENTS, ElementRelation, FiveElement, YinYang, compatibility, destroys, generates,
};
pub use error::SajuError;
pub use ganji::{GanJi, SEXAGENARY_CYCLE, SexagenaryTable};
pub use gapja::{GapjaEntry, all_gapja, gapja_by_code};
pub use rules::{
    DAY_EPOCH_DAYS_FROM_CE, YEAR_EPOCH_INDEX, YEAR_EPOCH_YEAR, day_pillar, days_since_day_epoch,
    five_rats_base, five_tigers_base, hour_pillar, month_pillar, year_pillar,
};
pub use saju::Saju;
pub use solar_term::{
    ALL_SOLAR_TERMS, NODE_TERMS, SolarTerm, node_term_from_longitude, term_from_longitude,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use time_unit::TimeUnit;
pub use util::normalize_360;
