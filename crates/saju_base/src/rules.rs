//! Pure pillar rules: epochs, the five-tigers and five-rats tables.
//!
//! These functions take an already-resolved solar term or time unit; the
//! ephemeris-driven part lives in `saju_search`.

use chrono::{Datelike, NaiveDate};

use crate::ganji::GanJi;
use crate::solar_term::SolarTerm;
use crate::stem::HeavenlyStem;
use crate::time_unit::TimeUnit;

/// Gregorian year whose year pillar is [`YEAR_EPOCH_INDEX`] (경자).
pub const YEAR_EPOCH_YEAR: i32 = 1900;

/// Cycle index of 경자.
pub const YEAR_EPOCH_INDEX: i64 = 36;

/// `NaiveDate::num_days_from_ce` of 1925-02-09, a 갑자 day.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 702_766;

/// Year pillar for a calendar year (stem and branch both advance by
/// `year − 1900` from 경자).
pub fn year_pillar(year: i32) -> GanJi {
    GanJi::at(YEAR_EPOCH_INDEX + i64::from(year - YEAR_EPOCH_YEAR))
}

/// Five tigers (오호둔): first-month stem from the year stem.
pub const fn five_tigers_base(year_stem: HeavenlyStem) -> HeavenlyStem {
    match year_stem {
        HeavenlyStem::Gap | HeavenlyStem::Gi => HeavenlyStem::Byeong,
        HeavenlyStem::Eul | HeavenlyStem::Gyeong => HeavenlyStem::Mu,
        HeavenlyStem::Byeong | HeavenlyStem::Sin => HeavenlyStem::Gyeong,
        HeavenlyStem::Jeong | HeavenlyStem::Im => HeavenlyStem::Im,
        HeavenlyStem::Mu | HeavenlyStem::Gye => HeavenlyStem::Gap,
    }
}

/// Month pillar from the year stem and the node term owning the date.
pub fn month_pillar(year_stem: HeavenlyStem, term: SolarTerm) -> GanJi {
    let stem = five_tigers_base(year_stem).next(i64::from(term.month()) - 1);
    GanJi::compose(stem, term.branch())
}

/// Days from the day epoch; negative before 1925-02-09.
pub fn days_since_day_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(DAY_EPOCH_DAYS_FROM_CE)
}

/// Day pillar: cycle position is the day count from the epoch.
pub fn day_pillar(date: NaiveDate) -> GanJi {
    GanJi::at(days_since_day_epoch(date))
}

/// Five rats (오서둔): 자시 stem from the day stem.
pub const fn five_rats_base(day_stem: HeavenlyStem) -> HeavenlyStem {
    match day_stem {
        HeavenlyStem::Gap | HeavenlyStem::Gi => HeavenlyStem::Gap,
        HeavenlyStem::Eul | HeavenlyStem::Gyeong => HeavenlyStem::Byeong,
        HeavenlyStem::Byeong | HeavenlyStem::Sin => HeavenlyStem::Mu,
        HeavenlyStem::Jeong | HeavenlyStem::Im => HeavenlyStem::Gyeong,
        HeavenlyStem::Mu | HeavenlyStem::Gye => HeavenlyStem::Im,
    }
}

/// Hour pillar from the day stem and the time unit.
pub fn hour_pillar(day_stem: HeavenlyStem, unit: TimeUnit) -> GanJi {
    let stem = five_rats_base(day_stem).next(i64::from(unit.ordinal()));
    GanJi::compose(stem, unit.branch())
}
