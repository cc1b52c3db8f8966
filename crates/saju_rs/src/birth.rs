//! Birth-input resolution: solar or lunar date, exact time or time unit.
//!
//! A failed lunar conversion does not abort the chart. The input date is
//! then read as both the solar and the lunar date, a warning is logged,
//! and the chart is marked `degraded`.

use chrono::{NaiveDate, NaiveTime};
use saju_base::{Saju, TimeUnit};
use saju_search::{
    Gender, LunarCalendar, LunarDate, SajuCalculator, SearchError, SolarLongitude,
};

/// Calendar the birth date was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

impl std::str::FromStr for CalendarType {
    type Err = saju_base::SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "양력" => Ok(Self::Solar),
            "lunar" | "음력" => Ok(Self::Lunar),
            _ => Err(saju_base::SajuError::NotFound(format!("calendar type {s:?}"))),
        }
    }
}

/// Birth time: an exact wall-clock time or only the two-hour unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BirthTime {
    Exact(NaiveTime),
    Unit(TimeUnit),
}

impl BirthTime {
    pub fn unit(self) -> TimeUnit {
        match self {
            Self::Exact(t) => TimeUnit::from_time(t),
            Self::Unit(u) => u,
        }
    }
}

/// Raw birth data as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthInput {
    pub date: NaiveDate,
    pub calendar: CalendarType,
    /// Only meaningful for lunar input: the date is in an intercalary month.
    pub leap_month: bool,
    pub time: BirthTime,
    pub gender: Gender,
}

impl BirthInput {
    pub fn solar(date: NaiveDate, time: BirthTime, gender: Gender) -> Self {
        Self {
            date,
            calendar: CalendarType::Solar,
            leap_month: false,
            time,
            gender,
        }
    }

    pub fn lunar(date: NaiveDate, time: BirthTime, gender: Gender) -> Self {
        Self {
            calendar: CalendarType::Lunar,
            ..Self::solar(date, time, gender)
        }
    }
}

/// Resolved birth chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BirthChart {
    pub input: BirthInput,
    pub solar_date: NaiveDate,
    pub lunar_date: LunarDate,
    pub saju: Saju,
    /// Lunar conversion failed and the input date was used for both calendars.
    pub degraded: bool,
}

impl BirthChart {
    pub fn gender(&self) -> Gender {
        self.input.gender
    }
}

/// Resolve both calendar dates of a birth input and compute its pillars.
pub fn birth_chart<S, L>(sun: S, lunar: &L, input: &BirthInput) -> Result<BirthChart, SearchError>
where
    S: SolarLongitude,
    L: LunarCalendar + ?Sized,
{
    let (solar_date, lunar_date, degraded) = resolve_dates(lunar, input)?;
    let saju = SajuCalculator::new(sun).calculate_with_unit(solar_date, input.time.unit());
    tracing::debug!(%solar_date, degraded, %saju, "birth chart resolved");
    Ok(BirthChart {
        input: *input,
        solar_date,
        lunar_date,
        saju,
        degraded,
    })
}

fn resolve_dates<L>(
    lunar: &L,
    input: &BirthInput,
) -> Result<(NaiveDate, LunarDate, bool), SearchError>
where
    L: LunarCalendar + ?Sized,
{
    let converted = match input.calendar {
        CalendarType::Solar => lunar.solar_to_lunar(input.date).map(|l| (input.date, l)),
        CalendarType::Lunar => {
            let mut l = LunarDate::from_naive(input.date);
            l.leap = input.leap_month;
            lunar.lunar_to_solar(l).map(|s| (s, l))
        }
    };
    match converted {
        Ok((solar, lunar)) => Ok((solar, lunar, false)),
        Err(SearchError::CalendarConversion(reason)) => {
            tracing::warn!(
                date = %input.date,
                calendar = ?input.calendar,
                %reason,
                "lunar conversion failed; using input date as both solar and lunar"
            );
            let mut l = LunarDate::from_naive(input.date);
            l.leap = input.leap_month && input.calendar == CalendarType::Lunar;
            Ok((input.date, l, true))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl LunarCalendar for Failing {
        fn solar_to_lunar(&self, _date: NaiveDate) -> Result<LunarDate, SearchError> {
            Err(SearchError::CalendarConversion("out of table range".into()))
        }

        fn lunar_to_solar(&self, _date: LunarDate) -> Result<NaiveDate, SearchError> {
            Err(SearchError::CalendarConversion("out of table range".into()))
        }
    }

    struct Broken;

    impl LunarCalendar for Broken {
        fn solar_to_lunar(&self, _date: NaiveDate) -> Result<LunarDate, SearchError> {
            Err(SearchError::NoConvergence("table corrupt"))
        }

        fn lunar_to_solar(&self, _date: LunarDate) -> Result<NaiveDate, SearchError> {
            Err(SearchError::NoConvergence("table corrupt"))
        }
    }

    fn input() -> BirthInput {
        let date = NaiveDate::from_ymd_opt(2000, 3, 17).unwrap();
        let time = BirthTime::Exact(NaiveTime::from_hms_opt(10, 25, 0).unwrap());
        BirthInput::lunar(date, time, Gender::Male)
    }

    #[test]
    fn conversion_failure_degrades() {
        let chart = birth_chart(|_d: NaiveDate| 356.0, &Failing, &input()).unwrap();
        assert!(chart.degraded);
        assert_eq!(chart.solar_date, input().date);
        assert_eq!(chart.lunar_date, LunarDate::new(2000, 3, 17));
    }

    #[test]
    fn other_errors_propagate() {
        let err = birth_chart(|_d: NaiveDate| 356.0, &Broken, &input()).unwrap_err();
        assert!(matches!(err, SearchError::NoConvergence(_)));
    }

    #[test]
    fn unit_from_exact_time() {
        let t = BirthTime::Exact(NaiveTime::from_hms_opt(0, 10, 0).unwrap());
        assert_eq!(t.unit().name(), "자시");
    }

    #[test]
    fn calendar_type_parse() {
        assert_eq!("음력".parse::<CalendarType>().unwrap(), CalendarType::Lunar);
        assert_eq!("SOLAR".parse::<CalendarType>().unwrap(), CalendarType::Solar);
        assert!("x".parse::<CalendarType>().is_err());
    }
}
