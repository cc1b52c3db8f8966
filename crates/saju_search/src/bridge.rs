//! Narrow interfaces to external calendar collaborators.
//!
//! The solar ephemeris and the Gregorian ↔ lunar conversion are pure
//! functions owned elsewhere; calculators in this crate only see these
//! traits.

use chrono::NaiveDate;

use crate::error::SearchError;

/// Apparent ecliptic longitude of the Sun at local noon of a civil date.
pub trait SolarLongitude {
    /// Longitude in degrees, [0, 360).
    fn solar_longitude_deg(&self, date: NaiveDate) -> f64;
}

impl<F> SolarLongitude for F
where
    F: Fn(NaiveDate) -> f64,
{
    fn solar_longitude_deg(&self, date: NaiveDate) -> f64 {
        self(date)
    }
}

/// A date in the Korean lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    /// Lunar month 1..=12.
    pub month: u8,
    pub day: u8,
    /// Intercalary (윤달) month.
    pub leap: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            leap: false,
        }
    }

    /// The same date in an intercalary month.
    pub const fn leap(self) -> Self {
        Self { leap: true, ..self }
    }

    /// Build from a civil date whose fields are read as lunar fields.
    pub fn from_naive(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

/// Gregorian ↔ Korean lunar conversion.
pub trait LunarCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, SearchError>;
    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, SearchError>;
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for &T {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, SearchError> {
        (**self).solar_to_lunar(date)
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<NaiveDate, SearchError> {
        (**self).lunar_to_solar(date)
    }
}
