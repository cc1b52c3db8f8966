//! Four Pillars orchestration: resolves the month's node term through the
//! solar-term calculator and applies the pure pillar rules.

use chrono::{Datelike, NaiveDate, NaiveTime};
use saju_base::{GanJi, Saju, TimeUnit, day_pillar, hour_pillar, month_pillar, year_pillar};

use crate::bridge::SolarLongitude;
use crate::solar_term::SolarTermCalculator;

/// Derives a [`Saju`] from a solar date and local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SajuCalculator<S> {
    terms: SolarTermCalculator<S>,
}

impl<S: SolarLongitude> SajuCalculator<S> {
    pub fn new(provider: S) -> Self {
        Self {
            terms: SolarTermCalculator::new(provider),
        }
    }

    pub fn from_terms(terms: SolarTermCalculator<S>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &SolarTermCalculator<S> {
        &self.terms
    }

    /// Four pillars for a birth date and local wall-clock time.
    pub fn calculate(&self, date: NaiveDate, time: NaiveTime) -> Saju {
        self.calculate_with_unit(date, TimeUnit::from_time(time))
    }

    /// Four pillars when only the two-hour unit of birth is known.
    ///
    /// The year pillar follows the calendar year while the month follows the
    /// node term, so dates from January 1 to 입춘 pair the new year's stem
    /// with the previous cycle's 소한 month.
    pub fn calculate_with_unit(&self, date: NaiveDate, unit: TimeUnit) -> Saju {
        let yearly = year_pillar(date.year());
        let term = self.terms.term_for_date(date);
        let monthly = month_pillar(yearly.stem(), term);
        let daily = day_pillar(date);
        let hourly = hour_pillar(daily.stem(), unit);
        let saju = Saju::new(yearly, monthly, daily, hourly);
        tracing::debug!(%date, unit = unit.name(), term = term.name(), %saju, "saju calculated");
        saju
    }

    /// Year, month and day pillars of a date (세운/월운/일운).
    pub fn date_pillars(&self, date: NaiveDate) -> [GanJi; 3] {
        let yearly = year_pillar(date.year());
        let monthly = month_pillar(yearly.stem(), self.terms.term_for_date(date));
        [yearly, monthly, day_pillar(date)]
    }
}
