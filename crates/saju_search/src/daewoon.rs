//! Daewoon (대운) calculation: direction, starting age, the decade
//! sequence and the period in force at a given date.
//!
//! Periods advance from the natal month pillar, one sexagenary step per
//! decade, forward or backward depending on gender and year-stem polarity.

use chrono::NaiveDate;
use saju_base::{GanJi, Saju, YinYang};

use crate::bridge::SolarLongitude;
use crate::daewoon_types::{
    DAEWOON_SPAN_YEARS, DAYS_PER_START_YEAR, DaewoonConfig, DaewoonDirection, DaewoonPeriod,
    Gender, StartingAgeRule,
};
use crate::error::SearchError;
use crate::solar_term::SolarTermCalculator;

/// Forward iff a male with a Yang year stem or a female with a Yin one.
pub const fn direction(gender: Gender, year_stem_polarity: YinYang) -> DaewoonDirection {
    match (gender, year_stem_polarity) {
        (Gender::Male, YinYang::Yang) | (Gender::Female, YinYang::Yin) => {
            DaewoonDirection::Forward
        }
        _ => DaewoonDirection::Backward,
    }
}

/// Korean age: whole 365-day years since birth, plus one.
pub fn korean_age(birth: NaiveDate, today: NaiveDate) -> i64 {
    (today - birth).num_days().div_euclid(365) + 1
}

/// Lazy Daewoon sequence; period `i` (0-based) is the month pillar moved
/// `i + 1` steps in the sequence direction.
#[derive(Debug, Clone)]
pub struct DaewoonSequence {
    month_pillar: GanJi,
    direction: DaewoonDirection,
    starting_age: u32,
    next: u32,
}

impl DaewoonSequence {
    pub fn new(month_pillar: GanJi, direction: DaewoonDirection, starting_age: u32) -> Self {
        Self {
            month_pillar,
            direction,
            starting_age,
            next: 0,
        }
    }

    pub fn direction(&self) -> DaewoonDirection {
        self.direction
    }

    pub fn starting_age(&self) -> u32 {
        self.starting_age
    }

    /// Period at 0-based position `i`, or `None` once ages overflow.
    pub fn period(&self, i: u32) -> Option<DaewoonPeriod> {
        let start_age = i
            .checked_mul(DAEWOON_SPAN_YEARS)?
            .checked_add(self.starting_age)?;
        let end_age = start_age.checked_add(DAEWOON_SPAN_YEARS - 1)?;
        let steps = (i64::from(i) + 1) * self.direction.sign();
        Some(DaewoonPeriod {
            order: i + 1,
            ganji: self.month_pillar.next(steps),
            start_age,
            end_age,
        })
    }
}

impl Iterator for DaewoonSequence {
    type Item = DaewoonPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        let period = self.period(self.next)?;
        self.next += 1;
        Some(period)
    }
}

/// Daewoon calculator over a solar-longitude provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaewoonCalculator<S> {
    terms: SolarTermCalculator<S>,
    config: DaewoonConfig,
}

impl<S: SolarLongitude> DaewoonCalculator<S> {
    pub fn new(provider: S) -> Self {
        Self::with_config(provider, DaewoonConfig::default())
    }

    pub fn with_config(provider: S, config: DaewoonConfig) -> Self {
        Self {
            terms: SolarTermCalculator::with_config(provider, config.term_search),
            config,
        }
    }

    pub fn config(&self) -> &DaewoonConfig {
        &self.config
    }

    pub fn terms(&self) -> &SolarTermCalculator<S> {
        &self.terms
    }

    /// See [`direction`].
    pub fn direction(&self, gender: Gender, year_stem_polarity: YinYang) -> DaewoonDirection {
        direction(gender, year_stem_polarity)
    }

    /// Days from birth to the next node term, divided by 3 (truncated).
    pub fn starting_age(&self, birth_date: NaiveDate) -> Result<u32, SearchError> {
        let next = self.terms.next_node_term(birth_date)?;
        Ok(days_to_age(next.days))
    }

    /// Direction-dependent starting age: forward counts to the next node
    /// term, backward counts back to the start of the current one.
    pub fn starting_age_directed(
        &self,
        birth_date: NaiveDate,
        direction: DaewoonDirection,
    ) -> Result<u32, SearchError> {
        match direction {
            DaewoonDirection::Forward => self.starting_age(birth_date),
            DaewoonDirection::Backward => {
                let start = self.terms.prev_node_term(birth_date)?;
                Ok(days_to_age(start.days))
            }
        }
    }

    /// Starting age under the configured [`StartingAgeRule`].
    pub fn starting_age_for(
        &self,
        birth_date: NaiveDate,
        direction: DaewoonDirection,
    ) -> Result<u32, SearchError> {
        match self.config.starting_age_rule {
            StartingAgeRule::NextTerm => self.starting_age(birth_date),
            StartingAgeRule::DirectionDependent => {
                self.starting_age_directed(birth_date, direction)
            }
        }
    }

    /// Lazy decade sequence; take as many periods as needed.
    pub fn sequence(
        &self,
        month_pillar: GanJi,
        direction: DaewoonDirection,
        starting_age: u32,
    ) -> DaewoonSequence {
        DaewoonSequence::new(month_pillar, direction, starting_age)
    }

    /// The first `n` periods.
    pub fn sequence_n(
        &self,
        month_pillar: GanJi,
        direction: DaewoonDirection,
        starting_age: u32,
        n: usize,
    ) -> Vec<DaewoonPeriod> {
        self.sequence(month_pillar, direction, starting_age)
            .take(n)
            .collect()
    }

    /// See [`korean_age`].
    pub fn korean_age(&self, birth: NaiveDate, today: NaiveDate) -> i64 {
        korean_age(birth, today)
    }

    /// Daewoon period in force on `today`, or `None` before the starting age
    /// or before birth.
    pub fn current(
        &self,
        birth_date: NaiveDate,
        gender: Gender,
        saju: &Saju,
        today: NaiveDate,
    ) -> Result<Option<DaewoonPeriod>, SearchError> {
        if today < birth_date {
            return Ok(None);
        }
        let direction = direction(gender, saju.yearly().stem().polarity());
        let starting_age = self.starting_age_for(birth_date, direction)?;
        let age = korean_age(birth_date, today);
        if age < i64::from(starting_age) {
            tracing::debug!(%birth_date, age, starting_age, "before first daewoon");
            return Ok(None);
        }
        let offset = (age - i64::from(starting_age)) / i64::from(DAEWOON_SPAN_YEARS);
        let sequence = DaewoonSequence::new(saju.monthly(), direction, starting_age);
        let period = u32::try_from(offset).ok().and_then(|i| sequence.period(i));
        tracing::debug!(
            %birth_date,
            age,
            starting_age,
            direction = direction.name(),
            period = ?period,
            "current daewoon"
        );
        Ok(period)
    }

    /// Pillar of the Daewoon period in force on `today`.
    pub fn current_period(
        &self,
        birth_date: NaiveDate,
        gender: Gender,
        saju: &Saju,
        today: NaiveDate,
    ) -> Result<Option<GanJi>, SearchError> {
        Ok(self
            .current(birth_date, gender, saju, today)?
            .map(|p| p.ganji))
    }
}

fn days_to_age(days: i64) -> u32 {
    u32::try_from(days.max(0) / DAYS_PER_START_YEAR).unwrap_or(u32::MAX)
}
