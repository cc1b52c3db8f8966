//! Solar-term calculator: date → owning term, and node-term boundary scans.
//!
//! The Sun's longitude is sampled once per civil date at local noon, so a
//! boundary is the first date whose noon longitude has crossed into the
//! next node arc. Elapsed days are measured to the crossing instant,
//! interpolated linearly between the two noons that bracket it.

use chrono::{Days, NaiveDate};
use saju_base::{SolarTerm, node_term_from_longitude, normalize_360, term_from_longitude};

use crate::bridge::SolarLongitude;
use crate::error::SearchError;
use crate::solar_term_types::{SolarTermConfig, SolarTermEvent};

/// Resolves civil dates to solar terms through a longitude provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTermCalculator<S> {
    provider: S,
    config: SolarTermConfig,
}

impl<S: SolarLongitude> SolarTermCalculator<S> {
    pub fn new(provider: S) -> Self {
        Self::with_config(provider, SolarTermConfig::default())
    }

    pub fn with_config(provider: S, config: SolarTermConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    pub fn config(&self) -> &SolarTermConfig {
        &self.config
    }

    /// Apparent solar longitude at local noon of `date`.
    pub fn longitude(&self, date: NaiveDate) -> f64 {
        self.provider.solar_longitude_deg(date)
    }

    /// Node term (절기) owning `date`. Total.
    pub fn term_for_date(&self, date: NaiveDate) -> SolarTerm {
        node_term_from_longitude(self.longitude(date))
    }

    /// Term (any of the 24) owning `date`.
    pub fn exact_term_for_date(&self, date: NaiveDate) -> SolarTerm {
        term_from_longitude(self.longitude(date))
    }

    /// First date after `date` whose node term differs from `date`'s.
    pub fn next_node_term(&self, date: NaiveDate) -> Result<SolarTermEvent, SearchError> {
        let current = self.term_for_date(date);
        let mut before = self.longitude(date);
        for step in 1..=u64::from(self.config.max_scan_days) {
            let Some(d) = date.checked_add_days(Days::new(step)) else {
                break;
            };
            let after = self.longitude(d);
            let term = node_term_from_longitude(after);
            if term != current {
                let frac = crossing_fraction(before, after, term.longitude_deg());
                let days = ((step - 1) as f64 + frac).floor() as i64;
                tracing::debug!(%date, boundary = %d, days, term = term.name(), "next node term");
                return Ok(SolarTermEvent { term, date: d, days });
            }
            before = after;
        }
        Err(SearchError::NoConvergence("next node term not found within scan bound"))
    }

    /// First date of the node term owning `date`.
    pub fn prev_node_term(&self, date: NaiveDate) -> Result<SolarTermEvent, SearchError> {
        let current = self.term_for_date(date);
        let mut start = date;
        let mut after = self.longitude(date);
        for step in 1..=u64::from(self.config.max_scan_days) {
            let Some(d) = date.checked_sub_days(Days::new(step)) else {
                break;
            };
            let before = self.longitude(d);
            if node_term_from_longitude(before) != current {
                let frac = crossing_fraction(before, after, current.longitude_deg());
                let days = (step as f64 - frac).floor() as i64;
                tracing::debug!(
                    %date,
                    start = %start,
                    days,
                    term = current.name(),
                    "node term start"
                );
                return Ok(SolarTermEvent {
                    term: current,
                    date: start,
                    days,
                });
            }
            start = d;
            after = before;
        }
        Err(SearchError::NoConvergence("node term start not found within scan bound"))
    }
}

/// Fraction of the day between two noon samples at which `boundary` is
/// crossed, in (0, 1]. Arcs wrap through 0°.
fn crossing_fraction(before: f64, after: f64, boundary: f64) -> f64 {
    let arc = normalize_360(after - before);
    if arc <= 0.0 {
        return 1.0;
    }
    let into = normalize_360(boundary - before);
    (into / arc).clamp(f64::MIN_POSITIVE, 1.0)
}
