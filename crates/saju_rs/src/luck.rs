//! Luck-pillar snapshot for a query date: 대운, 세운, 월운, 일운 and the
//! four natal pillars, with their five-element balance and the day-pillar
//! compatibility against the query date.

use chrono::NaiveDate;
use saju_base::{DayCompatibility, ElementBalance, GanJi, Saju, day_compatibility};
use saju_search::{
    DaewoonCalculator, DaewoonConfig, DaewoonPeriod, SajuCalculator, SearchError, SolarLongitude,
};

use crate::birth::BirthChart;

/// The eight pillars in force for a chart on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LuckPillars {
    pub date: NaiveDate,
    /// Current Daewoon, `None` before the starting age.
    pub daewoon: Option<DaewoonPeriod>,
    /// 세운: year pillar of `date`.
    pub yearly: GanJi,
    /// 월운: month pillar of `date`.
    pub monthly: GanJi,
    /// 일운: day pillar of `date`.
    pub daily: GanJi,
    pub natal: Saju,
    /// Balance over all pillars above (7 or 8).
    pub balance: ElementBalance,
    /// Natal day pillar against the day pillar of `date`.
    pub compatibility: DayCompatibility,
}

impl LuckPillars {
    /// All pillars in 대운, 세운, 월운, 일운, 년주, 월주, 일주, 시주 order.
    pub fn pillars(&self) -> Vec<GanJi> {
        let mut out = Vec::with_capacity(8);
        out.extend(self.daewoon.map(|p| p.ganji));
        out.extend([self.yearly, self.monthly, self.daily]);
        out.extend(self.natal.pillars());
        out
    }
}

/// Luck pillars of `chart` on `date`.
pub fn luck_pillars<S>(
    sun: S,
    config: DaewoonConfig,
    chart: &BirthChart,
    date: NaiveDate,
) -> Result<LuckPillars, SearchError>
where
    S: SolarLongitude + Clone,
{
    let [yearly, monthly, daily] = SajuCalculator::new(sun.clone()).date_pillars(date);
    let daewoon = DaewoonCalculator::with_config(sun, config).current(
        chart.solar_date,
        chart.gender(),
        &chart.saju,
        date,
    )?;

    let mut luck = LuckPillars {
        date,
        daewoon,
        yearly,
        monthly,
        daily,
        natal: chart.saju,
        balance: ElementBalance::from_counts([0; 5]),
        compatibility: day_compatibility(chart.saju.daily(), daily),
    };
    luck.balance = ElementBalance::from_pillars(luck.pillars());
    tracing::debug!(%date, score = luck.balance.score, "luck pillars");
    Ok(luck)
}
