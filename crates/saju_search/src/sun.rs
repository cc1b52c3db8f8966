//! Low-precision apparent solar longitude.
//!
//! Geometric mean longitude and mean anomaly as polynomials in Julian
//! centuries from J2000.0, plus the equation of center, corrected for
//! aberration and nutation in longitude through the Moon's node term.
//! Meeus, *Astronomical Algorithms* 2nd ed., Chapter 25 (low accuracy).
//! Good to about 0.01°, i.e. well under a quarter day at term boundaries.

use chrono::{Datelike, NaiveDate};
use saju_base::normalize_360;

use crate::bridge::SolarLongitude;

/// JD of 2000-01-01 00:00 UT.
const JD_2000_JAN_1_0H: f64 = 2_451_544.5;

/// `NaiveDate::num_days_from_ce` of 2000-01-01.
const DAYS_FROM_CE_2000_JAN_1: i32 = 730_120;

/// J2000.0 epoch.
const J2000: f64 = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Korean Standard Time offset in minutes.
pub const KST_OFFSET_MINUTES: i32 = 9 * 60;

/// Meeus low-accuracy Sun, evaluated at local noon of the civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LowPrecisionSun {
    /// Offset of local civil time from UT, in minutes east.
    pub utc_offset_minutes: i32,
}

impl Default for LowPrecisionSun {
    fn default() -> Self {
        Self {
            utc_offset_minutes: KST_OFFSET_MINUTES,
        }
    }
}

impl LowPrecisionSun {
    pub const fn with_offset(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Julian Day (UT) of local noon on `date`.
    pub fn local_noon_jd(&self, date: NaiveDate) -> f64 {
        let days = f64::from(date.num_days_from_ce() - DAYS_FROM_CE_2000_JAN_1);
        let ut_minutes = 12.0 * 60.0 - f64::from(self.utc_offset_minutes);
        JD_2000_JAN_1_0H + days + ut_minutes / 1440.0
    }
}

/// Apparent solar longitude in degrees at Julian Day `jd`.
pub fn apparent_solar_longitude(jd: f64) -> f64 {
    let t = (jd - J2000) / DAYS_PER_CENTURY;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();

    normalize_360(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

impl SolarLongitude for LowPrecisionSun {
    fn solar_longitude_deg(&self, date: NaiveDate) -> f64 {
        apparent_solar_longitude(self.local_noon_jd(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn kst_noon_jd() {
        // 2000-01-01 12:00 KST = 03:00 UT.
        let jd = LowPrecisionSun::default().local_noon_jd(d(2000, 1, 1));
        assert!((jd - (JD_2000_JAN_1_0H + 0.125)).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD: apparent longitude 199.90895°.
        let lon = apparent_solar_longitude(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.01, "lon = {lon}");
    }

    #[test]
    fn equinox_and_solstice_neighbourhood() {
        let sun = LowPrecisionSun::default();
        let lon = sun.solar_longitude_deg(d(2000, 3, 20));
        assert!(lon < 1.0 || lon > 359.0, "lon = {lon}");
        let lon = sun.solar_longitude_deg(d(2000, 6, 21));
        assert!((lon - 90.0).abs() < 1.0, "lon = {lon}");
    }

    #[test]
    fn output_in_range() {
        let sun = LowPrecisionSun::default();
        let mut date = d(1990, 1, 1);
        for _ in 0..800 {
            let lon = sun.solar_longitude_deg(date);
            assert!((0.0..360.0).contains(&lon));
            date = date.succ_opt().unwrap();
        }
    }
}
