//! The 24 solar terms (24절기) and the ecliptic-longitude partition.
//!
//! Terms start at 입춘 (315°) and step by 15° of apparent solar longitude.
//! Every other term, starting at 입춘, is a node term (절기) that opens a
//! Saju month; the 12 node terms partition the circle into 30° arcs.

use crate::branch::EarthlyBranch;
use crate::error::SajuError;
use crate::util::normalize_360;

/// The 24 solar terms starting from 입춘 (立春).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in order (0 = 입춘 at 315°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

/// The 12 node terms (절기), month 1 (입춘) through month 12 (소한).
pub const NODE_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Longitude of 입춘, the first term.
pub const FIRST_TERM_LONGITUDE: f64 = 315.0;

/// Angular width of one term.
pub const TERM_SPAN_DEG: f64 = 15.0;

impl SolarTerm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Usu => "우수",
            Self::Gyeongchip => "경칩",
            Self::Chunbun => "춘분",
            Self::Cheongmyeong => "청명",
            Self::Gogu => "곡우",
            Self::Ipha => "입하",
            Self::Soman => "소만",
            Self::Mangjong => "망종",
            Self::Haji => "하지",
            Self::Soseo => "소서",
            Self::Daeseo => "대서",
            Self::Ipchu => "입추",
            Self::Cheoseo => "처서",
            Self::Baengno => "백로",
            Self::Chubun => "추분",
            Self::Hallo => "한로",
            Self::Sanggang => "상강",
            Self::Ipdong => "입동",
            Self::Soseol => "소설",
            Self::Daeseol => "대설",
            Self::Dongji => "동지",
            Self::Sohan => "소한",
            Self::Daehan => "대한",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ipchun => "立春",
            Self::Usu => "雨水",
            Self::Gyeongchip => "驚蟄",
            Self::Chunbun => "春分",
            Self::Cheongmyeong => "淸明",
            Self::Gogu => "穀雨",
            Self::Ipha => "立夏",
            Self::Soman => "小滿",
            Self::Mangjong => "芒種",
            Self::Haji => "夏至",
            Self::Soseo => "小暑",
            Self::Daeseo => "大暑",
            Self::Ipchu => "立秋",
            Self::Cheoseo => "處暑",
            Self::Baengno => "白露",
            Self::Chubun => "秋分",
            Self::Hallo => "寒露",
            Self::Sanggang => "霜降",
            Self::Ipdong => "立冬",
            Self::Soseol => "小雪",
            Self::Daeseol => "大雪",
            Self::Dongji => "冬至",
            Self::Sohan => "小寒",
            Self::Daehan => "大寒",
        }
    }

    /// 0-based index (입춘=0 .. 대한=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Starting ecliptic longitude in degrees, [0, 360).
    pub fn longitude_deg(self) -> f64 {
        normalize_360(FIRST_TERM_LONGITUDE + TERM_SPAN_DEG * f64::from(self.index()))
    }

    /// Saju month (1 = 입춘/우수 .. 12 = 소한/대한).
    pub const fn month(self) -> u8 {
        self.index() / 2 + 1
    }

    /// Branch of the Saju month this term belongs to (month 1 = 인).
    pub const fn branch(self) -> EarthlyBranch {
        EarthlyBranch::from_index(self.month() as i64 + 1)
    }

    /// Node terms (절기) open a month; the others are mid terms (중기).
    pub const fn is_node(self) -> bool {
        self.index() % 2 == 0
    }

    /// Node term opening this term's month.
    pub const fn node(self) -> Self {
        Self::from_index(self.index() & !1)
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next node term in the cycle.
    pub const fn next_node(self) -> Self {
        Self::from_index(self.node().index() + 2)
    }

    /// Whether `lon` falls in `[start, start + span)` for this term's span
    /// (one term, or a whole month for node terms), wrapping through 0°.
    pub fn contains_longitude(self, lon: f64) -> bool {
        let (start, end) = if self.is_node() {
            (self.longitude_deg(), self.next_node().longitude_deg())
        } else {
            (self.longitude_deg(), self.next().longitude_deg())
        };
        let lon = normalize_360(lon);
        if start <= end {
            lon >= start && lon < end
        } else {
            lon >= start || lon < end
        }
    }

    /// Look up a term by Korean name.
    pub fn find(name: &str) -> Result<Self, SajuError> {
        ALL_SOLAR_TERMS
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| SajuError::NotFound(format!("solar term {name:?}")))
    }

    pub const fn all() -> &'static [SolarTerm; 24] {
        &ALL_SOLAR_TERMS
    }
}

/// Node term owning an apparent solar longitude.
///
/// Scans the 12 half-open arcs `[start, next)`; the one arc whose start
/// exceeds its end wraps through 0°. Non-finite input falls back to the
/// arithmetic partition, which maps NaN to 입춘.
pub fn node_term_from_longitude(lon: f64) -> SolarTerm {
    NODE_TERMS
        .iter()
        .copied()
        .find(|t| t.contains_longitude(lon))
        .unwrap_or_else(|| term_from_longitude(lon).node())
}

/// Term (any of the 24) owning an apparent solar longitude.
pub fn term_from_longitude(lon: f64) -> SolarTerm {
    let offset = normalize_360(lon - FIRST_TERM_LONGITUDE);
    let idx = (offset / TERM_SPAN_DEG).floor();
    if idx.is_finite() {
        SolarTerm::from_index((idx as i64).clamp(0, 23) as u8)
    } else {
        SolarTerm::Ipchun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes_step_by_fifteen() {
        assert_eq!(SolarTerm::Ipchun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Chunbun.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::Haji.longitude_deg(), 90.0);
        assert_eq!(SolarTerm::Daehan.longitude_deg(), 300.0);
    }

    #[test]
    fn months_and_branches() {
        assert_eq!(SolarTerm::Ipchun.month(), 1);
        assert_eq!(SolarTerm::Ipchun.branch(), EarthlyBranch::In);
        assert_eq!(SolarTerm::Gyeongchip.branch(), EarthlyBranch::Myo);
        assert_eq!(SolarTerm::Daeseol.branch(), EarthlyBranch::Ja);
        assert_eq!(SolarTerm::Sohan.month(), 12);
        assert_eq!(SolarTerm::Sohan.branch(), EarthlyBranch::Chuk);
    }

    #[test]
    fn node_terms_are_even() {
        for (i, t) in NODE_TERMS.iter().enumerate() {
            assert!(t.is_node());
            assert_eq!(t.month() as usize, i + 1);
        }
    }

    #[test]
    fn wrap_arc() {
        // 경칩 (345°) to 청명 (15°) crosses 0°.
        assert_eq!(node_term_from_longitude(350.0), SolarTerm::Gyeongchip);
        assert_eq!(node_term_from_longitude(0.0), SolarTerm::Gyeongchip);
        assert_eq!(node_term_from_longitude(14.999), SolarTerm::Gyeongchip);
        assert_eq!(node_term_from_longitude(15.0), SolarTerm::Cheongmyeong);
    }

    #[test]
    fn arc_boundaries_half_open() {
        assert_eq!(node_term_from_longitude(315.0), SolarTerm::Ipchun);
        assert_eq!(node_term_from_longitude(344.999), SolarTerm::Ipchun);
        assert_eq!(node_term_from_longitude(285.0), SolarTerm::Sohan);
        assert_eq!(node_term_from_longitude(314.9), SolarTerm::Sohan);
    }

    #[test]
    fn out_of_range_input_normalized() {
        assert_eq!(node_term_from_longitude(-10.0), SolarTerm::Gyeongchip);
        assert_eq!(node_term_from_longitude(720.0 + 100.0), SolarTerm::Mangjong);
    }

    #[test]
    fn nan_is_total() {
        assert_eq!(node_term_from_longitude(f64::NAN), SolarTerm::Ipchun);
        assert_eq!(term_from_longitude(f64::NAN), SolarTerm::Ipchun);
    }

    #[test]
    fn all_terms_partition() {
        assert_eq!(term_from_longitude(0.0), SolarTerm::Chunbun);
        assert_eq!(term_from_longitude(330.0), SolarTerm::Usu);
        assert_eq!(term_from_longitude(314.99), SolarTerm::Daehan);
    }

    #[test]
    fn find_by_name() {
        assert_eq!(SolarTerm::find("망종").unwrap(), SolarTerm::Mangjong);
        assert!(SolarTerm::find("xx").is_err());
    }
}
