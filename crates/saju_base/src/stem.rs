//! Heavenly Stems (천간): the 10-cycle half of the sexagenary calendar.
//!
//! Stems alternate Yang/Yin and pair up per element:
//! 갑을 Wood, 병정 Fire, 무기 Earth, 경신 Metal, 임계 Water.

use crate::element::{FiveElement, YinYang};
use crate::error::SajuError;

/// The 10 Heavenly Stems starting from 갑 (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (0 = 갑, 9 = 계).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    /// Korean name (one syllable).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at any integer position, wrapping modulo 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    pub const fn polarity(self) -> YinYang {
        YinYang::from_parity(self.index())
    }

    /// Element tag: consecutive pairs share an element.
    pub const fn element(self) -> FiveElement {
        FiveElement::from_index(self.index() / 2)
    }

    /// Advance cyclically by `offset` (negative goes backwards).
    pub const fn next(self, offset: i64) -> Self {
        Self::from_index(self.index() as i64 + offset)
    }

    /// Look up a stem by Korean name.
    pub fn find(name: &str) -> Result<Self, SajuError> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| SajuError::NotFound(format!("heavenly stem {name:?}")))
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn next_wraps() {
        assert_eq!(HeavenlyStem::Gye.next(1), HeavenlyStem::Gap);
        assert_eq!(HeavenlyStem::Gyeong.next(100), HeavenlyStem::Gyeong);
        assert_eq!(HeavenlyStem::Gap.next(-1), HeavenlyStem::Gye);
        assert_eq!(HeavenlyStem::Mu.next(-17), HeavenlyStem::Sin);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(HeavenlyStem::Gap.polarity(), YinYang::Yang);
        assert_eq!(HeavenlyStem::Sin.polarity(), YinYang::Yin);
        assert_eq!(HeavenlyStem::Im.polarity(), YinYang::Yang);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(HeavenlyStem::Gap.element(), FiveElement::Wood);
        assert_eq!(HeavenlyStem::Jeong.element(), FiveElement::Fire);
        assert_eq!(HeavenlyStem::Gi.element(), FiveElement::Earth);
        assert_eq!(HeavenlyStem::Gyeong.element(), FiveElement::Metal);
        assert_eq!(HeavenlyStem::Gye.element(), FiveElement::Water);
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(HeavenlyStem::find("경").unwrap(), HeavenlyStem::Gyeong);
        assert_eq!(
            HeavenlyStem::find("자"),
            Err(SajuError::NotFound("heavenly stem \"자\"".into()))
        );
    }
}
