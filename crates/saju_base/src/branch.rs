//! Earthly Branches (지지): the 12-cycle half of the sexagenary calendar.

use crate::element::{FiveElement, YinYang};
use crate::error::SajuError;

/// The 12 Earthly Branches starting from 자 (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (0 = 자, 11 = 해).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

impl EarthlyBranch {
    /// Korean name (one syllable).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Zodiac animal (Korean).
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }

    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at any integer position, wrapping modulo 12.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    pub const fn polarity(self) -> YinYang {
        YinYang::from_parity(self.index())
    }

    pub const fn element(self) -> FiveElement {
        match self {
            Self::In | Self::Myo => FiveElement::Wood,
            Self::Sa | Self::O => FiveElement::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => FiveElement::Earth,
            Self::Sin | Self::Yu => FiveElement::Metal,
            Self::Hae | Self::Ja => FiveElement::Water,
        }
    }

    /// Advance cyclically by `offset` (negative goes backwards).
    pub const fn next(self, offset: i64) -> Self {
        Self::from_index(self.index() as i64 + offset)
    }

    /// Six Harmonies (육합) partner: 자축, 인해, 묘술, 진유, 사신, 오미.
    pub const fn harmony_partner(self) -> Self {
        match self {
            Self::Ja => Self::Chuk,
            Self::Chuk => Self::Ja,
            Self::In => Self::Hae,
            Self::Hae => Self::In,
            Self::Myo => Self::Sul,
            Self::Sul => Self::Myo,
            Self::Jin => Self::Yu,
            Self::Yu => Self::Jin,
            Self::Sa => Self::Sin,
            Self::Sin => Self::Sa,
            Self::O => Self::Mi,
            Self::Mi => Self::O,
        }
    }

    /// Look up a branch by Korean name.
    pub fn find(name: &str) -> Result<Self, SajuError> {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == name)
            .ok_or_else(|| SajuError::NotFound(format!("earthly branch {name:?}")))
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn next_wraps() {
        assert_eq!(EarthlyBranch::Hae.next(1), EarthlyBranch::Ja);
        assert_eq!(EarthlyBranch::Ja.next(100), EarthlyBranch::Jin);
        assert_eq!(EarthlyBranch::Ja.next(-1), EarthlyBranch::Hae);
    }

    #[test]
    fn harmony_is_involution() {
        for b in ALL_BRANCHES {
            assert_ne!(b.harmony_partner(), b);
            assert_eq!(b.harmony_partner().harmony_partner(), b);
        }
    }

    #[test]
    fn elements() {
        assert_eq!(EarthlyBranch::Ja.element(), FiveElement::Water);
        assert_eq!(EarthlyBranch::Jin.element(), FiveElement::Earth);
        assert_eq!(EarthlyBranch::Yu.element(), FiveElement::Metal);
        assert_eq!(EarthlyBranch::Sa.element(), FiveElement::Fire);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(EarthlyBranch::Ja.polarity(), YinYang::Yang);
        assert_eq!(EarthlyBranch::Hae.polarity(), YinYang::Yin);
    }

    #[test]
    fn find_shares_syllable_with_stem() {
        // 신 is both a stem (辛) and a branch (申); lookups are per type.
        assert_eq!(EarthlyBranch::find("신").unwrap(), EarthlyBranch::Sin);
        assert!(EarthlyBranch::find("갑").is_err());
    }
}
