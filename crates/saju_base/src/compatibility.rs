//! Pillar compatibility: the code-based element score and the day-pillar
//! analysis with the Six Harmonies (육합) bonus.

use crate::element::{ElementRelation, FiveElement, compatibility};
use crate::error::SajuError;
use crate::ganji::GanJi;

/// Base score of the day-pillar analysis.
pub const DAY_COMPAT_BASE: i32 = 50;

/// Bonus when the two branches form a 육합 pair.
pub const HARMONY_BONUS: i32 = 10;

/// Element-compatibility score of two catalog codes (1..=60): the truncated
/// mean of the stem-element and branch-element relation scores.
pub fn compatibility_score(code_a: u8, code_b: u8) -> Result<u8, SajuError> {
    let a = GanJi::from_code(code_a)
        .ok_or_else(|| SajuError::NotFound(format!("gapja code {code_a}")))?;
    let b = GanJi::from_code(code_b)
        .ok_or_else(|| SajuError::NotFound(format!("gapja code {code_b}")))?;
    Ok(a.compatibility_score(&b))
}

impl GanJi {
    /// Infallible form of [`compatibility_score`].
    pub fn compatibility_score(&self, other: &GanJi) -> u8 {
        let stem = compatibility(self.stem().element(), other.stem().element()).score();
        let branch = compatibility(self.branch().element(), other.branch().element()).score();
        ((u16::from(stem) + u16::from(branch)) / 2) as u8
    }
}

/// Coarse level of a day-pillar compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompatibilityLevel {
    VeryGood,
    Good,
    Normal,
    Caution,
}

impl CompatibilityLevel {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::VeryGood,
            60..=79 => Self::Good,
            40..=59 => Self::Normal,
            _ => Self::Caution,
        }
    }

    /// Korean label (매우 좋음/좋음/보통/주의).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Normal => "보통",
            Self::Caution => "주의",
        }
    }
}

/// Result of comparing a natal day pillar with another day's pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayCompatibility {
    /// Score clamped to 0..=100.
    pub score: u8,
    pub level: CompatibilityLevel,
    /// Stem-element relation seen from the natal side.
    pub relation: ElementRelation,
    pub user_element: FiveElement,
    pub other_element: FiveElement,
    /// Whether the branches form a 육합 pair.
    pub harmony: bool,
}

const fn relation_adjustment(relation: ElementRelation) -> i32 {
    match relation {
        ElementRelation::Generates => 25,
        ElementRelation::IsGeneratedBy => 20,
        ElementRelation::Destroys => -15,
        ElementRelation::IsDestroyedBy => -20,
        ElementRelation::Same => 5,
        ElementRelation::Neutral => 0,
    }
}

/// Day-pillar compatibility of `user_day` against `other_day`.
pub fn day_compatibility(user_day: GanJi, other_day: GanJi) -> DayCompatibility {
    let user_element = user_day.stem().element();
    let other_element = other_day.stem().element();
    let relation = compatibility(user_element, other_element);
    let harmony = user_day.branch().harmony_partner() == other_day.branch();

    let mut score = DAY_COMPAT_BASE + relation_adjustment(relation);
    if harmony {
        score += HARMONY_BONUS;
    }
    let score = score.clamp(0, 100) as u8;

    DayCompatibility {
        score,
        level: CompatibilityLevel::from_score(score),
        relation,
        user_element,
        other_element,
        harmony,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_pillar_scores_seventy() {
        assert_eq!(compatibility_score(1, 1), Ok(70));
    }

    #[test]
    fn gapja_vs_eulchuk() {
        // 갑(목)→을(목) same 70; 자(수)→축(토) is destroyed 20; mean 45.
        assert_eq!(compatibility_score(1, 2), Ok(45));
    }

    #[test]
    fn truncates_mean() {
        // 갑자 vs 병인: 목→화 generates 80, 수→목 generates 80.
        assert_eq!(compatibility_score(1, 3), Ok(80));
        // 갑자 vs 정묘: 목→화 80, 수→목 80.
        assert_eq!(compatibility_score(1, 4), Ok(80));
        // 갑자 vs 갑술: 목 same 70, 수 vs 토 destroyed 20 → 45.
        assert_eq!(compatibility_score(1, 11), Ok(45));
    }

    #[test]
    fn symmetric_scores() {
        for a in 1..=60u8 {
            for b in 1..=60u8 {
                assert_eq!(compatibility_score(a, b), compatibility_score(b, a));
            }
        }
    }

    #[test]
    fn invalid_codes() {
        assert!(matches!(compatibility_score(0, 1), Err(SajuError::NotFound(_))));
        assert!(matches!(compatibility_score(1, 61), Err(SajuError::NotFound(_))));
    }

    #[test]
    fn day_compat_generates_with_harmony() {
        // 갑자 (목, 자) vs 정축 (화, 축): 목→화 +25, 자축 +10.
        let user = GanJi::find("갑자").unwrap();
        let other = GanJi::find("정축").unwrap();
        let c = day_compatibility(user, other);
        assert_eq!(c.relation, ElementRelation::Generates);
        assert!(c.harmony);
        assert_eq!(c.score, 85);
        assert_eq!(c.level, CompatibilityLevel::VeryGood);
    }

    #[test]
    fn day_compat_destroyed() {
        // 갑 (목) vs 경 (금): metal destroys wood → −20.
        let c = day_compatibility(GanJi::find("갑자").unwrap(), GanJi::find("경오").unwrap());
        assert_eq!(c.relation, ElementRelation::IsDestroyedBy);
        assert!(!c.harmony);
        assert_eq!(c.score, 30);
        assert_eq!(c.level, CompatibilityLevel::Caution);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(CompatibilityLevel::from_score(100), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_score(80), CompatibilityLevel::VeryGood);
        assert_eq!(CompatibilityLevel::from_score(79), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(60), CompatibilityLevel::Good);
        assert_eq!(CompatibilityLevel::from_score(40), CompatibilityLevel::Normal);
        assert_eq!(CompatibilityLevel::from_score(39), CompatibilityLevel::Caution);
    }
}
