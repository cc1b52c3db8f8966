//! Yin-Yang polarity and the Five Elements (오행) relation engine.
//!
//! The elements form a fixed 5-cycle Wood → Fire → Earth → Metal → Water.
//! Generation (상생) is the next element in the cycle; destruction (상극)
//! skips one: Wood → Earth → Water → Fire → Metal → Wood.
//! Both relations are derived from the cycle position, never stored.

use crate::error::SajuError;

/// Yin-Yang (음양) polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Korean name ("양" / "음").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    /// Polarity of a 0-based cyclic index: even = Yang, odd = Yin.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

/// The Five Elements in generation-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in cycle order (0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// Korean name (목/화/토/금/수).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja (木/火/土/金/水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Traditional colors associated with the element.
    pub const fn colors(self) -> &'static [&'static str] {
        match self {
            Self::Wood => &["green", "brown"],
            Self::Fire => &["red", "orange"],
            Self::Earth => &["yellow", "beige"],
            Self::Metal => &["white", "gold"],
            Self::Water => &["blue", "black"],
        }
    }

    /// Cardinal direction (동/남/중앙/서/북).
    pub const fn direction(self) -> &'static str {
        match self {
            Self::Wood => "동",
            Self::Fire => "남",
            Self::Earth => "중앙",
            Self::Metal => "서",
            Self::Water => "북",
        }
    }

    /// 0-based cycle position (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a cycle position, wrapping modulo 5.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// The element this one generates (next in the cycle).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one destroys (two ahead in the cycle).
    pub const fn destroys(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Look up an element by Korean name.
    pub fn find(name: &str) -> Result<Self, SajuError> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .find(|e| e.name() == name)
            .ok_or_else(|| SajuError::NotFound(format!("element {name:?}")))
    }
}

/// Does `a` generate `b`?
pub const fn generates(a: FiveElement, b: FiveElement) -> bool {
    a.generates().index() == b.index()
}

/// Does `a` destroy `b`?
pub const fn destroys(a: FiveElement, b: FiveElement) -> bool {
    a.destroys().index() == b.index()
}

/// Relation of one element to another, seen from the first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementRelation {
    Generates,
    IsGeneratedBy,
    Destroys,
    IsDestroyedBy,
    Same,
    /// Never produced for two valid elements; kept for the scoring table.
    Neutral,
}

impl ElementRelation {
    /// Compatibility score contribution of this relation.
    pub const fn score(self) -> u8 {
        match self {
            Self::Generates | Self::IsGeneratedBy => 80,
            Self::Same => 70,
            Self::Neutral => 50,
            Self::Destroys | Self::IsDestroyedBy => 20,
        }
    }

    /// The same relation seen from the other element.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Generates => Self::IsGeneratedBy,
            Self::IsGeneratedBy => Self::Generates,
            Self::Destroys => Self::IsDestroyedBy,
            Self::IsDestroyedBy => Self::Destroys,
            Self::Same => Self::Same,
            Self::Neutral => Self::Neutral,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Generates => "generates",
            Self::IsGeneratedBy => "is_generated_by",
            Self::Destroys => "destroys",
            Self::IsDestroyedBy => "is_destroyed_by",
            Self::Same => "same",
            Self::Neutral => "neutral",
        }
    }

    /// Korean term (상생/수생/상극/피극/동행/중립).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Generates => "상생",
            Self::IsGeneratedBy => "수생",
            Self::Destroys => "상극",
            Self::IsDestroyedBy => "피극",
            Self::Same => "동행",
            Self::Neutral => "중립",
        }
    }
}

/// Relation of `a` to `b`: forward checks first, then the inverse checks.
pub const fn compatibility(a: FiveElement, b: FiveElement) -> ElementRelation {
    if generates(a, b) {
        ElementRelation::Generates
    } else if generates(b, a) {
        ElementRelation::IsGeneratedBy
    } else if destroys(a, b) {
        ElementRelation::Destroys
    } else if destroys(b, a) {
        ElementRelation::IsDestroyedBy
    } else if a.index() == b.index() {
        ElementRelation::Same
    } else {
        ElementRelation::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle() {
        assert_eq!(FiveElement::Wood.generates(), FiveElement::Fire);
        assert_eq!(FiveElement::Fire.generates(), FiveElement::Earth);
        assert_eq!(FiveElement::Earth.generates(), FiveElement::Metal);
        assert_eq!(FiveElement::Metal.generates(), FiveElement::Water);
        assert_eq!(FiveElement::Water.generates(), FiveElement::Wood);
    }

    #[test]
    fn destruction_cycle() {
        assert_eq!(FiveElement::Wood.destroys(), FiveElement::Earth);
        assert_eq!(FiveElement::Earth.destroys(), FiveElement::Water);
        assert_eq!(FiveElement::Water.destroys(), FiveElement::Fire);
        assert_eq!(FiveElement::Fire.destroys(), FiveElement::Metal);
        assert_eq!(FiveElement::Metal.destroys(), FiveElement::Wood);
    }

    #[test]
    fn relation_inverse_consistent() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_eq!(compatibility(b, a), compatibility(a, b).inverse(), "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn distinct_elements_never_neutral() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let rel = compatibility(a, b);
                if a == b {
                    assert_eq!(rel, ElementRelation::Same);
                } else {
                    assert_ne!(rel, ElementRelation::Neutral);
                }
            }
        }
    }

    #[test]
    fn water_is_generated_by_metal() {
        assert_eq!(
            compatibility(FiveElement::Water, FiveElement::Metal),
            ElementRelation::IsGeneratedBy
        );
        assert_eq!(
            compatibility(FiveElement::Water, FiveElement::Earth),
            ElementRelation::IsDestroyedBy
        );
    }

    #[test]
    fn score_table() {
        assert_eq!(ElementRelation::Generates.score(), 80);
        assert_eq!(ElementRelation::IsGeneratedBy.score(), 80);
        assert_eq!(ElementRelation::Same.score(), 70);
        assert_eq!(ElementRelation::Neutral.score(), 50);
        assert_eq!(ElementRelation::Destroys.score(), 20);
        assert_eq!(ElementRelation::IsDestroyedBy.score(), 20);
    }

    #[test]
    fn find_by_korean_name() {
        assert_eq!(FiveElement::find("금").unwrap(), FiveElement::Metal);
        assert!(FiveElement::find("X").is_err());
    }

    #[test]
    fn polarity_from_parity() {
        assert_eq!(YinYang::from_parity(0), YinYang::Yang);
        assert_eq!(YinYang::from_parity(7), YinYang::Yin);
    }
}
