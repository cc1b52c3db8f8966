//! The 60-entry Gapja (갑자) catalog keyed by code 1..=60.

use crate::branch::EarthlyBranch;
use crate::element::{FiveElement, YinYang};
use crate::ganji::{GanJi, SexagenaryTable};
use crate::stem::HeavenlyStem;

/// Flattened catalog row for one sexagenary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GapjaEntry {
    /// Catalog code (1 = 갑자 .. 60 = 계해).
    pub code: u8,
    pub ganji: GanJi,
    pub korean_name: &'static str,
    pub stem_name: &'static str,
    pub branch_name: &'static str,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub stem_element: FiveElement,
    pub branch_element: FiveElement,
    pub polarity: YinYang,
    pub animal: &'static str,
}

// Two-syllable names in cycle order, so entries can hand out &'static str.
const NAMES: [&str; 60] = [
    "갑자", "을축", "병인", "정묘", "무진", "기사", "경오", "신미", "임신", "계유",
    "갑술", "을해", "병자", "정축", "무인", "기묘", "경진", "신사", "임오", "계미",
    "갑신", "을유", "병술", "정해", "무자", "기축", "경인", "신묘", "임진", "계사",
    "갑오", "을미", "병신", "정유", "무술", "기해", "경자", "신축", "임인", "계묘",
    "갑진", "을사", "병오", "정미", "무신", "기유", "경술", "신해", "임자", "계축",
    "갑인", "을묘", "병진", "정사", "무오", "기미", "경신", "신유", "임술", "계해",
];

impl GapjaEntry {
    fn from_ganji(ganji: GanJi) -> Self {
        let stem = ganji.stem();
        let branch = ganji.branch();
        Self {
            code: ganji.code(),
            ganji,
            korean_name: NAMES[ganji.index() as usize],
            stem_name: stem.name(),
            branch_name: branch.name(),
            stem,
            branch,
            stem_element: stem.element(),
            branch_element: branch.element(),
            polarity: ganji.polarity(),
            animal: branch.animal(),
        }
    }
}

/// Catalog entry for a code in 1..=60.
pub fn gapja_by_code(code: u8) -> Option<GapjaEntry> {
    GanJi::from_code(code).map(GapjaEntry::from_ganji)
}

/// All 60 entries in code order.
pub fn all_gapja() -> impl Iterator<Item = GapjaEntry> {
    SexagenaryTable::shared().iter().map(GapjaEntry::from_ganji)
}
