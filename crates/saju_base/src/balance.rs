//! Five-element balance of a set of pillars, scored by normalized entropy.
//!
//! Each pillar contributes its stem element and its branch element. The
//! score is `100 · H / ln 5` where `H` is the Shannon entropy of the element
//! distribution, so 100 means all five elements are equally present.

use crate::element::{ALL_ELEMENTS, FiveElement};
use crate::ganji::GanJi;

/// Element counts and entropy score over a set of pillars.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementBalance {
    /// Counts in `ALL_ELEMENTS` order (목화토금수).
    pub counts: [u32; 5],
    /// Entropy score in 0..=100, rounded to 2 decimals.
    pub score: f64,
    pub level: BalanceLevel,
}

/// Interpretation band of an entropy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalanceLevel {
    VeryBalanced,
    Balanced,
    ModeratelyBalanced,
    Skewed,
    HighlySkewed,
}

impl BalanceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryBalanced
        } else if score >= 75.0 {
            Self::Balanced
        } else if score >= 60.0 {
            Self::ModeratelyBalanced
        } else if score >= 40.0 {
            Self::Skewed
        } else {
            Self::HighlySkewed
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::VeryBalanced => "매우 균형",
            Self::Balanced => "균형",
            Self::ModeratelyBalanced => "적당한 균형",
            Self::Skewed => "편중",
            Self::HighlySkewed => "매우 편중",
        }
    }
}

impl ElementBalance {
    /// Balance of the stem and branch elements of `pillars`.
    pub fn from_pillars<I>(pillars: I) -> Self
    where
        I: IntoIterator<Item = GanJi>,
    {
        let mut counts = [0u32; 5];
        for g in pillars {
            counts[g.stem().element().index() as usize] += 1;
            counts[g.branch().element().index() as usize] += 1;
        }
        Self::from_counts(counts)
    }

    pub fn from_counts(counts: [u32; 5]) -> Self {
        let score = entropy_score(&counts);
        Self {
            counts,
            score,
            level: BalanceLevel::from_score(score),
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn count(&self, element: FiveElement) -> u32 {
        self.counts[element.index() as usize]
    }

    /// Share of `element` in percent, 1 decimal; 0 for an empty set.
    pub fn percentage(&self, element: FiveElement) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        round_to(100.0 * f64::from(self.count(element)) / f64::from(total), 1)
    }

    /// The most frequent element (first in cycle order on ties).
    pub fn dominant(&self) -> Option<FiveElement> {
        if self.total() == 0 {
            return None;
        }
        ALL_ELEMENTS
            .iter()
            .copied()
            .rev()
            .max_by_key(|e| self.count(*e))
    }
}

/// Normalized entropy score of 5 element counts; 0 when all counts are 0.
pub fn entropy_score(counts: &[u32; 5]) -> f64 {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = f64::from(total);
    let entropy: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = f64::from(c) / total;
            -p * p.ln()
        })
        .sum();
    round_to(100.0 * entropy / 5f64.ln(), 2)
}

fn round_to(x: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    (x * f).round() / f
}
