//! GanJi (간지) pillars and the 60-entry Sexagenary Table.
//!
//! Entry `i` pairs stem `i mod 10` with branch `i mod 12`. Because stem and
//! branch always advance together, only the 60 same-parity pairs of the 120
//! naive combinations are reachable. The table is the only source of
//! `GanJi` values: it is built once on first use and shared read-only.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use crate::branch::EarthlyBranch;
use crate::element::YinYang;
use crate::error::SajuError;
use crate::stem::HeavenlyStem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: usize = 60;

/// A stem/branch pillar, always a member of the Sexagenary Table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GanJi {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
    index: u8,
}

/// The precomputed 60-cycle, indexed by `offset mod 60`.
#[derive(Debug)]
pub struct SexagenaryTable {
    entries: [GanJi; SEXAGENARY_CYCLE],
}

static TABLE: OnceLock<SexagenaryTable> = OnceLock::new();

impl SexagenaryTable {
    fn build() -> Self {
        let entries = std::array::from_fn(|i| GanJi {
            stem: HeavenlyStem::from_index(i as i64),
            branch: EarthlyBranch::from_index(i as i64),
            index: i as u8,
        });
        tracing::debug!(entries = SEXAGENARY_CYCLE, "sexagenary table built");
        Self { entries }
    }

    /// The process-wide table, built on first call.
    pub fn shared() -> &'static SexagenaryTable {
        TABLE.get_or_init(Self::build)
    }

    /// Entry at `index mod 60` (negative indices wrap).
    pub fn at(&self, index: i64) -> GanJi {
        self.entries[index.rem_euclid(SEXAGENARY_CYCLE as i64) as usize]
    }

    /// Table position of a stem/branch pair, or `None` on parity mismatch.
    ///
    /// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)`; the unique
    /// solution is `(6·stem − 5·branch) mod 60`.
    pub fn position(&self, stem: HeavenlyStem, branch: EarthlyBranch) -> Option<u8> {
        let s = i64::from(stem.index());
        let b = i64::from(branch.index());
        if (s - b) % 2 != 0 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(SEXAGENARY_CYCLE as i64) as u8)
    }

    pub fn iter(&self) -> impl Iterator<Item = GanJi> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GanJi {
    /// Pillar at `index mod 60`.
    pub fn at(index: i64) -> Self {
        SexagenaryTable::shared().at(index)
    }

    /// Pillar for catalog code 1..=60.
    pub fn from_code(code: u8) -> Option<Self> {
        (1..=SEXAGENARY_CYCLE as u8)
            .contains(&code)
            .then(|| Self::at(i64::from(code) - 1))
    }

    /// Pillar for a stem/branch pair; fails if the pair never co-occurs.
    pub fn from_parts(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, SajuError> {
        let table = SexagenaryTable::shared();
        table
            .position(stem, branch)
            .map(|i| table.at(i64::from(i)))
            .ok_or(SajuError::InvalidCombination { stem, branch })
    }

    /// Pair whose parity is guaranteed by construction (pillar rules).
    pub(crate) fn compose(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        debug_assert_eq!(stem.index() % 2, branch.index() % 2);
        let s = i64::from(stem.index());
        let b = i64::from(branch.index());
        Self::at(6 * s - 5 * b)
    }

    /// Pillar from separate Korean stem and branch names.
    pub fn find_pair(stem_name: &str, branch_name: &str) -> Result<Self, SajuError> {
        let stem = HeavenlyStem::find(stem_name)?;
        let branch = EarthlyBranch::find(branch_name)?;
        Self::from_parts(stem, branch)
    }

    /// Pillar from its canonical two-letter form, e.g. "갑자".
    pub fn find(two_letters: &str) -> Result<Self, SajuError> {
        let mut chars = two_letters.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(s), Some(b), None) => {
                Self::find_pair(s.encode_utf8(&mut [0; 4]), b.encode_utf8(&mut [0; 4]))
            }
            _ => Err(SajuError::NotFound(format!("GanJi {two_letters:?}"))),
        }
    }

    pub fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// 0-based position in the cycle (갑자 = 0).
    pub fn index(self) -> u8 {
        self.index
    }

    /// 1-based catalog code (갑자 = 1).
    pub fn code(self) -> u8 {
        self.index + 1
    }

    /// Advance stem and branch together by `offset`.
    pub fn next(self, offset: i64) -> Self {
        Self::at(i64::from(self.index) + offset)
    }

    /// Polarity of the pillar (shared by its stem and branch).
    pub fn polarity(self) -> YinYang {
        self.stem.polarity()
    }

    /// Canonical serialization, e.g. "갑자".
    pub fn two_letters(self) -> String {
        let mut s = String::with_capacity(6);
        s.push_str(self.stem.name());
        s.push_str(self.branch.name());
        s
    }

    /// Hanja form, e.g. "甲子".
    pub fn hanja(self) -> String {
        let mut s = String::with_capacity(6);
        s.push_str(self.stem.hanja());
        s.push_str(self.branch.hanja());
        s
    }
}

impl Display for GanJi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl std::str::FromStr for GanJi {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::find(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GanJi {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GanJi {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::find(&s).map_err(serde::de::Error::custom)
    }
}
