//! The Four Pillars (사주) value type.

use std::fmt::{Display, Formatter};

use crate::element::{ALL_ELEMENTS, FiveElement};
use crate::error::SajuError;
use crate::ganji::GanJi;
use crate::stem::HeavenlyStem;

/// Year, month, day and hour pillars of one birth instant. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Saju {
    yearly: GanJi,
    monthly: GanJi,
    daily: GanJi,
    hourly: GanJi,
}

impl Saju {
    pub const fn new(yearly: GanJi, monthly: GanJi, daily: GanJi, hourly: GanJi) -> Self {
        Self {
            yearly,
            monthly,
            daily,
            hourly,
        }
    }

    /// Rebuild from stored two-letter pillar strings.
    pub fn from_two_letters(
        yearly: &str,
        monthly: &str,
        daily: &str,
        hourly: &str,
    ) -> Result<Self, SajuError> {
        Ok(Self::new(
            GanJi::find(yearly)?,
            GanJi::find(monthly)?,
            GanJi::find(daily)?,
            GanJi::find(hourly)?,
        ))
    }

    pub const fn yearly(&self) -> GanJi {
        self.yearly
    }

    pub const fn monthly(&self) -> GanJi {
        self.monthly
    }

    pub const fn daily(&self) -> GanJi {
        self.daily
    }

    pub const fn hourly(&self) -> GanJi {
        self.hourly
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [GanJi; 4] {
        [self.yearly, self.monthly, self.daily, self.hourly]
    }

    /// Day stem (일간), the reference point of a chart reading.
    pub fn day_master(&self) -> HeavenlyStem {
        self.daily.stem()
    }

    /// Count of each element over the 8 stem/branch characters, in
    /// `ALL_ELEMENTS` order.
    pub fn element_counts(&self) -> [u32; 5] {
        let mut counts = [0u32; 5];
        for g in self.pillars() {
            counts[g.stem().element().index() as usize] += 1;
            counts[g.branch().element().index() as usize] += 1;
        }
        counts
    }

    /// Elements with no occurrence in the chart.
    pub fn missing_elements(&self) -> Vec<FiveElement> {
        let counts = self.element_counts();
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| counts[e.index() as usize] == 0)
            .collect()
    }
}

impl Display for Saju {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.yearly, self.monthly, self.daily, self.hourly
        )
    }
}
