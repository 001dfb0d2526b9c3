//! Statrank Tiers
//!
//! Maps raw performance numbers onto rank labels along three independent
//! axes:
//!
//! - **Volume**: battle count, gapless, always yields a label
//! - **Skill**: overall rating, six strict open intervals
//! - **Trend**: recent rating on the skill intervals, qualified by whether
//!   it beats the overall rating
//!
//! # Boundary Gap
//!
//! Skill and trend intervals are open on both ends. A rating that lands
//! exactly on a threshold (595, 1107, 1736, 2695, 3714, or 0) classifies as
//! `None` and that axis contributes no label.
//!
//! All classifiers are pure and `Send + Sync`.

mod label;
mod skill;
mod table;
mod trend;
mod volume;

pub use label::{Axis, Direction, ParseLabelError, SkillTier, TierLabel, VolumeTier};
pub use skill::{SkillClassifier, SKILL_THRESHOLDS};
pub use table::{BoundaryPolicy, TableError, TierEntry, TierTable};
pub use trend::TrendClassifier;
pub use volume::{BattleVolumeClassifier, VOLUME_BOUNDS};

/// Labels produced for one member, at most one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLabels {
    pub volume: Option<TierLabel>,
    pub skill: Option<TierLabel>,
    pub trend: Option<TierLabel>,
}

impl AxisLabels {
    pub fn iter(&self) -> impl Iterator<Item = TierLabel> {
        [self.volume, self.skill, self.trend].into_iter().flatten()
    }
}

/// The three classifiers bundled together.
#[derive(Debug, Clone, Default)]
pub struct Classifiers {
    pub volume: BattleVolumeClassifier,
    pub skill: SkillClassifier,
    pub trend: TrendClassifier,
}

impl Classifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every axis for one set of stats.
    pub fn classify(&self, overall: f64, recent: f64, battle_count: u64) -> AxisLabels {
        AxisLabels {
            volume: Some(self.volume.classify(battle_count)),
            skill: self.skill.classify(overall),
            trend: self.trend.classify(recent, overall),
        }
    }
}
