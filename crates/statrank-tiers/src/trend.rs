//! Recent-form classification.
//!
//! The recent rating picks the tier (same table and strict edges as
//! [`SkillClassifier`]); comparing it to the overall rating picks the
//! direction.

use crate::label::{Direction, TierLabel};
use crate::skill::SkillClassifier;

#[derive(Debug, Clone, Default)]
pub struct TrendClassifier {
    skill: SkillClassifier,
}

impl TrendClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trend classifier sharing a custom skill table.
    pub fn with_skill(skill: SkillClassifier) -> Self {
        Self { skill }
    }

    /// Trend label: tier of the recent rating, direction against overall.
    pub fn classify(&self, recent: f64, overall: f64) -> Option<TierLabel> {
        let direction = Direction::between(recent, overall);
        self.skill
            .tier(recent)
            .map(|tier| TierLabel::Trend(tier, direction))
    }
}
