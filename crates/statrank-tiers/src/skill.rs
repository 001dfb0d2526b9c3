//! Skill rating classification.
//!
//! Six open intervals, lowest tier first:
//!
//! ```text
//! red (0, 595)  orange (595, 1107)  yellow (1107, 1736)
//! green (1736, 2695)  blue (2695, 3714)  purple (3714, inf)
//! ```
//!
//! Both ends are strict, so a rating exactly on a threshold (or 0) has no
//! tier. The skill axis then contributes no label, and any skill group the
//! member holds becomes a removal candidate like every other managed group.

use crate::label::{SkillTier, TierLabel};
use crate::table::{BoundaryPolicy, TableError, TierEntry, TierTable};

/// Rating thresholds between adjacent skill tiers, ascending.
pub const SKILL_THRESHOLDS: [f64; 5] = [595.0, 1107.0, 1736.0, 2695.0, 3714.0];

/// Buckets a rating into a [`SkillTier`].
#[derive(Debug, Clone)]
pub struct SkillClassifier {
    table: TierTable<SkillTier>,
}

impl Default for SkillClassifier {
    fn default() -> Self {
        Self {
            table: TierTable::from_validated(skill_entries(SKILL_THRESHOLDS), BoundaryPolicy::Exclusive),
        }
    }
}

impl SkillClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier over custom thresholds. They must ascend strictly and sit
    /// above zero.
    pub fn from_thresholds(thresholds: [f64; 5]) -> Result<Self, TableError> {
        let table = TierTable::new(skill_entries(thresholds), BoundaryPolicy::Exclusive)?;
        Ok(Self { table })
    }

    /// Skill tier of `rating`, or `None` outside every open interval.
    pub fn tier(&self, rating: f64) -> Option<SkillTier> {
        self.table.lookup(rating)
    }

    /// Skill label for the overall rating.
    pub fn classify(&self, overall: f64) -> Option<TierLabel> {
        self.tier(overall).map(TierLabel::Skill)
    }

    /// Underlying tier table.
    pub fn table(&self) -> &TierTable<SkillTier> {
        &self.table
    }
}

fn skill_entries(t: [f64; 5]) -> Vec<TierEntry<SkillTier>> {
    vec![
        TierEntry::new(0.0, t[0], SkillTier::Red),
        TierEntry::new(t[0], t[1], SkillTier::Orange),
        TierEntry::new(t[1], t[2], SkillTier::Yellow),
        TierEntry::new(t[2], t[3], SkillTier::Green),
        TierEntry::new(t[3], t[4], SkillTier::Blue),
        TierEntry::new(t[4], f64::INFINITY, SkillTier::Purple),
    ]
}
