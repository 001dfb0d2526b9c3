//! Battle volume classification.
//!
//! Upper bounds are strictly increasing; a count falls in the first bucket
//! whose bound it is below, and anything at or past the last bound lands in
//! the catch-all:
//!
//! ```text
//! [0, 5000)  [5000, 15000)  [15000, 30000)  [30000, 45000)  [45000, inf)
//! ```

use crate::label::{TierLabel, VolumeTier};
use crate::table::{BoundaryPolicy, TierEntry, TierTable};

/// Upper bounds of every bucket but the catch-all.
pub const VOLUME_BOUNDS: [u64; 4] = [5_000, 15_000, 30_000, 45_000];

/// Buckets a battle count into a [`VolumeTier`].
#[derive(Debug, Clone)]
pub struct BattleVolumeClassifier {
    table: TierTable<VolumeTier>,
}

impl Default for BattleVolumeClassifier {
    fn default() -> Self {
        let [b1, b2, b3, b4] = VOLUME_BOUNDS.map(|b| b as f64);
        let entries = vec![
            TierEntry::new(0.0, b1, VolumeTier::LessThan5k),
            TierEntry::new(b1, b2, VolumeTier::MoreThan5k),
            TierEntry::new(b2, b3, VolumeTier::MoreThan15k),
            TierEntry::new(b3, b4, VolumeTier::MoreThan30k),
            TierEntry::new(b4, f64::INFINITY, VolumeTier::MoreThan45k),
        ];
        Self {
            table: TierTable::from_validated(entries, BoundaryPolicy::LowerClosed),
        }
    }
}

impl BattleVolumeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volume tier of `battle_count`. Total over every count.
    pub fn tier(&self, battle_count: u64) -> VolumeTier {
        // The table tiles [0, inf) so a lookup on a non-negative count
        // always lands; the fallback only exists to keep this total.
        self.table
            .lookup(battle_count as f64)
            .unwrap_or(VolumeTier::MoreThan45k)
    }

    /// Volume label for `battle_count`.
    pub fn classify(&self, battle_count: u64) -> TierLabel {
        TierLabel::Volume(self.tier(battle_count))
    }

    /// Underlying tier table.
    pub fn table(&self) -> &TierTable<VolumeTier> {
        &self.table
    }
}
