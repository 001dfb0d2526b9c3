//! Per-member rank assignment.
//!
//! Classifies one member's stats, resolves the labels through the catalog
//! and reconciles against the member's current groups. Nothing here performs
//! I/O; the returned plan is applied by the caller.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use statrank_tiers::{AxisLabels, Classifiers};

use crate::catalog::{GroupCatalog, GroupId};
use crate::reconcile::{reconcile, MutationPlan};

/// Raw stats for one member, as reported by the stats provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatInput {
    /// Overall rating across all battles
    pub overall: f64,
    /// Rating over the recent battle window
    pub recent: f64,
    /// Total battles played
    pub battle_count: u64,
}

impl StatInput {
    pub fn new(overall: f64, recent: f64, battle_count: u64) -> Self {
        Self {
            overall,
            recent,
            battle_count,
        }
    }
}

/// Result of one assignment: the plan plus what it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub plan: MutationPlan,
    /// The stats the plan was computed from, for display and audit
    pub scores: StatInput,
    /// Labels produced by the classifiers, before catalog lookup
    pub labels: AxisLabels,
}

/// Classifies stats and plans rank-group changes for one member at a time.
///
/// Holds no per-member state, so a single engine can serve concurrent
/// assignments for different members.
#[derive(Debug, Clone)]
pub struct StatAssignmentEngine {
    catalog: Arc<GroupCatalog>,
    protected: BTreeSet<GroupId>,
    classifiers: Classifiers,
}

impl StatAssignmentEngine {
    pub fn new(catalog: Arc<GroupCatalog>, protected: BTreeSet<GroupId>) -> Self {
        Self {
            catalog,
            protected,
            classifiers: Classifiers::default(),
        }
    }

    pub fn with_classifiers(mut self, classifiers: Classifiers) -> Self {
        self.classifiers = classifiers;
        self
    }

    pub fn catalog(&self) -> &GroupCatalog {
        &self.catalog
    }

    pub fn protected(&self) -> &BTreeSet<GroupId> {
        &self.protected
    }

    /// Plan the group changes for one member.
    pub fn assign(&self, stats: &StatInput, current: &BTreeSet<GroupId>) -> Assignment {
        let labels = self
            .classifiers
            .classify(stats.overall, stats.recent, stats.battle_count);

        let desired = self.desired_groups(&labels);
        let managed = self.catalog.managed_identifiers();
        let plan = reconcile(&desired, &managed, current, &self.protected);

        tracing::debug!(
            "Assigned {:?}: +{:?} -{:?}",
            labels,
            plan.to_add,
            plan.to_remove
        );

        Assignment {
            plan,
            scores: *stats,
            labels,
        }
    }

    fn desired_groups(&self, labels: &AxisLabels) -> BTreeSet<GroupId> {
        labels
            .iter()
            .filter_map(|label| {
                let group = self.catalog.resolve(label);
                if group.is_none() {
                    tracing::warn!(
                        "No group provisioned for {}, skipping {} axis",
                        label,
                        label.axis()
                    );
                }
                group
            })
            .collect()
    }
}
