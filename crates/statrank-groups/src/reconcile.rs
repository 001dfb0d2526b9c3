//! Minimal membership changes between current and desired rank groups.
//!
//! ```text
//! to_add    = desired - current
//! to_remove = ((managed - desired) ∩ current) - protected
//! ```
//!
//! Only managed groups are ever removed, and only desired groups are ever
//! added, so groups unrelated to the rank axes are never touched. Applying a
//! plan and reconciling again against the result yields an empty plan.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::GroupId;

/// Groups to add to and remove from one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationPlan {
    pub to_add: BTreeSet<GroupId>,
    pub to_remove: BTreeSet<GroupId>,
}

impl MutationPlan {
    /// Nothing to do. Callers must not issue any mutation for an empty plan.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Membership after this plan is applied to `current`.
    pub fn apply_to(&self, current: &BTreeSet<GroupId>) -> BTreeSet<GroupId> {
        current
            .difference(&self.to_remove)
            .chain(self.to_add.iter())
            .copied()
            .collect()
    }
}

/// Compute the plan that moves `current` to `desired` within `managed`,
/// never removing anything in `protected`.
pub fn reconcile(
    desired: &BTreeSet<GroupId>,
    managed: &BTreeSet<GroupId>,
    current: &BTreeSet<GroupId>,
    protected: &BTreeSet<GroupId>,
) -> MutationPlan {
    let to_add = desired.difference(current).copied().collect();

    let to_remove = managed
        .difference(desired)
        .filter(|g| current.contains(g) && !protected.contains(g))
        .copied()
        .collect();

    MutationPlan { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u64]) -> BTreeSet<GroupId> {
        ids.iter().copied().map(GroupId).collect()
    }

    const A: u64 = 1;
    const B: u64 = 2;
    const C: u64 = 3;
    const D: u64 = 4;

    #[test]
    fn protected_group_is_kept() {
        let plan = reconcile(
            &set(&[B, D]),
            &set(&[A, B, C, D]),
            &set(&[A, B, C]),
            &set(&[C]),
        );
        assert_eq!(plan.to_add, set(&[D]));
        assert_eq!(plan.to_remove, set(&[A]));
    }

    #[test]
    fn second_pass_is_empty() {
        let desired = set(&[B, D]);
        let managed = set(&[A, B, C, D]);
        let protected = set(&[C]);
        let current = set(&[A, B, C, 99]);

        let plan = reconcile(&desired, &managed, &current, &protected);
        let after = plan.apply_to(&current);
        assert_eq!(after, set(&[B, C, D, 99]));

        let again = reconcile(&desired, &managed, &after, &protected);
        assert!(again.is_empty());
    }

    #[test]
    fn unmanaged_groups_untouched() {
        let plan = reconcile(&set(&[B]), &set(&[A, B]), &set(&[A, 50, 60]), &set(&[]));
        assert_eq!(plan.to_add, set(&[B]));
        assert_eq!(plan.to_remove, set(&[A]));
    }

    #[test]
    fn already_held_groups_not_re_added() {
        let plan = reconcile(&set(&[A, B]), &set(&[A, B, C]), &set(&[A]), &set(&[]));
        assert_eq!(plan.to_add, set(&[B]));
        assert!(plan.to_remove.is_empty());
    }

    #[test]
    fn matching_membership_is_a_no_op() {
        let managed: BTreeSet<_> = (1..=23).map(GroupId).collect();
        let plan = reconcile(&set(&[3, 9, 17]), &managed, &set(&[3, 9, 17, 100]), &set(&[]));
        assert!(plan.is_empty());
    }

    #[test]
    fn empty_desired_clears_managed() {
        let plan = reconcile(&set(&[]), &set(&[A, B]), &set(&[A, B, C]), &set(&[]));
        assert!(plan.to_add.is_empty());
        assert_eq!(plan.to_remove, set(&[A, B]));
    }
}
