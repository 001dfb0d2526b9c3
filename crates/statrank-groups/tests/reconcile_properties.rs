//! Property tests for reconciliation and assignment.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use statrank_groups::{
    reconcile, GroupCatalog, GroupId, StatAssignmentEngine, StatInput, TierLabel,
};

fn ids(max: u64) -> impl Strategy<Value = BTreeSet<GroupId>> {
    prop::collection::btree_set((0..max).prop_map(GroupId), 0..12)
}

proptest! {
    #[test]
    fn add_and_remove_are_disjoint(
        managed in ids(20),
        desired in ids(20),
        current in ids(30),
        protected in ids(20),
    ) {
        let desired: BTreeSet<_> = desired.intersection(&managed).copied().collect();
        let plan = reconcile(&desired, &managed, &current, &protected);
        prop_assert!(plan.to_add.is_disjoint(&plan.to_remove));
    }

    #[test]
    fn only_managed_or_desired_are_touched(
        managed in ids(20),
        desired in ids(20),
        current in ids(30),
        protected in ids(20),
    ) {
        let plan = reconcile(&desired, &managed, &current, &protected);
        prop_assert!(plan.to_add.is_subset(&desired));
        prop_assert!(plan.to_remove.is_subset(&managed));
        prop_assert!(plan.to_remove.is_subset(&current));
        prop_assert!(plan.to_remove.is_disjoint(&protected));
    }

    #[test]
    fn second_pass_is_empty(
        managed in ids(20),
        desired in ids(20),
        current in ids(30),
        protected in ids(20),
    ) {
        let plan = reconcile(&desired, &managed, &current, &protected);
        let after = plan.apply_to(&current);
        prop_assert!(reconcile(&desired, &managed, &after, &protected).is_empty());
    }

    #[test]
    fn matching_membership_is_empty(managed in ids(20), extra in ids(40)) {
        // desired == current ∩ managed, plus any unmanaged extras held.
        let desired: BTreeSet<_> = managed.iter().copied().step_by(2).collect();
        let current: BTreeSet<_> = desired
            .iter()
            .copied()
            .chain(extra.difference(&managed).copied())
            .collect();
        prop_assert!(reconcile(&desired, &managed, &current, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn assignment_is_idempotent(
        overall in 0.0f64..6000.0,
        recent in 0.0f64..6000.0,
        battles in 0u64..80_000,
        current in ids(40),
    ) {
        let catalog = GroupCatalog::from_entries(
            TierLabel::all().zip(1u64..).map(|(label, id)| (label, GroupId(id))),
        ).unwrap();
        let engine = StatAssignmentEngine::new(Arc::new(catalog), BTreeSet::from([GroupId(8)]));
        let stats = StatInput::new(overall, recent, battles);

        let first = engine.assign(&stats, &current);
        let after = first.plan.apply_to(&current);
        prop_assert!(engine.assign(&stats, &after).plan.is_empty());
    }

    #[test]
    fn unmapped_labels_never_desired(
        overall in 0.0f64..6000.0,
        recent in 0.0f64..6000.0,
        battles in 0u64..80_000,
        current in ids(40),
    ) {
        // Only even-indexed labels are provisioned.
        let catalog = GroupCatalog::from_entries(
            TierLabel::all()
                .zip(1u64..)
                .filter(|(_, id)| id % 2 == 0)
                .map(|(label, id)| (label, GroupId(id))),
        ).unwrap();
        let managed = catalog.managed_identifiers();
        let engine = StatAssignmentEngine::new(Arc::new(catalog), BTreeSet::new());

        let out = engine.assign(&StatInput::new(overall, recent, battles), &current);
        prop_assert!(out.plan.to_add.is_subset(&managed));
        prop_assert!(out.plan.to_remove.is_subset(&managed));
    }
}
