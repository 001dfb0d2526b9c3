//! Authorization completion: fetch stats, plan, apply.
//!
//! Runs once a member has proven which game account they own:
//!
//! 1. Refuse if this member already has a flow in flight
//! 2. Fetch overall and recent stats concurrently; on failure stop here,
//!    nothing has been changed
//! 3. Read the member's current groups fresh from the server
//! 4. Plan with the [`StatAssignmentEngine`]
//! 5. Remove stale groups, then add new ones, skipping empty sets

use std::collections::HashSet;
use std::sync::Mutex;

use statrank_groups::{Assignment, MutationPlan, StatAssignmentEngine, StatInput};

use crate::error::{Error, Result};
use crate::membership::{GroupMembership, MemberId};
use crate::stats::StatsSource;

/// Drives one member from verified account to updated rank groups.
pub struct AuthorizationFlow<S, M> {
    engine: StatAssignmentEngine,
    stats: S,
    membership: M,
    in_flight: Mutex<HashSet<MemberId>>,
}

impl<S, M> AuthorizationFlow<S, M>
where
    S: StatsSource,
    M: GroupMembership,
{
    pub fn new(engine: StatAssignmentEngine, stats: S, membership: M) -> Self {
        Self {
            engine,
            stats,
            membership,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn engine(&self) -> &StatAssignmentEngine {
        &self.engine
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }

    /// Assign rank groups to `member` from the stats of `account`.
    pub async fn complete(&self, member: &MemberId, account: &str) -> Result<Assignment> {
        let _guard = InFlightGuard::acquire(&self.in_flight, member)?;
        tracing::info!("Authorizing member {} as account {}", member, account);

        let (overall, recent) = tokio::try_join!(self.stats.overall(account), self.stats.recent(account))
            .map_err(|source| Error::Stats {
                account: account.to_string(),
                source,
            })?;

        let current = self.membership.current_groups(member).await?;

        let stats = StatInput::new(overall.wn8, recent, overall.battles);
        let assignment = self.engine.assign(&stats, &current);

        self.apply(member, &assignment.plan).await?;

        tracing::info!(
            "Member {} ranked (WN8 {:.0} overall, {:.0} recent, {} battles): +{} -{}",
            member,
            stats.overall,
            stats.recent,
            stats.battle_count,
            assignment.plan.to_add.len(),
            assignment.plan.to_remove.len()
        );

        Ok(assignment)
    }

    /// Apply a plan: removals first, then additions. Empty sets are skipped,
    /// so an empty plan makes no calls at all. Safe to retry with the same
    /// plan after a failure.
    pub async fn apply(&self, member: &MemberId, plan: &MutationPlan) -> Result<()> {
        if plan.is_empty() {
            tracing::debug!("Member {} already holds the right groups", member);
            return Ok(());
        }

        let failed = |source| Error::Apply {
            member: member.clone(),
            plan: plan.clone(),
            source,
        };

        if !plan.to_remove.is_empty() {
            self.membership
                .remove_groups(member, &plan.to_remove)
                .await
                .map_err(failed)?;
        }
        if !plan.to_add.is_empty() {
            self.membership
                .add_groups(member, &plan.to_add)
                .await
                .map_err(failed)?;
        }

        Ok(())
    }
}

/// Marks a member as in flight until dropped.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<MemberId>>,
    member: MemberId,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<MemberId>>, member: &MemberId) -> Result<Self> {
        let mut members = set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !members.insert(member.clone()) {
            return Err(Error::AlreadyInFlight(member.clone()));
        }
        Ok(Self {
            set,
            member: member.clone(),
        })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut members = self.set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        members.remove(&self.member);
    }
}

/// Profile description shown next to the member after authorization.
pub fn member_description(nickname: &str, scores: &StatInput) -> String {
    format!("{} (WN8: {})", nickname, scores.recent)
}
