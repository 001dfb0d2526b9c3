//! Voice-server group membership seam.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use statrank_groups::GroupId;
use thiserror::Error;
use tokio::sync::RwLock;

/// Stable identifier of a member on the voice server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors from the membership backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    #[error("unknown member {0}")]
    UnknownMember(MemberId),

    #[error("server rejected the change: {0}")]
    Rejected(String),
}

/// Reads and changes a member's server groups.
pub trait GroupMembership {
    fn current_groups(
        &self,
        member: &MemberId,
    ) -> impl Future<Output = Result<BTreeSet<GroupId>, MembershipError>> + Send;

    fn add_groups(
        &self,
        member: &MemberId,
        groups: &BTreeSet<GroupId>,
    ) -> impl Future<Output = Result<(), MembershipError>> + Send;

    fn remove_groups(
        &self,
        member: &MemberId,
        groups: &BTreeSet<GroupId>,
    ) -> impl Future<Output = Result<(), MembershipError>> + Send;
}

/// Membership held in memory. Backs the planning binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryMembership {
    members: RwLock<HashMap<MemberId, BTreeSet<GroupId>>>,
    mutations: AtomicUsize,
}

impl InMemoryMembership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member with an initial set of groups.
    pub async fn insert_member(&self, member: MemberId, groups: BTreeSet<GroupId>) {
        self.members.write().await.insert(member, groups);
    }

    pub async fn groups_of(&self, member: &MemberId) -> Option<BTreeSet<GroupId>> {
        self.members.read().await.get(member).cloned()
    }

    /// Number of add/remove calls served so far.
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::Relaxed)
    }
}

impl GroupMembership for InMemoryMembership {
    async fn current_groups(&self, member: &MemberId) -> Result<BTreeSet<GroupId>, MembershipError> {
        self.groups_of(member)
            .await
            .ok_or_else(|| MembershipError::UnknownMember(member.clone()))
    }

    async fn add_groups(&self, member: &MemberId, groups: &BTreeSet<GroupId>) -> Result<(), MembershipError> {
        self.mutations.fetch_add(1, Ordering::Relaxed);
        let mut members = self.members.write().await;
        let held = members
            .get_mut(member)
            .ok_or_else(|| MembershipError::UnknownMember(member.clone()))?;
        held.extend(groups.iter().copied());
        Ok(())
    }

    async fn remove_groups(&self, member: &MemberId, groups: &BTreeSet<GroupId>) -> Result<(), MembershipError> {
        self.mutations.fetch_add(1, Ordering::Relaxed);
        let mut members = self.members.write().await;
        let held = members
            .get_mut(member)
            .ok_or_else(|| MembershipError::UnknownMember(member.clone()))?;
        held.retain(|g| !groups.contains(g));
        Ok(())
    }
}
