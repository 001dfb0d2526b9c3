//! Tier label to external group registry.
//!
//! Built once at startup and shared read-only afterwards. A label with no
//! group is a normal state (the group may not be provisioned yet), never an
//! error.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use statrank_tiers::TierLabel;

use crate::error::{CatalogError, Result};
use crate::names::GroupNames;

/// Opaque identifier of a group on the voice server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group as listed by the voice server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroup {
    pub id: GroupId,
    pub name: String,
}

impl ServerGroup {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: GroupId(id),
            name: name.into(),
        }
    }
}

/// Read-only `TierLabel -> GroupId` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCatalog {
    groups: BTreeMap<TierLabel, GroupId>,
}

impl GroupCatalog {
    /// An empty catalog: nothing resolves and nothing is managed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit pairs. Each group may back only one label.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TierLabel, GroupId)>,
    {
        let mut groups = BTreeMap::new();
        let mut owners: BTreeMap<GroupId, TierLabel> = BTreeMap::new();

        for (label, group) in entries {
            if let Some(&first) = owners.get(&group) {
                if first != label {
                    return Err(CatalogError::DuplicateGroup {
                        group,
                        first,
                        second: label,
                    });
                }
            }
            if let Some(previous) = groups.insert(label, group) {
                if previous != group {
                    owners.remove(&previous);
                }
            }
            owners.insert(group, label);
        }

        Ok(Self { groups })
    }

    /// Resolve labels by matching display names against the server's group
    /// list. The first group with a matching name wins; labels whose name is
    /// not on the server stay unmapped.
    pub fn from_server_groups(server_groups: &[ServerGroup], names: &GroupNames) -> Result<Self> {
        let entries = names.iter().filter_map(|(label, name)| {
            server_groups
                .iter()
                .find(|g| g.name == name)
                .map(|g| (label, g.id))
        });
        Self::from_entries(entries)
    }

    /// Load from a JSON object of `"<label key>": <group id>`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<TierLabel, GroupId> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Serialize back to the JSON object form accepted by [`Self::from_json`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.groups)?)
    }

    /// Group provisioned for `label`, if any.
    pub fn resolve(&self, label: TierLabel) -> Option<GroupId> {
        self.groups.get(&label).copied()
    }

    /// Every group this catalog maps to. These are the only groups the
    /// reconciler may add or remove.
    pub fn managed_identifiers(&self) -> BTreeSet<GroupId> {
        self.groups.values().copied().collect()
    }

    /// Labels the classifiers can produce that have no group.
    pub fn missing(&self) -> Vec<TierLabel> {
        TierLabel::all()
            .filter(|label| !self.groups.contains_key(label))
            .collect()
    }

    /// Log a warning for each unprovisioned label.
    pub fn warn_missing(&self) {
        for label in self.missing() {
            tracing::warn!("No group provisioned for {}", label);
        }
    }

    /// Mappings in label order.
    pub fn iter(&self) -> impl Iterator<Item = (TierLabel, GroupId)> + '_ {
        self.groups.iter().map(|(label, group)| (*label, *group))
    }

    /// Number of provisioned labels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
