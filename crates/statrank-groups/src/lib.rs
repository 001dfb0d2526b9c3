//! Statrank Groups - Rank Group Catalog and Reconciliation
//!
//! Turns tier labels into concrete voice-server group changes.
//!
//! # Overview
//!
//! - [`GroupCatalog`]: read-only `TierLabel -> GroupId` registry, built once
//!   at startup from a catalog file or the server's group list
//! - [`reconcile`]: the minimal add/remove plan between current and desired
//!   groups, never touching unmanaged or protected groups
//! - [`StatAssignmentEngine`]: classify, resolve and reconcile for one member
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use std::sync::Arc;
//! use statrank_groups::{GroupCatalog, GroupId, StatAssignmentEngine, StatInput};
//!
//! let catalog = GroupCatalog::from_json(r#"{ "skill.green": 31, "skill.blue": 32 }"#).unwrap();
//! let engine = StatAssignmentEngine::new(Arc::new(catalog), BTreeSet::new());
//!
//! let current = BTreeSet::from([GroupId(32), GroupId(6)]);
//! let out = engine.assign(&StatInput::new(2200.0, 2000.0, 16_000), &current);
//!
//! assert_eq!(out.plan.to_add, BTreeSet::from([GroupId(31)]));
//! assert_eq!(out.plan.to_remove, BTreeSet::from([GroupId(32)]));
//! ```

pub mod assign;
pub mod catalog;
pub mod error;
pub mod names;
pub mod reconcile;

pub use assign::{Assignment, StatAssignmentEngine, StatInput};
pub use catalog::{GroupCatalog, GroupId, ServerGroup};
pub use error::{CatalogError, Result};
pub use names::GroupNames;
pub use reconcile::{reconcile, MutationPlan};

// Re-export the label vocabulary for convenience
pub use statrank_tiers::{AxisLabels, Classifiers, Direction, SkillTier, TierLabel, VolumeTier};
