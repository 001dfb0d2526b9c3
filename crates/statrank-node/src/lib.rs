//! Statrank Node - Authorization Flow
//!
//! Wires the rank engine to its collaborators: a stats provider and the
//! voice server's group membership.
//!
//! # Architecture
//!
//! - **Config**: environment variables, catalog file
//! - **Stats**: [`StatsSource`] seam plus provider payload parsing
//! - **Membership**: [`GroupMembership`] seam (read / add / remove groups)
//! - **Flow**: [`AuthorizationFlow`] fetches stats, plans with the
//!   [`StatAssignmentEngine`](statrank_groups::StatAssignmentEngine) and
//!   applies the plan
//!
//! Transport to the stats provider and the voice server lives outside this
//! crate; implement the two traits over whatever client is in use.

pub mod config;
pub mod error;
pub mod flow;
pub mod membership;
pub mod stats;

pub use config::{parse_group_list, NodeConfig};
pub use error::{ConfigError, Error, Result};
pub use flow::{member_description, AuthorizationFlow};
pub use membership::{GroupMembership, InMemoryMembership, MemberId, MembershipError};
pub use stats::{parse_overall, parse_recent, FileStatsSource, OverallStats, StatsError, StatsSource};
