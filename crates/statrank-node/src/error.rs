//! Error types for the node layer.

use statrank_groups::{CatalogError, MutationPlan};
use thiserror::Error;

use crate::membership::{MemberId, MembershipError};
use crate::stats::StatsError;

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while authorizing a member.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file is malformed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The stats provider could not produce this member's stats. No group
    /// was changed.
    #[error("Stats error: account {account}: {source}")]
    Stats {
        account: String,
        #[source]
        source: StatsError,
    },

    /// Reading the member's current groups failed. No group was changed.
    #[error("Membership error: {0}")]
    Membership(#[from] MembershipError),

    /// The voice server rejected part of the plan. The plan is still valid
    /// and can be retried as is.
    #[error("Apply error: member {member}: {source}")]
    Apply {
        member: MemberId,
        plan: MutationPlan,
        #[source]
        source: MembershipError,
    },

    /// Another authorization for this member has not finished yet
    #[error("Already in flight: member {0}")]
    AlreadyInFlight(MemberId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
