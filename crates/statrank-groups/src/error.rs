//! Error types for the group catalog.

use statrank_tiers::TierLabel;
use thiserror::Error;

use crate::GroupId;

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building a [`GroupCatalog`](crate::GroupCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two labels resolve to the same group, making their tiers indistinguishable
    #[error("group {group} is mapped by both {first} and {second}")]
    DuplicateGroup {
        group: GroupId,
        first: TierLabel,
        second: TierLabel,
    },

    /// Malformed catalog file
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
