//! Ordered partitions of the real line into labeled buckets.
//!
//! A [`TierTable`] is a sequence of non-overlapping `[lower, upper]` entries
//! sorted by bound. How a value at an edge is treated depends on the
//! [`BoundaryPolicy`]:
//!
//! ```text
//! LowerClosed   lower <= x <  upper    adjacent entries tile the line
//! Exclusive     lower <  x <  upper    every shared edge is a dead zone
//! ```
//!
//! Tables may leave gaps. A value in a gap (or NaN) classifies as `None`.

use thiserror::Error;

/// How values on an entry's bounds are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// `lower <= x < upper`
    LowerClosed,
    /// `lower < x < upper`
    Exclusive,
}

impl BoundaryPolicy {
    fn contains(self, lower: f64, upper: f64, value: f64) -> bool {
        match self {
            BoundaryPolicy::LowerClosed => value >= lower && value < upper,
            BoundaryPolicy::Exclusive => value > lower && value < upper,
        }
    }
}

/// One labeled bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierEntry<L> {
    /// Lower bound, may be `f64::NEG_INFINITY`
    pub lower: f64,
    /// Upper bound, may be `f64::INFINITY`
    pub upper: f64,
    pub label: L,
}

impl<L> TierEntry<L> {
    pub const fn new(lower: f64, upper: f64, label: L) -> Self {
        Self { lower, upper, label }
    }
}

/// Rejected table layouts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("table has no entries")]
    Empty,

    #[error("entry {index} has a NaN bound")]
    NanBound { index: usize },

    #[error("entry {index} is empty: lower {lower} is not below upper {upper}")]
    EmptyRange { index: usize, lower: f64, upper: f64 },

    #[error("entry {index} starts at {lower}, overlapping the previous entry ending at {previous_upper}")]
    Overlap {
        index: usize,
        lower: f64,
        previous_upper: f64,
    },
}

/// A validated, ordered tier table.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable<L> {
    entries: Vec<TierEntry<L>>,
    policy: BoundaryPolicy,
}

impl<L: Copy> TierTable<L> {
    /// Build a table, checking ordering and disjointness.
    pub fn new(entries: Vec<TierEntry<L>>, policy: BoundaryPolicy) -> Result<Self, TableError> {
        validate(&entries)?;
        Ok(Self { entries, policy })
    }

    /// Build a table whose layout is known to be valid at compile time.
    pub(crate) fn from_validated(entries: Vec<TierEntry<L>>, policy: BoundaryPolicy) -> Self {
        debug_assert!(validate(&entries).is_ok());
        Self { entries, policy }
    }

    /// Label of the entry containing `value`, if any.
    pub fn lookup(&self, value: f64) -> Option<L> {
        self.entries
            .iter()
            .find(|e| self.policy.contains(e.lower, e.upper, value))
            .map(|e| e.label)
    }

    /// Entries in ascending order.
    pub fn entries(&self) -> &[TierEntry<L>] {
        &self.entries
    }

    /// How boundary values are matched.
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Whether every adjacent pair of entries shares its edge.
    pub fn is_contiguous(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].upper == w[1].lower)
    }

    /// Values between the first and last entry that match nothing.
    ///
    /// Returned as `(from, to)` spans. A span with `from == to` is a single
    /// unmatched point, which is what every shared edge becomes under
    /// [`BoundaryPolicy::Exclusive`].
    pub fn gaps(&self) -> Vec<(f64, f64)> {
        let mut gaps = Vec::new();
        for w in self.entries.windows(2) {
            let (prev, next) = (&w[0], &w[1]);
            if prev.upper < next.lower {
                gaps.push((prev.upper, next.lower));
            } else if self.policy == BoundaryPolicy::Exclusive {
                gaps.push((prev.upper, prev.upper));
            }
        }
        gaps
    }
}

fn validate<L>(entries: &[TierEntry<L>]) -> Result<(), TableError> {
    if entries.is_empty() {
        return Err(TableError::Empty);
    }

    for (index, entry) in entries.iter().enumerate() {
        if entry.lower.is_nan() || entry.upper.is_nan() {
            return Err(TableError::NanBound { index });
        }
        if entry.lower >= entry.upper {
            return Err(TableError::EmptyRange {
                index,
                lower: entry.lower,
                upper: entry.upper,
            });
        }
        if index > 0 {
            let previous_upper = entries[index - 1].upper;
            if entry.lower < previous_upper {
                return Err(TableError::Overlap {
                    index,
                    lower: entry.lower,
                    previous_upper,
                });
            }
        }
    }

    Ok(())
}
