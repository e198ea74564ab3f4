//! # LedgerEntry Trait
//!
//! The `LedgerEntry` trait defines the contract that every row type must implement to be
//! stored in a [`Ledger`](crate::Ledger). It specifies the edit payload and error type as
//! associated types and exposes the single number the ledger sums for its running total.
//!
//! # Architecture Note
//! The ledger owns id assignment, ordering and removal. An entry only knows how to start
//! out blank (`Default`), how to apply an edit to itself, and what amount it contributes.
//! Keeping those concerns apart lets the same `Ledger`, `LedgerActor` and `LedgerClient`
//! serve any row type.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Positive, 1-based identifier of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait that any row type must implement to be managed by a [`Ledger`](crate::Ledger).
///
/// Entries are always created blank through `Default`; there is no "create with values"
/// path. All later changes go through [`LedgerEntry::apply`].
pub trait LedgerEntry: Clone + Default + Debug + Send + Sync + 'static {
    /// A single change to one entry (e.g. "set the name").
    type Edit: Send + Sync + Debug;

    /// The error type for rejected edits.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies `edit` to this entry.
    ///
    /// On error the entry must be left in a valid state; the ledger keeps whatever the
    /// entry looks like after the call.
    fn apply(&mut self, edit: Self::Edit) -> Result<(), Self::Error>;

    /// The value this entry contributes to the ledger total, if it has one.
    fn amount(&self) -> Option<f64>;
}
