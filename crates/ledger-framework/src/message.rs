//! # Ledger Messages
//!
//! This module defines the request types sent from a [`LedgerClient`](crate::LedgerClient)
//! to the [`LedgerActor`](crate::LedgerActor) that owns the ledger.

use crate::entry::{EntryId, LedgerEntry};
use crate::error::LedgerError;
use crate::ledger::Entries;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map one-to-one onto the ledger operations a view needs:
///
/// - **Add**: insert a blank entry, answer with its id.
/// - **Remove**: drop the last entry, answer with its id.
/// - **Edit**: apply a [`LedgerEntry::Edit`] to an existing entry.
/// - **Get**: fetch one entry by id.
/// - **Total**: the running sum of all amounts.
/// - **Entries**: a snapshot of the whole ledger.
#[derive(Debug)]
pub enum LedgerRequest<T: LedgerEntry> {
    Add {
        respond_to: Response<EntryId>,
    },
    Remove {
        respond_to: Response<EntryId>,
    },
    Edit {
        id: EntryId,
        edit: T::Edit,
        respond_to: Response<T>,
    },
    Get {
        id: EntryId,
        respond_to: Response<Option<T>>,
    },
    Total {
        respond_to: Response<f64>,
    },
    Entries {
        respond_to: Response<Entries<T>>,
    },
}
