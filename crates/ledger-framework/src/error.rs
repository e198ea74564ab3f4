//! # Ledger Errors
//!
//! This module defines the error types shared by the ledger store, the actor that hosts it
//! and the clients that talk to that actor.

use crate::entry::EntryId;

/// Errors that can occur within the ledger engine itself.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Ledger closed")]
    Closed,
    #[error("Ledger dropped response channel")]
    Dropped,
    #[error("Unknown entry: {0}")]
    UnknownEntry(EntryId),
    #[error("Cannot remove from an empty ledger")]
    Empty,
    #[error("Entry error: {0}")]
    EntryError(Box<dyn std::error::Error + Send + Sync>),
}
