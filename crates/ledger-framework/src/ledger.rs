//! # Ledger Store
//!
//! The synchronous, in-memory store at the heart of the framework. A [`Ledger`] maps
//! [`EntryId`]s to entries in ascending id order and enforces the id and removal rules.
//! It is a plain owned value: whoever holds it (usually a
//! [`LedgerActor`](crate::LedgerActor)) is the only writer.

use crate::config::IdPolicy;
use crate::entry::{EntryId, LedgerEntry};
use crate::error::LedgerError;
use std::collections::BTreeMap;
use tracing::trace;

/// Read-only snapshot of a ledger, in ascending id order.
pub type Entries<T> = BTreeMap<EntryId, T>;

/// An ordered collection of entries with stack (LIFO) removal.
///
/// # Rules
///
/// * **Add** always inserts a blank (`Default`) entry and returns its id.
/// * **Remove** always takes the entry with the highest id.
/// * **Edit** only touches existing entries; an unknown id is an error, never an insert.
/// * **Total** sums [`LedgerEntry::amount`], counting missing or non-finite amounts as zero.
#[derive(Debug, Clone)]
pub struct Ledger<T: LedgerEntry> {
    entries: Entries<T>,
    id_policy: IdPolicy,
    next_id: u32,
}

impl<T: LedgerEntry> Default for Ledger<T> {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl<T: LedgerEntry> Ledger<T> {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            entries: BTreeMap::new(),
            id_policy,
            next_id: 1,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    fn allocate_id(&mut self) -> EntryId {
        match self.id_policy {
            IdPolicy::EntryCount => EntryId(self.entries.len() as u32 + 1),
            IdPolicy::Monotonic => {
                let id = EntryId(self.next_id);
                self.next_id += 1;
                id
            }
        }
    }

    /// Inserts a blank entry and returns its id.
    pub fn add(&mut self) -> EntryId {
        let id = self.allocate_id();
        self.entries.insert(id, T::default());
        trace!(%id, size = self.entries.len(), "Entry added");
        id
    }

    /// Removes the entry with the highest id.
    ///
    /// # Errors
    /// [`LedgerError::Empty`] when there is nothing to remove; the ledger is unchanged.
    pub fn remove_last(&mut self) -> Result<(EntryId, T), LedgerError> {
        let (id, entry) = self.entries.pop_last().ok_or(LedgerError::Empty)?;
        trace!(%id, size = self.entries.len(), "Entry removed");
        Ok((id, entry))
    }

    /// Applies `edit` to the entry with `id` and returns the entry as it is afterwards.
    ///
    /// # Errors
    /// * [`LedgerError::UnknownEntry`] if `id` does not exist.
    /// * [`LedgerError::EntryError`] if the entry rejected the edit.
    pub fn edit(&mut self, id: EntryId, edit: T::Edit) -> Result<&T, LedgerError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(LedgerError::UnknownEntry(id))?;
        entry
            .apply(edit)
            .map_err(|e| LedgerError::EntryError(Box::new(e)))?;
        Ok(&*entry)
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Sum of all entry amounts.
    pub fn total(&self) -> f64 {
        self.entries
            .values()
            .filter_map(T::amount)
            .filter(|amount| amount.is_finite())
            .sum()
    }

    pub fn entries(&self) -> &Entries<T> {
        &self.entries
    }

    pub fn snapshot(&self) -> Entries<T> {
        self.entries.clone()
    }

    pub fn last_id(&self) -> Option<EntryId> {
        self.entries.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
