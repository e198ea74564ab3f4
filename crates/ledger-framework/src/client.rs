//! # Ledger Client
//!
//! This module defines the handle through which views and controllers reach a ledger.

use crate::entry::{EntryId, LedgerEntry};
use crate::error::LedgerError;
use crate::ledger::Entries;
use crate::message::LedgerRequest;
use tokio::sync::{mpsc, oneshot};

/// ## LedgerClient
///
/// The `LedgerClient<T>` is the injected handle to one [`LedgerActor<T>`](crate::LedgerActor).
/// It forwards requests over a Tokio mpsc channel and receives answers on oneshot channels.
///
/// * **Cloneable** – holds only a sender, so every view component can own a copy.
/// * **Ordered** – requests from one caller are answered in the order they were sent.
/// * **Generic** – works with any entry type that implements `LedgerEntry`.
pub struct LedgerClient<T: LedgerEntry> {
    sender: mpsc::Sender<LedgerRequest<T>>,
}

impl<T: LedgerEntry> Clone for LedgerClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: LedgerEntry> LedgerClient<T> {
    pub fn new(sender: mpsc::Sender<LedgerRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, LedgerError>>) -> LedgerRequest<T>,
    ) -> Result<R, LedgerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| LedgerError::Closed)?;
        response.await.map_err(|_| LedgerError::Dropped)?
    }

    pub async fn add(&self) -> Result<EntryId, LedgerError> {
        self.request(|respond_to| LedgerRequest::Add { respond_to })
            .await
    }

    pub async fn remove(&self) -> Result<EntryId, LedgerError> {
        self.request(|respond_to| LedgerRequest::Remove { respond_to })
            .await
    }

    pub async fn edit(&self, id: EntryId, edit: T::Edit) -> Result<T, LedgerError> {
        self.request(|respond_to| LedgerRequest::Edit {
            id,
            edit,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: EntryId) -> Result<Option<T>, LedgerError> {
        self.request(|respond_to| LedgerRequest::Get { id, respond_to })
            .await
    }

    pub async fn total(&self) -> Result<f64, LedgerError> {
        self.request(|respond_to| LedgerRequest::Total { respond_to })
            .await
    }

    pub async fn entries(&self) -> Result<Entries<T>, LedgerError> {
        self.request(|respond_to| LedgerRequest::Entries { respond_to })
            .await
    }
}
