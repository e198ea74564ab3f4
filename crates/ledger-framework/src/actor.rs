//! # Ledger Actor
//!
//! This module defines the `LedgerActor`, the single owner of a [`Ledger`]. It processes
//! requests sequentially, so every operation runs to completion before the next one starts
//! and requests are answered in the order they arrive.

use crate::client::LedgerClient;
use crate::config::LedgerConfig;
use crate::entry::LedgerEntry;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one ledger.
///
/// # Architecture Note
/// This struct is the "Server" half of the pair returned by [`LedgerActor::new`]. It owns
/// the ledger and the receiving end of the channel. Because only this task ever touches
/// the ledger, no `Mutex` or `RwLock` is needed around it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `LedgerActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Inject**: Hand clones of the client to whatever view or controller needs the ledger.
///
/// ```rust
/// use ledger_framework::{LedgerActor, LedgerConfig, LedgerEntry};
///
/// #[derive(Clone, Debug, Default)]
/// struct Tally { value: Option<f64> }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// impl LedgerEntry for Tally {
///     type Edit = f64;
///     type Error = Never;
///     fn apply(&mut self, value: f64) -> Result<(), Never> { self.value = Some(value); Ok(()) }
///     fn amount(&self) -> Option<f64> { self.value }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = LedgerActor::<Tally>::new(&LedgerConfig::default());
///     tokio::spawn(actor.run());
///
///     let id = client.add().await.unwrap();
///     client.edit(id, 2.5).await.unwrap();
///     assert_eq!(client.total().await.unwrap(), 2.5);
/// }
/// ```
///
/// # Shutdown
///
/// The run loop ends once every client clone has been dropped.
pub struct LedgerActor<T: LedgerEntry> {
    receiver: mpsc::Receiver<LedgerRequest<T>>,
    ledger: Ledger<T>,
}

impl<T: LedgerEntry> LedgerActor<T> {
    /// Creates a new `LedgerActor` with an empty ledger and its associated `LedgerClient`.
    pub fn new(config: &LedgerConfig) -> (Self, LedgerClient<T>) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity());
        let actor = Self {
            receiver,
            ledger: Ledger::new(config.id_policy),
        };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Product" instead of "price_form::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, id_policy = ?self.ledger.id_policy(), "Ledger started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Add { respond_to } => {
                    let id = self.ledger.add();
                    info!(entity_type, %id, size = self.ledger.len(), "Added");
                    let _ = respond_to.send(Ok(id));
                }
                LedgerRequest::Remove { respond_to } => {
                    let result = self.ledger.remove_last().map(|(id, _)| id);
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.ledger.len(), "Removed"),
                        Err(e) => warn!(entity_type, error = %e, "Remove failed"),
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Edit {
                    id,
                    edit,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?edit, "Edit");
                    let result = self.ledger.edit(id, edit).cloned();
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Edited"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Edit failed"),
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Get { id, respond_to } => {
                    let item = self.ledger.get(id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                LedgerRequest::Total { respond_to } => {
                    let total = self.ledger.total();
                    debug!(entity_type, total, "Total");
                    let _ = respond_to.send(Ok(total));
                }
                LedgerRequest::Entries { respond_to } => {
                    debug!(entity_type, size = self.ledger.len(), "Entries");
                    let _ = respond_to.send(Ok(self.ledger.snapshot()));
                }
            }
        }

        info!(entity_type, size = self.ledger.len(), "Shutdown");
    }
}
