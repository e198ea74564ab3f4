//! # LedgerAccess Trait
//!
//! Provides a common interface for domain-specific ledger clients, adding default read
//! methods built on top of a generic `LedgerClient`.
use crate::{EntryId, Entries, LedgerClient, LedgerEntry, LedgerError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the read-side ledger operations.
///
/// Implementors supply the inner [`LedgerClient`] and an error mapping; `get`, `total` and
/// `entries` come for free.
///
/// # Example
///
/// ```rust
/// use ledger_framework::{LedgerAccess, LedgerClient, LedgerEntry, LedgerError};
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
/// struct TallyClient {
///     inner: LedgerClient<Tally>,
/// }
///
/// impl LedgerAccess<Tally> for TallyClient {
///     type Error = String;
///
///     fn inner(&self) -> &LedgerClient<Tally> {
///         &self.inner
///     }
///
///     fn map_error(e: LedgerError) -> Self::Error {
///         e.to_string()
///     }
/// }
///
/// async fn usage(client: TallyClient) {
///     // get(), total() and entries() are provided automatically
///     let _ = client.total().await;
///     let _ = client.entries().await;
/// }
/// ```
#[async_trait]
pub trait LedgerAccess<T: LedgerEntry>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic LedgerClient.
    fn inner(&self) -> &LedgerClient<T>;

    /// Map ledger errors to the domain error type.
    fn map_error(e: LedgerError) -> Self::Error;

    /// Fetch an entry by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: EntryId) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Sum of every entry's amount.
    #[tracing::instrument(skip(self))]
    async fn total(&self) -> Result<f64, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().total().await.map_err(Self::map_error)
    }

    /// Snapshot of all entries in id order.
    #[tracing::instrument(skip(self))]
    async fn entries(&self) -> Result<Entries<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().entries().await.map_err(Self::map_error)
    }
}
