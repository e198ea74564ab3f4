//! # Mock Ledger & Testing Guide
//!
//! The `MockLedger<T>` type hands out a real [`LedgerClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a running [`LedgerActor`](crate::LedgerActor).
//! It lets you test controller and view logic deterministically, including failures that a
//! real ledger would never produce on demand (a closed channel, for example).
//!
//! ## When to use Mocks vs a Real Ledger
//!
//! | Feature | MockLedger | Real LedgerActor |
//! |---------|------------|------------------|
//! | **State** | None (scripted answers) | Real entries and totals |
//! | **Error Injection** | Easy (`return_err`) | Only errors the data allows |
//! | **Use Case** | Logic *around* the client | The ledger itself or the full form |
//!
//! ## Example
//!
//! ```rust
//! use ledger_framework::mock::MockLedger;
//! use ledger_framework::{EntryId, LedgerEntry, LedgerError};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Tally { value: Option<f64> }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("never")]
//! struct Never;
//!
//! impl LedgerEntry for Tally {
//!     type Edit = f64;
//!     type Error = Never;
//!     fn apply(&mut self, value: f64) -> Result<(), Never> { self.value = Some(value); Ok(()) }
//!     fn amount(&self) -> Option<f64> { self.value }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockLedger::<Tally>::new();
//!     mock.expect_add().return_ok(EntryId(1));
//!     mock.expect_remove().return_err(LedgerError::Closed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.add().await.unwrap(), EntryId(1));
//!     assert!(matches!(client.remove().await, Err(LedgerError::Closed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, then answer each
//! request by hand with [`expect_add`], [`expect_remove`] or [`expect_edit`].

use crate::client::LedgerClient;
use crate::entry::{EntryId, LedgerEntry};
use crate::error::LedgerError;
use crate::ledger::Entries;
use crate::message::LedgerRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request of a given kind.
enum Expectation<T: LedgerEntry> {
    Add(Result<EntryId, LedgerError>),
    Remove(Result<EntryId, LedgerError>),
    Edit {
        id: EntryId,
        response: Result<T, LedgerError>,
    },
    Get {
        id: EntryId,
        response: Result<Option<T>, LedgerError>,
    },
    Total(Result<f64, LedgerError>),
    Entries(Result<Entries<T>, LedgerError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock ledger with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation panics the background task, which surfaces in the test as a
/// `LedgerError::Dropped` on the client side.
pub struct MockLedger<T: LedgerEntry> {
    client: LedgerClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: LedgerEntry> Default for MockLedger<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LedgerEntry> MockLedger<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (LedgerRequest::Add { respond_to }, Some(Expectation::Add(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (LedgerRequest::Remove { respond_to }, Some(Expectation::Remove(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Edit { id, respond_to, .. },
                        Some(Expectation::Edit {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "edit sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (LedgerRequest::Total { respond_to }, Some(Expectation::Total(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Entries { respond_to },
                        Some(Expectation::Entries(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> LedgerClient<T> {
        self.client.clone()
    }

    pub fn expect_add(&mut self) -> ExpectationBuilder<T, EntryId> {
        self.builder(Expectation::Add)
    }

    pub fn expect_remove(&mut self) -> ExpectationBuilder<T, EntryId> {
        self.builder(Expectation::Remove)
    }

    pub fn expect_edit(&mut self, id: EntryId) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Edit { id, response })
    }

    pub fn expect_get(&mut self, id: EntryId) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_total(&mut self) -> ExpectationBuilder<T, f64> {
        self.builder(Expectation::Total)
    }

    pub fn expect_entries(&mut self) -> ExpectationBuilder<T, Entries<T>> {
        self.builder(Expectation::Entries)
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, LedgerError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that finishes registering one expectation.
pub struct ExpectationBuilder<T: LedgerEntry, R> {
    wrap: Box<dyn FnOnce(Result<R, LedgerError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: LedgerEntry, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LedgerError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, LedgerError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off the receiver, asserts on it and
/// answers through the enclosed oneshot sender.
pub fn create_mock_client<T: LedgerEntry>(
    buffer_size: usize,
) -> (LedgerClient<T>, mpsc::Receiver<LedgerRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<oneshot::Sender<Result<EntryId, LedgerError>>> {
    match receiver.recv().await {
        Some(LedgerRequest::Add { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<oneshot::Sender<Result<EntryId, LedgerError>>> {
    match receiver.recv().await {
        Some(LedgerRequest::Remove { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Edit request
pub async fn expect_edit<T: LedgerEntry>(
    receiver: &mut mpsc::Receiver<LedgerRequest<T>>,
) -> Option<(EntryId, T::Edit, oneshot::Sender<Result<T, LedgerError>>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Edit {
            id,
            edit,
            respond_to,
        }) => Some((id, edit, respond_to)),
        _ => None,
    }
}
