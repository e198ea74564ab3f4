//! # Ledger Framework
//!
//! This crate provides the building blocks for a small, live-updating ledger: an ordered
//! list of rows, each contributing an amount to a running total, edited from a user
//! interface one event at a time.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entry Layer** ([`LedgerEntry`]) - what a row is and how it changes
//! 2. **Store Layer** ([`Ledger`], [`LedgerActor`]) - id assignment, ordering, totals, and a
//!    single owner that serves the store
//! 3. **Interface Layer** ([`LedgerClient`], [`LedgerAccess`]) - the handle injected into views
//!
//! You write the row logic **once** in the entry trait; the framework handles ids, removal
//! order, totals and the request plumbing.
//!
//! ## Ledger Rules
//!
//! - New rows start blank and get the id chosen by the [`IdPolicy`] (`len() + 1` by default).
//! - Removal always takes the row with the highest id.
//! - Editing an unknown id is an error; it never creates a row.
//! - The total counts rows without an amount (or with a non-finite one) as zero.
//!
//! ## Quick Example
//!
//! ```rust
//! use ledger_framework::{Ledger, LedgerEntry};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Line { value: Option<f64> }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("never")]
//! struct Never;
//!
//! impl LedgerEntry for Line {
//!     type Edit = f64;
//!     type Error = Never;
//!     fn apply(&mut self, value: f64) -> Result<(), Never> { self.value = Some(value); Ok(()) }
//!     fn amount(&self) -> Option<f64> { self.value }
//! }
//!
//! let mut ledger = Ledger::<Line>::default();
//! let first = ledger.add();
//! ledger.add();
//! ledger.edit(first, 3.5).unwrap();
//! assert_eq!(ledger.total(), 3.5);
//!
//! let (removed, _) = ledger.remove_last().unwrap();
//! assert_eq!(removed.get(), 2);
//! ```
//!
//! ## Concurrency Model
//!
//! - One [`LedgerActor`] owns one ledger and processes requests **sequentially**
//! - Every request runs to completion before the next is looked at
//! - Any number of [`LedgerClient`] clones may send requests
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockLedger`](mock::MockLedger), which answers client
//! requests from scripted expectations so view logic can be tested without an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use client_trait::LedgerAccess;
pub use config::{IdPolicy, LedgerConfig};
pub use entry::{EntryId, LedgerEntry};
pub use error::LedgerError;
pub use ledger::{Entries, Ledger};
pub use message::{LedgerRequest, Response};
