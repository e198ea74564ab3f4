//! Domain-specific wrappers around the generic [`LedgerClient`](ledger_framework::LedgerClient).

pub mod product_client;

pub use product_client::ProductClient;
