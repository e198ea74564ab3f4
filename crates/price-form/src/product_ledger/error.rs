//! Error types for the product ledger.

use crate::model::ProductId;
use ledger_framework::LedgerError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// An edit or lookup referenced a product that does not exist.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Price text that is not a finite number once `,` is read as the decimal separator.
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumericInput(String),

    /// A removal was requested while no products exist.
    #[error("Cannot remove a product from an empty ledger")]
    EmptyLedgerRemoval,

    /// The ledger could not be reached.
    #[error("Ledger unavailable: {0}")]
    LedgerUnavailable(String),
}

impl From<LedgerError> for ProductError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::UnknownEntry(id) => ProductError::UnknownProduct(id),
            LedgerError::Empty => ProductError::EmptyLedgerRemoval,
            LedgerError::EntryError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::LedgerUnavailable(other.to_string()),
            },
            other @ (LedgerError::Closed | LedgerError::Dropped) => {
                ProductError::LedgerUnavailable(other.to_string())
            }
        }
    }
}
