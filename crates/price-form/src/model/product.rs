use ledger_framework::EntryId;
use serde::{Deserialize, Serialize};

/// Identifier of a product row; the ledger's 1-based entry id.
pub type ProductId = EntryId;

/// Represents one row of the price form.
///
/// # Ledger Framework
/// This struct implements the [`LedgerEntry`](ledger_framework::LedgerEntry) trait,
/// allowing it to be stored in a [`Ledger`](ledger_framework::Ledger).
///
/// See [`impl LedgerEntry for Product`](#impl-LedgerEntry-for-Product) for details on
/// the edit payload ([`ProductEdit`]) and how the price feeds the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// `None` until a valid price has been entered; counts as zero in the total.
    pub price: Option<f64>,
}

impl Product {
    /// Creates a Product with both fields set.
    ///
    /// The ledger never creates populated products; this is for comparisons in tests and
    /// for rendering.
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A single field change on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductEdit {
    Name(String),
    /// An already-parsed price; `None` clears it. Free-text input goes through
    /// [`parse_price`](crate::product_ledger::parse_price) first.
    Price(Option<f64>),
}
