//! # Product Ledger
//!
//! The authoritative store behind the price form: product id -> {name, price}.
//!
//! ## Structure
//!
//! - [`entity`] - [`LedgerEntry`](ledger_framework::LedgerEntry) implementation for [`Product`]
//! - [`error`] - [`ProductError`], the error taxonomy the view deals with
//! - [`price`] - [`parse_price`], the comma-decimal price parser used on the edit path
//! - [`new()`] - Factory function that creates the ledger actor and its client
//!
//! ## Rules
//!
//! - A product is only ever created blank (`name: ""`, no price) and gets id `len() + 1`.
//! - Removal takes the product with the highest id; on an empty ledger it fails with
//!   [`ProductError::EmptyLedgerRemoval`].
//! - Editing an unknown id fails with [`ProductError::UnknownProduct`].
//! - The total counts unset prices as zero.
//!
//! ## Usage
//!
//! ```rust
//! use ledger_framework::LedgerConfig;
//! use price_form::clients::ProductClient;
//! use price_form::product_ledger;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_ledger::new(&LedgerConfig::default());
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let id = client.add_product().await?;
//!     client.edit_price_input(id, "12,50").await?;
//!     assert_eq!(client.total_price().await?, 12.5);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod price;

pub use error::*;
pub use price::*;

use crate::model::Product;
use ledger_framework::{Ledger, LedgerActor, LedgerClient, LedgerConfig};

/// The synchronous product store, for callers that own it directly.
pub type ProductLedger = Ledger<Product>;

/// Creates a new product ledger actor and its client.
pub fn new(config: &LedgerConfig) -> (LedgerActor<Product>, LedgerClient<Product>) {
    LedgerActor::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductEdit, ProductId};
    use ledger_framework::LedgerError;

    #[test]
    fn bread_scenario_totals_four_seventy_five() {
        let mut ledger = ProductLedger::default();
        let bread = ledger.add();
        ledger
            .edit(bread, ProductEdit::Name("Bread".into()))
            .unwrap();
        ledger
            .edit(bread, ProductEdit::Price(Some(parse_price("3,50").unwrap())))
            .unwrap();
        let second = ledger.add();
        ledger
            .edit(second, ProductEdit::Price(Some(parse_price("1,25").unwrap())))
            .unwrap();

        assert_eq!(ledger.total(), 4.75);
    }

    #[test]
    fn removing_the_only_product_empties_the_ledger() {
        let mut ledger = ProductLedger::default();
        let id = ledger.add();
        let (removed, product) = ledger.remove_last().unwrap();
        assert_eq!(removed, id);
        assert_eq!(product, Product::default());
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn editing_a_never_created_id_is_unknown_product() {
        let mut ledger = ProductLedger::default();
        let err = ledger
            .edit(ProductId::new(1), ProductEdit::Name("x".into()))
            .unwrap_err();
        assert_eq!(
            ProductError::from(err),
            ProductError::UnknownProduct(ProductId::new(1))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn removing_from_empty_ledger_is_reported() {
        let mut ledger = ProductLedger::default();
        let err = ledger.remove_last().unwrap_err();
        assert!(matches!(err, LedgerError::Empty));
        assert_eq!(ProductError::from(err), ProductError::EmptyLedgerRemoval);
    }
}
