//! LedgerEntry trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::{is_storable_price, ProductError};
use crate::model::{Product, ProductEdit};
use ledger_framework::LedgerEntry;

impl LedgerEntry for Product {
    type Edit = ProductEdit;
    type Error = ProductError;

    /// Sets one field unconditionally.
    ///
    /// A price that is non-finite or beyond [`MAX_PRICE`](super::MAX_PRICE) is refused and
    /// the stored price is left as it was.
    fn apply(&mut self, edit: ProductEdit) -> Result<(), ProductError> {
        match edit {
            ProductEdit::Name(name) => self.name = name,
            ProductEdit::Price(Some(price)) if !is_storable_price(price) => {
                return Err(ProductError::InvalidNumericInput(price.to_string()));
            }
            ProductEdit::Price(price) => self.price = price,
        }
        Ok(())
    }

    fn amount(&self) -> Option<f64> {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_price_are_independent() {
        let mut product = Product::default();
        product.apply(ProductEdit::Price(Some(3.5))).unwrap();
        product.apply(ProductEdit::Name("Bread".into())).unwrap();
        assert_eq!(product, Product::new("Bread", Some(3.5)));
    }

    #[test]
    fn nan_price_is_refused() {
        let mut product = Product::new("Milk", Some(1.0));
        let result = product.apply(ProductEdit::Price(Some(f64::NAN)));
        assert!(matches!(result, Err(ProductError::InvalidNumericInput(_))));
        assert_eq!(product.price, Some(1.0));
    }

    #[test]
    fn oversized_price_is_refused() {
        let mut product = Product::new("Milk", Some(1.0));
        let result = product.apply(ProductEdit::Price(Some(1e308)));
        assert!(matches!(result, Err(ProductError::InvalidNumericInput(_))));
        assert_eq!(product.price, Some(1.0));
    }

    #[test]
    fn price_can_be_cleared() {
        let mut product = Product::new("Milk", Some(1.0));
        product.apply(ProductEdit::Price(None)).unwrap();
        assert_eq!(product.amount(), None);
    }
}
