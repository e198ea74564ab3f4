//! # Product Client
//!
//! Provides a high-level API for interacting with the product ledger.
//! It wraps a `LedgerClient<Product>` and exposes the operations the form needs, including
//! the validating price-input path.
use crate::model::{Product, ProductEdit, ProductId};
use crate::product_ledger::{parse_price_input, ProductError};
use async_trait::async_trait;
use ledger_framework::{Entries, LedgerAccess, LedgerClient, LedgerError};
use tracing::{debug, instrument, warn};

/// Client for interacting with the product ledger.
#[derive(Clone)]
pub struct ProductClient {
    inner: LedgerClient<Product>,
}

impl ProductClient {
    pub fn new(inner: LedgerClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LedgerAccess<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &LedgerClient<Product> {
        &self.inner
    }

    fn map_error(e: LedgerError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Adds a blank product and returns its id.
    #[instrument(skip(self))]
    pub async fn add_product(&self) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        Ok(self.inner.add().await?)
    }

    /// Removes the product with the highest id and returns that id.
    #[instrument(skip(self))]
    pub async fn remove_product(&self) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        Ok(self.inner.remove().await?)
    }

    /// Applies an already-typed edit.
    #[instrument(skip(self))]
    pub async fn edit_product(
        &self,
        id: ProductId,
        edit: ProductEdit,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.edit(id, edit).await?)
    }

    pub async fn edit_name(
        &self,
        id: ProductId,
        name: impl Into<String>,
    ) -> Result<Product, ProductError> {
        self.edit_product(id, ProductEdit::Name(name.into())).await
    }

    /// Stores a price typed as free text and returns what was stored.
    ///
    /// Blank text clears the price. Text that does not parse clears the price as well and
    /// then fails with [`ProductError::InvalidNumericInput`], so the product is left with no
    /// price rather than a poisoned one.
    #[instrument(skip(self))]
    pub async fn edit_price_input(
        &self,
        id: ProductId,
        raw: &str,
    ) -> Result<Option<f64>, ProductError> {
        match parse_price_input(raw) {
            Ok(price) => {
                self.edit_product(id, ProductEdit::Price(price)).await?;
                Ok(price)
            }
            Err(e) => {
                warn!(%id, error = %e, "Rejected price input");
                self.edit_product(id, ProductEdit::Price(None)).await?;
                Err(e)
            }
        }
    }

    pub async fn total_price(&self) -> Result<f64, ProductError> {
        self.total().await
    }

    pub async fn products(&self) -> Result<Entries<Product>, ProductError> {
        self.entries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_framework::mock::{
        create_mock_client, expect_add, expect_edit, expect_remove, MockLedger,
    };

    #[tokio::test]
    async fn test_price_input_is_normalized_before_sending() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .edit_price_input(ProductId::new(1), "12,50")
                .await
        });

        let (id, edit, responder) = expect_edit(&mut receiver)
            .await
            .expect("Expected Edit request");
        assert_eq!(id, ProductId::new(1));
        assert_eq!(edit, ProductEdit::Price(Some(12.5)));
        responder
            .send(Ok(Product::new("", Some(12.5))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(12.5)));
    }

    #[tokio::test]
    async fn test_invalid_price_clears_and_reports() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .edit_price_input(ProductId::new(2), "abc")
                .await
        });

        let (id, edit, responder) = expect_edit(&mut receiver)
            .await
            .expect("Expected Edit request");
        assert_eq!(id, ProductId::new(2));
        assert_eq!(edit, ProductEdit::Price(None));
        responder.send(Ok(Product::default())).unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::InvalidNumericInput("abc".to_string()))
        );
    }

    #[tokio::test]
    async fn test_unknown_product_is_surfaced() {
        let mut mock = MockLedger::<Product>::new();
        mock.expect_edit(ProductId::new(5))
            .return_err(LedgerError::UnknownEntry(ProductId::new(5)));

        let client = ProductClient::new(mock.client());
        let result = client.edit_name(ProductId::new(5), "Tea").await;

        assert_eq!(result, Err(ProductError::UnknownProduct(ProductId::new(5))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_ledger_is_unavailable() {
        let mut mock = MockLedger::<Product>::new();
        mock.expect_add().return_err(LedgerError::Closed);

        let client = ProductClient::new(mock.client());
        assert!(matches!(
            client.add_product().await,
            Err(ProductError::LedgerUnavailable(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_and_remove_are_forwarded() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            let added = product_client.add_product().await;
            let removed = product_client.remove_product().await;
            (added, removed)
        });

        let responder = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        responder.send(Ok(ProductId::new(1))).unwrap();

        let responder = expect_remove(&mut receiver)
            .await
            .expect("Expected Remove request");
        responder.send(Err(LedgerError::Empty)).unwrap();

        let (added, removed) = task.await.unwrap();
        assert_eq!(added, Ok(ProductId::new(1)));
        assert_eq!(removed, Err(ProductError::EmptyLedgerRemoval));
    }
}
