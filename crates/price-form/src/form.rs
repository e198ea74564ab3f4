//! # Product Form Controller
//!
//! Keeps a [`ProductView`] and the product ledger in step. Every user action becomes one
//! call into the ledger followed by the matching view update:
//!
//! | Event | Ledger | View |
//! |-------|--------|------|
//! | page load | add | insert row, focus name |
//! | add button | add | insert row, focus name |
//! | delete button | remove last | remove that row; re-add a blank row if none are left; show total |
//! | name typed | edit name | - |
//! | price typed | edit price | clear the input if rejected; show total |

use crate::clients::ProductClient;
use crate::model::ProductId;
use crate::product_ledger::ProductError;
use crate::view::{InputField, ProductView};
use tracing::{debug, info, instrument};

/// A user action, as delivered by the view's event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Loaded,
    AddClicked,
    DeleteClicked,
    Input { id: ProductId, field: InputField },
}

/// The controller for one form.
pub struct ProductForm<V: ProductView> {
    client: ProductClient,
    view: V,
}

impl<V: ProductView> ProductForm<V> {
    pub fn new(client: ProductClient, view: V) -> Self {
        Self { client, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Drops the ledger handle and hands the view back.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Routes one event to its handler.
    pub async fn handle(&mut self, event: FormEvent) -> Result<(), ProductError> {
        match event {
            FormEvent::Loaded => self.start().await.map(drop),
            FormEvent::AddClicked => self.add_row().await.map(drop),
            FormEvent::DeleteClicked => self.delete_row().await.map(drop),
            FormEvent::Input { id, field } => self.on_input(id, field).await,
        }
    }

    /// Page load: the form always opens with one empty row.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<ProductId, ProductError> {
        let id = self.add_row().await?;
        self.refresh_total().await?;
        info!(%id, "Form ready");
        Ok(id)
    }

    /// Adds a product and its row, and focuses the row's name input.
    #[instrument(skip(self))]
    pub async fn add_row(&mut self) -> Result<ProductId, ProductError> {
        let id = self.client.add_product().await?;
        self.view.insert_row(id);
        self.view.focus(id, InputField::Name);
        Ok(id)
    }

    /// Removes the last product and its row.
    ///
    /// If that leaves the ledger empty a fresh blank row is added, so the form never shows
    /// zero rows. Returns the id that was removed.
    #[instrument(skip(self))]
    pub async fn delete_row(&mut self) -> Result<ProductId, ProductError> {
        let id = self.client.remove_product().await?;
        self.view.remove_row(id);

        if self.client.products().await?.is_empty() {
            debug!("Ledger empty, recreating a row");
            self.add_row().await?;
        }

        self.refresh_total().await?;
        Ok(id)
    }

    /// Reads the input that changed and stores it.
    ///
    /// A rejected price clears the price input and the total is refreshed before the
    /// [`ProductError::InvalidNumericInput`] is returned.
    #[instrument(skip(self))]
    pub async fn on_input(&mut self, id: ProductId, field: InputField) -> Result<(), ProductError> {
        let value = self
            .view
            .input_value(id, field)
            .ok_or(ProductError::UnknownProduct(id))?;

        match field {
            InputField::Name => {
                self.client.edit_name(id, value).await?;
            }
            InputField::Price => {
                let stored = self.client.edit_price_input(id, &value).await;
                if let Err(ProductError::InvalidNumericInput(_)) = stored {
                    self.view.clear_input(id, InputField::Price);
                }
                self.refresh_total().await?;
                stored?;
            }
        }
        Ok(())
    }

    /// Pushes the current ledger total to the view.
    pub async fn refresh_total(&mut self) -> Result<f64, ProductError> {
        let total = self.client.total_price().await?;
        self.view.show_total(total);
        Ok(total)
    }
}
