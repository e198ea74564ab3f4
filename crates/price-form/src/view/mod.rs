//! # Views
//!
//! The presentation side of the form. The ledger never calls into a view; the
//! [`ProductForm`](crate::form::ProductForm) controller reads user input from it and pushes
//! ledger changes back into it.

pub mod table;

pub use table::TableView;

use crate::model::ProductId;
use serde::{Deserialize, Serialize};

/// The two inputs on every product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Name,
    Price,
}

/// What the controller needs from a rendering surface.
///
/// Rows are keyed by product id, the same id the ledger hands out.
pub trait ProductView {
    /// Appends an empty row for `id` after the existing rows.
    fn insert_row(&mut self, id: ProductId);

    fn remove_row(&mut self, id: ProductId);

    /// Moves keyboard focus to one input of a row.
    fn focus(&mut self, id: ProductId, field: InputField);

    /// The current text of an input, or `None` if the row does not exist.
    fn input_value(&self, id: ProductId, field: InputField) -> Option<String>;

    fn clear_input(&mut self, id: ProductId, field: InputField);

    fn show_total(&mut self, total: f64);
}
