//! An in-memory text table implementing [`ProductView`].

use super::{InputField, ProductView};
use crate::model::ProductId;
use std::fmt::{self, Display};

const NAME_PLACEHOLDER: &str = "Toode";
const PRICE_PLACEHOLDER: &str = "Hind";
const CURRENCY: &str = "€";

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl Row {
    fn new(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            price: String::new(),
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Name => &mut self.name,
            InputField::Price => &mut self.price,
        }
    }

    fn input(&self, field: InputField) -> &str {
        match field {
            InputField::Name => &self.name,
            InputField::Price => &self.price,
        }
    }
}

/// Rows in insertion order, a focused input and the last total shown.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    rows: Vec<Row>,
    focus: Option<(ProductId, InputField)>,
    total: Option<f64>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user replacing the text of an input. Returns `false` for an unknown row.
    pub fn type_into(&mut self, id: ProductId, field: InputField, text: &str) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                *row.input_mut(field) = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_ids(&self) -> Vec<ProductId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    pub fn focused(&self) -> Option<(ProductId, InputField)> {
        self.focus
    }

    /// The last total pushed by the controller.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    fn row_mut(&mut self, id: ProductId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl ProductView for TableView {
    fn insert_row(&mut self, id: ProductId) {
        self.rows.push(Row::new(id));
    }

    fn remove_row(&mut self, id: ProductId) {
        self.rows.retain(|row| row.id != id);
        if matches!(self.focus, Some((focused, _)) if focused == id) {
            self.focus = None;
        }
    }

    fn focus(&mut self, id: ProductId, field: InputField) {
        if self.rows.iter().any(|row| row.id == id) {
            self.focus = Some((id, field));
        }
    }

    fn input_value(&self, id: ProductId, field: InputField) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.input(field).to_string())
    }

    fn clear_input(&mut self, id: ProductId, field: InputField) {
        if let Some(row) = self.row_mut(id) {
            row.input_mut(field).clear();
        }
    }

    fn show_total(&mut self, total: f64) {
        self.total = Some(total);
    }
}

impl Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let name = if row.name.is_empty() {
                NAME_PLACEHOLDER
            } else {
                row.name.as_str()
            };
            let price = if row.price.is_empty() {
                PRICE_PLACEHOLDER
            } else {
                row.price.as_str()
            };
            let marker = match self.focus {
                Some((id, _)) if id == row.id => ">",
                _ => " ",
            };
            writeln!(
                f,
                "{marker}{:>3}  {name:<24} {price:>10} {currency}",
                row.id.get(),
                currency = CURRENCY
            )?;
        }
        write!(
            f,
            "     {:<24} {:>10} {currency}",
            "",
            self.total.unwrap_or(0.0),
            currency = CURRENCY
        )
    }
}
