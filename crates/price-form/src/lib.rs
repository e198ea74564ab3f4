//! # Price Form
//!
//! A list of products, each with a name and a price, shown as table rows with a running
//! total that updates as the user types.
//!
//! ## Modules
//!
//! - **[model]**: [`Product`](model::Product) and its edit payload.
//! - **[product_ledger]**: the product store built on
//!   [`ledger_framework`], its errors and the comma-decimal price parser.
//! - **[clients]**: [`ProductClient`](clients::ProductClient), the handle views use.
//! - **[view]**: the [`ProductView`](view::ProductView) seam and a text-table implementation.
//! - **[form]**: [`ProductForm`](form::ProductForm), the controller between view and ledger.
//! - **[lifecycle]**: [`FormSystem`](lifecycle::FormSystem), which starts and stops the ledger.

pub mod clients;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod product_ledger;
pub mod view;
