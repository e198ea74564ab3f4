//! Pure data structures for the price form.

pub mod product;

pub use product::*;
