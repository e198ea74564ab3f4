//! Price input parsing.
//!
//! Prices are typed as free text in a locale where `,` is the decimal separator, so
//! `"12,50"` means twelve and a half. Anything that is not a finite number after that
//! normalization is rejected; it must never reach the ledger as NaN or infinity.
//!
//! Prices are also bounded by [`MAX_PRICE`] in magnitude, so the sum of any number of
//! them stays finite.

use super::ProductError;

/// Largest accepted price magnitude.
pub const MAX_PRICE: f64 = 1e12;

/// Whether `price` may be stored: finite and within `±MAX_PRICE`.
pub fn is_storable_price(price: f64) -> bool {
    price.is_finite() && price.abs() <= MAX_PRICE
}

/// Parses price text into a finite number no larger than [`MAX_PRICE`] in magnitude.
///
/// Every `,` is read as `.`, surrounding whitespace is ignored.
///
/// # Errors
/// [`ProductError::InvalidNumericInput`] carrying the original text.
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    raw.replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| is_storable_price(*price))
        .ok_or_else(|| ProductError::InvalidNumericInput(raw.to_string()))
}

/// Like [`parse_price`], but blank input means "no price" rather than an error.
pub fn parse_price_input(raw: &str) -> Result<Option<f64>, ProductError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_price(raw).map(Some)
}
