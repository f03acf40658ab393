//! Product editing form
//!
//! Holds the raw text a user typed and turns it into a [`ProductDraft`].
//! Required fields are checked first, then numbers, then the expiry date.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rust_decimal::Decimal;
use shared::models::{Product, ProductDraft};
use std::str::FromStr;
use thiserror::Error;

/// Product names and SKUs
pub const MAX_NAME_LEN: usize = 200;

/// Prices are stored as JSON numbers (f64); these bounds keep every
/// accepted price exactly representable after a save and reload.
pub const MAX_PRICE_DECIMALS: u32 = 2;

/// 999 999 999.99
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999_999, MAX_PRICE_DECIMALS)
}

/// Expiry within this many days raises a warning (the product is still saved)
pub const EXPIRY_WARNING_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("price must have at most 2 decimals and not exceed {max}, got {value:?}")]
    PriceOutOfRange { value: String, max: Decimal },

    #[error("expiry date must be an ISO-8601 date, got {value:?}")]
    InvalidDate { value: String },
}

/// Raw form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock_quantity: String,
    pub low_stock_threshold: String,
    /// `YYYY-MM-DD` or RFC 3339
    pub expiry_date: Option<String>,
}

/// The product expires soon (or already has)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWarning {
    /// Days until expiry, rounded up; zero or negative once expired
    pub days_until_expiry: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub draft: ProductDraft,
    pub expiry_warning: Option<ExpiryWarning>,
}

impl ProductForm {
    /// Pre-fill the form with an existing product for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.price.to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            low_stock_threshold: product.low_stock_threshold.to_string(),
            expiry_date: product.expiry_date.clone(),
        }
    }

    /// Validate against the clock `now`, producing a draft for `category`
    pub fn validate(
        &self,
        category: &str,
        now: DateTime<Utc>,
    ) -> Result<ValidatedProduct, FormError> {
        let name = required_text(&self.name, "name")?;
        let sku = required_text(&self.sku, "sku")?;
        let price = required_text(&self.price, "price")?;
        let stock = required_text(&self.stock_quantity, "stock quantity")?;
        let threshold = required_text(&self.low_stock_threshold, "low stock threshold")?;

        let price = parse_price(price)?;
        let stock_quantity = parse_count(stock, "stock quantity")?;
        let low_stock_threshold = parse_count(threshold, "low stock threshold")?;

        let expiry = self
            .expiry_date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(parse_expiry)
            .transpose()?;

        let expiry_warning = expiry.and_then(|at| {
            let days = days_until(at, now);
            (days <= EXPIRY_WARNING_DAYS).then_some(ExpiryWarning {
                days_until_expiry: days,
            })
        });

        Ok(ValidatedProduct {
            draft: ProductDraft {
                name: name.to_string(),
                sku: sku.to_string(),
                price,
                stock_quantity,
                low_stock_threshold,
                category: category.to_string(),
                expiry_date: expiry.map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            },
            expiry_warning,
        })
    }
}

fn required_text<'a>(value: &'a str, field: &'static str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required { field });
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(FormError::TooLong {
            field,
            len,
            max: MAX_NAME_LEN,
        });
    }
    Ok(trimmed)
}

fn parse_price(raw: &str) -> Result<Decimal, FormError> {
    let price = match Decimal::from_str(raw) {
        Ok(price) if !price.is_sign_negative() => price.normalize(),
        _ => {
            return Err(FormError::InvalidNumber {
                field: "price",
                value: raw.to_string(),
            });
        }
    };
    if price.scale() > MAX_PRICE_DECIMALS || price > max_price() {
        return Err(FormError::PriceOutOfRange {
            value: raw.to_string(),
            max: max_price(),
        });
    }
    Ok(price)
}

fn parse_count(raw: &str, field: &'static str) -> Result<u32, FormError> {
    raw.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, FormError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
        .ok_or_else(|| FormError::InvalidDate {
            value: raw.to_string(),
        })
}

/// Whole days until `at`, rounded up
fn days_until(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (at - now).num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}
