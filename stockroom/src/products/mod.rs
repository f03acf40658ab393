//! Product list operations and the product editing form
//!
//! - [`list`] - pure functions over an in-memory product list
//! - [`form`] - raw form input validation into a [`ProductDraft`](shared::ProductDraft)

pub mod form;
pub mod list;

pub use form::{ExpiryWarning, FormError, ProductForm, ValidatedProduct};
pub use list::StockSummary;
