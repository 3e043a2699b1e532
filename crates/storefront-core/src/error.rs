//! Error types for the storefront page model.

use storefront_types::{CatalogError, CategorySelection, PriceError};
use thiserror::Error;

/// Errors from cart store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("cart line {index} out of range (cart has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

/// Errors from the menu filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("no menu tab for category {0}")]
    UnknownCategory(CategorySelection),

    #[error("menu item {index} out of range (menu has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },
}

/// Errors from the testimonial rotator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotatorError {
    #[error("testimonial rotator needs at least one testimonial")]
    NoTestimonials,

    #[error("testimonial {index} out of range ({len} testimonials)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors from composing a checkout link.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid checkout endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Errors from loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level error for the page model.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Rotator(#[from] RotatorError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for page model operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
