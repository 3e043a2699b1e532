//! Checkout Composer
//!
//! Turns the cart into a plain-text order message and a pre-filled
//! messaging link:
//!
//! ```text
//! <greeting>
//!
//! • <title> - Quantity: <qty>
//! ...
//!
//! Total: <formatted total>
//!
//! <closing>
//! ```
//!
//! Per-line prices are not part of the message; only the grand total is,
//! taken verbatim from the rendered total display. The message is
//! percent-encoded into the `text` query parameter of
//! `<endpoint>/<destination>`.
//!
//! Composing never confirms delivery. The page clears the cart as soon as
//! a link has been composed.

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::CartStore;
use crate::config::CheckoutConfig;
use crate::error::CheckoutError;

/// Bytes escaped in the `text` query value. Leaves the same marks literal
/// as a browser's `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A composed checkout link, ready to open in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLink {
    pub url: String,
    pub message: String,
    pub line_count: usize,
    pub composed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutComposer {
    base: String,
    greeting: String,
    closing: String,
}

impl CheckoutComposer {
    pub fn new(config: &CheckoutConfig) -> Result<Self, CheckoutError> {
        let endpoint = url::Url::parse(&config.endpoint).map_err(|e| {
            CheckoutError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            }
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(CheckoutError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let base = format!(
            "{}/{}",
            config.endpoint.trim_end_matches('/'),
            config.destination
        );

        Ok(Self {
            base,
            greeting: config.greeting.clone(),
            closing: config.closing.clone(),
        })
    }

    /// Destination link without the message, e.g. `https://wa.me/234...`
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Build the order message.
    pub fn message(&self, cart: &CartStore, total_text: &str) -> String {
        let mut message = format!("{}\n\n", self.greeting);
        for line in cart.lines() {
            message.push_str(&format!("• {} - Quantity: {}\n", line.title, line.quantity));
        }
        message.push_str(&format!("\nTotal: {}\n\n", total_text));
        message.push_str(&self.closing);
        message
    }

    /// Compose the checkout link. An empty cart composes nothing.
    pub fn compose(&self, cart: &CartStore, total_text: &str) -> Result<CheckoutLink, CheckoutError> {
        if cart.is_empty() {
            debug!("Checkout attempted with empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let message = self.message(cart, total_text);
        let url = format!(
            "{}?text={}",
            self.base,
            utf8_percent_encode(&message, QUERY_VALUE)
        );

        info!(
            lines = cart.len(),
            units = cart.unit_count(),
            total = %total_text,
            "Composed checkout link"
        );

        Ok(CheckoutLink {
            url,
            message,
            line_count: cart.len(),
            composed_at: Utc::now(),
        })
    }
}
