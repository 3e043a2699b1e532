//! # storefront-core
//!
//! Page model for the Cilla Bites storefront: the shopping cart, the menu
//! filter, the testimonial slider, checkout link composition and the
//! decorative effects, without any browser attached.
//!
//! ## Components
//!
//! - [`CartStore`]: ordered cart lines with add, increment, decrement,
//!   remove, clear and a total that is always recomputed
//! - [`CartRenderer`]: full, non-diffing projection of the cart into a
//!   [`CartView`] with per-line control bindings
//! - [`MenuFilter`]: `all` or one category, drives entry visibility
//! - [`TestimonialRotator`] and [`AutoAdvance`]: wrapping index plus a
//!   cancellable repeating ticker
//! - [`CheckoutComposer`]: order message and messaging-service link
//! - [`Storefront`]: owns all of the above and maps [`PageEvent`]s to
//!   [`PageEffect`]s, one event at a time
//!
//! ## Example
//!
//! ```rust
//! use storefront_core::{PageEffect, PageEvent, Storefront, StorefrontConfig};
//! use storefront_types::Catalog;
//!
//! let mut page = Storefront::new(Catalog::default(), StorefrontConfig::default()).unwrap();
//! page.init();
//!
//! page.handle(PageEvent::AddToCart { item: 0 });
//! assert_eq!(page.cart_view().total_text, "₦3,500");
//!
//! let effects = page.handle(PageEvent::Checkout);
//! assert!(matches!(effects[0], PageEffect::OpenExternal { .. }));
//! assert!(page.cart().is_empty());
//! ```

#![deny(unsafe_code)]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod effects;
pub mod error;
pub mod filter;
pub mod page;
pub mod render;
pub mod rotator;

pub use cart::{CartLine, CartStore};
pub use checkout::{CheckoutComposer, CheckoutLink};
pub use config::{
    CheckoutConfig, CurrencyConfig, EffectsConfig, LoggingConfig, PageConfig, StorefrontConfig,
    TestimonialConfig,
};
pub use effects::{
    Decorations, ElementBox, Particle, Reveal, RevealGroup, RevealTarget, ScrollReveal, Sparkle,
};
pub use error::{
    CartError, CheckoutError, ConfigError, FilterError, RotatorError, StorefrontError,
    StorefrontResult,
};
pub use filter::{MenuEntryView, MenuFilter, MenuView, TabView};
pub use page::{ContactForm, PageEffect, PageEvent, Storefront};
pub use render::{CartRenderer, CartView, ControlBinding, LineAction, LineView};
pub use rotator::{AutoAdvance, TestimonialRotator, TestimonialView, Tick};
