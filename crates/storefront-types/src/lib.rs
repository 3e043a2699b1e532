//! Storefront Types - Core types for the Cilla Bites storefront
//!
//! These are the plain data types shared by the page model and the
//! terminal host. Nothing in this crate holds mutable page state.
//!
//! ## Key Concepts
//!
//! - **Price**: whole currency units parsed from display text like `₦3,500`
//! - **MenuItem**: one entry on the menu, tagged with a category
//! - **CategorySelection**: the active menu tab, `All` or a single category
//! - **Testimonial**: one customer quote in the rotating slider
//! - **Catalog**: the static menu and testimonials a page is built from
//! - **LineId**: opaque identity of a cart line, stable across removals

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod ids;
pub mod menu;
pub mod price;
pub mod testimonial;

pub use catalog::Catalog;
pub use error::{CatalogError, PriceError};
pub use ids::LineId;
pub use menu::{Category, CategorySelection, MenuItem};
pub use price::{Price, NAIRA};
pub use testimonial::Testimonial;
