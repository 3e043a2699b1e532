//! The static content a storefront page is built from.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::menu::{Category, MenuItem};
use crate::testimonial::Testimonial;

/// Menu entries and testimonials, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub menu: Vec<MenuItem>,
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            menu_items = catalog.menu.len(),
            testimonials = catalog.testimonials.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Check that the page can be built from this catalog: at least one
    /// menu entry, at least one testimonial, and every price parses.
    pub fn validate(&self, glyph: &str) -> Result<(), CatalogError> {
        if self.menu.is_empty() {
            return Err(CatalogError::EmptyMenu);
        }
        if self.testimonials.is_empty() {
            return Err(CatalogError::NoTestimonials);
        }
        for item in &self.menu {
            item.price(glyph)
                .map_err(|source| CatalogError::InvalidPrice {
                    title: item.title.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Distinct categories in the order they first appear on the menu.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.menu {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            menu: vec![
                MenuItem::new("Jollof Rice", "₦3,500", "images/jollof-rice.jpg", "rice")
                    .with_description("Smoky party jollof with fried plantain"),
                MenuItem::new("Fried Rice", "₦3,500", "images/fried-rice.jpg", "rice"),
                MenuItem::new("Ofada Rice & Ayamase", "₦4,500", "images/ofada.jpg", "rice"),
                MenuItem::new("Pounded Yam & Egusi", "₦5,000", "images/pounded-yam.jpg", "swallow")
                    .with_description("Served with assorted meat"),
                MenuItem::new("Amala & Ewedu", "₦4,000", "images/amala.jpg", "swallow"),
                MenuItem::new("Small Chops Platter", "₦7,500", "images/small-chops.jpg", "snacks")
                    .with_description("Puff-puff, samosa, spring rolls and gizdodo"),
                MenuItem::new("Meat Pie", "₦1,000", "images/meat-pie.jpg", "snacks"),
                MenuItem::new("Chapman", "₦1,500", "images/chapman.jpg", "drinks"),
                MenuItem::new("Zobo", "₦800", "images/zobo.jpg", "drinks"),
                MenuItem::new("Party Pack (20 guests)", "₦120,000", "images/party-pack.jpg", "packages"),
            ],
            testimonials: vec![
                Testimonial::new(
                    "Adaeze O.",
                    "The jollof tasted exactly like the ones at home. Delivery was quick too!",
                )
                .with_role("Regular customer"),
                Testimonial::new(
                    "Tunde B.",
                    "Ordered the party pack for my daughter's birthday and everyone asked who catered.",
                )
                .with_role("Event host"),
                Testimonial::new(
                    "Kemi A.",
                    "Best small chops in town. The puff-puff is dangerous.",
                ),
            ],
        }
    }
}
