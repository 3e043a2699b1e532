//! Menu entries and category tabs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PriceError;
use crate::price::Price;

/// Category tag carried by a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The active menu tab.
///
/// `All` is a reserved sentinel that matches every entry; its tab tag is
/// the literal string `all`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelection {
    #[default]
    All,
    Tag(Category),
}

impl CategorySelection {
    pub const ALL_TAG: &'static str = "all";

    /// Whether an entry tagged `category` is shown under this selection.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Tag(selected) => selected == category,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            CategorySelection::All => Self::ALL_TAG,
            CategorySelection::Tag(category) => category.as_str(),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Self::ALL_TAG) {
            Ok(CategorySelection::All)
        } else {
            Ok(CategorySelection::Tag(Category::new(s)))
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    /// Display price, e.g. `₦3,500`
    pub price_text: String,
    pub image_ref: String,
    pub category: Category,
    #[serde(default)]
    pub description: Option<String>,
}

impl MenuItem {
    pub fn new(
        title: impl Into<String>,
        price_text: impl Into<String>,
        image_ref: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price_text: price_text.into(),
            image_ref: image_ref.into(),
            category: Category::new(category),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unit price parsed from the display text.
    pub fn price(&self, glyph: &str) -> Result<Price, PriceError> {
        Price::parse_display(&self.price_text, glyph)
    }
}
