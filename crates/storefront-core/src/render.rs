//! Cart Renderer
//!
//! Projects the cart store into a [`CartView`]. There is no diffing: every
//! render builds a fresh view, and every line gets fresh control bindings
//! keyed by its current index. A view taken before a mutation must not be
//! used to address lines after it.

use std::fmt;

use serde::{Deserialize, Serialize};
use storefront_types::{LineId, Price};

use crate::cart::CartStore;

/// Per-line control kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAction {
    Decrement,
    Increment,
    Remove,
}

impl LineAction {
    pub const ALL: [LineAction; 3] = [LineAction::Decrement, LineAction::Increment, LineAction::Remove];

    /// Label shown on the control
    pub fn label(&self) -> &'static str {
        match self {
            LineAction::Decrement => "-",
            LineAction::Increment => "+",
            LineAction::Remove => "×",
        }
    }
}

/// A control bound to a line at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBinding {
    pub action: LineAction,
    /// Correlation key: the line's index when this view was rendered
    pub index: usize,
    pub line: LineId,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    pub index: usize,
    pub id: LineId,
    pub title: String,
    pub image_ref: String,
    pub image_alt: String,
    pub price_text: String,
    pub quantity: u32,
    pub subtotal_text: String,
    pub controls: Vec<ControlBinding>,
}

/// Full projection of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// Count badge: number of lines
    pub count: usize,
    pub lines: Vec<LineView>,
    pub total: Price,
    pub total_text: String,
    /// Set only when the cart has no lines
    pub empty_message: Option<String>,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve a control by action and index against this render.
    pub fn binding(&self, action: LineAction, index: usize) -> Option<&ControlBinding> {
        self.lines
            .get(index)?
            .controls
            .iter()
            .find(|binding| binding.action == action)
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart ({})", self.count)?;
        if let Some(message) = &self.empty_message {
            writeln!(f, "  {}", message)?;
        }
        for line in &self.lines {
            writeln!(
                f,
                "  [{}] {} @ {}  [-] {} [+] [×]  = {}",
                line.index, line.title, line.price_text, line.quantity, line.subtotal_text
            )?;
        }
        write!(f, "Total: {}", self.total_text)
    }
}

/// Builds cart views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRenderer {
    glyph: String,
    empty_message: String,
}

impl CartRenderer {
    pub fn new(glyph: impl Into<String>, empty_message: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            empty_message: empty_message.into(),
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Format an amount the way the total display shows it.
    pub fn format(&self, price: Price) -> String {
        price.format(&self.glyph)
    }

    pub fn render(&self, cart: &CartStore) -> CartView {
        if cart.is_empty() {
            return CartView {
                count: 0,
                lines: Vec::new(),
                total: Price::ZERO,
                total_text: self.format(Price::ZERO),
                empty_message: Some(self.empty_message.clone()),
            };
        }

        let lines = cart
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| LineView {
                index,
                id: line.id,
                title: line.title.clone(),
                image_ref: line.image_ref.clone(),
                image_alt: line.title.clone(),
                price_text: self.format(line.unit_price),
                quantity: line.quantity,
                subtotal_text: self.format(line.subtotal()),
                controls: LineAction::ALL
                    .iter()
                    .map(|&action| ControlBinding {
                        action,
                        index,
                        line: line.id,
                    })
                    .collect(),
            })
            .collect();

        let total = cart.total();
        CartView {
            count: cart.len(),
            lines,
            total,
            total_text: self.format(total),
            empty_message: None,
        }
    }
}
