//! Nominal page geometry for the terminal host.
//!
//! There is no real viewport in a terminal, so scroll offsets are mapped
//! onto a fixed desktop layout: visible menu cards flow in a grid below the
//! hero section, and each scroll reports where those cards now sit.

use storefront_core::{ElementBox, RevealGroup, RevealTarget};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub viewport_height: f64,
    /// Document offset of the first menu row
    pub menu_top: f64,
    pub card_height: f64,
    pub row_gap: f64,
    pub columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            menu_top: 1100.0,
            card_height: 380.0,
            row_gap: 32.0,
            columns: 3,
        }
    }
}

impl PageLayout {
    /// Boxes of the visible menu cards, relative to the viewport top after
    /// scrolling to `offset_px`. Cards are keyed by their menu index.
    pub fn menu_boxes(&self, visible: &[usize], offset_px: u32) -> Vec<ElementBox> {
        let columns = self.columns.max(1);
        visible
            .iter()
            .enumerate()
            .map(|(slot, &index)| {
                let row = (slot / columns) as f64;
                ElementBox {
                    target: RevealTarget {
                        group: RevealGroup::MenuItem,
                        index,
                    },
                    top: self.menu_top + row * (self.card_height + self.row_gap)
                        - f64::from(offset_px),
                    height: self.card_height,
                }
            })
            .collect()
    }
}
