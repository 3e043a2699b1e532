//! Menu Filter
//!
//! Tabs are `all` plus every category found on the menu, in first-seen
//! order. Selecting a tab makes it the only active one and shows an entry
//! iff the selection is `all` or the entry carries the selected category.

use serde::{Deserialize, Serialize};
use storefront_types::{Catalog, Category, CategorySelection};
use tracing::debug;

use crate::error::FilterError;

/// One menu tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub selection: CategorySelection,
    pub active: bool,
}

/// One menu entry with its current visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntryView {
    pub index: usize,
    pub title: String,
    pub price_text: String,
    pub category: Category,
    pub visible: bool,
}

/// Tabs and entries as currently filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuView {
    pub tabs: Vec<TabView>,
    pub entries: Vec<MenuEntryView>,
}

impl MenuView {
    pub fn visible_titles(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.title.as_str())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct MenuFilter {
    tabs: Vec<CategorySelection>,
    entries: Vec<Category>,
    active: CategorySelection,
    visible: Vec<bool>,
}

impl MenuFilter {
    /// Build a filter with `all` active.
    pub fn new(catalog: &Catalog) -> Self {
        let mut tabs = vec![CategorySelection::All];
        tabs.extend(catalog.categories().into_iter().map(CategorySelection::Tag));

        let entries: Vec<Category> = catalog.menu.iter().map(|item| item.category.clone()).collect();
        let visible = vec![true; entries.len()];

        Self {
            tabs,
            entries,
            active: CategorySelection::All,
            visible,
        }
    }

    /// Build a filter whose initially active tab is `initial`.
    pub fn with_initial(catalog: &Catalog, initial: CategorySelection) -> Result<Self, FilterError> {
        let mut filter = Self::new(catalog);
        filter.select(initial)?;
        Ok(filter)
    }

    /// Activate a tab and recompute every entry's visibility.
    pub fn select(&mut self, selection: CategorySelection) -> Result<&[bool], FilterError> {
        if !self.tabs.contains(&selection) {
            return Err(FilterError::UnknownCategory(selection));
        }

        for (visible, category) in self.visible.iter_mut().zip(&self.entries) {
            *visible = selection.matches(category);
        }

        debug!(
            category = %selection,
            shown = self.visible.iter().filter(|v| **v).count(),
            "Selected menu tab"
        );

        self.active = selection;
        Ok(&self.visible)
    }

    pub fn active(&self) -> &CategorySelection {
        &self.active
    }

    pub fn tabs(&self) -> &[CategorySelection] {
        &self.tabs
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn view(&self, catalog: &Catalog) -> MenuView {
        MenuView {
            tabs: self
                .tabs
                .iter()
                .map(|selection| TabView {
                    selection: selection.clone(),
                    active: *selection == self.active,
                })
                .collect(),
            entries: catalog
                .menu
                .iter()
                .enumerate()
                .map(|(index, item)| MenuEntryView {
                    index,
                    title: item.title.clone(),
                    price_text: item.price_text.clone(),
                    category: item.category.clone(),
                    visible: self.is_visible(index),
                })
                .collect(),
        }
    }
}
