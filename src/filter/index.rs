//! Ingredient filter index
//!
//! Keeps a searchable list of every registered ingredient and the subset
//! matching the current search text.

use tracing::debug;

use super::element::IngredientListElement;
use super::query::Query;
use crate::config::Config;
use crate::ingredients::{Ingredient, IngredientRegistry};

/// Receives notice that the registry's collections changed
pub trait FilterIndex {
    fn rebuild(&mut self);
}

/// Search index over the registry
///
/// Rebuilding is lazy: [`FilterIndex::rebuild`] only marks the index
/// stale, and the next query reloads elements from the registry it is
/// given.
pub struct IngredientFilter {
    elements: Vec<IngredientListElement>,
    stale: bool,
    filter_text: String,
    query: Query,
    filtered: Option<Vec<usize>>,
}

impl IngredientFilter {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            stale: true,
            filter_text: String::new(),
            query: Query::default(),
            filtered: None,
        }
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Returns true if the text changed
    pub fn set_filter_text(&mut self, text: &str) -> bool {
        if self.filter_text == text {
            return false;
        }
        self.filter_text = text.to_string();
        self.query = Query::parse(text);
        self.filtered = None;
        true
    }

    /// Drop cached results after a config change (edit mode, blacklist, color search)
    pub fn modes_changed(&mut self) {
        self.filtered = None;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Every element, ignoring the search text and blacklist
    pub fn all_elements<S: Ingredient>(
        &mut self,
        registry: &IngredientRegistry<S>,
    ) -> &[IngredientListElement] {
        self.refresh(registry);
        &self.elements
    }

    /// Elements matching the search text, minus hidden ones unless in edit mode
    pub fn ingredient_list<S: Ingredient>(
        &mut self,
        registry: &IngredientRegistry<S>,
        config: &Config,
    ) -> Vec<&IngredientListElement> {
        self.refresh(registry);

        if self.filtered.is_none() {
            let filtered: Vec<usize> = self
                .elements
                .iter()
                .enumerate()
                .filter(|(_, e)| config.edit_mode || !config.is_element_hidden(e))
                .filter(|(_, e)| self.query.matches(e, config.color_search))
                .map(|(i, _)| i)
                .collect();
            debug!(
                "Filter '{}' matched {} of {} ingredients",
                self.filter_text,
                filtered.len(),
                self.elements.len()
            );
            self.filtered = Some(filtered);
        }

        self.filtered
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.elements[i])
            .collect()
    }

    fn refresh<S: Ingredient>(&mut self, registry: &IngredientRegistry<S>) {
        if !self.stale {
            return;
        }
        self.elements = registry.list_elements();
        self.stale = false;
        self.filtered = None;
        debug!("Rebuilt ingredient filter with {} elements", self.elements.len());
    }
}

impl Default for IngredientFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterIndex for IngredientFilter {
    fn rebuild(&mut self) {
        self.stale = true;
        self.filtered = None;
    }
}
