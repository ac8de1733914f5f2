use crate::ingredients::{Ingredient, IngredientHelper, IngredientType};

/// Searchable snapshot of one registered ingredient
///
/// Points back into the registry by type and position, so elements go
/// stale whenever the registry's collections change. A stale element no
/// longer resolves once its position holds a different unique id.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientListElement {
    ingredient_type: IngredientType,
    index: usize,
    display_name: String,
    search_name: String,
    unique_id: String,
    wildcard_id: String,
    mod_id: String,
    color_names: Vec<String>,
}

impl IngredientListElement {
    pub fn new<V: Ingredient>(index: usize, ingredient: &V, helper: &dyn IngredientHelper<V>) -> Self {
        let display_name = helper.display_name(ingredient);
        Self {
            ingredient_type: IngredientType::of::<V>(),
            index,
            search_name: display_name.to_lowercase(),
            display_name,
            unique_id: helper.unique_id(ingredient),
            wildcard_id: helper.wildcard_id(ingredient),
            mod_id: helper.mod_id(ingredient),
            color_names: helper
                .color_names(ingredient)
                .into_iter()
                .map(|c| c.to_lowercase())
                .collect(),
        }
    }

    pub fn ingredient_type(&self) -> IngredientType {
        self.ingredient_type
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Lower-cased display name
    pub fn search_name(&self) -> &str {
        &self.search_name
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn wildcard_id(&self) -> &str {
        &self.wildcard_id
    }

    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }

    pub fn color_names(&self) -> &[String] {
        &self.color_names
    }
}
