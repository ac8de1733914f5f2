//! Ingredient Registry
//!
//! Holds every ingredient collection, the helper and renderer for each
//! ingredient type, and the fuel/reagent sets derived from the base stack
//! type when the registry is built.

use tracing::{debug, error, info};

use super::classify::StackClassifier;
use super::store::{CapabilityMap, IngredientStore};
use super::types::{Ingredient, IngredientType, SharedHelper, SharedRenderer};
use crate::error::RegistryError;
use crate::filter::{FilterIndex, IngredientListElement};

/// Catalog of ingredients, keyed by ingredient type
///
/// `S` is the base stack type. Its values present at construction are
/// split into fuels and brewing reagents once; later additions are never
/// classified.
pub struct IngredientRegistry<S: Ingredient> {
    ingredients: IngredientStore,
    helpers: CapabilityMap,
    renderers: CapabilityMap,
    fuels: Vec<S>,
    reagents: Vec<S>,
}

impl<S: Ingredient> IngredientRegistry<S> {
    pub(crate) fn new(
        ingredients: IngredientStore,
        helpers: CapabilityMap,
        renderers: CapabilityMap,
        classifier: &dyn StackClassifier<S>,
    ) -> Self {
        let mut registry = Self {
            ingredients,
            helpers,
            renderers,
            fuels: Vec::new(),
            reagents: Vec::new(),
        };
        registry.classify_stacks(classifier);

        info!(
            "Ingredient registry ready: {} types, {} fuels, {} reagents",
            registry.ingredients.types().len(),
            registry.fuels.len(),
            registry.reagents.len()
        );
        registry
    }

    fn classify_stacks(&mut self, classifier: &dyn StackClassifier<S>) {
        let Some(stacks) = self.ingredients.get::<S>() else {
            debug!("No {} ingredients to classify", IngredientType::of::<S>());
            return;
        };
        let helper = self
            .helpers
            .get::<SharedHelper<S>>(IngredientType::of::<S>())
            .cloned();
        let stack_info = |stack: &S| match &helper {
            Some(helper) => helper.error_info(stack),
            None => format!("{stack:?}"),
        };

        let mut fuels = Vec::new();
        let mut reagents = Vec::new();
        for stack in stacks {
            match classifier.is_fuel(stack) {
                Ok(true) => fuels.push(stack.clone()),
                Ok(false) => {}
                Err(e) => error!("Failed to check if item is fuel {}: {}", stack_info(stack), e),
            }
            match classifier.is_reagent(stack) {
                Ok(true) => reagents.push(stack.clone()),
                Ok(false) => {}
                Err(e) => error!(
                    "Failed to check if item is a potion ingredient {}: {}",
                    stack_info(stack),
                    e
                ),
            }
        }

        self.fuels = fuels;
        self.reagents = reagents;
    }

    /// All ingredients of type `V` in insertion order; empty if none are registered
    pub fn get_ingredients<V: Ingredient>(&self) -> &[V] {
        self.ingredients.get::<V>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// A single ingredient of type `V` by its position in the collection
    pub fn get_ingredient<V: Ingredient>(&self, index: usize) -> Option<&V> {
        self.get_ingredients::<V>().get(index)
    }

    pub fn get_ingredient_helper<V: Ingredient>(&self) -> Result<SharedHelper<V>, RegistryError> {
        let ty = IngredientType::of::<V>();
        self.helpers
            .get::<SharedHelper<V>>(ty)
            .cloned()
            .ok_or(RegistryError::UnknownIngredientType(ty))
    }

    /// Helper for the type of `ingredient`
    pub fn helper_for<V: Ingredient>(&self, _ingredient: &V) -> Result<SharedHelper<V>, RegistryError> {
        self.get_ingredient_helper::<V>()
    }

    pub fn get_ingredient_renderer<V: Ingredient>(
        &self,
    ) -> Result<SharedRenderer<V>, RegistryError> {
        let ty = IngredientType::of::<V>();
        self.renderers
            .get::<SharedRenderer<V>>(ty)
            .cloned()
            .ok_or(RegistryError::MissingRenderer(ty))
    }

    /// Renderer for the type of `ingredient`
    pub fn renderer_for<V: Ingredient>(
        &self,
        _ingredient: &V,
    ) -> Result<SharedRenderer<V>, RegistryError> {
        self.get_ingredient_renderer::<V>()
    }

    /// Every type that has a collection, in registration order
    pub fn registered_types(&self) -> &[IngredientType] {
        self.ingredients.types()
    }

    pub fn is_registered(&self, ty: IngredientType) -> bool {
        self.ingredients.contains(ty)
    }

    pub fn has_helper(&self, ty: IngredientType) -> bool {
        self.helpers.contains(ty)
    }

    pub fn ingredient_count(&self, ty: IngredientType) -> usize {
        self.ingredients.len_of(ty)
    }

    pub fn fuels(&self) -> &[S] {
        &self.fuels
    }

    pub fn reagents(&self) -> &[S] {
        &self.reagents
    }

    /// Append ingredients of type `V`, creating the collection if needed
    ///
    /// `filter` is told to rebuild once the values are stored. Fuels and
    /// reagents are not re-evaluated.
    pub fn add_ingredients_at_runtime<V: Ingredient>(
        &mut self,
        ingredients: Vec<V>,
        filter: Option<&mut dyn FilterIndex>,
    ) -> Result<(), RegistryError> {
        if ingredients.is_empty() {
            return Err(RegistryError::EmptyIngredients);
        }

        let count = ingredients.len();
        self.ingredients.entry::<V>().extend(ingredients);
        info!(
            "Added {} {} ingredients at runtime",
            count,
            IngredientType::of::<V>()
        );

        if let Some(filter) = filter {
            filter.rebuild();
        }
        Ok(())
    }

    /// Remove every stored ingredient the helper matches against one of `ingredients`
    ///
    /// Returns how many values were removed. `filter` is told to rebuild
    /// only when something was removed. Emptying a collection does not
    /// unregister its type: it stays in [`Self::registered_types`] with a
    /// count of zero, keeping its helper and renderer.
    pub fn remove_ingredients_at_runtime<V: Ingredient>(
        &mut self,
        ingredients: &[V],
        filter: Option<&mut dyn FilterIndex>,
    ) -> Result<usize, RegistryError> {
        if ingredients.is_empty() {
            return Err(RegistryError::EmptyIngredients);
        }
        let helper = self.get_ingredient_helper::<V>()?;

        let Some(list) = self.ingredients.get_mut::<V>() else {
            return Ok(0);
        };
        let before = list.len();
        list.retain(|stored| !ingredients.iter().any(|v| helper.matches(stored, v)));
        let removed = before - list.len();

        if removed > 0 {
            info!(
                "Removed {} {} ingredients at runtime",
                removed,
                IngredientType::of::<V>()
            );
            if let Some(filter) = filter {
                filter.rebuild();
            }
        }
        Ok(removed)
    }

    /// Filter elements for every ingredient whose type has a helper
    pub fn list_elements(&self) -> Vec<IngredientListElement> {
        self.ingredients.list_elements(&self.helpers)
    }

    /// Resolve a filter element back to its ingredient
    ///
    /// Returns `None` when the element is stale, i.e. the value now stored
    /// at its position has a different unique id.
    pub fn element_ingredient<V: Ingredient>(&self, element: &IngredientListElement) -> Option<&V> {
        if !element.ingredient_type().is::<V>() {
            return None;
        }
        let helper = self.get_ingredient_helper::<V>().ok()?;
        self.get_ingredient::<V>(element.index())
            .filter(|ingredient| helper.unique_id(ingredient) == element.unique_id())
    }
}
