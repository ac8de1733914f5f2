//! Plugin-facing registration of ingredient types.

use tracing::{error, info};

use super::classify::StackClassifier;
use super::registry::IngredientRegistry;
use super::store::{CapabilityMap, IngredientStore};
use super::types::{Ingredient, IngredientType, SharedHelper, SharedRenderer};
use crate::error::RegistryError;

/// Something that contributes ingredient types at startup
pub trait IngredientPlugin {
    fn name(&self) -> &str;

    fn register_ingredients(
        &self,
        registration: &mut IngredientRegistration,
    ) -> Result<(), RegistryError>;
}

/// Collects ingredient collections, helpers and renderers before the
/// registry exists
#[derive(Default)]
pub struct IngredientRegistration {
    ingredients: IngredientStore,
    helpers: CapabilityMap,
    renderers: CapabilityMap,
}

impl IngredientRegistration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ingredient type with its starting values and capabilities
    pub fn register<V: Ingredient>(
        &mut self,
        ingredients: Vec<V>,
        helper: SharedHelper<V>,
        renderer: SharedRenderer<V>,
    ) -> Result<(), RegistryError> {
        let ty = IngredientType::of::<V>();
        if self.helpers.contains(ty) {
            return Err(RegistryError::DuplicateIngredientType(ty));
        }

        info!("Registered {} {} ingredients", ingredients.len(), ty);
        self.ingredients.entry::<V>().extend(ingredients);
        self.helpers.insert(ty, helper);
        self.renderers.insert(ty, renderer);
        Ok(())
    }

    /// Run every plugin; a failing plugin is logged and skipped
    pub fn register_plugins(&mut self, plugins: &[&dyn IngredientPlugin]) {
        for plugin in plugins {
            if let Err(e) = plugin.register_ingredients(self) {
                error!("Failed to register ingredients for plugin {}: {}", plugin.name(), e);
            }
        }
    }

    pub fn is_registered(&self, ty: IngredientType) -> bool {
        self.helpers.contains(ty)
    }

    /// Freeze helpers and renderers and classify the base stacks
    pub fn build<S: Ingredient>(self, classifier: &dyn StackClassifier<S>) -> IngredientRegistry<S> {
        IngredientRegistry::new(self.ingredients, self.helpers, self.renderers, classifier)
    }
}
