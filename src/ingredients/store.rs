//! Type-erased storage behind the registry.
//!
//! Every entry is stored under its [`IngredientType`] key and only ever
//! read back through the same Rust type, so downcasts cannot miss.

use std::any::Any;
use std::collections::HashMap;

use tracing::warn;

use super::types::{Ingredient, IngredientType, SharedHelper};
use crate::filter::IngredientListElement;

/// Capabilities every stored list exposes without knowing its value type
pub(crate) trait IngredientList {
    fn ingredient_type(&self) -> IngredientType;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Build filter elements for every value, or `None` when the type has no helper
    fn list_elements(&self, helpers: &CapabilityMap) -> Option<Vec<IngredientListElement>>;
}

struct TypedList<V> {
    values: Vec<V>,
}

impl<V: Ingredient> IngredientList for TypedList<V> {
    fn ingredient_type(&self) -> IngredientType {
        IngredientType::of::<V>()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn list_elements(&self, helpers: &CapabilityMap) -> Option<Vec<IngredientListElement>> {
        let helper = helpers.get::<SharedHelper<V>>(IngredientType::of::<V>())?;
        Some(
            self.values
                .iter()
                .enumerate()
                .map(|(index, value)| IngredientListElement::new(index, value, &**helper))
                .collect(),
        )
    }
}

/// Ordered ingredient collections, one per type
#[derive(Default)]
pub(crate) struct IngredientStore {
    lists: HashMap<IngredientType, Box<dyn IngredientList>>,
    order: Vec<IngredientType>,
}

impl IngredientStore {
    pub fn get<V: Ingredient>(&self) -> Option<&Vec<V>> {
        self.lists
            .get(&IngredientType::of::<V>())
            .and_then(|list| list.as_any().downcast_ref::<TypedList<V>>())
            .map(|list| &list.values)
    }

    pub fn get_mut<V: Ingredient>(&mut self) -> Option<&mut Vec<V>> {
        self.lists
            .get_mut(&IngredientType::of::<V>())
            .and_then(|list| list.as_any_mut().downcast_mut::<TypedList<V>>())
            .map(|list| &mut list.values)
    }

    /// The list for `V`, created empty if absent
    pub fn entry<V: Ingredient>(&mut self) -> &mut Vec<V> {
        let ty = IngredientType::of::<V>();
        if !self.lists.contains_key(&ty) {
            self.order.push(ty);
        }
        let list = self
            .lists
            .entry(ty)
            .or_insert_with(|| Box::new(TypedList::<V> { values: Vec::new() }));
        &mut list
            .as_any_mut()
            .downcast_mut::<TypedList<V>>()
            .expect("ingredient list keyed by its own type")
            .values
    }

    pub fn contains(&self, ty: IngredientType) -> bool {
        self.lists.contains_key(&ty)
    }

    /// Registered types in the order they were first stored
    pub fn types(&self) -> &[IngredientType] {
        &self.order
    }

    pub fn len_of(&self, ty: IngredientType) -> usize {
        self.lists.get(&ty).map_or(0, |list| list.len())
    }

    pub fn list_elements(&self, helpers: &CapabilityMap) -> Vec<IngredientListElement> {
        let mut elements = Vec::new();
        for ty in &self.order {
            let Some(list) = self.lists.get(ty) else {
                continue;
            };
            match list.list_elements(helpers) {
                Some(mut list_elements) => elements.append(&mut list_elements),
                None => warn!(
                    "No ingredient helper for {}, skipping {} ingredients",
                    list.ingredient_type(),
                    list.len()
                ),
            }
        }
        elements
    }
}

/// One capability object per ingredient type
#[derive(Default)]
pub(crate) struct CapabilityMap {
    entries: HashMap<IngredientType, Box<dyn Any>>,
}

impl CapabilityMap {
    pub fn insert<C: Any>(&mut self, ty: IngredientType, capability: C) {
        self.entries.insert(ty, Box::new(capability));
    }

    pub fn get<C: Any>(&self, ty: IngredientType) -> Option<&C> {
        self.entries.get(&ty).and_then(|c| c.downcast_ref::<C>())
    }

    pub fn contains(&self, ty: IngredientType) -> bool {
        self.entries.contains_key(&ty)
    }
}
