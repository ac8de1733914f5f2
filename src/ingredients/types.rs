//! Ingredient type keys and the per-type capabilities plugins supply.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::gui::{Color, RenderSurface};

/// Any value that can be stored in the registry
pub trait Ingredient: Any + Clone + fmt::Debug {}

impl<T: Any + Clone + fmt::Debug> Ingredient for T {}

/// Runtime key for an ingredient type
///
/// Two keys are equal when they name the same Rust type. The type name is
/// only carried along for log and error messages.
#[derive(Clone, Copy)]
pub struct IngredientType {
    id: TypeId,
    name: &'static str,
}

impl IngredientType {
    pub fn of<V: Ingredient>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            name: std::any::type_name::<V>(),
        }
    }

    /// Key for the type of `value`
    pub fn of_val<V: Ingredient>(_value: &V) -> Self {
        Self::of::<V>()
    }

    pub fn is<V: Ingredient>(&self) -> bool {
        self.id == TypeId::of::<V>()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for IngredientType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IngredientType {}

impl Hash for IngredientType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IngredientType({})", self.name)
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity, equality and naming for one ingredient type
pub trait IngredientHelper<V: Ingredient> {
    fn display_name(&self, ingredient: &V) -> String;

    /// Identifier unique to this exact ingredient, including any subtype
    fn unique_id(&self, ingredient: &V) -> String;

    /// Identifier shared by every subtype of this ingredient
    fn wildcard_id(&self, ingredient: &V) -> String {
        self.unique_id(ingredient)
    }

    /// Identifier of the mod that adds this ingredient
    fn mod_id(&self, ingredient: &V) -> String;

    fn color_names(&self, _ingredient: &V) -> Vec<String> {
        Vec::new()
    }

    fn matches(&self, a: &V, b: &V) -> bool {
        self.unique_id(a) == self.unique_id(b)
    }

    /// Description used when logging a problem with `ingredient`
    fn error_info(&self, ingredient: &V) -> String {
        format!("{ingredient:?}")
    }
}

/// Visual representation and tooltip text for one ingredient type
pub trait IngredientRenderer<V: Ingredient> {
    /// Draw the ingredient into a 16x16 cell with its top-left at (x, y)
    fn render(&self, surface: &mut dyn RenderSurface, x: i32, y: i32, ingredient: &V);

    /// Draw decorations on top of the ingredient (stack counts and such)
    fn render_overlay(&self, _surface: &mut dyn RenderSurface, _x: i32, _y: i32, _ingredient: &V) {}

    /// Unformatted tooltip lines, name first
    fn tooltip(&self, ingredient: &V, advanced: bool) -> Vec<String>;

    /// Color of the first tooltip line
    fn title_color(&self, _ingredient: &V) -> Color {
        Color::WHITE
    }
}

pub type SharedHelper<V> = Arc<dyn IngredientHelper<V>>;
pub type SharedRenderer<V> = Arc<dyn IngredientRenderer<V>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    struct Gem;

    #[derive(Debug, Clone)]
    struct Ore;

    #[test]
    fn test_type_keys_compare_by_type() {
        assert_eq!(IngredientType::of::<Gem>(), IngredientType::of_val(&Gem));
        assert_ne!(IngredientType::of::<Gem>(), IngredientType::of::<Ore>());

        let set: HashSet<_> = [IngredientType::of::<Gem>(), IngredientType::of::<Gem>()]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_type_key_names() {
        let key = IngredientType::of::<Ore>();
        assert!(key.is::<Ore>());
        assert!(!key.is::<Gem>());
        assert!(key.name().ends_with("Ore"));
        assert_eq!(key.to_string(), key.name());
    }
}
