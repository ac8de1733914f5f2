//! Ingredient search
//!
//! Provides the filter index that lists and searches registered ingredients.

pub mod element;
pub mod index;
pub mod query;

pub use element::IngredientListElement;
pub use index::{FilterIndex, IngredientFilter};
pub use query::Query;
