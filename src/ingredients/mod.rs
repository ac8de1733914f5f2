//! Ingredient System
//!
//! Type-keyed registry of ingredient collections with per-type helpers and
//! renderers, and the registration phase plugins use to fill it.

pub mod classify;
pub mod registration;
pub mod registry;
mod store;
pub mod types;

pub use classify::{FnClassifier, NoClassification, StackClassifier};
pub use registration::{IngredientPlugin, IngredientRegistration};
pub use registry::IngredientRegistry;
pub use types::{
    Ingredient, IngredientHelper, IngredientRenderer, IngredientType, SharedHelper,
    SharedRenderer,
};
