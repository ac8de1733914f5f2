//! Ingredient lookup overlay
//!
//! Plugins register ingredient types (items, fluids, anything else) with a
//! helper and a renderer. The [`ingredients::IngredientRegistry`] is the
//! catalog everything else queries, the [`filter::IngredientFilter`]
//! searches it, and [`gui::IngredientTile`] draws single ingredients
//! through a host-supplied surface.

pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod gui;
pub mod ingredients;

pub use config::{BlacklistType, Config};
pub use error::{ClassifyError, ConfigError, DataError, RegistryError};
pub use filter::{FilterIndex, IngredientFilter, IngredientListElement};
pub use ingredients::{
    Ingredient, IngredientHelper, IngredientPlugin, IngredientRegistration, IngredientRegistry,
    IngredientRenderer, IngredientType, StackClassifier,
};
