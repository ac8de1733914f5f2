pub mod definitions;
pub mod item_def;
pub mod plugin;
pub mod stacks;

pub use definitions::{Definition, DefinitionRegistry, FluidRegistry, ItemRegistry};
pub use item_def::{FluidDefinition, ItemDefinition, Rarity};
pub use plugin::BasePlugin;
pub use stacks::{FluidStack, ItemClassifier, ItemStack};
