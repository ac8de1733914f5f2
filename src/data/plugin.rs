//! Base plugin: registers item and fluid stacks built from data definitions.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::definitions::{FluidRegistry, ItemRegistry};
use super::stacks::{
    FluidStack, FluidStackHelper, FluidStackRenderer, ItemClassifier, ItemStack, ItemStackHelper,
    ItemStackRenderer,
};
use crate::error::{DataError, RegistryError};
use crate::ingredients::{IngredientPlugin, IngredientRegistration};

pub struct BasePlugin {
    items: Arc<ItemRegistry>,
    fluids: Arc<FluidRegistry>,
}

impl BasePlugin {
    pub fn new(items: Arc<ItemRegistry>, fluids: Arc<FluidRegistry>) -> Self {
        Self { items, fluids }
    }

    /// Load item and fluid definitions from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self, DataError> {
        let mut items = ItemRegistry::new();
        items.load_from_directory(data_dir)?;
        let mut fluids = FluidRegistry::new();
        fluids.load_from_directory(data_dir)?;
        Ok(Self::new(Arc::new(items), Arc::new(fluids)))
    }

    pub fn items(&self) -> &Arc<ItemRegistry> {
        &self.items
    }

    pub fn fluids(&self) -> &Arc<FluidRegistry> {
        &self.fluids
    }

    pub fn classifier(&self) -> ItemClassifier {
        ItemClassifier::new(self.items.clone())
    }

    /// One stack per item, or per variant for items with subtypes
    pub fn item_stacks(&self) -> Vec<ItemStack> {
        self.items
            .all()
            .flat_map(|item| {
                (0..item.variants.len().max(1))
                    .map_while(|meta| u32::try_from(meta).ok())
                    .map(move |meta| ItemStack::new(item.id.clone(), meta, 1))
            })
            .collect()
    }

    pub fn fluid_stacks(&self) -> Vec<FluidStack> {
        self.fluids
            .all()
            .map(|fluid| FluidStack::new(fluid.id.clone(), FluidStack::BUCKET))
            .collect()
    }
}

impl IngredientPlugin for BasePlugin {
    fn name(&self) -> &str {
        "base"
    }

    fn register_ingredients(
        &self,
        registration: &mut IngredientRegistration,
    ) -> Result<(), RegistryError> {
        registration.register(
            self.item_stacks(),
            Arc::new(ItemStackHelper::new(self.items.clone())),
            Arc::new(ItemStackRenderer::new(self.items.clone())),
        )?;
        registration.register(
            self.fluid_stacks(),
            Arc::new(FluidStackHelper::new(self.fluids.clone())),
            Arc::new(FluidStackRenderer::new(self.fluids.clone())),
        )?;
        info!(
            "Base plugin registered {} items and {} fluids",
            self.items.len(),
            self.fluids.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::filter::IngredientFilter;
    use crate::ingredients::{IngredientRegistry, IngredientType};
    use tempfile::TempDir;

    fn write_data(dir: &Path) {
        std::fs::create_dir(dir.join("items")).unwrap();
        std::fs::create_dir(dir.join("fluids")).unwrap();
        std::fs::write(
            dir.join("items").join("base.toml"),
            r#"
[coal]
display_name = "Coal"
burn_time = 1600
colors = ["Black"]

[nether_wart]
display_name = "Nether Wart"
brewing_reagent = true

[wool]
display_name = "Wool"
variants = ["White", "Red"]
"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("fluids").join("base.toml"),
            r#"
[water]
display_name = "Water"
colors = ["Blue"]
"#,
        )
        .unwrap();
    }

    fn build() -> (BasePlugin, IngredientRegistry<ItemStack>) {
        let temp_dir = TempDir::new().unwrap();
        write_data(temp_dir.path());

        let plugin = BasePlugin::load(temp_dir.path()).unwrap();
        let mut registration = IngredientRegistration::new();
        registration.register_plugins(&[&plugin]);
        let registry = registration.build::<ItemStack>(&plugin.classifier());
        (plugin, registry)
    }

    #[test]
    fn test_registers_items_and_fluids() {
        let (_, registry) = build();

        assert_eq!(
            registry.registered_types(),
            &[IngredientType::of::<ItemStack>(), IngredientType::of::<FluidStack>()]
        );
        let items: Vec<_> = registry
            .get_ingredients::<ItemStack>()
            .iter()
            .map(|s| (s.item_id.as_str(), s.meta))
            .collect();
        assert_eq!(items, vec![("coal", 0), ("nether_wart", 0), ("wool", 0), ("wool", 1)]);
        assert_eq!(registry.get_ingredients::<FluidStack>().len(), 1);
    }

    #[test]
    fn test_item_stacks_one_per_variant() {
        let (plugin, _) = build();

        let wool: Vec<_> = plugin
            .item_stacks()
            .into_iter()
            .filter(|s| s.item_id == "wool")
            .map(|s| s.meta)
            .collect();
        assert_eq!(wool, vec![0, 1]);
        assert_eq!(plugin.item_stacks().len(), 4);
    }

    #[test]
    fn test_fuels_and_reagents() {
        let (_, registry) = build();

        assert_eq!(registry.fuels(), &[ItemStack::new("coal", 0, 1)]);
        assert_eq!(registry.reagents(), &[ItemStack::new("nether_wart", 0, 1)]);
    }

    #[test]
    fn test_runtime_fuel_is_not_classified() {
        let (_, mut registry) = build();
        let mut filter = IngredientFilter::new();

        // A second coal stack would be a fuel had it been present at startup
        registry
            .add_ingredients_at_runtime(vec![ItemStack::new("coal", 0, 8)], Some(&mut filter))
            .unwrap();
        assert_eq!(registry.fuels().len(), 1);
        assert_eq!(registry.get_ingredients::<ItemStack>().len(), 5);

        let list = filter.ingredient_list(&registry, &Config::default());
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_search_across_types() {
        let (_, registry) = build();
        let mut filter = IngredientFilter::new();
        let config = Config {
            color_search: true,
            ..Config::default()
        };

        filter.set_filter_text("^blue | red");
        let names: Vec<_> = filter
            .ingredient_list(&registry, &config)
            .iter()
            .map(|e| e.display_name().to_string())
            .collect();
        assert_eq!(names, vec!["Red Wool", "Water"]);
    }
}
