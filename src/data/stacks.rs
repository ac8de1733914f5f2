//! Item and fluid stacks, the ingredient types the base plugin provides.

use std::sync::Arc;

use super::definitions::{FluidRegistry, ItemRegistry};
use crate::error::ClassifyError;
use crate::gui::tile::INGREDIENT_SIZE;
use crate::gui::{Color, Rect, RenderSurface};
use crate::ingredients::{IngredientHelper, IngredientRenderer, StackClassifier};

const UNKNOWN_TINT: Color = Color(0xFFFF_00FF);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub item_id: String,
    pub meta: u32,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, meta: u32, count: u32) -> Self {
        Self {
            item_id: item_id.into(),
            meta,
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FluidStack {
    pub fluid_id: String,
    /// Amount in millibuckets
    pub amount: u32,
}

impl FluidStack {
    pub const BUCKET: u32 = 1000;

    pub fn new(fluid_id: impl Into<String>, amount: u32) -> Self {
        Self {
            fluid_id: fluid_id.into(),
            amount,
        }
    }
}

// ============================================================================
// Item Stacks
// ============================================================================

pub struct ItemStackHelper {
    items: Arc<ItemRegistry>,
}

impl ItemStackHelper {
    pub fn new(items: Arc<ItemRegistry>) -> Self {
        Self { items }
    }
}

impl IngredientHelper<ItemStack> for ItemStackHelper {
    fn display_name(&self, ingredient: &ItemStack) -> String {
        let Some(item) = self.items.get(&ingredient.item_id) else {
            return format!("Unknown ({})", ingredient.item_id);
        };
        match item.variant_name(ingredient.meta) {
            Some(variant) => format!("{} {}", variant, item.display_name),
            None => item.display_name.clone(),
        }
    }

    fn unique_id(&self, ingredient: &ItemStack) -> String {
        let wildcard = self.wildcard_id(ingredient);
        match self.items.get(&ingredient.item_id) {
            Some(item) if !item.has_variants() => wildcard,
            _ => format!("{}:{}", wildcard, ingredient.meta),
        }
    }

    fn wildcard_id(&self, ingredient: &ItemStack) -> String {
        format!("{}:{}", self.mod_id(ingredient), ingredient.item_id)
    }

    fn mod_id(&self, ingredient: &ItemStack) -> String {
        self.items
            .get(&ingredient.item_id)
            .map_or_else(|| "unknown".to_string(), |item| item.mod_id.clone())
    }

    fn color_names(&self, ingredient: &ItemStack) -> Vec<String> {
        self.items
            .get(&ingredient.item_id)
            .map(|item| item.colors.clone())
            .unwrap_or_default()
    }

    fn matches(&self, a: &ItemStack, b: &ItemStack) -> bool {
        a.item_id == b.item_id && a.meta == b.meta
    }

    fn error_info(&self, ingredient: &ItemStack) -> String {
        format!(
            "{}:{}@{} x{} ({})",
            self.mod_id(ingredient),
            ingredient.item_id,
            ingredient.meta,
            ingredient.count,
            self.display_name(ingredient)
        )
    }
}

pub struct ItemStackRenderer {
    items: Arc<ItemRegistry>,
}

impl ItemStackRenderer {
    pub fn new(items: Arc<ItemRegistry>) -> Self {
        Self { items }
    }
}

impl IngredientRenderer<ItemStack> for ItemStackRenderer {
    fn render(&self, surface: &mut dyn RenderSurface, x: i32, y: i32, ingredient: &ItemStack) {
        let tint = self
            .items
            .get(&ingredient.item_id)
            .map_or(UNKNOWN_TINT, |item| item.tint);
        surface.fill_rect(Rect::new(x, y, INGREDIENT_SIZE, INGREDIENT_SIZE), tint);
    }

    fn render_overlay(&self, surface: &mut dyn RenderSurface, x: i32, y: i32, ingredient: &ItemStack) {
        if ingredient.count <= 1 {
            return;
        }
        // Count sits in the bottom-right corner
        let text = ingredient.count.to_string();
        let text_x = x + INGREDIENT_SIZE + 1 - surface.text_width(&text);
        surface.draw_text(&text, text_x, y + 9, Color::WHITE, false);
    }

    fn tooltip(&self, ingredient: &ItemStack, advanced: bool) -> Vec<String> {
        let Some(item) = self.items.get(&ingredient.item_id) else {
            return vec![format!("Unknown ({})", ingredient.item_id)];
        };

        let mut lines = vec![match item.variant_name(ingredient.meta) {
            Some(variant) => format!("{} {}", variant, item.display_name),
            None => item.display_name.clone(),
        }];
        if !item.description.is_empty() {
            lines.push(item.description.clone());
        }
        if item.is_fuel() {
            lines.push(format!("Burns for {} ticks", item.burn_time));
        }
        if advanced {
            lines.push(format!("{}:{}#{}", item.mod_id, item.id, ingredient.meta));
        }
        lines
    }

    fn title_color(&self, ingredient: &ItemStack) -> Color {
        self.items
            .get(&ingredient.item_id)
            .map_or(Color::WHITE, |item| item.rarity.color())
    }
}

/// Fuel and reagent checks backed by item definitions
pub struct ItemClassifier {
    items: Arc<ItemRegistry>,
}

impl ItemClassifier {
    pub fn new(items: Arc<ItemRegistry>) -> Self {
        Self { items }
    }
}

impl StackClassifier<ItemStack> for ItemClassifier {
    fn is_fuel(&self, stack: &ItemStack) -> Result<bool, ClassifyError> {
        self.items
            .get(&stack.item_id)
            .map(|item| item.is_fuel())
            .ok_or_else(|| ClassifyError::new(format!("no definition for item '{}'", stack.item_id)))
    }

    fn is_reagent(&self, stack: &ItemStack) -> Result<bool, ClassifyError> {
        self.items
            .get(&stack.item_id)
            .map(|item| item.brewing_reagent)
            .ok_or_else(|| ClassifyError::new(format!("no definition for item '{}'", stack.item_id)))
    }
}

// ============================================================================
// Fluid Stacks
// ============================================================================

pub struct FluidStackHelper {
    fluids: Arc<FluidRegistry>,
}

impl FluidStackHelper {
    pub fn new(fluids: Arc<FluidRegistry>) -> Self {
        Self { fluids }
    }
}

impl IngredientHelper<FluidStack> for FluidStackHelper {
    fn display_name(&self, ingredient: &FluidStack) -> String {
        self.fluids
            .get(&ingredient.fluid_id)
            .map_or_else(|| format!("Unknown ({})", ingredient.fluid_id), |f| f.display_name.clone())
    }

    fn unique_id(&self, ingredient: &FluidStack) -> String {
        format!("fluid:{}", ingredient.fluid_id)
    }

    fn mod_id(&self, ingredient: &FluidStack) -> String {
        self.fluids
            .get(&ingredient.fluid_id)
            .map_or_else(|| "unknown".to_string(), |f| f.mod_id.clone())
    }

    fn color_names(&self, ingredient: &FluidStack) -> Vec<String> {
        self.fluids
            .get(&ingredient.fluid_id)
            .map(|f| f.colors.clone())
            .unwrap_or_default()
    }
}

pub struct FluidStackRenderer {
    fluids: Arc<FluidRegistry>,
}

impl FluidStackRenderer {
    pub fn new(fluids: Arc<FluidRegistry>) -> Self {
        Self { fluids }
    }
}

impl IngredientRenderer<FluidStack> for FluidStackRenderer {
    fn render(&self, surface: &mut dyn RenderSurface, x: i32, y: i32, ingredient: &FluidStack) {
        let tint = self
            .fluids
            .get(&ingredient.fluid_id)
            .map_or(UNKNOWN_TINT, |f| f.tint);
        // Partial buckets fill the cell from the bottom
        let filled = (ingredient.amount.min(FluidStack::BUCKET) as i32 * INGREDIENT_SIZE
            / FluidStack::BUCKET as i32)
            .max(1);
        surface.fill_rect(
            Rect::new(x, y + INGREDIENT_SIZE - filled, INGREDIENT_SIZE, filled),
            tint,
        );
    }

    fn tooltip(&self, ingredient: &FluidStack, advanced: bool) -> Vec<String> {
        let Some(fluid) = self.fluids.get(&ingredient.fluid_id) else {
            return vec![format!("Unknown ({})", ingredient.fluid_id)];
        };

        let mut lines = vec![
            fluid.display_name.clone(),
            format!("{} mB", ingredient.amount),
        ];
        if advanced {
            lines.push(format!("Temperature: {} K", fluid.temperature));
            lines.push(format!("{}:{}", fluid.mod_id, fluid.id));
        }
        lines
    }
}
