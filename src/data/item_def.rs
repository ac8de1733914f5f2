use serde::Deserialize;

use super::definitions::Definition;
use crate::gui::Color;

// ============================================================================
// Rarity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
}

impl Rarity {
    /// Color used for the item's name in tooltips
    pub fn color(&self) -> Color {
        match self {
            Rarity::Common => Color::WHITE,
            Rarity::Uncommon => Color::YELLOW,
            Rarity::Rare => Color::AQUA,
            Rarity::Epic => Color::LIGHT_PURPLE,
        }
    }
}

// ============================================================================
// Raw Definitions (direct from TOML)
// ============================================================================

fn default_mod_id() -> String {
    "base".to_string()
}

fn default_tint() -> u32 {
    0xFF8B_8B8B
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItemDefinition {
    pub display_name: Option<String>,
    #[serde(default = "default_mod_id")]
    pub mod_id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub rarity: Rarity,
    /// Furnace burn time in ticks; zero or absent means not a fuel
    #[serde(default)]
    pub burn_time: i32,
    #[serde(default)]
    pub brewing_reagent: bool,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Names of the item's subtypes, one stack per entry
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default = "default_tint")]
    pub tint: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFluidDefinition {
    pub display_name: Option<String>,
    #[serde(default = "default_mod_id")]
    pub mod_id: String,
    #[serde(default)]
    pub colors: Vec<String>,
    pub temperature: Option<i32>,
    #[serde(default = "default_tint")]
    pub tint: u32,
}

// ============================================================================
// Resolved Definitions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefinition {
    pub id: String,
    pub display_name: String,
    pub mod_id: String,
    pub description: String,
    pub rarity: Rarity,
    pub burn_time: i32,
    pub brewing_reagent: bool,
    pub colors: Vec<String>,
    pub variants: Vec<String>,
    pub tint: Color,
}

impl ItemDefinition {
    pub fn is_fuel(&self) -> bool {
        self.burn_time > 0
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Name of a subtype, if the item has one at `meta`
    pub fn variant_name(&self, meta: u32) -> Option<&str> {
        self.variants.get(meta as usize).map(String::as_str)
    }
}

impl Definition for ItemDefinition {
    type Raw = RawItemDefinition;
    const DIRECTORY: &'static str = "items";

    fn from_raw(id: &str, raw: &RawItemDefinition) -> Self {
        Self {
            id: id.to_string(),
            display_name: raw
                .display_name
                .clone()
                .unwrap_or_else(|| id.replace('_', " ")),
            mod_id: raw.mod_id.clone(),
            description: raw.description.clone().unwrap_or_default(),
            rarity: raw.rarity,
            burn_time: raw.burn_time.max(0),
            brewing_reagent: raw.brewing_reagent,
            colors: raw.colors.clone(),
            variants: raw.variants.clone(),
            tint: Color(raw.tint),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluidDefinition {
    pub id: String,
    pub display_name: String,
    pub mod_id: String,
    pub colors: Vec<String>,
    pub temperature: i32,
    pub tint: Color,
}

impl Definition for FluidDefinition {
    type Raw = RawFluidDefinition;
    const DIRECTORY: &'static str = "fluids";

    fn from_raw(id: &str, raw: &RawFluidDefinition) -> Self {
        Self {
            id: id.to_string(),
            display_name: raw
                .display_name
                .clone()
                .unwrap_or_else(|| id.replace('_', " ")),
            mod_id: raw.mod_id.clone(),
            colors: raw.colors.clone(),
            temperature: raw.temperature.unwrap_or(300),
            tint: Color(raw.tint),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_item() {
        let toml_str = r#"
            [blaze_powder]
            display_name = "Blaze Powder"
            rarity = "uncommon"
            burn_time = 2400
            brewing_reagent = true
            colors = ["Orange", "Yellow"]
        "#;

        let parsed: HashMap<String, RawItemDefinition> = toml::from_str(toml_str).unwrap();
        let item = ItemDefinition::from_raw("blaze_powder", &parsed["blaze_powder"]);

        assert_eq!(item.display_name, "Blaze Powder");
        assert_eq!(item.mod_id, "base");
        assert_eq!(item.rarity, Rarity::Uncommon);
        assert!(item.is_fuel());
        assert!(item.brewing_reagent);
        assert_eq!(item.colors, vec!["Orange", "Yellow"]);
        assert!(!item.has_variants());
    }

    #[test]
    fn test_item_defaults() {
        let toml_str = r#"
            [iron_ingot]
        "#;

        let parsed: HashMap<String, RawItemDefinition> = toml::from_str(toml_str).unwrap();
        let item = ItemDefinition::from_raw("iron_ingot", &parsed["iron_ingot"]);

        assert_eq!(item.display_name, "iron ingot");
        assert_eq!(item.rarity, Rarity::Common);
        assert_eq!(item.burn_time, 0);
        assert!(!item.is_fuel());
        assert_eq!(item.tint, Color(0xFF8B_8B8B));
    }

    #[test]
    fn test_variants_and_fluid_defaults() {
        let toml_str = r#"
            [wool]
            variants = ["White", "Orange"]
        "#;
        let parsed: HashMap<String, RawItemDefinition> = toml::from_str(toml_str).unwrap();
        let wool = ItemDefinition::from_raw("wool", &parsed["wool"]);
        assert_eq!(wool.variant_name(1), Some("Orange"));
        assert_eq!(wool.variant_name(2), None);

        let toml_str = r#"
            [lava]
            temperature = 1300
            [water]
        "#;
        let parsed: HashMap<String, RawFluidDefinition> = toml::from_str(toml_str).unwrap();
        assert_eq!(FluidDefinition::from_raw("lava", &parsed["lava"]).temperature, 1300);
        assert_eq!(FluidDefinition::from_raw("water", &parsed["water"]).temperature, 300);
    }
}
