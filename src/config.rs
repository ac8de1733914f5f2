//! Overlay configuration
//!
//! Loaded from a TOML file. Every field has a default, so a missing file
//! or an empty one both give a usable config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::filter::IngredientListElement;
use crate::ingredients::{Ingredient, IngredientHelper};

pub const DEFAULT_MAX_TOOLTIP_WIDTH: i32 = 125;

fn default_max_tooltip_width() -> i32 {
    DEFAULT_MAX_TOOLTIP_WIDTH
}

/// What part of an ingredient a blacklist entry hides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlacklistType {
    /// This exact ingredient
    Item,
    /// Every subtype of the ingredient
    Wildcard,
    /// Everything from the ingredient's mod
    ModId,
}

impl BlacklistType {
    pub const ALL: [BlacklistType; 3] = [
        BlacklistType::Item,
        BlacklistType::Wildcard,
        BlacklistType::ModId,
    ];

    /// Blacklist key for `ingredient`
    pub fn key<V: Ingredient>(&self, ingredient: &V, helper: &dyn IngredientHelper<V>) -> String {
        match self {
            BlacklistType::Item => helper.unique_id(ingredient),
            BlacklistType::Wildcard => helper.wildcard_id(ingredient),
            BlacklistType::ModId => helper.mod_id(ingredient),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Show hidden ingredients and blacklist markers
    #[serde(default)]
    pub edit_mode: bool,
    /// Allow `^color` search terms and list color names in tooltips
    #[serde(default)]
    pub color_search: bool,
    #[serde(default)]
    pub advanced_tooltips: bool,
    #[serde(default = "default_max_tooltip_width")]
    pub max_tooltip_width: i32,
    #[serde(default)]
    pub blacklist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edit_mode: false,
            color_search: false,
            advanced_tooltips: false,
            max_tooltip_width: DEFAULT_MAX_TOOLTIP_WIDTH,
            blacklist: Vec::new(),
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!("Config file does not exist: {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            "Loaded config from {:?} ({} blacklist entries)",
            path,
            config.blacklist.len()
        );
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_ingredient_on_blacklist<V: Ingredient>(
        &self,
        ingredient: &V,
        helper: &dyn IngredientHelper<V>,
        blacklist_type: BlacklistType,
    ) -> bool {
        self.is_key_on_blacklist(&blacklist_type.key(ingredient, helper))
    }

    /// Returns false if the entry was already present
    pub fn add_to_blacklist<V: Ingredient>(
        &mut self,
        ingredient: &V,
        helper: &dyn IngredientHelper<V>,
        blacklist_type: BlacklistType,
    ) -> bool {
        let key = blacklist_type.key(ingredient, helper);
        if self.is_key_on_blacklist(&key) {
            return false;
        }
        self.blacklist.push(key);
        true
    }

    /// Returns false if the entry was not present
    pub fn remove_from_blacklist<V: Ingredient>(
        &mut self,
        ingredient: &V,
        helper: &dyn IngredientHelper<V>,
        blacklist_type: BlacklistType,
    ) -> bool {
        let key = blacklist_type.key(ingredient, helper);
        let before = self.blacklist.len();
        self.blacklist.retain(|entry| *entry != key);
        self.blacklist.len() != before
    }

    pub fn is_key_on_blacklist(&self, key: &str) -> bool {
        self.blacklist.iter().any(|entry| entry == key)
    }

    /// Whether any blacklist entry covers this list element
    pub fn is_element_hidden(&self, element: &IngredientListElement) -> bool {
        self.is_key_on_blacklist(element.unique_id())
            || self.is_key_on_blacklist(element.wildcard_id())
            || self.is_key_on_blacklist(element.mod_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Debug, Clone)]
    struct Wool(u8);

    struct WoolHelper;

    impl IngredientHelper<Wool> for WoolHelper {
        fn display_name(&self, ingredient: &Wool) -> String {
            format!("Wool {}", ingredient.0)
        }

        fn unique_id(&self, ingredient: &Wool) -> String {
            format!("base:wool:{}", ingredient.0)
        }

        fn wildcard_id(&self, _ingredient: &Wool) -> String {
            "base:wool".to_string()
        }

        fn mod_id(&self, _ingredient: &Wool) -> String {
            "base".to_string()
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_tooltip_width, DEFAULT_MAX_TOOLTIP_WIDTH);
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enough-items.toml");

        let toml_content = r#"
edit_mode = true
blacklist = ["base:wool"]
"#;
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(toml_content.as_bytes()).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.edit_mode);
        assert!(!config.color_search);
        assert_eq!(config.max_tooltip_width, DEFAULT_MAX_TOOLTIP_WIDTH);
        assert!(config.is_ingredient_on_blacklist(&Wool(3), &WoolHelper, BlacklistType::Wildcard));
        assert!(!config.is_ingredient_on_blacklist(&Wool(3), &WoolHelper, BlacklistType::Item));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "edit_mode = \"sometimes\"").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_blacklist_round_trip_through_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enough-items.toml");

        let mut config = Config::default();
        assert!(config.add_to_blacklist(&Wool(1), &WoolHelper, BlacklistType::Item));
        assert!(!config.add_to_blacklist(&Wool(1), &WoolHelper, BlacklistType::Item));
        assert!(config.add_to_blacklist(&Wool(1), &WoolHelper, BlacklistType::ModId));
        config.save(&path).unwrap();

        let mut loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.blacklist, vec!["base:wool:1", "base"]);

        assert!(loaded.remove_from_blacklist(&Wool(1), &WoolHelper, BlacklistType::ModId));
        assert!(!loaded.remove_from_blacklist(&Wool(1), &WoolHelper, BlacklistType::ModId));
        assert!(loaded.is_key_on_blacklist("base:wool:1"));
        assert!(!loaded.is_key_on_blacklist("base"));
    }
}
