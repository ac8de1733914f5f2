//! Ingredient tile
//!
//! A fixed-size cell in the ingredient list overlay. It holds at most one
//! ingredient and looks up that ingredient's helper and renderer in the
//! registry whenever it draws.

use super::surface::{Color, Rect, RenderSurface};
use super::tooltip::{self, TooltipLine};
use crate::config::{BlacklistType, Config};
use crate::error::RegistryError;
use crate::ingredients::{Ingredient, IngredientHelper, IngredientRegistry};

/// Size of the ingredient itself, without padding
pub const INGREDIENT_SIZE: i32 = 16;

pub const HOVER_HIGHLIGHT: Color = Color(0x7FFF_FFFF);
pub const BLACKLIST_ITEM_COLOR: Color = Color::YELLOW;
pub const BLACKLIST_WILDCARD_COLOR: Color = Color::RED;
pub const BLACKLIST_MOD_COLOR: Color = Color::BLUE;

pub struct IngredientTile<V> {
    area: Rect,
    padding: i32,
    ingredient: Option<V>,
}

impl<V: Ingredient> IngredientTile<V> {
    pub fn new(x: i32, y: i32, padding: i32) -> Self {
        let size = INGREDIENT_SIZE + 2 * padding;
        Self {
            area: Rect::new(x, y, size, size),
            padding,
            ingredient: None,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set(&mut self, ingredient: V) {
        self.ingredient = Some(ingredient);
    }

    pub fn get(&self) -> Option<&V> {
        self.ingredient.as_ref()
    }

    pub fn clear(&mut self) {
        self.ingredient = None;
    }

    /// Empty tiles never count as hovered
    pub fn is_mouse_over(&self, mouse_x: i32, mouse_y: i32) -> bool {
        self.ingredient.is_some() && self.area.contains(mouse_x, mouse_y)
    }

    pub fn draw<S: Ingredient>(
        &self,
        registry: &IngredientRegistry<S>,
        config: &Config,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), RegistryError> {
        let Some(ingredient) = &self.ingredient else {
            return Ok(());
        };
        let renderer = registry.renderer_for(ingredient)?;

        if config.edit_mode {
            let helper = registry.helper_for(ingredient)?;
            self.draw_edit_mode(ingredient, helper.as_ref(), config, surface);
        }

        let x = self.area.x + self.padding;
        let y = self.area.y + self.padding;
        renderer.render(surface, x, y, ingredient);
        renderer.render_overlay(surface, x, y, ingredient);
        Ok(())
    }

    /// Draw the tile with the hover highlight over it
    pub fn draw_hovered<S: Ingredient>(
        &self,
        registry: &IngredientRegistry<S>,
        config: &Config,
        surface: &mut dyn RenderSurface,
    ) -> Result<(), RegistryError> {
        if self.ingredient.is_none() {
            return Ok(());
        }
        self.draw(registry, config, surface)?;

        surface.set_depth_test(false);
        surface.fill_rect(self.area, HOVER_HIGHLIGHT);
        surface.set_depth_test(true);
        Ok(())
    }

    fn draw_edit_mode(
        &self,
        ingredient: &V,
        helper: &dyn IngredientHelper<V>,
        config: &Config,
        surface: &mut dyn RenderSurface,
    ) {
        let left = self.area.x + self.padding;
        let top = self.area.y + self.padding;

        for blacklist_type in BlacklistType::ALL {
            if config.is_ingredient_on_blacklist(ingredient, helper, blacklist_type) {
                let (area, color) = blacklist_marker(blacklist_type, left, top);
                surface.fill_rect(area, color);
            }
        }
    }

    /// Styled tooltip for the held ingredient; empty when the tile is empty
    pub fn tooltip<S: Ingredient>(
        &self,
        registry: &IngredientRegistry<S>,
        config: &Config,
        surface: &dyn RenderSurface,
    ) -> Result<Vec<TooltipLine>, RegistryError> {
        let Some(ingredient) = &self.ingredient else {
            return Ok(Vec::new());
        };
        let renderer = registry.renderer_for(ingredient)?;
        let helper = registry.helper_for(ingredient)?;

        let raw = renderer.tooltip(ingredient, config.advanced_tooltips);
        let max_width = raw
            .iter()
            .map(|line| surface.text_width(line))
            .fold(config.max_tooltip_width, i32::max);

        let mut lines: Vec<TooltipLine> = raw
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let color = if i == 0 {
                    renderer.title_color(ingredient)
                } else {
                    Color::GRAY
                };
                TooltipLine::new(text, color)
            })
            .collect();

        let push_wrapped = |lines: &mut Vec<TooltipLine>, text: &str, color: Color| {
            lines.extend(
                tooltip::wrap_text(surface, text, max_width)
                    .into_iter()
                    .map(|line| TooltipLine::new(line, color)),
            );
        };

        if config.color_search {
            let color_names = helper.color_names(ingredient);
            if !color_names.is_empty() {
                let text = format!("Colors: {}", color_names.join(", "));
                push_wrapped(&mut lines, &text, Color::GRAY);
            }
        }

        if config.edit_mode {
            lines.push(TooltipLine::blank());
            lines.push(TooltipLine::new("Ingredient hiding mode", Color::WHITE).italic());

            for blacklist_type in BlacklistType::ALL {
                let (color, hidden_text, shown_text) = hiding_hint(blacklist_type);
                let hidden =
                    config.is_ingredient_on_blacklist(ingredient, helper.as_ref(), blacklist_type);
                let text = if hidden { hidden_text } else { shown_text };
                push_wrapped(&mut lines, text, color);
            }
        }

        Ok(lines)
    }

    /// Draw the tooltip next to the cursor
    pub fn draw_tooltip<S: Ingredient>(
        &self,
        registry: &IngredientRegistry<S>,
        config: &Config,
        surface: &mut dyn RenderSurface,
        mouse_x: i32,
        mouse_y: i32,
        screen: Rect,
    ) -> Result<(), RegistryError> {
        let lines = self.tooltip(registry, config, &*surface)?;
        tooltip::draw_tooltip(surface, &lines, mouse_x, mouse_y, screen);
        Ok(())
    }
}

/// Edit-mode marker inside the ingredient area at (`left`, `top`)
fn blacklist_marker(blacklist_type: BlacklistType, left: i32, top: i32) -> (Rect, Color) {
    match blacklist_type {
        BlacklistType::Item => (
            Rect::from_corners(left, top, left + 8, top + 16),
            BLACKLIST_ITEM_COLOR,
        ),
        BlacklistType::Wildcard => (
            Rect::from_corners(left + 8, top, left + 16, top + 16),
            BLACKLIST_WILDCARD_COLOR,
        ),
        BlacklistType::ModId => (
            Rect::from_corners(left, top + 8, left + 16, top + 16),
            BLACKLIST_MOD_COLOR,
        ),
    }
}

/// Hint color plus the text shown when hidden and when shown
fn hiding_hint(blacklist_type: BlacklistType) -> (Color, &'static str, &'static str) {
    match blacklist_type {
        BlacklistType::Item => (
            BLACKLIST_ITEM_COLOR,
            "Click to show this ingredient",
            "Click to hide this ingredient",
        ),
        BlacklistType::Wildcard => (
            BLACKLIST_WILDCARD_COLOR,
            "Right-click to show every variant of this ingredient",
            "Right-click to hide every variant of this ingredient",
        ),
        BlacklistType::ModId => (
            BLACKLIST_MOD_COLOR,
            "Shift-click to show everything from this mod",
            "Shift-click to hide everything from this mod",
        ),
    }
}
