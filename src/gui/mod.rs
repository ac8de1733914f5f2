//! Overlay GUI pieces drawn through a host-supplied surface.

pub mod surface;
pub mod tile;
pub mod tooltip;

pub use surface::{Color, Rect, RenderSurface};
pub use tile::IngredientTile;
pub use tooltip::TooltipLine;
