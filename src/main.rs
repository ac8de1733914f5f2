use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use enough_items::data::{BasePlugin, FluidStack, ItemStack};
use enough_items::gui::{Color, IngredientTile, Rect, RenderSurface};
use enough_items::{
    Config, Ingredient, IngredientFilter, IngredientListElement, IngredientRegistration,
    IngredientRegistry,
};

#[derive(Debug, Parser)]
#[command(about = "Search the ingredient catalog loaded from a data directory")]
struct Args {
    /// Directory holding `items/` and `fluids/` definition files
    #[arg(short, long, default_value = "data")]
    data: PathBuf,
    /// Overlay config file
    #[arg(short, long, default_value = "enough-items.toml")]
    config: PathBuf,
    /// Include ids and extra details in tooltips
    #[arg(long)]
    advanced: bool,
    /// Show hidden ingredients and hiding hints
    #[arg(long)]
    edit_mode: bool,
    /// Search text, e.g. `@base -wool` or `^red | coal`
    query: Vec<String>,
}

/// Plain-text stand-in for the game's font: every glyph is 6 pixels wide
struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn fill_rect(&mut self, _area: Rect, _color: Color) {}

    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32, _color: Color, _italic: bool) {}

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * 6
    }
}

fn print_tooltip<V: Ingredient>(
    registry: &IngredientRegistry<ItemStack>,
    config: &Config,
    element: &IngredientListElement,
) -> Result<(), enough_items::RegistryError> {
    let Some(ingredient) = registry.element_ingredient::<V>(element) else {
        return Ok(());
    };
    let mut tile = IngredientTile::new(0, 0, 1);
    tile.set(ingredient.clone());

    for line in tile.tooltip(registry, config, &ConsoleSurface)? {
        println!("    {}", line.text);
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(&args.config)?;
    config.advanced_tooltips |= args.advanced;
    config.edit_mode |= args.edit_mode;

    let plugin = BasePlugin::load(&args.data)?;
    let mut registration = IngredientRegistration::new();
    registration.register_plugins(&[&plugin]);
    let registry = registration.build::<ItemStack>(&plugin.classifier());

    let mut filter = IngredientFilter::new();
    filter.set_filter_text(&args.query.join(" "));
    let list = filter.ingredient_list(&registry, &config);
    info!("{} ingredients match '{}'", list.len(), args.query.join(" "));

    for element in list {
        println!("{} [{}]", element.display_name(), element.unique_id());
        if element.ingredient_type().is::<ItemStack>() {
            print_tooltip::<ItemStack>(&registry, &config, element)?;
        } else if element.ingredient_type().is::<FluidStack>() {
            print_tooltip::<FluidStack>(&registry, &config, element)?;
        }
    }

    println!(
        "{} fuels, {} brewing reagents",
        registry.fuels().len(),
        registry.reagents().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("enough_items=info".parse().expect("valid log directive")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
