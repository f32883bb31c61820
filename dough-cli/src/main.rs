mod profile;
mod render;
mod store;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dough_core::{
    compute_recipe, derive_ball_weight, find_preset, presets_for, share_text, ParameterSet,
};
use std::{fs, path::PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use profile::{clamp_params, MethodFlag, Profile, ShapeFlag, StyleFlag, ThicknessFlag};
use store::{default_store_path, RecipeStore};

#[derive(Parser, Debug)]
#[command(
    name = "dough-cli",
    about = "Turn baker's percentages into ingredient weights (direct, biga or poolish).",
    version
)]
struct Args {
    /// Dough style
    #[arg(long, value_enum, default_value_t = StyleFlag::Neapolitan)]
    style: StyleFlag,

    /// Mixing method
    #[arg(long, value_enum, default_value_t = MethodFlag::Direct)]
    method: MethodFlag,

    /// Number of balls (or trays)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    balls: u32,

    /// Weight of one ball in grams (derived from the pan for teglia/focaccia)
    #[arg(long, default_value_t = 250.0)]
    ball_weight: f64,

    /// Hydration, % of flour (milk for buns)
    #[arg(long, default_value_t = 65.0)]
    hydration: f64,

    /// Salt, % of flour
    #[arg(long, default_value_t = 2.5)]
    salt: f64,

    /// Olive oil, % of flour (butter for buns)
    #[arg(long, default_value_t = 0.0)]
    olive_oil: f64,

    /// Malt, % of flour
    #[arg(long, default_value_t = 0.5)]
    malt: f64,

    /// Fresh yeast, % of flour
    #[arg(long, default_value_t = 0.2)]
    fresh_yeast: f64,

    /// Share of the flour in the biga, %
    #[arg(long, default_value_t = 50.0)]
    biga_percentage: f64,

    /// Biga hydration, %
    #[arg(long, default_value_t = 45.0)]
    biga_hydration: f64,

    /// Fresh yeast in the biga, % of biga flour
    #[arg(long, default_value_t = 0.1)]
    biga_yeast: f64,

    /// Share of the flour in the poolish, % (capped at hydration)
    #[arg(long, default_value_t = 30.0)]
    poolish_percentage: f64,

    /// Poolish maturation in hours (1..18)
    #[arg(long, default_value_t = 8.0)]
    poolish_hours: f64,

    /// Pan shape for teglia/focaccia
    #[arg(long, value_enum, default_value_t = ShapeFlag::Square)]
    pan_shape: ShapeFlag,

    /// Round pan diameter in cm
    #[arg(long, default_value_t = 32.0)]
    pan_diameter: f64,

    /// Square pan length in cm
    #[arg(long, default_value_t = 40.0)]
    pan_length: f64,

    /// Square pan width in cm
    #[arg(long, default_value_t = 30.0)]
    pan_width: f64,

    /// Dough thickness in the pan
    #[arg(long, value_enum, default_value_t = ThicknessFlag::Normal)]
    thickness: ThicknessFlag,

    /// Sugar, % of flour (buns)
    #[arg(long, default_value_t = 0.0)]
    sugar: f64,

    /// Whole eggs (buns)
    #[arg(long, default_value_t = 0)]
    whole_eggs: u32,

    /// Egg yolks (buns)
    #[arg(long, default_value_t = 0)]
    egg_yolks: u32,

    /// Apply a built-in recipe for the style, or a saved one by id or name
    #[arg(long)]
    recipe: Option<String>,

    /// List built-in and saved recipes for the style
    #[arg(long)]
    list_recipes: bool,

    /// Save the resulting parameters as a custom recipe with this name
    #[arg(long)]
    save_recipe: Option<String>,

    /// Description for --save-recipe
    #[arg(long, default_value = "")]
    description: String,

    /// Delete a saved recipe by id and exit
    #[arg(long)]
    delete_recipe: Option<String>,

    /// Print a plain-text version of the recipe for sharing
    #[arg(long)]
    share: bool,

    /// Custom recipe store (JSON)
    #[arg(long, env = "DOUGH_CLI_STORE")]
    store: Option<PathBuf>,

    /// Load a profile JSON before applying CLI overrides
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Save the current effective parameters to a profile JSON
    #[arg(long)]
    save_profile: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for Profile {
    fn from(a: &Args) -> Self {
        Profile {
            style: a.style,
            method: a.method,
            balls: a.balls,
            ball_weight: a.ball_weight,
            hydration: a.hydration,
            salt: a.salt,
            olive_oil: a.olive_oil,
            malt: a.malt,
            fresh_yeast: a.fresh_yeast,
            biga_percentage: a.biga_percentage,
            biga_hydration: a.biga_hydration,
            biga_yeast: a.biga_yeast,
            poolish_percentage: a.poolish_percentage,
            poolish_hours: a.poolish_hours,
            pan_shape: a.pan_shape,
            pan_diameter: a.pan_diameter,
            pan_length: a.pan_length,
            pan_width: a.pan_width,
            thickness: a.thickness,
            sugar: a.sugar,
            whole_eggs: a.whole_eggs,
            egg_yolks: a.egg_yolks,
        }
    }
}

/// Fill every flag still at its default from the profile (CLI wins).
fn merge_profile(args: &mut Args, p: Profile) {
    // Defaults snapshot to detect "unset" fields
    let def = Args::parse_from(["dough-cli"]);

    macro_rules! take {
        ($($field:ident),* $(,)?) => {
            $(
                if args.$field == def.$field {
                    args.$field = p.$field;
                }
            )*
        };
    }

    take!(
        style,
        method,
        balls,
        ball_weight,
        hydration,
        salt,
        olive_oil,
        malt,
        fresh_yeast,
        biga_percentage,
        biga_hydration,
        biga_yeast,
        poolish_percentage,
        poolish_hours,
        pan_shape,
        pan_diameter,
        pan_length,
        pan_width,
        thickness,
        sugar,
        whole_eggs,
        egg_yolks,
    );
}

/// Built-in preset for the current style first, then a saved recipe.
fn resolve_recipe(store: &RecipeStore, current: &ParameterSet, key: &str) -> Result<ParameterSet> {
    if let Some(preset) = find_preset(current.dough_style, key) {
        info!(recipe = preset.name, "applying built-in recipe");
        return Ok(preset.apply(current));
    }
    if let Some(custom) = store.find(key) {
        info!(id = %custom.id, name = %custom.name, "applying saved recipe");
        return Ok(custom.params);
    }
    bail!(
        "no recipe '{key}' for {} (try --list-recipes)",
        current.dough_style.label()
    )
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    init_tracing(args.verbose);

    // Load profile if present, then apply CLI overrides (CLI wins).
    if let Some(path) = args.profile.clone() {
        let txt = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let p: Profile = serde_json::from_str(&txt)
            .with_context(|| format!("Invalid profile JSON: {}", path.display()))?;
        merge_profile(&mut args, p);
        debug!(path = %path.display(), "profile merged");
    }

    if let Some(path) = &args.save_profile {
        let json = serde_json::to_string_pretty(&Profile::from(&args))?;
        fs::write(path, json)
            .with_context(|| format!("Failed to save profile: {}", path.display()))?;
        println!("Profile saved to {}", path.display());
    }

    let store = RecipeStore::new(args.store.clone().unwrap_or_else(default_store_path));
    debug!(path = %store.path().display(), "recipe store");

    if let Some(id) = &args.delete_recipe {
        let removed = store.delete(id)?;
        println!("Deleted recipe '{}' ({})", removed.name, removed.id);
        return Ok(());
    }

    let mut params = ParameterSet::from(&Profile::from(&args));
    if let Some(key) = &args.recipe {
        params = resolve_recipe(&store, &params, key)?;
    }
    clamp_params(&mut params);

    if let (true, Some(pan)) = (params.dough_style.is_tray(), params.pan) {
        let weight = derive_ball_weight(pan.shape, pan.thickness);
        if weight > 0.0 {
            debug!(weight, "ball weight derived from pan");
            params.ball_weight = weight;
        }
    }

    if args.list_recipes {
        let custom: Vec<_> = store
            .load_or_empty()
            .into_iter()
            .filter(|r| r.dough_style == params.dough_style)
            .collect();
        println!("\n=== Recipes: {} ===", params.dough_style.label());
        println!(
            "{}",
            render::catalog_table(presets_for(params.dough_style), &custom)
        );
    }

    let recipe = compute_recipe(&params);
    render::print_recipe(&params, &recipe);

    if args.share {
        println!("\n{}", share_text(&params, &recipe));
    }

    if let Some(name) = &args.save_recipe {
        let saved = store
            .add(name, &args.description, &params)
            .with_context(|| format!("Failed to save recipe to {}", store.path().display()))?;
        println!("Recipe '{}' saved (id {})", saved.name, saved.id);
    }

    Ok(())
}
