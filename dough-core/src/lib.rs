//! Baker's-percentage dough calculator.
//!
//! [`compute_recipe`] turns a [`ParameterSet`] into gram weights for the final
//! dough and, for biga or poolish, the preferment. Everything here is pure.

pub mod catalog;
pub mod engine;
pub mod pan;
pub mod params;
pub mod poolish;
pub mod share;

pub use catalog::{find_preset, presets_for, Formula, Preset, PRESETS};
pub use engine::{
    compute_recipe, effective_oil_percent, effective_sugar_percent, flour_factor, round2,
    Ingredient, IngredientSet, Preferment, PrefermentKind, Recipe,
};
pub use pan::{derive_ball_weight, pan_area};
pub use params::{
    BigaParams, DoughMethod, DoughStyle, Pan, PanShape, ParameterSet, PoolishParams, Thickness,
};
pub use poolish::{poolish_yeast_percent, POOLISH_YEAST_TABLE};
pub use share::{share_text, ShareText};
