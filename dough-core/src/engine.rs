use serde::{Deserialize, Serialize};

use crate::params::{DoughMethod, DoughStyle, ParameterSet};
use crate::poolish::poolish_yeast_percent;

/// Oil percentage used for tonda romana when none is given.
pub const ROMAN_DEFAULT_OIL: f64 = 3.0;

/// Grams per ingredient for one mixing stage.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct IngredientSet {
    pub flour: f64,
    pub water: f64,
    pub salt: f64,
    pub fresh_yeast: f64,
    pub olive_oil: f64,
    pub malt: f64,
    /// Sum of the rounded fields above.
    pub total: f64,
}

impl IngredientSet {
    /// Rounds every field to 2 decimals and sets `total` to their sum.
    fn rounded(
        flour: f64,
        water: f64,
        salt: f64,
        fresh_yeast: f64,
        olive_oil: f64,
        malt: f64,
    ) -> Self {
        let mut set = IngredientSet {
            flour: round2(flour),
            water: round2(water),
            salt: round2(salt),
            fresh_yeast: round2(fresh_yeast),
            olive_oil: round2(olive_oil),
            malt: round2(malt),
            total: 0.0,
        };
        set.total = set
            .amounts()
            .iter()
            .fold(0.0, |sum, (_, grams)| sum + grams);
        set
    }

    /// Ingredient fields in display order, `total` excluded.
    pub fn amounts(&self) -> [(Ingredient, f64); 6] {
        [
            (Ingredient::Flour, self.flour),
            (Ingredient::Water, self.water),
            (Ingredient::Salt, self.salt),
            (Ingredient::FreshYeast, self.fresh_yeast),
            (Ingredient::OliveOil, self.olive_oil),
            (Ingredient::Malt, self.malt),
        ]
    }
}

/// Ingredient slot of an [`IngredientSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ingredient {
    Flour,
    Water,
    Salt,
    FreshYeast,
    OliveOil,
    Malt,
}

impl Ingredient {
    /// Display name; buns use milk and butter in the water and oil slots.
    pub fn label(self, style: DoughStyle) -> &'static str {
        match (self, style) {
            (Ingredient::Water, DoughStyle::Buns) => "Milk",
            (Ingredient::OliveOil, DoughStyle::Buns) => "Butter",
            (Ingredient::Flour, _) => "Flour",
            (Ingredient::Water, _) => "Water",
            (Ingredient::Salt, _) => "Salt",
            (Ingredient::FreshYeast, _) => "Fresh yeast",
            (Ingredient::OliveOil, _) => "Olive oil",
            (Ingredient::Malt, _) => "Malt",
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrefermentKind {
    Biga,
    Poolish,
}

impl PrefermentKind {
    pub fn name(self) -> &'static str {
        match self {
            PrefermentKind::Biga => "Biga",
            PrefermentKind::Poolish => "Poolish",
        }
    }
}

/// First-stage mix of an indirect method.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Preferment {
    pub kind: PrefermentKind,
    pub ingredients: IngredientSet,
}

/// Weight breakdown returned by [`compute_recipe`].
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub final_dough: IngredientSet,
    /// Present for biga and poolish only.
    pub preferment: Option<Preferment>,
    pub total_dough_weight: f64,
    pub total_flour: f64,
    /// Buns only: sugar in grams, added on top of the dough weight and
    /// left out of every stage total.
    #[serde(default)]
    pub sugar: f64,
}

/// Round half away from zero to 2 decimals.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[inline]
fn percent_of(flour: f64, percent: f64) -> f64 {
    flour * (percent / 100.0)
}

/// Oil percentage after the tonda romana default is applied.
pub fn effective_oil_percent(params: &ParameterSet) -> f64 {
    if params.dough_style == DoughStyle::TondaRomana && params.olive_oil == 0.0 {
        ROMAN_DEFAULT_OIL
    } else {
        params.olive_oil
    }
}

/// Sugar is only read for buns.
pub fn effective_sugar_percent(params: &ParameterSet) -> f64 {
    if params.dough_style == DoughStyle::Buns {
        params.sugar
    } else {
        0.0
    }
}

/// Dough mass as a multiple of flour mass. Always >= 1 for non-negative percentages.
pub fn flour_factor(params: &ParameterSet) -> f64 {
    1.0 + (params.hydration / 100.0)
        + (params.salt / 100.0)
        + (effective_oil_percent(params) / 100.0)
        + (params.malt / 100.0)
        + (params.fresh_yeast / 100.0)
}

/// Unrounded first-stage amounts, subtracted from the full batch.
#[derive(Copy, Clone, Debug)]
struct Split {
    kind: PrefermentKind,
    flour: f64,
    water: f64,
    yeast: f64,
}

/// Compute ingredient weights for the given parameters.
///
/// The preferment (if any) is carved out of the total flour, water and yeast;
/// salt, oil and malt all go into the final dough. Bun sugar is reported
/// separately and does not shift the flour factor.
/// Out-of-range input is not rejected: the final stage may come out at zero
/// or below when the preferment takes most of a quantity.
pub fn compute_recipe(params: &ParameterSet) -> Recipe {
    let total_dough_weight = params.ball_count as f64 * params.ball_weight;
    let oil_pct = effective_oil_percent(params);
    let total_flour = total_dough_weight / flour_factor(params);

    let split = match params.dough_method {
        DoughMethod::Direct => None,
        DoughMethod::Biga(biga) => {
            let flour = percent_of(total_flour, biga.percentage);
            Some(Split {
                kind: PrefermentKind::Biga,
                flour,
                water: percent_of(flour, biga.hydration),
                yeast: percent_of(flour, biga.fresh_yeast),
            })
        }
        DoughMethod::Poolish(poolish) => {
            let flour = percent_of(total_flour, poolish.percentage);
            Some(Split {
                kind: PrefermentKind::Poolish,
                flour,
                // 100% hydration
                water: flour,
                yeast: percent_of(flour, poolish_yeast_percent(poolish.hours)),
            })
        }
    };

    let (pre_flour, pre_water, pre_yeast) = split
        .map(|s| (s.flour, s.water, s.yeast))
        .unwrap_or((0.0, 0.0, 0.0));

    let final_dough = IngredientSet::rounded(
        total_flour - pre_flour,
        percent_of(total_flour, params.hydration) - pre_water,
        percent_of(total_flour, params.salt),
        percent_of(total_flour, params.fresh_yeast) - pre_yeast,
        percent_of(total_flour, oil_pct),
        percent_of(total_flour, params.malt),
    );

    let preferment = split.map(|s| Preferment {
        kind: s.kind,
        ingredients: IngredientSet::rounded(s.flour, s.water, 0.0, s.yeast, 0.0, 0.0),
    });

    Recipe {
        final_dough,
        preferment,
        total_dough_weight: round2(total_dough_weight),
        total_flour: round2(total_flour),
        sugar: round2(percent_of(total_flour, effective_sugar_percent(params))),
    }
}
