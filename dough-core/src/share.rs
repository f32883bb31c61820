use std::fmt;

use crate::engine::{IngredientSet, Recipe};
use crate::params::{DoughMethod, DoughStyle, PanShape, ParameterSet};

/// Plain-text recipe for sharing: configuration, totals and one block of
/// ingredients per stage (grams to one decimal, empty fields left out).
pub struct ShareText<'a> {
    pub params: &'a ParameterSet,
    pub recipe: &'a Recipe,
}

pub fn share_text(params: &ParameterSet, recipe: &Recipe) -> String {
    ShareText { params, recipe }.to_string()
}

impl fmt::Display for ShareText<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_share(out, self.params, self.recipe)
    }
}

fn write_share(out: &mut fmt::Formatter<'_>, p: &ParameterSet, r: &Recipe) -> fmt::Result {
    let buns = p.dough_style == DoughStyle::Buns;

    writeln!(out, "My {} Recipe", p.dough_style.label())?;
    writeln!(out)?;
    writeln!(out, "Configuration:")?;
    writeln!(out, "- Method: {}", p.dough_method.label())?;
    writeln!(out, "- Balls: {} x {} g", p.ball_count, p.ball_weight)?;
    writeln!(
        out,
        "- {}: {}%",
        if buns { "Milk" } else { "Hydration" },
        p.hydration
    )?;
    writeln!(out, "- Salt: {}%", p.salt)?;
    if p.olive_oil > 0.0 {
        let name = if buns { "Butter" } else { "Olive oil" };
        writeln!(out, "- {name}: {}%", p.olive_oil)?;
    }
    if p.malt > 0.0 {
        writeln!(out, "- Malt: {}%", p.malt)?;
    }
    if buns {
        if p.sugar > 0.0 {
            writeln!(out, "- Sugar: {}%", p.sugar)?;
        }
        if p.whole_eggs > 0 || p.egg_yolks > 0 {
            writeln!(
                out,
                "- Eggs: {} whole, {} yolks",
                p.whole_eggs, p.egg_yolks
            )?;
        }
    }
    writeln!(out)?;

    match p.dough_method {
        DoughMethod::Direct => {}
        DoughMethod::Biga(b) => {
            writeln!(out, "Biga:")?;
            writeln!(out, "- Percentage: {}%", b.percentage)?;
            writeln!(out, "- Hydration: {}%", b.hydration)?;
            writeln!(out, "- Yeast: {}%", b.fresh_yeast)?;
            writeln!(out)?;
        }
        DoughMethod::Poolish(pl) => {
            writeln!(out, "Poolish:")?;
            writeln!(out, "- Percentage: {}%", pl.percentage)?;
            writeln!(out, "- Maturation: {} hours", pl.hours)?;
            writeln!(out)?;
        }
    }

    if let (true, Some(pan)) = (p.dough_style.is_tray(), p.pan) {
        writeln!(out, "Tray:")?;
        match pan.shape {
            PanShape::Round { diameter_cm } => {
                writeln!(out, "- Shape: Round ({diameter_cm} cm)")?
            }
            PanShape::Square {
                length_cm,
                width_cm,
            } => writeln!(out, "- Shape: Square ({length_cm} x {width_cm} cm)")?,
        }
        writeln!(out, "- Thickness: {}", pan.thickness.label())?;
        writeln!(out)?;
    }

    writeln!(out, "Totals:")?;
    writeln!(out, "- Total flour: {:.0} g", r.total_flour)?;
    writeln!(out, "- Total dough: {:.0} g", r.total_dough_weight)?;
    writeln!(out)?;

    if let Some(pre) = &r.preferment {
        writeln!(out, "{} ingredients:", pre.kind.name())?;
        write_ingredients(out, p.dough_style, &pre.ingredients)?;
        writeln!(out)?;
    }

    writeln!(out, "Final dough ingredients:")?;
    write_ingredients(out, p.dough_style, &r.final_dough)?;
    if r.sugar > 0.0 {
        writeln!(out, "Sugar: {:.1} g", r.sugar)?;
    }
    Ok(())
}

fn write_ingredients(
    out: &mut fmt::Formatter<'_>,
    style: DoughStyle,
    set: &IngredientSet,
) -> fmt::Result {
    for (ingredient, grams) in set.amounts() {
        if grams > 0.0 {
            writeln!(out, "{}: {:.1} g", ingredient.label(style), grams)?;
        }
    }
    Ok(())
}
