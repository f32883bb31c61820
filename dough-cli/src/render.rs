use comfy_table::{presets::UTF8_FULL, Attribute, Cell, CellAlignment, ContentArrangement, Table};
use dough_core::{
    effective_oil_percent, DoughStyle, Ingredient, ParameterSet, Preset, Recipe,
};

use crate::store::CustomRecipe;

pub fn fmt_g(x: f64) -> String {
    let v = (x * 10.0).round() / 10.0;
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0} g", v)
    } else {
        format!("{:.1} g", v)
    }
}

fn fmt_pct(x: f64) -> String {
    format!("{}%", (x * 100.0).round() / 100.0)
}

fn bold(s: impl Into<String>) -> Cell {
    Cell::new(s.into()).add_attribute(Attribute::Bold)
}

/// Baker's percentage shown next to each ingredient.
fn baker_pct(params: &ParameterSet, ingredient: Ingredient) -> f64 {
    match ingredient {
        Ingredient::Flour => 100.0,
        Ingredient::Water => params.hydration,
        Ingredient::Salt => params.salt,
        Ingredient::FreshYeast => params.fresh_yeast,
        Ingredient::OliveOil => effective_oil_percent(params),
        Ingredient::Malt => params.malt,
    }
}

/// One row per ingredient with a column per stage.
pub fn recipe_table(params: &ParameterSet, recipe: &Recipe) -> Table {
    let style = params.dough_style;
    let mut header = vec![bold("Ingredient"), bold("%")];
    if let Some(pre) = &recipe.preferment {
        header.push(bold(pre.kind.name()));
    }
    header.push(bold("Final dough"));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    let pre_amounts = recipe.preferment.map(|p| p.ingredients.amounts());
    for (i, (ingredient, grams)) in recipe.final_dough.amounts().into_iter().enumerate() {
        let pre_grams = pre_amounts.map(|a| a[i].1);
        if grams == 0.0 && pre_grams.unwrap_or(0.0) == 0.0 {
            continue;
        }
        let mut row = vec![
            Cell::new(ingredient.label(style)),
            Cell::new(fmt_pct(baker_pct(params, ingredient))).set_alignment(CellAlignment::Right),
        ];
        if let Some(g) = pre_grams {
            row.push(Cell::new(fmt_g(g)).set_alignment(CellAlignment::Right));
        }
        row.push(Cell::new(fmt_g(grams)).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }

    let mut total = vec![bold("Total"), Cell::new("")];
    if let Some(pre) = &recipe.preferment {
        total.push(bold(fmt_g(pre.ingredients.total)).set_alignment(CellAlignment::Right));
    }
    total.push(bold(fmt_g(recipe.final_dough.total)).set_alignment(CellAlignment::Right));
    table.add_row(total);
    table
}

pub fn print_recipe(params: &ParameterSet, recipe: &Recipe) {
    println!("\n=== {} ({}) ===", params.dough_style.label(), params.dough_method.label());
    println!(
        "{} × {} | flour {} | dough {}",
        params.ball_count,
        fmt_g(params.ball_weight),
        fmt_g(recipe.total_flour),
        fmt_g(recipe.total_dough_weight)
    );
    println!("{}", recipe_table(params, recipe));
    for line in bun_extras(params, recipe) {
        println!("{line}");
    }
}

/// Bun additions that sit outside the weighed stages.
pub fn bun_extras(params: &ParameterSet, recipe: &Recipe) -> Vec<String> {
    let mut lines = Vec::new();
    if params.dough_style != DoughStyle::Buns {
        return lines;
    }
    if recipe.sugar > 0.0 {
        lines.push(format!("+ {} sugar ({})", fmt_g(recipe.sugar), fmt_pct(params.sugar)));
    }
    if params.whole_eggs > 0 || params.egg_yolks > 0 {
        lines.push(format!(
            "+ {} whole egg(s), {} yolk(s)",
            params.whole_eggs, params.egg_yolks
        ));
    }
    lines
}

pub fn catalog_table<'a>(
    presets: impl IntoIterator<Item = &'a Preset>,
    custom: &[CustomRecipe],
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            bold("Recipe"),
            bold("Method"),
            bold("Source"),
            bold("Description"),
        ]);

    for p in presets {
        table.add_row(vec![
            Cell::new(p.name),
            Cell::new(p.formula.method.label()),
            Cell::new("built-in"),
            Cell::new(p.description),
        ]);
    }
    for r in custom {
        table.add_row(vec![
            Cell::new(&r.name),
            Cell::new(r.params.dough_method.label()),
            Cell::new(format!("custom #{}", r.id)),
            Cell::new(&r.description),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dough_core::{compute_recipe, presets_for, BigaParams, DoughMethod};

    #[test]
    fn test_fmt_g() {
        assert_eq!(fmt_g(1000.0), "1000 g");
        assert_eq!(fmt_g(386.9), "386.9 g");
        assert_eq!(fmt_g(16.67), "16.7 g");
        assert_eq!(fmt_g(0.04), "0 g");
    }

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(65.0), "65%");
        assert_eq!(fmt_pct(2.8), "2.8%");
    }

    #[test]
    fn test_direct_table_skips_empty_rows() {
        let p = ParameterSet {
            malt: 0.0,
            ..ParameterSet::default()
        };
        let out = recipe_table(&p, &compute_recipe(&p)).to_string();
        assert!(out.contains("Final dough"));
        assert!(out.contains("Water"));
        assert!(!out.contains("Malt"));
        assert!(!out.contains("Biga"));
        assert!(out.contains("1000 g"));
    }

    #[test]
    fn test_biga_table_has_stage_column() {
        let p = ParameterSet {
            dough_method: DoughMethod::Biga(BigaParams::default()),
            ..ParameterSet::default()
        };
        let out = recipe_table(&p, &compute_recipe(&p)).to_string();
        assert!(out.contains("Biga"));
        assert!(out.contains("Final dough"));
    }

    #[test]
    fn test_bun_table_uses_milk_and_butter() {
        let p = ParameterSet {
            dough_style: DoughStyle::Buns,
            olive_oil: 10.0,
            sugar: 8.0,
            ..ParameterSet::default()
        };
        let out = recipe_table(&p, &compute_recipe(&p)).to_string();
        assert!(out.contains("Milk"));
        assert!(out.contains("Butter"));
        assert!(!out.contains("Water"));
    }

    #[test]
    fn test_bun_extras_list_sugar_and_eggs() {
        let p = ParameterSet {
            dough_style: DoughStyle::Buns,
            salt: 2.8,
            malt: 0.0,
            sugar: 8.0,
            egg_yolks: 2,
            ..ParameterSet::default()
        };
        let r = compute_recipe(&p);
        assert_relative_eq!(r.total_flour, 595.24);
        assert_eq!(
            bun_extras(&p, &r),
            ["+ 47.6 g sugar (8%)", "+ 0 whole egg(s), 2 yolk(s)"]
        );

        let bread = ParameterSet {
            dough_style: DoughStyle::Bread,
            ..p
        };
        assert!(bun_extras(&bread, &compute_recipe(&bread)).is_empty());
    }

    #[test]
    fn test_catalog_lists_presets_and_custom() {
        let custom = vec![CustomRecipe {
            id: "1700000000000".into(),
            name: "Mine".into(),
            description: "".into(),
            dough_style: DoughStyle::Neapolitan,
            params: ParameterSet::default(),
        }];
        let out = catalog_table(presets_for(DoughStyle::Neapolitan), &custom).to_string();
        assert!(out.contains("Classic Neapolitan"));
        assert!(out.contains("custom #1700000000000"));
    }
}
