use crate::params::{BigaParams, DoughMethod, DoughStyle, ParameterSet, PoolishParams};

/// Formula part of a preset: everything except quantities and pan.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Formula {
    pub method: DoughMethod,
    pub hydration: f64,
    pub salt: f64,
    pub olive_oil: f64,
    pub malt: f64,
    pub fresh_yeast: f64,
    pub sugar: f64,
    pub whole_eggs: u32,
    pub egg_yolks: u32,
}

const BASE: Formula = Formula {
    method: DoughMethod::Direct,
    hydration: 65.0,
    salt: 2.5,
    olive_oil: 0.0,
    malt: 0.0,
    fresh_yeast: 0.2,
    sugar: 0.0,
    whole_eggs: 0,
    egg_yolks: 0,
};

/// Named built-in recipe for one style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    pub style: DoughStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub formula: Formula,
}

impl Preset {
    /// Keep style, quantities and pan of `current`; every other field comes
    /// from the formula, so nothing from a previous recipe leaks through.
    pub fn apply(&self, current: &ParameterSet) -> ParameterSet {
        let f = self.formula;
        ParameterSet {
            dough_style: current.dough_style,
            ball_count: current.ball_count,
            ball_weight: current.ball_weight,
            pan: current.pan,
            dough_method: f.method,
            hydration: f.hydration,
            salt: f.salt,
            olive_oil: f.olive_oil,
            malt: f.malt,
            fresh_yeast: f.fresh_yeast,
            sugar: f.sugar,
            whole_eggs: f.whole_eggs,
            egg_yolks: f.egg_yolks,
        }
    }
}

pub static PRESETS: &[Preset] = &[
    Preset {
        style: DoughStyle::Neapolitan,
        name: "Classic Neapolitan",
        description: "A traditional recipe for a soft, airy crust, using the direct method.",
        formula: Formula {
            hydration: 65.0,
            salt: 2.8,
            fresh_yeast: 0.2,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Neapolitan,
        name: "Neapolitan Biga",
        description: "Half the flour in a stiff biga for a more aromatic, open cornicione.",
        formula: Formula {
            method: DoughMethod::Biga(BigaParams {
                percentage: 50.0,
                hydration: 45.0,
                fresh_yeast: 0.1,
            }),
            hydration: 70.0,
            salt: 2.8,
            fresh_yeast: 0.3,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Neapolitan,
        name: "Contemporary Poolish",
        description: "High hydration with an overnight poolish for a puffy, crisp rim.",
        formula: Formula {
            method: DoughMethod::Poolish(PoolishParams {
                percentage: 30.0,
                hours: 12.0,
            }),
            hydration: 72.0,
            salt: 2.8,
            fresh_yeast: 0.15,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::TondaRomana,
        name: "Classic Tonda Romana",
        description: "Low hydration and a little oil for the thin, crackling Roman base.",
        formula: Formula {
            hydration: 58.0,
            salt: 2.5,
            fresh_yeast: 0.5,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::TegliaRomana,
        name: "Teglia with Poolish",
        description: "Very wet dough built on a long poolish, baked in a blue-steel tray.",
        formula: Formula {
            method: DoughMethod::Poolish(PoolishParams {
                percentage: 40.0,
                hours: 16.0,
            }),
            hydration: 80.0,
            salt: 2.5,
            olive_oil: 2.5,
            malt: 1.0,
            fresh_yeast: 0.4,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Focaccia,
        name: "Genovese Focaccia",
        description: "Generous oil and a quick direct dough for a soft, dimpled focaccia.",
        formula: Formula {
            hydration: 75.0,
            salt: 2.5,
            olive_oil: 5.0,
            malt: 1.0,
            fresh_yeast: 1.0,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Bread,
        name: "Country Loaf",
        description: "Poolish-leavened loaf with a thick crust and a creamy crumb.",
        formula: Formula {
            method: DoughMethod::Poolish(PoolishParams {
                percentage: 20.0,
                hours: 12.0,
            }),
            hydration: 70.0,
            salt: 2.2,
            fresh_yeast: 0.5,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Bread,
        name: "Sandwich Loaf",
        description: "Enriched with oil and malt for a soft, even slice.",
        formula: Formula {
            hydration: 62.0,
            salt: 2.0,
            olive_oil: 3.0,
            malt: 1.0,
            fresh_yeast: 1.5,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Buns,
        name: "Soft Milk Buns",
        description: "Milk, butter and a touch of sugar for pillowy burger buns.",
        formula: Formula {
            hydration: 55.0,
            salt: 1.8,
            olive_oil: 10.0,
            fresh_yeast: 2.0,
            sugar: 8.0,
            whole_eggs: 1,
            ..BASE
        },
    },
    Preset {
        style: DoughStyle::Buns,
        name: "Brioche Buns",
        description: "Rich, buttery buns with eggs and yolks.",
        formula: Formula {
            hydration: 45.0,
            salt: 1.8,
            olive_oil: 20.0,
            fresh_yeast: 2.5,
            sugar: 12.0,
            whole_eggs: 2,
            egg_yolks: 2,
            ..BASE
        },
    },
];

pub fn presets_for(style: DoughStyle) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.style == style)
}

/// Case-insensitive lookup within one style.
pub fn find_preset(style: DoughStyle, name: &str) -> Option<&'static Preset> {
    presets_for(style).find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Pan;

    #[test]
    fn test_every_style_has_a_preset() {
        for style in DoughStyle::ALL {
            assert!(presets_for(style).count() > 0, "{style:?} has no preset");
        }
    }

    #[test]
    fn test_find_is_case_insensitive_and_style_scoped() {
        let p = find_preset(DoughStyle::Neapolitan, "  classic neapolitan ").unwrap();
        assert_eq!(p.name, "Classic Neapolitan");
        assert!(find_preset(DoughStyle::Focaccia, "Classic Neapolitan").is_none());
    }

    #[test]
    fn test_apply_keeps_quantities_and_resets_the_rest() {
        let current = ParameterSet {
            dough_style: DoughStyle::TegliaRomana,
            ball_count: 2,
            ball_weight: 600.0,
            pan: Some(Pan::default()),
            sugar: 9.0,
            whole_eggs: 3,
            ..ParameterSet::default()
        };
        let preset = find_preset(DoughStyle::TegliaRomana, "Teglia with Poolish").unwrap();
        let applied = preset.apply(&current);

        assert_eq!(applied.dough_style, DoughStyle::TegliaRomana);
        assert_eq!(applied.ball_count, 2);
        assert_eq!(applied.ball_weight, 600.0);
        assert_eq!(applied.pan, Some(Pan::default()));
        assert_eq!(applied.hydration, 80.0);
        assert!(matches!(applied.dough_method, DoughMethod::Poolish(_)));
        assert_eq!(applied.sugar, 0.0);
        assert_eq!(applied.whole_eggs, 0);
    }

    #[test]
    fn test_poolish_presets_fit_within_hydration() {
        for p in PRESETS {
            if let DoughMethod::Poolish(poolish) = p.formula.method {
                assert!(poolish.percentage <= p.formula.hydration, "{}", p.name);
            }
        }
    }
}
