use clap::ValueEnum;
use dough_core::{
    BigaParams, DoughMethod, DoughStyle, Pan, PanShape, ParameterSet, PoolishParams, Thickness,
    POOLISH_YEAST_TABLE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Style CLI enum mirrors dough-core (derive for Clap).
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleFlag {
    Neapolitan,
    TondaRomana,
    TegliaRomana,
    Focaccia,
    Bread,
    Buns,
}

impl From<StyleFlag> for DoughStyle {
    fn from(s: StyleFlag) -> Self {
        match s {
            StyleFlag::Neapolitan => DoughStyle::Neapolitan,
            StyleFlag::TondaRomana => DoughStyle::TondaRomana,
            StyleFlag::TegliaRomana => DoughStyle::TegliaRomana,
            StyleFlag::Focaccia => DoughStyle::Focaccia,
            StyleFlag::Bread => DoughStyle::Bread,
            StyleFlag::Buns => DoughStyle::Buns,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodFlag {
    Direct,
    Biga,
    Poolish,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFlag {
    Square,
    Round,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThicknessFlag {
    VeryThin,
    Thin,
    Normal,
    Thick,
    VeryThick,
}

impl From<ThicknessFlag> for Thickness {
    fn from(t: ThicknessFlag) -> Self {
        match t {
            ThicknessFlag::VeryThin => Thickness::VeryThin,
            ThicknessFlag::Thin => Thickness::Thin,
            ThicknessFlag::Normal => Thickness::Normal,
            ThicknessFlag::Thick => Thickness::Thick,
            ThicknessFlag::VeryThick => Thickness::VeryThick,
        }
    }
}

/// Flat, JSON-friendly snapshot of every calculation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub style: StyleFlag,
    pub method: MethodFlag,
    pub balls: u32,
    pub ball_weight: f64,
    pub hydration: f64,
    pub salt: f64,
    pub olive_oil: f64,
    pub malt: f64,
    pub fresh_yeast: f64,
    pub biga_percentage: f64,
    pub biga_hydration: f64,
    pub biga_yeast: f64,
    pub poolish_percentage: f64,
    pub poolish_hours: f64,
    pub pan_shape: ShapeFlag,
    pub pan_diameter: f64,
    pub pan_length: f64,
    pub pan_width: f64,
    pub thickness: ThicknessFlag,
    pub sugar: f64,
    pub whole_eggs: u32,
    pub egg_yolks: u32,
}

impl From<&Profile> for ParameterSet {
    fn from(p: &Profile) -> Self {
        let dough_style = DoughStyle::from(p.style);
        let dough_method = match p.method {
            MethodFlag::Direct => DoughMethod::Direct,
            MethodFlag::Biga => DoughMethod::Biga(BigaParams {
                percentage: p.biga_percentage,
                hydration: p.biga_hydration,
                fresh_yeast: p.biga_yeast,
            }),
            MethodFlag::Poolish => DoughMethod::Poolish(PoolishParams {
                percentage: p.poolish_percentage,
                hours: p.poolish_hours,
            }),
        };
        let pan = dough_style.is_tray().then(|| Pan {
            shape: match p.pan_shape {
                ShapeFlag::Round => PanShape::Round {
                    diameter_cm: p.pan_diameter,
                },
                ShapeFlag::Square => PanShape::Square {
                    length_cm: p.pan_length,
                    width_cm: p.pan_width,
                },
            },
            thickness: p.thickness.into(),
        });

        ParameterSet {
            dough_style,
            dough_method,
            ball_count: p.balls,
            ball_weight: p.ball_weight,
            hydration: p.hydration,
            salt: p.salt,
            olive_oil: p.olive_oil,
            malt: p.malt,
            fresh_yeast: p.fresh_yeast,
            pan,
            sugar: p.sugar,
            whole_eggs: p.whole_eggs,
            egg_yolks: p.egg_yolks,
        }
    }
}

pub const MIN_BALL_WEIGHT: f64 = 10.0;
pub const MIN_PAN_SIDE: f64 = 10.0;

fn at_least(name: &str, v: &mut f64, lo: f64) {
    if *v < lo {
        debug!(field = name, from = *v, to = lo, "clamped input");
        *v = lo;
    }
}

/// Bring a parameter set into the range the calculator expects.
/// The engine itself never validates, so every caller goes through here.
pub fn clamp_params(p: &mut ParameterSet) {
    if p.ball_count < 1 {
        debug!(from = p.ball_count, "clamped ball count to 1");
        p.ball_count = 1;
    }
    at_least("ball_weight", &mut p.ball_weight, MIN_BALL_WEIGHT);
    at_least("hydration", &mut p.hydration, 0.0);
    at_least("salt", &mut p.salt, 0.0);
    at_least("olive_oil", &mut p.olive_oil, 0.0);
    at_least("malt", &mut p.malt, 0.0);
    at_least("fresh_yeast", &mut p.fresh_yeast, 0.0);
    at_least("sugar", &mut p.sugar, 0.0);

    let hydration = p.hydration;
    match &mut p.dough_method {
        DoughMethod::Direct => {}
        DoughMethod::Biga(b) => {
            at_least("biga_percentage", &mut b.percentage, 0.0);
            at_least("biga_hydration", &mut b.hydration, 0.0);
            at_least("biga_yeast", &mut b.fresh_yeast, 0.0);
        }
        DoughMethod::Poolish(pl) => {
            at_least("poolish_percentage", &mut pl.percentage, 0.0);
            if pl.percentage > hydration {
                debug!(from = pl.percentage, to = hydration, "poolish exceeds hydration");
                pl.percentage = hydration;
            }
            let first = POOLISH_YEAST_TABLE[0].0 as f64;
            let last = POOLISH_YEAST_TABLE[POOLISH_YEAST_TABLE.len() - 1].0 as f64;
            let hours = pl.hours.clamp(first, last);
            if hours != pl.hours {
                debug!(from = pl.hours, to = hours, "clamped poolish hours");
                pl.hours = hours;
            }
        }
    }

    if let Some(pan) = &mut p.pan {
        match &mut pan.shape {
            PanShape::Round { diameter_cm } => at_least("pan_diameter", diameter_cm, MIN_PAN_SIDE),
            PanShape::Square {
                length_cm,
                width_cm,
            } => {
                at_least("pan_length", length_cm, MIN_PAN_SIDE);
                at_least("pan_width", width_cm, MIN_PAN_SIDE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Profile {
        Profile {
            style: StyleFlag::Neapolitan,
            method: MethodFlag::Direct,
            balls: 4,
            ball_weight: 250.0,
            hydration: 65.0,
            salt: 2.8,
            olive_oil: 0.0,
            malt: 0.0,
            fresh_yeast: 0.2,
            biga_percentage: 50.0,
            biga_hydration: 45.0,
            biga_yeast: 0.1,
            poolish_percentage: 30.0,
            poolish_hours: 8.0,
            pan_shape: ShapeFlag::Square,
            pan_diameter: 32.0,
            pan_length: 40.0,
            pan_width: 30.0,
            thickness: ThicknessFlag::Normal,
            sugar: 0.0,
            whole_eggs: 0,
            egg_yolks: 0,
        }
    }

    #[test]
    fn test_method_settings_follow_the_flag() {
        let mut prof = sample();
        prof.method = MethodFlag::Biga;
        let p = ParameterSet::from(&prof);
        assert_eq!(
            p.dough_method,
            DoughMethod::Biga(BigaParams {
                percentage: 50.0,
                hydration: 45.0,
                fresh_yeast: 0.1
            })
        );

        prof.method = MethodFlag::Direct;
        assert_eq!(ParameterSet::from(&prof).dough_method, DoughMethod::Direct);
    }

    #[test]
    fn test_pan_only_for_tray_styles() {
        let mut prof = sample();
        assert!(ParameterSet::from(&prof).pan.is_none());

        prof.style = StyleFlag::Focaccia;
        prof.pan_shape = ShapeFlag::Round;
        let p = ParameterSet::from(&prof);
        assert_eq!(
            p.pan,
            Some(Pan {
                shape: PanShape::Round { diameter_cm: 32.0 },
                thickness: Thickness::Normal
            })
        );
    }

    #[test]
    fn test_clamp_poolish_to_hydration_and_table() {
        let mut prof = sample();
        prof.method = MethodFlag::Poolish;
        prof.hydration = 60.0;
        prof.poolish_percentage = 80.0;
        prof.poolish_hours = 40.0;
        let mut p = ParameterSet::from(&prof);
        clamp_params(&mut p);
        assert_eq!(
            p.dough_method,
            DoughMethod::Poolish(PoolishParams {
                percentage: 60.0,
                hours: 18.0
            })
        );
    }

    #[test]
    fn test_clamp_quantities_and_pan() {
        let mut prof = sample();
        prof.style = StyleFlag::TegliaRomana;
        prof.balls = 0;
        prof.ball_weight = 2.0;
        prof.salt = -1.0;
        prof.pan_length = 3.0;
        let mut p = ParameterSet::from(&prof);
        clamp_params(&mut p);
        assert_eq!(p.ball_count, 1);
        assert_relative_eq!(p.ball_weight, MIN_BALL_WEIGHT);
        assert_relative_eq!(p.salt, 0.0);
        assert_eq!(
            p.pan.map(|pan| pan.shape),
            Some(PanShape::Square {
                length_cm: 10.0,
                width_cm: 30.0
            })
        );
    }

    #[test]
    fn test_clamp_leaves_valid_input_alone() {
        let before = ParameterSet::from(&sample());
        let mut after = before;
        clamp_params(&mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn test_profile_json_uses_kebab_flags() {
        let mut prof = sample();
        prof.style = StyleFlag::TondaRomana;
        prof.thickness = ThicknessFlag::VeryThick;
        let json = serde_json::to_string(&prof).unwrap();
        assert!(json.contains("\"style\":\"tonda-romana\""));
        assert!(json.contains("\"thickness\":\"very-thick\""));
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prof);
    }
}
