use serde::{Deserialize, Serialize};

/// Dough style. Decides which derived fields are relevant.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DoughStyle {
    Neapolitan,
    /// Roman thin-crust (tonda romana).
    TondaRomana,
    /// Roman pan pizza (pizza in teglia).
    TegliaRomana,
    Focaccia,
    Bread,
    Buns,
}

impl DoughStyle {
    pub const ALL: [DoughStyle; 6] = [
        DoughStyle::Neapolitan,
        DoughStyle::TondaRomana,
        DoughStyle::TegliaRomana,
        DoughStyle::Focaccia,
        DoughStyle::Bread,
        DoughStyle::Buns,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DoughStyle::Neapolitan => "Neapolitan",
            DoughStyle::TondaRomana => "Tonda Romana",
            DoughStyle::TegliaRomana => "Teglia Romana",
            DoughStyle::Focaccia => "Focaccia",
            DoughStyle::Bread => "Bread",
            DoughStyle::Buns => "Buns",
        }
    }

    /// Tray-baked styles, sized from pan geometry rather than ball weight.
    pub fn is_tray(self) -> bool {
        matches!(self, DoughStyle::TegliaRomana | DoughStyle::Focaccia)
    }
}

/// Biga preferment settings (percentages).
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BigaParams {
    /// Share of the total flour that goes into the biga.
    pub percentage: f64,
    /// Biga hydration, % of biga flour.
    pub hydration: f64,
    /// Fresh yeast, % of biga flour.
    pub fresh_yeast: f64,
}

impl Default for BigaParams {
    fn default() -> Self {
        BigaParams {
            percentage: 50.0,
            hydration: 45.0,
            fresh_yeast: 0.1,
        }
    }
}

/// Poolish preferment settings. Hydration is always 100%.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PoolishParams {
    /// Share of the total flour that goes into the poolish.
    pub percentage: f64,
    /// Maturation time in hours; selects the yeast dose.
    pub hours: f64,
}

impl Default for PoolishParams {
    fn default() -> Self {
        PoolishParams {
            percentage: 30.0,
            hours: 8.0,
        }
    }
}

/// Mixing method. Indirect methods carry their preferment settings.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DoughMethod {
    #[default]
    Direct,
    Biga(BigaParams),
    Poolish(PoolishParams),
}

impl DoughMethod {
    pub fn label(&self) -> &'static str {
        match self {
            DoughMethod::Direct => "Direct",
            DoughMethod::Biga(_) => "Biga",
            DoughMethod::Poolish(_) => "Poolish",
        }
    }
}

/// Pan outline, dimensions in cm.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PanShape {
    Round { diameter_cm: f64 },
    Square { length_cm: f64, width_cm: f64 },
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Thickness {
    VeryThin,
    Thin,
    #[default]
    Normal,
    Thick,
    VeryThick,
}

impl Thickness {
    pub fn multiplier(self) -> f64 {
        match self {
            Thickness::VeryThin => 0.70,
            Thickness::Thin => 0.85,
            Thickness::Normal => 1.00,
            Thickness::Thick => 1.10,
            Thickness::VeryThick => 1.20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Thickness::VeryThin => "very thin",
            Thickness::Thin => "thin",
            Thickness::Normal => "normal",
            Thickness::Thick => "thick",
            Thickness::VeryThick => "very thick",
        }
    }
}

/// Tray geometry for teglia and focaccia.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pan {
    pub shape: PanShape,
    #[serde(default)]
    pub thickness: Thickness,
}

impl Default for Pan {
    fn default() -> Self {
        Pan {
            shape: PanShape::Square {
                length_cm: 40.0,
                width_cm: 30.0,
            },
            thickness: Thickness::Normal,
        }
    }
}

/// Input of the calculator. Every percentage is a baker's percentage
/// (relative to flour weight).
///
/// For [`DoughStyle::Buns`] `hydration` is milk and `olive_oil` is butter.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ParameterSet {
    pub dough_style: DoughStyle,
    pub dough_method: DoughMethod,
    pub ball_count: u32,
    /// Grams per ball (or per tray for tray styles).
    pub ball_weight: f64,
    pub hydration: f64,
    pub salt: f64,
    pub olive_oil: f64,
    pub malt: f64,
    pub fresh_yeast: f64,
    #[serde(default)]
    pub pan: Option<Pan>,
    /// Buns only.
    #[serde(default)]
    pub sugar: f64,
    /// Buns only, pieces.
    #[serde(default)]
    pub whole_eggs: u32,
    /// Buns only, pieces.
    #[serde(default)]
    pub egg_yolks: u32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet {
            dough_style: DoughStyle::Neapolitan,
            dough_method: DoughMethod::Direct,
            ball_count: 4,
            ball_weight: 250.0,
            hydration: 65.0,
            salt: 2.5,
            olive_oil: 0.0,
            malt: 0.5,
            fresh_yeast: 0.2,
            pan: None,
            sugar: 0.0,
            whole_eggs: 0,
            egg_yolks: 0,
        }
    }
}
