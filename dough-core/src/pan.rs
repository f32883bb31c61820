use std::f64::consts::PI;

use crate::params::{PanShape, Thickness};

/// Surface of the pan in cm².
pub fn pan_area(shape: PanShape) -> f64 {
    match shape {
        PanShape::Round { diameter_cm } => {
            let r = diameter_cm / 2.0;
            PI * r * r
        }
        PanShape::Square {
            length_cm,
            width_cm,
        } => length_cm * width_cm,
    }
}

/// Dough weight for one tray, whole grams.
/// Baseline is 0.5 g per cm², scaled by thickness.
pub fn derive_ball_weight(shape: PanShape, thickness: Thickness) -> f64 {
    (pan_area(shape) / 2.0 * thickness.multiplier()).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_normal() {
        let w = derive_ball_weight(
            PanShape::Square {
                length_cm: 40.0,
                width_cm: 30.0,
            },
            Thickness::Normal,
        );
        assert_relative_eq!(w, 600.0);
    }

    #[test]
    fn test_round_thin() {
        // pi * 16² = 804.25 cm² -> 402.12 g -> * 0.85 = 341.8
        let w = derive_ball_weight(PanShape::Round { diameter_cm: 32.0 }, Thickness::Thin);
        assert_relative_eq!(w, 342.0);
    }

    #[test]
    fn test_thickness_scales_weight() {
        let shape = PanShape::Square {
            length_cm: 30.0,
            width_cm: 20.0,
        };
        let thin = derive_ball_weight(shape, Thickness::VeryThin);
        let thick = derive_ball_weight(shape, Thickness::VeryThick);
        assert_relative_eq!(thin, 210.0);
        assert_relative_eq!(thick, 360.0);
    }

    #[test]
    fn test_degenerate_pan_weighs_nothing() {
        let w = derive_ball_weight(PanShape::Round { diameter_cm: 0.0 }, Thickness::Normal);
        assert_relative_eq!(w, 0.0);
    }
}
