//! Color vision deficiency simulation.
//!
//! Each deficiency is a fixed 3x3 linear transform on gamma-encoded RGB:
//!
//! | Mode | R' | G' | B' |
//! |---|---|---|---|
//! | Protanopia | .567R + .433G | .558R + .442G | .242G + .758B |
//! | Deuteranopia | .625R + .375G | .7R + .3G | .3G + .7B |
//! | Tritanopia | .95R + .05G | .433G + .567B | .475G + .525B |
//! | Achromatopsia | gray | gray | gray |
//!
//! where gray is `.299R + .587G + .114B`. The Protanopia B' row has no R
//! term.

use chroma_model::{Color, SimulatedColor, VisionMode};

use crate::convert::rgb_to_color;

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

const ACHROMATOPSIA: Matrix = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

fn matrix_for(mode: VisionMode) -> Option<&'static Matrix> {
    match mode {
        VisionMode::Normal => None,
        VisionMode::Protanopia => Some(&PROTANOPIA),
        VisionMode::Deuteranopia => Some(&DEUTERANOPIA),
        VisionMode::Tritanopia => Some(&TRITANOPIA),
        VisionMode::Achromatopsia => Some(&ACHROMATOPSIA),
    }
}

fn apply(matrix: &Matrix, color: Color) -> Color {
    let input = color.channels().map(f64::from);
    let [r, g, b] = matrix.map(|row| row[0] * input[0] + row[1] * input[1] + row[2] * input[2]);
    rgb_to_color(r, g, b)
}

/// Simulate how `color` appears under `mode`. `Normal` is the identity.
pub fn simulate_color_blindness(color: Color, mode: VisionMode) -> Color {
    match matrix_for(mode) {
        Some(matrix) => apply(matrix, color),
        None => color,
    }
}

/// Simulate every palette color under `mode`, keeping palette order.
pub fn simulate_palette(palette: &[Color], mode: VisionMode) -> Vec<SimulatedColor> {
    palette
        .iter()
        .map(|color| SimulatedColor {
            mode,
            original: *color,
            simulated: simulate_color_blindness(*color, mode),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_is_identity() {
        let color = Color::new(12, 200, 99);
        assert_eq!(simulate_color_blindness(color, VisionMode::Normal), color);
    }

    #[test]
    fn protanopia_pure_red() {
        // R' = .567*255 = 144.585, G' = .558*255 = 142.29, B' = 0
        let simulated = simulate_color_blindness(Color::new(255, 0, 0), VisionMode::Protanopia);
        assert_eq!(simulated, Color::new(145, 142, 0));
    }

    #[test]
    fn deuteranopia_uses_green_for_blue_row() {
        // B' = .3G + .7B
        let simulated = simulate_color_blindness(Color::new(0, 100, 0), VisionMode::Deuteranopia);
        assert_eq!(simulated, Color::new(38, 30, 30));
    }

    #[test]
    fn tritanopia_pure_blue() {
        let simulated = simulate_color_blindness(Color::new(0, 0, 255), VisionMode::Tritanopia);
        assert_eq!(simulated, Color::new(0, 145, 134));
    }

    #[test]
    fn achromatopsia_is_gray() {
        let simulated = simulate_color_blindness(Color::new(255, 0, 0), VisionMode::Achromatopsia);
        assert_eq!(simulated, Color::new(76, 76, 76));
    }

    #[test]
    fn white_survives_every_mode() {
        for mode in VisionMode::ALL {
            assert_eq!(simulate_color_blindness(Color::WHITE, mode), Color::WHITE, "{mode}");
        }
    }

    #[test]
    fn palette_simulation_keeps_order() {
        let palette = [Color::WHITE, Color::new(255, 0, 0)];
        let simulated = simulate_palette(&palette, VisionMode::Achromatopsia);
        assert_eq!(simulated.len(), 2);
        assert_eq!(simulated[0].original, Color::WHITE);
        assert_eq!(simulated[1].simulated, Color::new(76, 76, 76));
        assert!(simulated.iter().all(|s| s.mode == VisionMode::Achromatopsia));
    }
}
