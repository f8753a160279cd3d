//! Property tests for color math invariants.

use chroma_math::{
    contrast_ratio, hex_to_rgb, rgb_to_hex, rounded_contrast, similarity,
    simulate_color_blindness,
};
use chroma_model::{Color, VisionMode};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn any_mode() -> impl Strategy<Value = VisionMode> {
    prop::sample::select(VisionMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn similarity_with_self_is_100(color in any_color()) {
        prop_assert_eq!(similarity(color, color), 100.0);
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in any_color(), b in any_color()) {
        let forward = similarity(a, b);
        prop_assert_eq!(forward, similarity(b, a));
        prop_assert!((0.0..=100.0).contains(&forward));
    }

    #[test]
    fn contrast_is_symmetric(a in any_color(), b in any_color()) {
        prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        prop_assert_eq!(rounded_contrast(a, b), rounded_contrast(b, a));
    }

    #[test]
    fn contrast_is_within_wcag_range(a in any_color(), b in any_color()) {
        let ratio = contrast_ratio(a, b);
        prop_assert!(ratio >= 1.0);
        prop_assert!(ratio <= 21.0 + 1e-9);
    }

    #[test]
    fn contrast_with_self_is_one(color in any_color()) {
        prop_assert_eq!(contrast_ratio(color, color), 1.0);
    }

    #[test]
    fn normal_vision_is_identity(color in any_color()) {
        prop_assert_eq!(simulate_color_blindness(color, VisionMode::Normal), color);
    }

    #[test]
    fn simulation_is_deterministic(color in any_color(), mode in any_mode()) {
        prop_assert_eq!(
            simulate_color_blindness(color, mode),
            simulate_color_blindness(color, mode)
        );
    }

    #[test]
    fn hex_round_trip_normalizes(
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
        lower in any::<bool>(),
        hash in any::<bool>(),
    ) {
        let digits = format!("{r:02x}{g:02x}{b:02x}");
        let digits = if lower { digits } else { digits.to_uppercase() };
        let input = if hash { format!("#{digits}") } else { digits.clone() };
        let color = hex_to_rgb(&input).unwrap();
        let output = rgb_to_hex(f64::from(color.r), f64::from(color.g), f64::from(color.b));
        prop_assert_eq!(output, format!("#{}", digits.to_uppercase()));
    }
}

#[test]
fn invalid_hex_is_rejected() {
    assert!(hex_to_rgb("#12345G").is_err());
    assert!(hex_to_rgb("rgb(0,0,0)").is_err());
}
