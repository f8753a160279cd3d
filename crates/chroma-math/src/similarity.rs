use chroma_model::{Color, SimilarityEntry};

/// Distance divisor mapping the RGB cube diagonal (~441.67) to ~0%.
pub const SIMILARITY_SCALE: f64 = 4.42;

/// Euclidean distance between two colors in RGB space.
pub fn rgb_distance(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Similarity percentage `max(0, 100 - d / 4.42)`.
pub fn similarity(a: Color, b: Color) -> f64 {
    (100.0 - rgb_distance(a, b) / SIMILARITY_SCALE).max(0.0)
}

/// Compare a color with every reference color, most similar first.
///
/// Ties keep the reference order.
pub fn rank_similarities(color: Color, references: &[Color]) -> Vec<SimilarityEntry> {
    let mut entries: Vec<SimilarityEntry> = references
        .iter()
        .map(|reference| SimilarityEntry {
            reference: *reference,
            similarity: similarity(color, *reference),
        })
        .collect();
    entries.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_are_fully_similar() {
        let teal = Color::new(0, 128, 128);
        assert_eq!(similarity(teal, teal), 100.0);
    }

    #[test]
    fn opposite_corners_are_near_zero() {
        let value = similarity(Color::BLACK, Color::WHITE);
        assert!(value >= 0.0 && value < 0.1, "got {value}");
    }

    #[test]
    fn ranking_puts_closest_first_and_keeps_ties_stable() {
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);
        let green = Color::new(0, 255, 0);
        let ranked = rank_similarities(Color::new(250, 0, 0), &[blue, green, red]);
        assert_eq!(ranked[0].reference, red);
        // blue and green are equidistant from the input
        assert_eq!(ranked[1].reference, blue);
        assert_eq!(ranked[2].reference, green);
    }
}
