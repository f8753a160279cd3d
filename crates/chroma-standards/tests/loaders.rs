use std::fs;

use chroma_model::{Color, RiskLevel, VisionMode};
use chroma_standards::{ChromaConfig, ConfigError, DEFAULT_OCR_CONFIDENCE};

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chroma.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn loads_brand_palette_in_order() {
    let (_dir, path) = write_config(
        r##"
[palette]
brand = ["#00ff00", "#000000", "FFFFFF"]
"##,
    );
    let config = ChromaConfig::load(&path).expect("load config");
    assert_eq!(
        config.brand_palette,
        vec![Color::new(0, 255, 0), Color::BLACK, Color::WHITE]
    );
    assert_eq!(config.scoring.ocr_confidence, DEFAULT_OCR_CONFIDENCE);
    assert_eq!(config.source.as_deref(), Some(path.as_path()));
}

#[test]
fn resolve_prefers_explicit_path() {
    let (_dir, path) = write_config(
        r#"
[scoring.impact]
achromatopsia = "medium"
"#,
    );
    let config = ChromaConfig::resolve(Some(&path)).expect("resolve config");
    assert_eq!(
        config.scoring.impact_override(VisionMode::Achromatopsia),
        Some(RiskLevel::Medium)
    );
}

#[test]
fn invalid_brand_color_names_the_field() {
    let (_dir, path) = write_config(
        r##"
[palette]
brand = ["#FF0000", "#F00"]
"##,
    );
    let err = ChromaConfig::load(&path).unwrap_err();
    match err {
        ConfigError::InvalidColor { field, .. } => assert_eq!(field, "palette.brand[1]"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_brand_palette_is_rejected() {
    let (_dir, path) = write_config("[palette]\nbrand = []\n");
    let err = ChromaConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let (_dir, path) = write_config("[palette]\nbrand = [\"#FF0000\"]\nextra = 1\n");
    let err = ChromaConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChromaConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
