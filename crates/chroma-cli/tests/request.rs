//! Request assembly from input files and flags.

use std::fs;

use chroma_cli::request::{RequestSources, build_request, read_request_file};
use chroma_model::{Color, VisionMode};

#[test]
fn input_file_supplies_blocks_and_modes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r##"{
  "palette": ["#FFFFFF", "#1A1A1A"],
  "text": "Grand opening",
  "text_blocks": [
    {"text": "Grand opening", "text_color": "#1a1a1a", "background_color": "#ffffff"}
  ],
  "simulation_modes": ["tritanopia"]
}"##,
    )
    .unwrap();

    let request = read_request_file(&path).unwrap();
    assert_eq!(request.palette[0], Color::WHITE);
    assert_eq!(request.text_blocks.len(), 1);
    assert_eq!(request.simulation_modes, vec![VisionMode::Tritanopia]);

    let request = build_request(&RequestSources {
        input: Some(path.clone()),
        simulate: vec![VisionMode::Tritanopia, VisionMode::Protanopia],
        ..RequestSources::default()
    })
    .unwrap();
    assert_eq!(
        request.deficiency_modes(),
        vec![VisionMode::Tritanopia, VisionMode::Protanopia]
    );
    assert_eq!(request.image_name.as_deref(), Some(path.to_str().unwrap()));
}

#[test]
fn flags_replace_file_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("request.json");
    fs::write(&path, r##"{"palette": ["#FFFFFF"], "text": "old"}"##).unwrap();
    let text_path = dir.path().join("ocr.txt");
    fs::write(&text_path, "new text").unwrap();

    let request = build_request(&RequestSources {
        input: Some(path),
        palette: vec!["#000000".to_string(), "#FFFFFF".to_string()],
        text_file: Some(text_path),
        image_name: Some("poster.png".to_string()),
        ..RequestSources::default()
    })
    .unwrap();
    assert_eq!(request.palette, vec![Color::BLACK, Color::WHITE]);
    assert_eq!(request.text.as_deref(), Some("new text"));
    assert_eq!(request.image_name.as_deref(), Some("poster.png"));
}

#[test]
fn malformed_input_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = read_request_file(&path).unwrap_err();
    assert!(err.to_string().contains("broken.json"));
}
