use super::*;

fn font_bytes() -> Vec<u8> {
    std::fs::read("tests/data/fonts/DejaVuSans-Bold.ttf").unwrap()
}

#[test]
fn load_font_exposes_family_name() {
    let mut engine = TextLayoutEngine::new();
    let font = engine.load_font(&font_bytes()).unwrap();
    assert!(!font.family().trim().is_empty());
}

#[test]
fn garbage_font_bytes_are_decode_errors() {
    let mut engine = TextLayoutEngine::new();
    assert!(engine.load_font(b"not a font at all").unwrap_err().is_decode());
    assert!(engine.load_font(&[]).unwrap_err().is_decode());
}

#[test]
fn measure_grows_with_text_and_size() {
    let mut engine = TextLayoutEngine::new();
    let font = engine.load_font(&font_bytes()).unwrap();

    assert_eq!(engine.measure("", &font, 55.0).unwrap(), 0.0);
    let short = engine.measure("Midnight", &font, 55.0).unwrap();
    let long = engine.measure("Midnight City", &font, 55.0).unwrap();
    let small = engine.measure("Midnight City", &font, 25.0).unwrap();
    assert!(short > 0.0);
    assert!(long > short);
    assert!(small < long);
}

#[test]
fn invalid_size_is_rejected() {
    let mut engine = TextLayoutEngine::new();
    let font = engine.load_font(&font_bytes()).unwrap();
    assert!(engine.measure("x", &font, 0.0).is_err());
    assert!(engine.measure("x", &font, f32::NAN).is_err());
}
