use super::*;

#[test]
fn full_preset_matches_reference_geometry() {
    let l = LayoutConfig::full();
    assert_eq!((l.canvas.width, l.canvas.height), (1500, 600));
    assert_eq!(l.text_x(), 600.0);
    assert_eq!(l.text_width_limit(), 840.0);
    assert_eq!(l.cover_origin(), (60, 60));
    assert!(l.progress.is_some());
    l.validate().unwrap();
}

#[test]
fn compact_preset_is_shorter_and_barless() {
    let l = LayoutConfig::compact();
    assert_eq!((l.canvas.width, l.canvas.height), (1500, 400));
    assert_eq!(l.cover_origin(), (60, 60));
    assert_eq!(l.text_x(), 400.0);
    assert!(l.progress.is_none());

    let with_bar = LayoutConfig::compact().with_progress(Some(ProgressStyle::compact()));
    assert_eq!(with_bar.canvas, l.canvas);
    assert!(with_bar.progress.is_some());
    with_bar.validate().unwrap();
}

#[test]
fn oversized_cover_collapses_text_column_to_zero() {
    let l = LayoutConfig {
        cover_size_px: 2000,
        ..LayoutConfig::full()
    };
    l.validate().unwrap();
    assert_eq!(l.text_width_limit(), 0.0);
    assert!(l.cover_origin().1 < 0);
}

#[test]
fn json_roundtrip_and_defaults() {
    let json = serde_json::to_string(&LayoutConfig::compact()).unwrap();
    assert!(json.contains("\"#B3B3B3\""));
    let back = LayoutConfig::from_json_str(&json).unwrap();
    assert_eq!(back, LayoutConfig::compact());

    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("background");
    obj.remove("progress");
    let back = LayoutConfig::from_json_str(&value.to_string()).unwrap();
    assert_eq!(back.background, BackgroundStyle::default());
    assert!(back.progress.is_none());
}

#[test]
fn json_rejects_unknown_fields_and_bad_values() {
    let mut value = serde_json::to_value(LayoutConfig::full()).unwrap();
    value["surprise"] = serde_json::json!(1);
    assert!(matches!(
        LayoutConfig::from_json_str(&value.to_string()),
        Err(CardError::Serde(_))
    ));

    let mut value = serde_json::to_value(LayoutConfig::full()).unwrap();
    value["title_size_px"] = serde_json::json!(0.0);
    assert!(matches!(
        LayoutConfig::from_json_str(&value.to_string()),
        Err(CardError::Validation(_))
    ));

    let mut value = serde_json::to_value(LayoutConfig::full()).unwrap();
    value["canvas"]["height"] = serde_json::json!(0);
    assert!(LayoutConfig::from_json_str(&value.to_string()).is_err());
}

#[test]
fn json_reader_matches_str_loader() {
    let json = serde_json::to_vec(&LayoutConfig::full().with_progress(None)).unwrap();
    let back = LayoutConfig::from_json_reader(std::io::Cursor::new(&json)).unwrap();
    assert_eq!(back, LayoutConfig::full().with_progress(None));

    let mut value = serde_json::to_value(LayoutConfig::compact()).unwrap();
    value["time_size_px"] = serde_json::json!(-2.0);
    let bytes = serde_json::to_vec(&value).unwrap();
    assert!(matches!(
        LayoutConfig::from_json_reader(bytes.as_slice()),
        Err(CardError::Validation(_))
    ));
    assert!(matches!(
        LayoutConfig::from_json_reader(&b"{ not json"[..]),
        Err(CardError::Serde(_))
    ));
}
