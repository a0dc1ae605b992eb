use super::*;

const API_TRACK: &str = r#"{
    "id": 1234,
    "title": "Midnight City",
    "duration": 243000,
    "permalink_url": "https://soundcloud.com/m83/midnight-city",
    "artwork_url": "https://i1.sndcdn.com/artworks-large.jpg",
    "user": {
        "username": "M83",
        "avatar_url": "https://i1.sndcdn.com/avatars-large.jpg"
    },
    "genre": "Electronic",
    "playback_count": 1000
}"#;

#[test]
fn api_track_maps_to_track_info() {
    let t = TrackInfo::from_api_json(API_TRACK).unwrap();
    assert_eq!(t.id, 1234);
    assert_eq!(t.title, "Midnight City");
    assert_eq!(t.artist, "M83");
    assert_eq!(t.duration_ms, 243_000);
    assert_eq!(t.progress_ms, None);
    assert_eq!(
        t.artwork_url.as_deref(),
        Some("https://i1.sndcdn.com/artworks-large.jpg")
    );
}

#[test]
fn missing_artwork_falls_back_to_avatar() {
    let mut v: serde_json::Value = serde_json::from_str(API_TRACK).unwrap();
    v["artwork_url"] = serde_json::Value::Null;
    let t = TrackInfo::from_api_json(&v.to_string()).unwrap();
    assert_eq!(
        t.artwork_url.as_deref(),
        Some("https://i1.sndcdn.com/avatars-large.jpg")
    );

    v["user"]["avatar_url"] = serde_json::Value::Null;
    let t = TrackInfo::from_api_json(&v.to_string()).unwrap();
    assert_eq!(t.artwork_url, None);
}

#[test]
fn missing_duration_is_zero() {
    let mut v: serde_json::Value = serde_json::from_str(API_TRACK).unwrap();
    v.as_object_mut().unwrap().remove("duration");
    let t = TrackInfo::from_api_json(&v.to_string()).unwrap();
    assert_eq!(t.duration_ms, 0);
    assert_eq!(t.duration_label(), "0:00");
}

#[test]
fn malformed_json_is_serde_error() {
    let err = TrackInfo::from_api_json(r#"{"id": "x"}"#).unwrap_err();
    assert!(matches!(err, crate::CardError::Serde(_)));
}

#[test]
fn progress_is_clamped_for_labels_and_banner() {
    let mut t = TrackInfo::from_api_json(API_TRACK).unwrap();
    assert_eq!(t.progress_label(), "0:00");
    t.progress_ms = Some(400_000);
    assert_eq!(t.clamped_progress_ms(), 243_000);
    assert_eq!(t.progress_label(), "4:03");

    let req = t.banner_request(b"cover", b"font");
    assert_eq!(req.title, "Midnight City");
    assert_eq!(req.progress_ms, 243_000);
    assert_eq!(req.duration_ms, 243_000);
}
