use std::io::Cursor;

use super::*;
use crate::foundation::core::Canvas;

fn font_bytes() -> Vec<u8> {
    std::fs::read("tests/data/fonts/DejaVuSans-Bold.ttf").unwrap()
}

fn cover_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(32, 32, image::Rgba([200, 40, 90, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn track() -> TrackInfo {
    TrackInfo {
        id: 42,
        title: "Midnight City".to_string(),
        artist: "M83".to_string(),
        duration_ms: 243_000,
        progress_ms: Some(120_000),
        permalink_url: "https://soundcloud.com/m83/midnight-city".to_string(),
        artwork_url: None,
    }
}

fn small_config() -> CardConfig {
    CardConfig {
        layout: LayoutConfig {
            canvas: Canvas {
                width: 320,
                height: 128,
            },
            padding_px: 12,
            cover_size_px: 100,
            cover_radius_px: 10.0,
            text_gap_px: 12,
            title_y_px: 24.0,
            artist_offset_px: 20.0,
            title_size_px: 16.0,
            artist_size_px: 12.0,
            time_size_px: 8.0,
            progress: None,
            ..LayoutConfig::full()
        },
        ..CardConfig::default()
    }
}

#[test]
fn default_config_shows_banner_with_full_layout() {
    let cfg = CardConfig::default();
    assert!(cfg.show_banner);
    assert_eq!(cfg.caption_template, DEFAULT_CAPTION_TEMPLATE);
    assert_eq!(cfg.font_url, DEFAULT_FONT_URL);
    assert_eq!(cfg.layout, LayoutConfig::full());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = CardConfig::from_json_str(r#"{"show_banner": false}"#).unwrap();
    assert!(!cfg.show_banner);
    assert_eq!(cfg.caption_template, DEFAULT_CAPTION_TEMPLATE);

    let err = CardConfig::from_json_str(r#"{"banner": true}"#).unwrap_err();
    assert!(matches!(err, crate::CardError::Serde(_)));
}

#[test]
fn disabled_banner_sends_caption_only() {
    let cfg = CardConfig {
        show_banner: false,
        caption_template: "{track} by {artist}".to_string(),
        ..small_config()
    };
    let (cover, font) = (cover_png(), font_bytes());
    let reply = build_reply(&track(), Some(cover.as_slice()), Some(font.as_slice()), &cfg);
    assert_eq!(reply.caption, "Midnight City by M83");
    assert!(!reply.has_banner());
}

#[test]
fn missing_inputs_fall_back_to_caption() {
    let cfg = small_config();
    let font = font_bytes();
    let cover = cover_png();
    assert!(build_reply(&track(), None, Some(font.as_slice()), &cfg).banner.is_none());
    assert!(build_reply(&track(), Some(cover.as_slice()), None, &cfg).banner.is_none());
}

#[test]
fn broken_artwork_falls_back_to_caption() {
    let font = font_bytes();
    let reply = build_reply(
        &track(),
        Some(&b"definitely not an image"[..]),
        Some(font.as_slice()),
        &small_config(),
    );
    assert!(reply.caption.contains("Midnight City"));
    assert!(reply.banner.is_none());
}

#[test]
fn complete_inputs_attach_banner() {
    let (cover, font) = (cover_png(), font_bytes());
    let reply = build_reply(
        &track(),
        Some(cover.as_slice()),
        Some(font.as_slice()),
        &small_config(),
    );
    let banner = reply.banner.expect("banner");
    assert_eq!((banner.width, banner.height), (320, 128));
    assert_eq!(banner.file_name, "banner.png");
    assert_eq!(&banner.png[..8], b"\x89PNG\r\n\x1a\n");
}
