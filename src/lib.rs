//! Trackcard renders "now playing" banners for music chat bots.
//!
//! A banner is a single PNG: the cover art blurred and darkened as a full-bleed
//! background, a rounded copy of the cover on the left, title and artist on the right,
//! and an optional progress row with elapsed/total time labels.
//!
//! - Build a [`LayoutConfig`] (or use [`LayoutConfig::full`] / [`LayoutConfig::compact`])
//! - Render a [`BannerRequest`] with a [`Compositor`] or [`render_banner`]
//! - Or let [`build_reply`] produce a caption plus optional banner for a [`TrackInfo`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod layout;
mod render;
mod reply;
mod text;
mod track;

pub use crate::assets::decode::decode_cover;
pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::foundation::time::{format_clock, format_clock_short, progress_fraction};
pub use crate::layout::config::{BackgroundStyle, LayoutConfig, ProgressStyle};
pub use crate::render::blur::{BlurPass, blurred_backdrop};
pub use crate::render::compositor::{
    BANNER_FILE_NAME, BannerImage, BannerRequest, Compositor, render_banner,
};
pub use crate::render::encode::{FrameRGBA, encode_png};
pub use crate::render::layers::{
    Layer, background_layer, composite_over_at, cover_layer, rounded_rect_mask,
};
pub use crate::render::progress::{ProgressGeometry, progress_geometry, progress_labels};
pub use crate::reply::caption::{CaptionTemplate, DEFAULT_CAPTION_TEMPLATE, escape_html};
pub use crate::reply::card::{CardConfig, DEFAULT_FONT_URL, NowPlayingReply, build_reply};
pub use crate::text::engine::{LoadedFont, TextBrushRgba8, TextLayoutEngine};
pub use crate::text::fit::{ELLIPSIS, FittedText, fit_to_width};
pub use crate::track::cache::LastTrack;
pub use crate::track::model::{ApiTrack, ApiUser, TrackInfo};
