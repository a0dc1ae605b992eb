use std::borrow::Cow;

use crate::assets::decode::decode_cover;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::layout::config::LayoutConfig;
use crate::render::encode::{FrameRGBA, encode_png};
use crate::render::layers::{Layer, background_layer, composite_over_at, cover_layer};
use crate::render::progress::{draw_progress_bar, progress_geometry, progress_labels};
use crate::render::raster::VectorSurface;
use crate::text::engine::{LoadedFont, TextLayoutEngine};
use crate::text::fit::{FittedText, fit_to_width};

/// Suggested file name for attaching a rendered banner.
pub const BANNER_FILE_NAME: &str = "banner.png";

/// Inputs for one banner.
#[derive(Clone, Copy)]
pub struct BannerRequest<'a> {
    /// Track title.
    pub title: &'a str,
    /// Artist or uploader name.
    pub artist: &'a str,
    /// Track length in milliseconds.
    pub duration_ms: u64,
    /// Playback position in milliseconds; `0` when unknown.
    pub progress_ms: u64,
    /// Encoded cover artwork (any raster format `image` can decode).
    pub cover: &'a [u8],
    /// TrueType/OpenType font bytes.
    pub font: &'a [u8],
}

impl std::fmt::Debug for BannerRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerRequest")
            .field("title", &self.title)
            .field("artist", &self.artist)
            .field("duration_ms", &self.duration_ms)
            .field("progress_ms", &self.progress_ms)
            .field("cover_len", &self.cover.len())
            .field("font_len", &self.font.len())
            .finish()
    }
}

/// An encoded banner ready to attach to a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerImage {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
    /// Suggested attachment name.
    pub file_name: String,
}

/// Banner renderer for one [`LayoutConfig`].
///
/// Stateless between calls: every render decodes its own cover and font and owns all of
/// its buffers, so one compositor can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct Compositor {
    layout: LayoutConfig,
}

impl Compositor {
    /// Validate `layout` and build a compositor for it.
    pub fn new(layout: LayoutConfig) -> CardResult<Self> {
        layout.validate()?;
        Ok(Self { layout })
    }

    /// Layout this compositor draws.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Render and encode a banner.
    ///
    /// Undecodable cover or font bytes fail with [`crate::CardError::Decode`] before
    /// anything is drawn.
    #[tracing::instrument(
        skip_all,
        fields(
            width = self.layout.canvas.width,
            height = self.layout.canvas.height,
            title = %req.title,
        )
    )]
    pub fn render(&self, req: &BannerRequest<'_>) -> CardResult<BannerImage> {
        let frame = self.compose(req)?;
        let png = encode_png(&frame)?;
        tracing::debug!(bytes = png.len(), "encoded banner");
        Ok(BannerImage {
            width: frame.width,
            height: frame.height,
            png,
            file_name: BANNER_FILE_NAME.to_string(),
        })
    }

    /// Composite all layers without encoding; pixels are premultiplied.
    pub fn compose(&self, req: &BannerRequest<'_>) -> CardResult<FrameRGBA> {
        let layout = &self.layout;
        let cover = decode_cover(req.cover)?;
        let mut engine = TextLayoutEngine::new();
        let font = engine.load_font(req.font)?;

        let mut canvas = background_layer(&cover, layout.canvas, &layout.background)?;
        if layout.cover_size_px > 0 {
            let thumb = cover_layer(&cover, layout.cover_size_px, layout.cover_radius_px)?;
            let (x, y) = layout.cover_origin();
            composite_over_at(&mut canvas, &thumb, x, y);
        }

        let overlay = self.draw_overlay(&mut engine, &font, req)?;
        composite_over_at(&mut canvas, &overlay, 0, 0);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: canvas.rgba8_premul,
            premultiplied: true,
        })
    }

    fn draw_overlay(
        &self,
        engine: &mut TextLayoutEngine,
        font: &LoadedFont,
        req: &BannerRequest<'_>,
    ) -> CardResult<Layer> {
        let layout = &self.layout;
        let mut surface = VectorSurface::new(layout.canvas.width, layout.canvas.height)?;
        let text_x = layout.text_x();
        let max_width = layout.text_width_limit();

        let title = fit_label(engine, font, req.title, layout.title_size_px, max_width)?;
        let artist = fit_label(engine, font, req.artist, layout.artist_size_px, max_width)?;
        draw_label(
            &mut surface,
            engine,
            font,
            &title.text,
            layout.title_size_px,
            layout.title_color,
            Point::new(text_x, layout.title_y_px),
        )?;
        draw_label(
            &mut surface,
            engine,
            font,
            &artist.text,
            layout.artist_size_px,
            layout.artist_color,
            Point::new(text_x, layout.title_y_px + layout.artist_offset_px),
        )?;

        if let Some(style) = &layout.progress {
            let (elapsed, total) = progress_labels(req.progress_ms, req.duration_ms);
            let elapsed_width = engine.measure(&elapsed, font, layout.time_size_px)?;
            let total_width = engine.measure(&total, font, layout.time_size_px)?;
            let geom = progress_geometry(
                style,
                text_x,
                max_width,
                elapsed_width,
                total_width,
                req.progress_ms,
                req.duration_ms,
            );
            tracing::debug!(
                bar_width = geom.bar.width(),
                fill_width = geom.fill_width,
                "progress row"
            );

            draw_label(
                &mut surface,
                engine,
                font,
                &geom.elapsed_label,
                layout.time_size_px,
                layout.time_color,
                geom.elapsed_origin,
            )?;
            draw_progress_bar(&mut surface, &geom, style);
            draw_label(
                &mut surface,
                engine,
                font,
                &geom.total_label,
                layout.time_size_px,
                layout.time_color,
                geom.total_origin,
            )?;
        }

        Ok(surface.finish())
    }
}

/// Render a single banner with a one-off [`Compositor`].
pub fn render_banner(req: &BannerRequest<'_>, layout: &LayoutConfig) -> CardResult<BannerImage> {
    Compositor::new(layout.clone())?.render(req)
}

fn fit_label(
    engine: &mut TextLayoutEngine,
    font: &LoadedFont,
    text: &str,
    size_px: f32,
    max_width: f64,
) -> CardResult<FittedText> {
    let text = single_line(text);
    let fitted = fit_to_width(&text, max_width, |s| engine.measure(s, font, size_px))?;
    if fitted.truncated {
        tracing::debug!(
            original_chars = text.chars().count(),
            kept_chars = fitted.text.chars().count() - 1,
            max_width,
            "truncated label"
        );
    }
    Ok(fitted)
}

/// Labels are drawn on one line; line breaks and other control characters become spaces.
fn single_line(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

fn draw_label(
    surface: &mut VectorSurface,
    engine: &mut TextLayoutEngine,
    font: &LoadedFont,
    text: &str,
    size_px: f32,
    color: Rgba8,
    origin: Point,
) -> CardResult<()> {
    if text.is_empty() {
        return Ok(());
    }
    let line = engine.layout_line(text, font, size_px, color.into())?;
    surface.fill_text(&line, font, origin);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
