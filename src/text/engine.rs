use std::borrow::Cow;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A typeface registered with a [`TextLayoutEngine`].
///
/// Only valid with the engine that loaded it.
#[derive(Clone)]
pub struct LoadedFont {
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl LoadedFont {
    /// Primary family name read from the font's name table.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub(crate) fn cpu_font(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Stateful helper for shaping single-line labels with Parley from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register TrueType/OpenType bytes and return a handle for layout and drawing.
    ///
    /// Bytes that contain no usable face are a [`CardError::Decode`].
    pub fn load_font(&mut self, font_bytes: &[u8]) -> CardResult<LoadedFont> {
        if font_bytes.is_empty() {
            return Err(CardError::decode("font bytes are empty"));
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CardError::decode("no font families registered from font bytes"))?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::decode("registered font family has no name"))?
            .to_string();

        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        Ok(LoadedFont { family, data })
    }

    /// Shape `text` as a single unwrapped line.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &LoadedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CardResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Rendered advance width of `text` on one line, in pixels.
    pub fn measure(&mut self, text: &str, font: &LoadedFont, size_px: f32) -> CardResult<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(text, font, size_px, TextBrushRgba8::default())?;
        Ok(f64::from(layout.full_width()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
