use image::imageops::{self, FilterType};

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::{mul_div255_u8, premul_over_px, premultiply_rgba8_in_place};
use crate::layout::config::BackgroundStyle;
use crate::render::blur::{blurred_backdrop, darken_and_flatten};
use crate::render::raster::VectorSurface;

/// Premultiplied RGBA8 raster, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes.
    pub rgba8_premul: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba8_premul: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Pixel at `(x, y)`; panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.rgba8_premul[i],
            self.rgba8_premul[i + 1],
            self.rgba8_premul[i + 2],
            self.rgba8_premul[i + 3],
        ]
    }

    /// True when every pixel has full alpha.
    pub fn is_opaque(&self) -> bool {
        self.rgba8_premul.chunks_exact(4).all(|px| px[3] == 255)
    }

    fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba8_premul: img.into_raw(),
        }
    }
}

/// Cover stretched over the whole canvas, blurred, darkened and flattened to full opacity.
pub fn background_layer(
    cover: &image::RgbaImage,
    canvas: Canvas,
    style: &BackgroundStyle,
) -> CardResult<Layer> {
    canvas.validate()?;
    let mut layer = Layer::from_rgba_image(blurred_backdrop(cover, canvas, style));
    darken_and_flatten(&mut layer.rgba8_premul, style.brightness);
    Ok(layer)
}

/// Cover resized to a `size`-pixel square with rounded corners of `radius`.
pub fn cover_layer(cover: &image::RgbaImage, size: u32, radius: f64) -> CardResult<Layer> {
    if size == 0 {
        return Err(CardError::validation("cover size must be > 0"));
    }
    let resized = imageops::resize(cover, size, size, FilterType::Lanczos3);
    let mut layer = Layer::from_rgba_image(resized);
    premultiply_rgba8_in_place(&mut layer.rgba8_premul);

    let mask = rounded_rect_mask(size, radius)?;
    for (px, m) in layer.rgba8_premul.chunks_exact_mut(4).zip(mask.iter()) {
        let m = u16::from(*m);
        for c in px.iter_mut() {
            *c = mul_div255_u8(u16::from(*c), m);
        }
    }
    Ok(layer)
}

/// Antialiased coverage (0..=255) of a `size`-square rounded rectangle, one byte per pixel.
pub fn rounded_rect_mask(size: u32, radius: f64) -> CardResult<Vec<u8>> {
    let edge = f64::from(size);
    let radius = if radius.is_finite() {
        radius.clamp(0.0, edge / 2.0)
    } else {
        0.0
    };
    let mut surface = VectorSurface::new(size, size)?;
    surface.fill_shape(
        &kurbo::RoundedRect::new(0.0, 0.0, edge, edge, radius),
        Rgba8::WHITE,
    );
    let mask = surface.finish();
    Ok(mask.rgba8_premul.chunks_exact(4).map(|px| px[3]).collect())
}

/// Source-over `src` onto `dst` with its top-left at `(x, y)`; out-of-bounds parts are clipped.
pub fn composite_over_at(dst: &mut Layer, src: &Layer, x: i64, y: i64) {
    let dst_w = i64::from(dst.width);
    let dst_h = i64::from(dst.height);
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(dst_w);
    let y1 = (y + i64::from(src.height)).min(dst_h);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for dy in y0..y1 {
        let sy = dy - y;
        for dx in x0..x1 {
            let sx = dx - x;
            let si = ((sy * i64::from(src.width) + sx) as usize) * 4;
            let di = ((dy * dst_w + dx) as usize) * 4;
            let s = [
                src.rgba8_premul[si],
                src.rgba8_premul[si + 1],
                src.rgba8_premul[si + 2],
                src.rgba8_premul[si + 3],
            ];
            let d = [
                dst.rgba8_premul[di],
                dst.rgba8_premul[di + 1],
                dst.rgba8_premul[di + 2],
                dst.rgba8_premul[di + 3],
            ];
            dst.rgba8_premul[di..di + 4].copy_from_slice(&premul_over_px(d, s));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layers.rs"]
mod tests;
