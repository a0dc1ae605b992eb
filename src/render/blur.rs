use image::imageops::{self, FilterType};

use crate::foundation::core::Canvas;
use crate::foundation::math::premultiply_rgba8_in_place;
use crate::layout::config::BackgroundStyle;

/// Working resolution and strength of the background blur for one canvas.
///
/// The blur runs on a copy shrunk by `blur_downsample` with sigma shrunk to match, then
/// the result is scaled back up to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurPass {
    /// Working width in pixels, at least 1.
    pub width: u32,
    /// Working height in pixels, at least 1.
    pub height: u32,
    /// Gaussian sigma at the working resolution; `0` skips the blur.
    pub sigma: f32,
}

impl BlurPass {
    /// Plan the blur for `canvas` under `style`.
    pub fn for_canvas(canvas: Canvas, style: &BackgroundStyle) -> Self {
        let down = style.blur_downsample.max(1);
        let sigma = style.blur_sigma_px / down as f32;
        Self {
            width: (canvas.width / down).max(1),
            height: (canvas.height / down).max(1),
            sigma: if sigma.is_finite() && sigma > 0.0 {
                sigma
            } else {
                0.0
            },
        }
    }

    /// Whether the pass runs below canvas resolution.
    pub fn is_downsampled(&self, canvas: Canvas) -> bool {
        (self.width, self.height) != (canvas.width, canvas.height)
    }
}

/// Cover stretched to `canvas` and blurred, as premultiplied RGBA8.
///
/// Not yet darkened or flattened; `canvas` is expected to be validated.
pub fn blurred_backdrop(
    cover: &image::RgbaImage,
    canvas: Canvas,
    style: &BackgroundStyle,
) -> image::RgbaImage {
    let pass = BlurPass::for_canvas(canvas, style);
    let mut work = imageops::resize(cover, pass.width, pass.height, FilterType::CatmullRom);
    premultiply_rgba8_in_place(&mut work);
    if pass.sigma > 0.0 {
        work = imageops::blur(&work, pass.sigma);
    }
    tracing::trace!(
        work_w = pass.width,
        work_h = pass.height,
        sigma = pass.sigma,
        "background blur"
    );

    if pass.is_downsampled(canvas) {
        imageops::resize(&work, canvas.width, canvas.height, FilterType::Triangle)
    } else {
        work
    }
}

/// Scale color by `brightness` and force full opacity.
///
/// Premultiplied color over opaque black is the color itself, so flattening only sets alpha.
pub(crate) fn darken_and_flatten(rgba_premul: &mut [u8], brightness: f32) {
    let k = if brightness.is_finite() {
        brightness.max(0.0)
    } else {
        0.0
    };
    for px in rgba_premul.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = (f32::from(*c) * k).round().min(255.0) as u8;
        }
        px[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
