use std::io::Cursor;

use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// A composited canvas as RGBA8 pixels.
///
/// The compositor produces **premultiplied** pixels; the flag makes that explicit at the
/// API boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Serialize a frame as PNG (straight alpha).
pub fn encode_png(frame: &FrameRGBA) -> CardResult<Vec<u8>> {
    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, straight).ok_or_else(|| {
        CardError::encode(format!(
            "frame data length {} does not match {}x{} RGBA8",
            frame.data.len(),
            frame.width,
            frame.height
        ))
    })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| CardError::encode(format!("write png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
