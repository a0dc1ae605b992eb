use crate::foundation::error::{CardError, CardResult};

/// Decode encoded cover bytes (any format the `image` crate recognizes) into straight RGBA8.
pub fn decode_cover(bytes: &[u8]) -> CardResult<image::RgbaImage> {
    if bytes.is_empty() {
        return Err(CardError::decode("cover bytes are empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CardError::decode(format!("decode cover image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(CardError::decode("cover image has zero size"));
    }
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
