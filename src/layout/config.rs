use std::io::Read;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CardError, CardResult};

/// Blur-and-darken treatment of the full-canvas background.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackgroundStyle {
    /// Gaussian standard deviation in canvas pixels.
    pub blur_sigma_px: f32,
    /// RGB multiplier applied after blurring (`0.4` darkens to 40%).
    pub brightness: f32,
    /// The blur runs at `1 / blur_downsample` of the canvas resolution; `1` blurs at full size.
    pub blur_downsample: u32,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            blur_sigma_px: 40.0,
            brightness: 0.4,
            blur_downsample: 4,
        }
    }
}

/// Progress bar and time label placement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressStyle {
    /// Top edge of the bar.
    pub bar_y_px: f64,
    /// Bar thickness; corner radius is half of it.
    pub bar_height_px: f64,
    /// Horizontal gap between each time label and the bar.
    pub label_gap_px: f64,
    /// Vertical offset of the time labels relative to `bar_y_px`.
    pub label_offset_y_px: f64,
    /// Unfilled track color.
    pub track_color: Rgba8,
    /// Filled portion and scrubber color.
    pub fill_color: Rgba8,
    /// Scrubber radius as a multiple of `bar_height_px`.
    pub dot_scale: f64,
}

impl ProgressStyle {
    /// Bar placement used by the 1500x600 layout.
    pub fn full() -> Self {
        Self {
            bar_y_px: 480.0,
            bar_height_px: 8.0,
            label_gap_px: 25.0,
            label_offset_y_px: -12.0,
            track_color: Rgba8::opaque(0x5E, 0x5E, 0x5E),
            fill_color: Rgba8::WHITE,
            dot_scale: 1.2,
        }
    }

    /// Bar placement for the 1500x400 layout when a bar is requested there.
    pub fn compact() -> Self {
        Self {
            bar_y_px: 300.0,
            ..Self::full()
        }
    }
}

/// Every numeric constant of a banner layout.
///
/// The two presets, [`LayoutConfig::full`] and [`LayoutConfig::compact`], cover the
/// common cases; any field may be overridden, including turning the progress bar on
/// or off independently of the canvas size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Output size.
    pub canvas: Canvas,
    /// Outer padding, left of the cover and right of the text column.
    pub padding_px: u32,
    /// Edge length of the square cover thumbnail; `0` omits the thumbnail.
    pub cover_size_px: u32,
    /// Corner radius of the cover thumbnail.
    pub cover_radius_px: f64,
    /// Gap between the cover and the text column.
    pub text_gap_px: u32,
    /// Top of the title line.
    pub title_y_px: f64,
    /// Distance from the top of the title line to the top of the artist line.
    pub artist_offset_px: f64,
    /// Title font size.
    pub title_size_px: f32,
    /// Artist font size.
    pub artist_size_px: f32,
    /// Time label font size.
    pub time_size_px: f32,
    /// Title text color.
    pub title_color: Rgba8,
    /// Artist text color.
    pub artist_color: Rgba8,
    /// Time label color.
    pub time_color: Rgba8,
    /// Background treatment.
    #[serde(default)]
    pub background: BackgroundStyle,
    /// Progress bar; `None` renders no bar and no time labels.
    #[serde(default)]
    pub progress: Option<ProgressStyle>,
}

impl LayoutConfig {
    /// 1500x600 banner with a 480 px cover and a progress bar.
    pub fn full() -> Self {
        Self {
            canvas: Canvas {
                width: 1500,
                height: 600,
            },
            padding_px: 60,
            cover_size_px: 480,
            cover_radius_px: 30.0,
            text_gap_px: 60,
            title_y_px: 100.0,
            artist_offset_px: 70.0,
            title_size_px: 55.0,
            artist_size_px: 45.0,
            time_size_px: 25.0,
            title_color: Rgba8::WHITE,
            artist_color: Rgba8::opaque(0xB3, 0xB3, 0xB3),
            time_color: Rgba8::WHITE,
            background: BackgroundStyle::default(),
            progress: Some(ProgressStyle::full()),
        }
    }

    /// 1500x400 banner with a 280 px cover and no progress bar.
    pub fn compact() -> Self {
        Self {
            canvas: Canvas {
                width: 1500,
                height: 400,
            },
            cover_size_px: 280,
            title_y_px: 110.0,
            progress: None,
            ..Self::full()
        }
    }

    /// Replace the progress bar setting.
    pub fn with_progress(mut self, progress: Option<ProgressStyle>) -> Self {
        self.progress = progress;
        self
    }

    /// Parse and validate a layout from JSON text.
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a layout from a JSON reader.
    pub fn from_json_reader(reader: impl Read) -> CardResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject layouts that cannot be rendered at all.
    ///
    /// Geometry that merely collapses (a cover wider than the canvas, a text column of
    /// zero width) is accepted and degrades at render time.
    pub fn validate(&self) -> CardResult<()> {
        self.canvas.validate()?;
        for (name, size) in [
            ("title_size_px", self.title_size_px),
            ("artist_size_px", self.artist_size_px),
            ("time_size_px", self.time_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(CardError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, v) in [
            ("cover_radius_px", self.cover_radius_px),
            ("title_y_px", self.title_y_px),
            ("artist_offset_px", self.artist_offset_px),
        ] {
            if !v.is_finite() {
                return Err(CardError::validation(format!("{name} must be finite")));
            }
        }
        let bg = &self.background;
        if !bg.blur_sigma_px.is_finite() || bg.blur_sigma_px < 0.0 {
            return Err(CardError::validation("blur_sigma_px must be finite and >= 0"));
        }
        if !bg.brightness.is_finite() || bg.brightness < 0.0 {
            return Err(CardError::validation("brightness must be finite and >= 0"));
        }
        if bg.blur_downsample == 0 {
            return Err(CardError::validation("blur_downsample must be >= 1"));
        }
        if let Some(p) = &self.progress {
            for (name, v) in [
                ("bar_y_px", p.bar_y_px),
                ("bar_height_px", p.bar_height_px),
                ("label_gap_px", p.label_gap_px),
                ("label_offset_y_px", p.label_offset_y_px),
                ("dot_scale", p.dot_scale),
            ] {
                if !v.is_finite() {
                    return Err(CardError::validation(format!("{name} must be finite")));
                }
            }
            if p.bar_height_px < 0.0 || p.dot_scale < 0.0 {
                return Err(CardError::validation(
                    "bar_height_px and dot_scale must be >= 0",
                ));
            }
        }
        Ok(())
    }

    /// Left edge of the text column.
    pub fn text_x(&self) -> f64 {
        f64::from(self.padding_px) + f64::from(self.cover_size_px) + f64::from(self.text_gap_px)
    }

    /// Width available to title, artist and progress row; never negative.
    pub fn text_width_limit(&self) -> f64 {
        (f64::from(self.canvas.width) - self.text_x() - f64::from(self.padding_px)).max(0.0)
    }

    /// Top-left corner of the cover thumbnail (vertically centered).
    pub fn cover_origin(&self) -> (i64, i64) {
        let y = (i64::from(self.canvas.height) - i64::from(self.cover_size_px)) / 2;
        (i64::from(self.padding_px), y)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
