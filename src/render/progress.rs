use crate::foundation::core::{Point, Rect};
use crate::foundation::time::{format_clock, progress_fraction};
use crate::layout::config::ProgressStyle;
use crate::render::raster::VectorSurface;

/// Resolved placement of the progress row: `elapsed  [====o-----]  total`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressGeometry {
    /// Full track rectangle; its width is never negative.
    pub bar: Rect,
    /// Filled width, `floor(bar width * fraction)`.
    pub fill_width: f64,
    /// Scrubber center, on the trailing edge of the fill.
    pub dot_center: Point,
    /// Scrubber radius.
    pub dot_radius: f64,
    /// Elapsed time, `MM:SS`.
    pub elapsed_label: String,
    /// Total time, `MM:SS`.
    pub total_label: String,
    /// Top-left of the elapsed label.
    pub elapsed_origin: Point,
    /// Top-left of the total label.
    pub total_origin: Point,
}

/// Time labels for a progress/duration pair.
pub fn progress_labels(progress_ms: u64, duration_ms: u64) -> (String, String) {
    (format_clock(progress_ms), format_clock(duration_ms))
}

/// Lay out the progress row inside the text column.
///
/// `elapsed_width` and `total_width` are the measured widths of the two labels. The bar
/// spans whatever horizontal space remains between them; when nothing remains the bar
/// has zero width and the scrubber sits at its start.
#[allow(clippy::too_many_arguments)]
pub fn progress_geometry(
    style: &ProgressStyle,
    text_x: f64,
    text_width: f64,
    elapsed_width: f64,
    total_width: f64,
    progress_ms: u64,
    duration_ms: u64,
) -> ProgressGeometry {
    let (elapsed_label, total_label) = progress_labels(progress_ms, duration_ms);
    let gap = style.label_gap_px;
    let bar_start = text_x + elapsed_width + gap;
    let bar_end = text_x + text_width - total_width - gap;
    let bar_width = (bar_end - bar_start).max(0.0);
    let h = style.bar_height_px.max(0.0);
    let y = style.bar_y_px;

    let fraction = progress_fraction(progress_ms, duration_ms);
    let fill_width = (bar_width * fraction).floor().clamp(0.0, bar_width);
    let label_y = y + style.label_offset_y_px;

    ProgressGeometry {
        bar: Rect::new(bar_start, y, bar_start + bar_width, y + h),
        fill_width,
        dot_center: Point::new(bar_start + fill_width, y + h / 2.0),
        dot_radius: h * style.dot_scale,
        elapsed_label,
        total_label,
        elapsed_origin: Point::new(text_x, label_y),
        total_origin: Point::new(bar_start + bar_width + gap, label_y),
    }
}

pub(crate) fn draw_progress_bar(
    surface: &mut VectorSurface,
    geom: &ProgressGeometry,
    style: &ProgressStyle,
) {
    let bar = geom.bar;
    let radius = bar.height() / 2.0;
    if bar.width() > 0.0 && bar.height() > 0.0 {
        surface.fill_shape(&bar.to_rounded_rect(radius), style.track_color);
    }
    if geom.fill_width > 0.0 && bar.height() > 0.0 {
        let fill = Rect::new(bar.x0, bar.y0, bar.x0 + geom.fill_width, bar.y1);
        surface.fill_shape(&fill.to_rounded_rect(radius), style.fill_color);
    }
    if geom.dot_radius > 0.0 {
        surface.fill_shape(
            &kurbo::Circle::new(geom.dot_center, geom.dot_radius),
            style.fill_color,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/progress.rs"]
mod tests;
