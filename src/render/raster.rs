use kurbo::{PathEl, Shape};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::render::layers::Layer;
use crate::text::engine::{LoadedFont, TextBrushRgba8};

/// Vector drawing surface backed by `vello_cpu`, read back as a premultiplied [`Layer`].
pub(crate) struct VectorSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl VectorSurface {
    pub(crate) fn new(width: u32, height: u32) -> CardResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| CardError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| CardError::validation("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(CardError::validation("surface must be non-empty"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width: w,
            height: h,
        })
    }

    pub(crate) fn fill_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu_color());
        self.ctx.fill_path(&shape_to_cpu(shape));
    }

    /// Draw every glyph run of `layout` with the top-left of the line box at `origin`.
    pub(crate) fn fill_text(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        font: &LoadedFont,
        origin: Point,
    ) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font.cpu_font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    pub(crate) fn finish(mut self) -> Layer {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Layer {
            width: u32::from(self.width),
            height: u32::from(self.height),
            rgba8_premul: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

fn shape_to_cpu(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
