use crate::foundation::core::{BezPath, Canvas, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::frame::FrameRGBA;

/// One CPU drawing surface, filled with an opaque background on creation.
///
/// Draw calls are recorded into a `vello_cpu` context and rasterized by [`Raster::finish`].
pub struct Raster {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl Raster {
    pub fn new(canvas: Canvas, background: Rgb8) -> FieldResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FieldError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FieldError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(FieldError::render("surface width/height must be non-zero"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(background.to_cpu());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        Ok(Self { width, height, ctx })
    }

    pub fn fill(&mut self, path: &BezPath, color: Rgb8) {
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub fn stroke(&mut self, path: &BezPath, width_px: f64, color: Rgb8) {
        if width_px <= 0.0 {
            return;
        }
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width_px));
        self.ctx.set_paint(color.to_cpu());
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Closed polygon through `points`.
pub fn polygon(points: impl IntoIterator<Item = kurbo::Point>) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.into_iter();
    if let Some(first) = it.next() {
        path.move_to(first);
        for p in it {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
