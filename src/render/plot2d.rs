//! Static 2D filled-contour plot with isolines and a colorbar.

use kurbo::Shape as _;

use crate::color::colormap::Colormap;
use crate::color::scale::{ColorScale, OffsetLabel};
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::foundation::math::nice_ticks;
use crate::mesh::Mesh;
use crate::render::annotate::{Anchor, Annotator, Label, tick_text};
use crate::render::contour::{FieldPoint, clip_band, iso_segment};
use crate::render::frame::FrameRGBA;
use crate::render::raster::{Raster, polygon};

/// Look of the final-state plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourStyle {
    pub canvas: Canvas,
    pub colormap: Colormap,
    /// Number of level boundaries; bands are one fewer.
    pub level_count: usize,
    pub isoline_width_px: f64,
    pub colorbar_label: String,
    pub background: Rgb8,
}

/// Inputs for one contour plot.
#[derive(Clone, Copy, Debug)]
pub struct ContourPlot<'a> {
    pub mesh: &'a Mesh,
    pub values: &'a [f64],
    pub title: &'a str,
}

/// Pixel rectangles of the plot pieces.
#[derive(Clone, Copy, Debug)]
struct Layout {
    /// Data area after the equal-aspect fit.
    axes: Rect,
    colorbar: Rect,
    font: f64,
}

impl Layout {
    fn new(canvas: Canvas, data: Rect) -> Self {
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let font = (h / 45.0).max(6.0);
        let avail = Rect::new(0.12 * w, 0.09 * h, 0.76 * w, 0.89 * h);

        let dw = data.width().max(f64::MIN_POSITIVE);
        let dh = data.height().max(f64::MIN_POSITIVE);
        let k = if data.width() > 0.0 && data.height() > 0.0 {
            (avail.width() / dw).min(avail.height() / dh)
        } else {
            avail.width().min(avail.height())
        };
        let (aw, ah) = (
            if data.width() > 0.0 { dw * k } else { avail.width() },
            if data.height() > 0.0 { dh * k } else { avail.height() },
        );
        let c = avail.center();
        let axes = Rect::new(c.x - 0.5 * aw, c.y - 0.5 * ah, c.x + 0.5 * aw, c.y + 0.5 * ah);
        let colorbar = Rect::new(0.80 * w, avail.y0, 0.83 * w, avail.y1);
        Self {
            axes,
            colorbar,
            font,
        }
    }

    /// Data space to pixels with y pointing up.
    fn data_to_px(&self, data: Rect) -> Affine {
        let sx = if data.width() > 0.0 {
            self.axes.width() / data.width()
        } else {
            1.0
        };
        let sy = if data.height() > 0.0 {
            self.axes.height() / data.height()
        } else {
            1.0
        };
        let (cx, cy) = (data.center().x, data.center().y);
        let c = self.axes.center();
        Affine::new([sx, 0.0, 0.0, -sy, c.x - sx * cx, c.y + sy * cy])
    }
}

/// Renders [`ContourPlot`]s.
pub struct ContourRenderer {
    style: ContourStyle,
    annotator: Annotator,
}

impl ContourRenderer {
    pub fn new(style: ContourStyle, annotator: Annotator) -> Self {
        Self { style, annotator }
    }

    pub fn style(&self) -> &ContourStyle {
        &self.style
    }

    #[tracing::instrument(skip(self, plot), fields(vertices = plot.mesh.vertex_count()))]
    pub fn render(&self, plot: &ContourPlot<'_>) -> FieldResult<FrameRGBA> {
        plot.mesh.check_values(plot.values)?;
        let scale = ColorScale::for_contour(plot.values)
            .ok_or_else(|| FieldError::data_format("final frame has no finite values"))?;
        let levels = scale.levels(self.style.level_count)?;

        let data = plot.mesh.bounds();
        let layout = Layout::new(self.style.canvas, data);
        let to_px = layout.data_to_px(data);

        let mut raster = Raster::new(self.style.canvas, self.style.background)?;
        let mut labels = Vec::new();

        self.draw_bands(&mut raster, plot, &levels, to_px);
        self.draw_isolines(&mut raster, plot, &levels, to_px);
        draw_axes(&mut raster, &mut labels, &layout, data, to_px);
        self.draw_colorbar(&mut raster, &mut labels, &layout, scale, &levels);

        let (w, h) = (
            f64::from(self.style.canvas.width),
            f64::from(self.style.canvas.height),
        );
        labels.push(Label::new(plot.title, Point::new(0.5 * w, 0.045 * h), layout.font * 1.3));

        let mut out = raster.finish();
        self.annotator.draw(&mut out, &labels)?;
        Ok(out)
    }

    fn band_color(&self, band: usize, bands: usize) -> Rgb8 {
        self.style.colormap.sample((band as f64 + 0.5) / bands as f64)
    }

    fn triangles<'p>(plot: &'p ContourPlot<'_>) -> impl Iterator<Item = [FieldPoint; 3]> + 'p {
        let pts = plot.mesh.points();
        plot.mesh
            .triangles()
            .iter()
            .map(move |t| t.map(|v| FieldPoint::new(pts[v], plot.values[v])))
    }

    fn draw_bands(
        &self,
        raster: &mut Raster,
        plot: &ContourPlot<'_>,
        levels: &[f64],
        to_px: Affine,
    ) {
        let bands = levels.len() - 1;
        for tri in Self::triangles(plot) {
            for (i, pair) in levels.windows(2).enumerate() {
                let poly = clip_band(&tri, pair[0], pair[1]);
                if poly.is_empty() {
                    continue;
                }
                let path = polygon(poly.iter().map(|p| to_px * p.pos));
                let color = self.band_color(i, bands);
                raster.fill(&path, color);
                // Hairline in the fill color hides antialiasing seams between pieces.
                raster.stroke(&path, 0.5, color);
            }
        }
    }

    fn draw_isolines(
        &self,
        raster: &mut Raster,
        plot: &ContourPlot<'_>,
        levels: &[f64],
        to_px: Affine,
    ) {
        let mut path = BezPath::new();
        for tri in Self::triangles(plot) {
            for &level in levels {
                if let Some((a, b)) = iso_segment(&tri, level) {
                    path.move_to(to_px * a);
                    path.line_to(to_px * b);
                }
            }
        }
        raster.stroke(&path, self.style.isoline_width_px, Rgb8::BLACK);
    }

    fn draw_colorbar(
        &self,
        raster: &mut Raster,
        labels: &mut Vec<Label>,
        layout: &Layout,
        scale: ColorScale,
        levels: &[f64],
    ) {
        let bar = layout.colorbar;
        let bands = levels.len() - 1;
        let lo = levels[0];
        let hi = levels[bands];
        let y_of = |v: f64| bar.y1 - (v - lo) / (hi - lo) * bar.height();

        for (i, pair) in levels.windows(2).enumerate() {
            let r = Rect::new(bar.x0, y_of(pair[1]), bar.x1, y_of(pair[0]));
            raster.fill(&r.to_path(0.1), self.band_color(i, bands));
        }
        raster.stroke(&bar.to_path(0.1), 1.0, Rgb8::BLACK);

        let offset = match scale.offset_label() {
            Ok(label) => Some(label),
            Err(e) => {
                tracing::debug!(error = %e, "colorbar offset label dropped");
                None
            }
        };
        let ticks = nice_ticks(lo, hi, 6);
        let step = match ticks.as_slice() {
            [a, b, ..] => b - a,
            _ => hi - lo,
        };
        let tick_font = layout.font * 0.8;
        let mut marks = BezPath::new();
        for &v in &ticks {
            let y = y_of(v);
            marks.move_to(Point::new(bar.x1, y));
            marks.line_to(Point::new(bar.x1 + 0.3 * layout.font, y));
            let text = offset
                .unwrap_or(OffsetLabel { exponent: 0 })
                .format_tick(v, step);
            labels.push(
                Label::new(text, Point::new(bar.x1 + 0.5 * layout.font, y), tick_font)
                    .anchored(Anchor::Start),
            );
        }
        raster.stroke(&marks, 1.0, Rgb8::BLACK);

        if let Some(label) = offset.filter(|l| l.exponent != 0) {
            labels.push(
                Label::new("×10", Point::new(bar.x0, bar.y0 - 0.8 * layout.font), tick_font)
                    .anchored(Anchor::Start)
                    .with_superscript(label.exponent.to_string()),
            );
        }
        labels.push(
            Label::new(
                self.style.colorbar_label.clone(),
                Point::new(bar.x1 + 4.5 * layout.font, bar.center().y),
                layout.font,
            )
            .rotated(-90.0),
        );
    }
}

fn draw_axes(
    raster: &mut Raster,
    labels: &mut Vec<Label>,
    layout: &Layout,
    data: Rect,
    to_px: Affine,
) {
    let axes = layout.axes;
    let tick_font = layout.font * 0.8;
    let tick_len = 0.3 * layout.font;
    let mut marks = BezPath::new();

    for x in nice_ticks(data.x0, data.x1, 6) {
        let px = (to_px * Point::new(x, data.y0)).x;
        marks.move_to(Point::new(px, axes.y1));
        marks.line_to(Point::new(px, axes.y1 + tick_len));
        labels.push(Label::new(
            tick_text(x),
            Point::new(px, axes.y1 + tick_len + 0.8 * layout.font),
            tick_font,
        ));
    }
    for y in nice_ticks(data.y0, data.y1, 6) {
        let py = (to_px * Point::new(data.x0, y)).y;
        marks.move_to(Point::new(axes.x0, py));
        marks.line_to(Point::new(axes.x0 - tick_len, py));
        labels.push(
            Label::new(
                tick_text(y),
                Point::new(axes.x0 - tick_len - 0.3 * layout.font, py),
                tick_font,
            )
            .anchored(Anchor::End),
        );
    }
    raster.stroke(&marks, 1.0, Rgb8::BLACK);
    raster.stroke(&axes.to_path(0.1), 1.0, Rgb8::BLACK);

    labels.push(Label::new(
        "x",
        Point::new(axes.center().x, axes.y1 + tick_len + 2.2 * layout.font),
        layout.font,
    ));
    labels.push(
        Label::new(
            "y",
            Point::new(axes.x0 - tick_len - 3.5 * layout.font, axes.center().y),
            layout.font,
        )
        .rotated(-90.0),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/plot2d.rs"]
mod tests;
