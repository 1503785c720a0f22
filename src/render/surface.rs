//! Shaded 3D surface frames for the rotating animation.

use crate::color::colormap::Colormap;
use crate::color::scale::ColorScale;
use crate::foundation::core::{BezPath, Canvas, FrameIndex, Point, Rect, Rgb8};
use crate::foundation::error::FieldResult;
use crate::foundation::math::nice_ticks;
use crate::mesh::Mesh;
use crate::render::annotate::{Anchor, Annotator, Label, tick_text};
use crate::render::camera::{OrbitCamera, Vec3, View, cross, dot, normalize, sub};
use crate::render::frame::FrameRGBA;
use crate::render::raster::{Raster, polygon};

/// Height of the z extent relative to the x/y half-widths of the plot box.
const Z_ASPECT: f64 = 0.75;
const PANE: Rgb8 = Rgb8::new(236, 236, 240);
const PANE_EDGE: Rgb8 = Rgb8::new(190, 190, 196);
const GRID: Rgb8 = Rgb8::new(214, 214, 220);
/// Unit vector the faces are lit from, in plot-box coordinates.
const LIGHT: Vec3 = [-0.408_248_290_463_863, -0.408_248_290_463_863, 0.816_496_580_927_726];

/// Look of the animation frames.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub canvas: Canvas,
    pub colormap: Colormap,
    pub camera: OrbitCamera,
    /// Triangle edge width in pixels; 0 disables edges.
    pub edge_width_px: f64,
    pub z_label: String,
    pub background: Rgb8,
}

/// Inputs for one animation frame. Everything is borrowed and read-only.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceFrame<'a> {
    pub mesh: &'a Mesh,
    pub values: &'a [f64],
    pub scale: ColorScale,
    pub title: &'a str,
    pub index: FrameIndex,
}

/// Maps mesh coordinates and values into the `[-1,1]² x [-Z_ASPECT, Z_ASPECT]` box.
#[derive(Clone, Copy, Debug)]
struct PlotBox {
    bounds: Rect,
    scale: ColorScale,
}

impl PlotBox {
    fn to_world(self, p: Point, value: f64) -> Vec3 {
        fn unit(v: f64, lo: f64, hi: f64) -> f64 {
            let half = 0.5 * (hi - lo);
            if half > 0.0 {
                (v - lo) / half - 1.0
            } else {
                0.0
            }
        }
        [
            unit(p.x, self.bounds.x0, self.bounds.x1),
            unit(p.y, self.bounds.y0, self.bounds.y1),
            unit(value, self.scale.min, self.scale.max) * Z_ASPECT,
        ]
    }
}

/// Projects plot-box points onto the canvas for one view.
#[derive(Clone, Copy, Debug)]
struct Screen {
    view: View,
    center: Point,
    px_per_unit: f64,
}

impl Screen {
    fn new(view: View, area: Rect) -> Self {
        let radius = (2.0 + Z_ASPECT * Z_ASPECT).sqrt();
        Self {
            view,
            center: area.center(),
            px_per_unit: 0.5 * area.width().min(area.height()) / radius,
        }
    }

    fn to_px(self, w: Vec3) -> (Point, f64) {
        let (p, depth) = self.view.project(w);
        (
            Point::new(
                self.center.x + p.x * self.px_per_unit,
                self.center.y - p.y * self.px_per_unit,
            ),
            depth,
        )
    }

    fn point(self, w: Vec3) -> Point {
        self.to_px(w).0
    }

    /// Push a label position away from the box center along the screen direction of `w`.
    fn outside(self, w: Vec3, gap_px: f64) -> Point {
        let p = self.point(w);
        let d = p - self.center;
        let len = d.hypot();
        if len > 0.0 {
            p + d * (gap_px / len)
        } else {
            p
        }
    }
}

/// Renders [`SurfaceFrame`]s. One renderer serves a whole animation.
pub struct SurfaceRenderer {
    style: SurfaceStyle,
    annotator: Annotator,
}

impl SurfaceRenderer {
    pub fn new(style: SurfaceStyle, annotator: Annotator) -> Self {
        Self { style, annotator }
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    /// Draw one frame from scratch. The output depends only on `frame` and the style.
    pub fn render(&self, frame: &SurfaceFrame<'_>) -> FieldResult<FrameRGBA> {
        frame.mesh.check_values(frame.values)?;

        let canvas = self.style.canvas;
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let font = (h / 40.0).max(6.0);
        let area = Rect::new(0.06 * w, 0.10 * h, 0.94 * w, 0.97 * h);

        let plot = PlotBox {
            bounds: frame.mesh.bounds(),
            scale: frame.scale,
        };
        let screen = Screen::new(self.style.camera.view(frame.index), area);

        let mut raster = Raster::new(canvas, self.style.background)?;
        let mut labels = vec![Label::new(frame.title, Point::new(0.5 * w, 0.05 * h), font * 1.6)];

        self.draw_box(&mut raster, &mut labels, plot, screen, font);
        self.draw_faces(&mut raster, frame, plot, screen);

        let mut out = raster.finish();
        self.annotator.draw(&mut out, &labels)?;
        Ok(out)
    }

    fn draw_faces(
        &self,
        raster: &mut Raster,
        frame: &SurfaceFrame<'_>,
        plot: PlotBox,
        screen: Screen,
    ) {
        let points = frame.mesh.points();
        let world: Vec<Vec3> = points
            .iter()
            .zip(frame.values)
            .map(|(&p, &v)| plot.to_world(p, v))
            .collect();
        let projected: Vec<(Point, f64)> = world.iter().map(|&p| screen.to_px(p)).collect();

        // Painter's order: farthest triangles first.
        let mut order: Vec<(f64, usize)> = frame
            .mesh
            .triangles()
            .iter()
            .enumerate()
            .map(|(i, t)| (t.iter().map(|&v| projected[v].1).sum::<f64>() / 3.0, i))
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, ti) in order {
            let t = frame.mesh.triangles()[ti];
            let mean = t.iter().map(|&v| frame.values[v]).sum::<f64>() / 3.0;
            let base = self.style.colormap.sample(frame.scale.normalize(mean));
            let normal = cross(sub(world[t[1]], world[t[0]]), sub(world[t[2]], world[t[0]]));
            let shade = normalize(normal)
                .map_or(1.0, |n| 0.55 + 0.45 * dot(n, LIGHT).abs());
            let color = base.scaled(shade);

            let path = polygon(t.iter().map(|&v| projected[v].0));
            raster.fill(&path, color);
            raster.stroke(&path, self.style.edge_width_px, color);
        }
    }

    /// Back panes, grid lines, tick labels and axis names.
    fn draw_box(
        &self,
        raster: &mut Raster,
        labels: &mut Vec<Label>,
        plot: PlotBox,
        screen: Screen,
        font: f64,
    ) {
        let toward = screen.view.toward;
        // Coordinates of the walls farthest from the viewer.
        let back_x = if toward[0] > 0.0 { -1.0 } else { 1.0 };
        let back_y = if toward[1] > 0.0 { -1.0 } else { 1.0 };
        let floor = if toward[2] >= 0.0 { -Z_ASPECT } else { Z_ASPECT };
        let (front_x, front_y) = (-back_x, -back_y);

        let panes: [[Vec3; 4]; 3] = [
            [
                [-1.0, -1.0, floor],
                [1.0, -1.0, floor],
                [1.0, 1.0, floor],
                [-1.0, 1.0, floor],
            ],
            [
                [back_x, -1.0, -Z_ASPECT],
                [back_x, 1.0, -Z_ASPECT],
                [back_x, 1.0, Z_ASPECT],
                [back_x, -1.0, Z_ASPECT],
            ],
            [
                [-1.0, back_y, -Z_ASPECT],
                [1.0, back_y, -Z_ASPECT],
                [1.0, back_y, Z_ASPECT],
                [-1.0, back_y, Z_ASPECT],
            ],
        ];
        for pane in panes {
            let path = polygon(pane.iter().map(|&p| screen.point(p)));
            raster.fill(&path, PANE);
            raster.stroke(&path, 1.0, PANE_EDGE);
        }

        let b = plot.bounds;
        let s = plot.scale;
        let line = |a: Vec3, c: Vec3| {
            let mut p = BezPath::new();
            p.move_to(screen.point(a));
            p.line_to(screen.point(c));
            p
        };
        let tick_font = font * 0.8;
        let gap = font * 1.2;

        for x in nice_ticks(b.x0, b.x1, 5) {
            let wx = plot.to_world(Point::new(x, b.y0), s.min)[0];
            raster.stroke(&line([wx, -1.0, floor], [wx, 1.0, floor]), 1.0, GRID);
            raster.stroke(&line([wx, back_y, -Z_ASPECT], [wx, back_y, Z_ASPECT]), 1.0, GRID);
            labels.push(Label::new(
                tick_text(x),
                screen.outside([wx, front_y, floor], gap),
                tick_font,
            ));
        }
        for y in nice_ticks(b.y0, b.y1, 5) {
            let wy = plot.to_world(Point::new(b.x0, y), s.min)[1];
            raster.stroke(&line([-1.0, wy, floor], [1.0, wy, floor]), 1.0, GRID);
            raster.stroke(&line([back_x, wy, -Z_ASPECT], [back_x, wy, Z_ASPECT]), 1.0, GRID);
            labels.push(Label::new(
                tick_text(y),
                screen.outside([front_x, wy, floor], gap),
                tick_font,
            ));
        }
        for z in nice_ticks(s.min, s.max, 5) {
            let wz = plot.to_world(Point::new(b.x0, b.y0), z)[2];
            raster.stroke(&line([back_x, -1.0, wz], [back_x, 1.0, wz]), 1.0, GRID);
            raster.stroke(&line([-1.0, back_y, wz], [1.0, back_y, wz]), 1.0, GRID);
            labels.push(
                Label::new(
                    tick_text(z),
                    screen.outside([front_x, back_y, wz], gap),
                    tick_font,
                )
                .anchored(Anchor::Middle),
            );
        }

        let name_gap = gap * 3.0;
        labels.push(Label::new("x", screen.outside([0.0, front_y, floor], name_gap), font));
        labels.push(Label::new("y", screen.outside([front_x, 0.0, floor], name_gap), font));
        labels.push(Label::new(
            self.style.z_label.clone(),
            screen.outside([front_x, back_y, 0.0], name_gap),
            font,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
