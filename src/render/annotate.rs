//! Text overlay for rendered frames.
//!
//! Labels are laid out as an SVG document, parsed by `usvg` against a shared font database and
//! rasterized with `resvg`, then composited over the frame. Text whose font cannot be resolved
//! is dropped by `usvg`; the frame itself is unaffected.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{FieldError, FieldResult};
use crate::render::composite::over_in_place;
use crate::render::frame::FrameRGBA;

const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";

/// Horizontal alignment of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A single line of text. `at` is the anchor point on the text's vertical center line.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub size_px: f64,
    pub anchor: Anchor,
    /// Clockwise rotation around `at`, in degrees.
    pub rotate_deg: f64,
    /// Raised trailing text, e.g. the exponent of `×10^e`.
    pub superscript: Option<String>,
    pub color: Rgb8,
}

impl Label {
    pub fn new(text: impl Into<String>, at: Point, size_px: f64) -> Self {
        Self {
            text: text.into(),
            at,
            size_px,
            anchor: Anchor::Middle,
            rotate_deg: 0.0,
            superscript: None,
            color: Rgb8::BLACK,
        }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    pub fn with_superscript(mut self, sup: impl Into<String>) -> Self {
        self.superscript = Some(sup.into());
        self
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compact axis tick text: trimmed decimals for moderate magnitudes, exponent form otherwise.
pub fn tick_text(v: f64) -> String {
    let a = v.abs();
    if a == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e4).contains(&a) {
        format!("{v:.1e}")
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// SVG document of `width x height` containing `labels`.
pub fn svg_document(width: u32, height: u32, labels: &[Label]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for l in labels {
        // Shift the baseline so `at` sits on the visual middle of the glyphs.
        let baseline = l.at.y + 0.35 * l.size_px;
        let _ = write!(
            svg,
            r#"<text x="{x:.2}" y="{y:.2}" font-family="{FONT_FAMILY}" font-size="{size:.2}" fill="{fill}" text-anchor="{anchor}""#,
            x = l.at.x,
            y = baseline,
            size = l.size_px,
            fill = l.color.to_hex(),
            anchor = l.anchor.as_svg(),
        );
        if l.rotate_deg != 0.0 {
            let _ = write!(
                svg,
                r#" transform="rotate({:.2} {:.2} {:.2})""#,
                l.rotate_deg, l.at.x, l.at.y
            );
        }
        svg.push('>');
        svg.push_str(&escape_xml(&l.text));
        if let Some(sup) = &l.superscript {
            let _ = write!(
                svg,
                r#"<tspan baseline-shift="super" font-size="{:.2}">{}</tspan>"#,
                l.size_px * 0.7,
                escape_xml(sup)
            );
        }
        svg.push_str("</text>");
    }
    svg.push_str("</svg>");
    svg
}

/// Draws [`Label`]s onto frames. Cheap to clone; the font database is shared.
#[derive(Clone)]
pub struct Annotator {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Annotator {
    /// Load the fonts installed on this machine once.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.faces().count(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// An annotator with no fonts: every label is silently dropped.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    pub fn font_faces(&self) -> usize {
        self.fontdb.faces().count()
    }

    /// Rasterize `labels` and composite them over `frame`.
    pub fn draw(&self, frame: &mut FrameRGBA, labels: &[Label]) -> FieldResult<()> {
        if labels.is_empty() || self.fontdb.faces().next().is_none() {
            return Ok(());
        }

        let svg = svg_document(frame.width, frame.height, labels);
        let mut opts = usvg::Options::default();
        opts.fontdb = self.fontdb.clone();
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| FieldError::render(format!("parse label overlay: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(frame.width, frame.height)
            .ok_or_else(|| FieldError::render("failed to allocate label pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        over_in_place(&mut frame.data, pixmap.data())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/annotate.rs"]
mod tests;
