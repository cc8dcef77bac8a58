//! SVG renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use emoface_core::{DrawSurface, FaceColor, Paint, PaintStyle};
use kurbo::{BezPath, Circle, Rect};

/// [`DrawSurface`] that appends SVG elements to a string.
pub struct SvgSurface<'s> {
    out: &'s mut String,
}

impl<'s> SvgSurface<'s> {
    pub fn new(out: &'s mut String) -> Self {
        Self { out }
    }

    fn paint_attrs(paint: &Paint) -> String {
        match paint.style {
            PaintStyle::Fill => format!("fill=\"{}\"{}", rgb(paint.color), opacity("fill", paint.color)),
            PaintStyle::Stroke { width } => format!(
                "fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}",
                rgb(paint.color),
                width,
                opacity("stroke", paint.color)
            ),
        }
    }
}

/// Append one formatted line to an SVG buffer.
fn push_line(out: &mut String, line: std::fmt::Arguments<'_>) {
    out.push_str(&line.to_string());
    out.push('\n');
}

fn rgb(color: FaceColor) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

fn opacity(kind: &str, color: FaceColor) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(" {}-opacity=\"{:.3}\"", kind, color.opacity())
    }
}

impl DrawSurface for SvgSurface<'_> {
    fn draw_circle(&mut self, circle: Circle, paint: &Paint) {
        push_line(
            self.out,
            format_args!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                circle.center.x,
                circle.center.y,
                circle.radius,
                Self::paint_attrs(paint)
            ),
        );
    }

    fn draw_oval(&mut self, oval: Rect, paint: &Paint) {
        let center = oval.center();
        push_line(
            self.out,
            format_args!(
                "  <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {}/>",
                center.x,
                center.y,
                oval.width() / 2.0,
                oval.height() / 2.0,
                Self::paint_attrs(paint)
            ),
        );
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        push_line(
            self.out,
            format_args!("  <path d=\"{}\" {}/>", path.to_svg(), Self::paint_attrs(paint)),
        );
    }
}

/// Renderer that produces a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document from the last [`Renderer::build_scene`] call.
    pub fn finish(&self) -> RenderResult<String> {
        self.document
            .clone()
            .ok_or_else(|| RendererError::RenderFailed("no scene has been built".to_string()))
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let physical = ctx.physical_size();
        let mut out = String::new();
        push_line(
            &mut out,
            format_args!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
                physical.width, physical.height, ctx.viewport_size.width, ctx.viewport_size.height
            ),
        );
        if let Some(background) = ctx.background_color {
            push_line(
                &mut out,
                format_args!(
                    "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"{}/>",
                    rgb(background),
                    opacity("fill", background)
                ),
            );
        }

        // The viewBox maps logical to physical pixels.
        ctx.face.draw(&mut SvgSurface::new(&mut out));

        out.push_str("</svg>\n");
        log::debug!("Built SVG document ({} bytes)", out.len());
        self.document = Some(out);
    }
}
