//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use emoface_core::{DrawSurface, Paint, PaintStyle};
use kurbo::{Affine, BezPath, Circle, Ellipse, Rect, Shape as KurboShape, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// [`DrawSurface`] that encodes into a Vello scene.
pub struct VelloSurface<'s> {
    scene: &'s mut Scene,
    transform: Affine,
}

impl<'s> VelloSurface<'s> {
    pub fn new(scene: &'s mut Scene, transform: Affine) -> Self {
        Self { scene, transform }
    }

    fn paint_shape(&mut self, shape: &impl KurboShape, paint: &Paint) {
        let color: Color = paint.color.into();
        match paint.style {
            PaintStyle::Fill => {
                self.scene.fill(Fill::NonZero, self.transform, color, None, shape);
            }
            PaintStyle::Stroke { width } => {
                // Zero-width strokes would still be encoded as hairlines.
                if width <= 0.0 {
                    return;
                }
                self.scene.stroke(&Stroke::new(width), self.transform, color, None, shape);
            }
        }
    }
}

impl DrawSurface for VelloSurface<'_> {
    fn draw_circle(&mut self, circle: Circle, paint: &Paint) {
        self.paint_shape(&circle, paint);
    }

    fn draw_oval(&mut self, oval: Rect, paint: &Paint) {
        self.paint_shape(&Ellipse::from_rect(oval), paint);
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.paint_shape(path, paint);
    }
}

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the built scene, leaving an empty one.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let transform = ctx.transform();

        if let Some(background) = ctx.background_color {
            let viewport = Rect::from_origin_size((0.0, 0.0), ctx.viewport_size);
            let color: Color = background.into();
            self.scene.fill(Fill::NonZero, transform, color, None, &viewport);
        }

        let mut surface = VelloSurface::new(&mut self.scene, transform);
        ctx.face.draw(&mut surface);
    }
}
