//! Renderer trait abstraction.

use emoface_core::{FaceColor, FaceView};
use kurbo::{Affine, Size};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The face to render.
    pub face: &'a FaceView,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color (None = transparent).
    pub background_color: Option<FaceColor>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(face: &'a FaceView, viewport_size: Size) -> Self {
        Self {
            face,
            viewport_size,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: FaceColor) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Logical to physical pixel transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Viewport size in physical pixels.
    pub fn physical_size(&self) -> Size {
        self.viewport_size * self.scale_factor
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);
}
