//! Drawing surface abstraction.
//!
//! The face never talks to a graphics API directly. It issues calls on a
//! [`DrawSurface`], which a renderer backend implements.

use crate::color::FaceColor;
use kurbo::{BezPath, Circle, Rect};

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline with the given width.
    Stroke { width: f64 },
}

/// Color and style state for one drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: FaceColor,
    pub style: PaintStyle,
}

impl Paint {
    /// Fill paint.
    pub fn fill(color: FaceColor) -> Self {
        Self { color, style: PaintStyle::Fill }
    }

    /// Stroke paint.
    pub fn stroke(color: FaceColor, width: f64) -> Self {
        Self { color, style: PaintStyle::Stroke { width } }
    }

    /// Stroke width, if this paint strokes.
    pub fn stroke_width(&self) -> Option<f64> {
        match self.style {
            PaintStyle::Fill => None,
            PaintStyle::Stroke { width } => Some(width),
        }
    }
}

/// Immediate-mode 2D drawing context.
pub trait DrawSurface {
    /// Draw a circle.
    fn draw_circle(&mut self, circle: Circle, paint: &Paint);

    /// Draw the oval inscribed in a bounding box.
    fn draw_oval(&mut self, oval: Rect, paint: &Paint);

    /// Draw an arbitrary path.
    fn draw_path(&mut self, path: &BezPath, paint: &Paint);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle { circle: Circle, paint: Paint },
    Oval { oval: Rect, paint: Paint },
    Path { path: BezPath, paint: Paint },
}

impl DrawCommand {
    /// Paint used by this command.
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCommand::Circle { paint, .. }
            | DrawCommand::Oval { paint, .. }
            | DrawCommand::Path { paint, .. } => paint,
        }
    }
}

/// Surface that records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replay the recorded commands onto another surface.
    pub fn replay(&self, target: &mut dyn DrawSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Circle { circle, paint } => target.draw_circle(*circle, paint),
                DrawCommand::Oval { oval, paint } => target.draw_oval(*oval, paint),
                DrawCommand::Path { path, paint } => target.draw_path(path, paint),
            }
        }
    }
}

impl DrawSurface for CommandRecorder {
    fn draw_circle(&mut self, circle: Circle, paint: &Paint) {
        self.commands.push(DrawCommand::Circle { circle, paint: *paint });
    }

    fn draw_oval(&mut self, oval: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::Oval { oval, paint: *paint });
    }

    fn draw_path(&mut self, path: &BezPath, paint: &Paint) {
        self.commands.push(DrawCommand::Path { path: path.clone(), paint: *paint });
    }
}
