//! Face view: style, state and the draw routine.

use super::invalidate::{NoopRedraw, RedrawRequester};
use super::state::HappinessState;
use crate::color::FaceColor;
use crate::geometry::{self, FaceGeometry};
use crate::style::{StyleConfig, clamp_border_width};
use crate::surface::{DrawSurface, Paint};
use kurbo::Size;
use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

/// A circular face with two eyes and a mouth.
///
/// Mutations go through setters. The first mutation after a draw sends one
/// redraw request; further mutations before the next draw are coalesced.
pub struct FaceView {
    style: StyleConfig,
    happiness: HappinessState,
    /// Side length from the last measure pass.
    size: f64,
    /// A redraw was requested and no draw has happened since.
    dirty: Cell<bool>,
    redraw: Arc<dyn RedrawRequester>,
}

impl fmt::Debug for FaceView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceView")
            .field("style", &self.style)
            .field("happiness", &self.happiness)
            .field("size", &self.size)
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

impl Default for FaceView {
    fn default() -> Self {
        Self::new(StyleConfig::default())
    }
}

impl FaceView {
    /// Create a face with the given style and no redraw hook.
    pub fn new(style: StyleConfig) -> Self {
        Self {
            style: style.sanitized(),
            happiness: HappinessState::default(),
            size: 0.0,
            dirty: Cell::new(false),
            redraw: Arc::new(NoopRedraw),
        }
    }

    /// Set the hook used to request redraws.
    pub fn with_redraw_requester(mut self, redraw: Arc<dyn RedrawRequester>) -> Self {
        self.redraw = redraw;
        self
    }

    /// Set the initial happiness state without requesting a redraw.
    pub fn with_happiness(mut self, happiness: HappinessState) -> Self {
        self.happiness = happiness;
        self
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn happiness_state(&self) -> HappinessState {
        self.happiness
    }

    /// Side length from the last measure pass.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Whether a redraw is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Change the happiness state.
    pub fn set_happiness_state(&mut self, happiness: HappinessState) {
        if self.happiness == happiness {
            return;
        }
        log::debug!("Happiness {} -> {}", self.happiness.name(), happiness.name());
        self.happiness = happiness;
        self.invalidate();
    }

    /// Flip between happy and sad.
    pub fn toggle_happiness(&mut self) {
        self.set_happiness_state(self.happiness.toggled());
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: StyleConfig) {
        let style = style.sanitized();
        if self.style != style {
            self.style = style;
            self.invalidate();
        }
    }

    pub fn set_face_color(&mut self, color: FaceColor) {
        self.update_style(|style| style.face_color = color);
    }

    pub fn set_eyes_color(&mut self, color: FaceColor) {
        self.update_style(|style| style.eyes_color = color);
    }

    pub fn set_mouth_color(&mut self, color: FaceColor) {
        self.update_style(|style| style.mouth_color = color);
    }

    pub fn set_border_color(&mut self, color: FaceColor) {
        self.update_style(|style| style.border_color = color);
    }

    /// Set the border width. Negative and non-finite widths become 0.
    pub fn set_border_width(&mut self, width: f64) {
        let width = clamp_border_width(width);
        self.update_style(|style| style.border_width = width);
    }

    fn update_style(&mut self, edit: impl FnOnce(&mut StyleConfig)) {
        let mut style = self.style.clone();
        edit(&mut style);
        self.set_style(style);
    }

    /// Mark dirty, requesting a redraw only on the clean-to-dirty edge.
    fn invalidate(&mut self) {
        if !self.dirty.replace(true) {
            self.redraw.request_redraw();
        }
    }

    /// Measure pass: keep the smaller dimension and report a square.
    pub fn on_measure(&mut self, requested: Size) -> Size {
        let measured = geometry::measure_size(requested);
        if measured.width != self.size {
            log::debug!("Measured face side {} (requested {}x{})", measured.width, requested.width, requested.height);
        }
        self.size = measured.width;
        measured
    }

    /// Layout at the current size.
    pub fn geometry(&self) -> FaceGeometry {
        FaceGeometry::new(self.size, self.style.border_width, self.happiness)
    }

    /// Draw at the size from the last measure pass and clear the pending redraw.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        draw_face(surface, self.size, &self.style, self.happiness);
        self.dirty.set(false);
    }
}

/// Draw a face of side `size` onto `surface`.
///
/// Emits, in order: the face disc, the border ring, the left eye, the right
/// eye and the mouth.
pub fn draw_face(
    surface: &mut dyn DrawSurface,
    size: f64,
    style: &StyleConfig,
    happiness: HappinessState,
) {
    log::trace!("Drawing {} face at side {}", happiness.name(), size);
    let geometry = FaceGeometry::new(size, style.border_width, happiness);

    surface.draw_circle(geometry.face, &Paint::fill(style.face_color));
    surface.draw_circle(
        geometry.border,
        &Paint::stroke(style.border_color, style.border_width),
    );

    let eyes = Paint::fill(style.eyes_color);
    surface.draw_oval(geometry.left_eye, &eyes);
    surface.draw_oval(geometry.right_eye, &eyes);

    surface.draw_path(&geometry.mouth, &Paint::fill(style.mouth_color));
}
